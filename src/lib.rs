//! plugver: resolve IntelliJ-platform plugin build metadata from git tags,
//! the JetBrains updates feed, and local release-date bookkeeping.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use chrono::Local;

use app::AppContext;
use app::commands::{doctor, ide_build, init, plugin_version, release_date, resolve, sandbox};
use app::config::{ToolConfig, load_project_properties};
use domain::{IdeChannel, paths};
use services::{BuildCache, Git2Repository, HttpUpdatesFeed};

pub use app::commands::{
    BuildSource, ClearLogsOutcome, DoctorOptions, DoctorOutcome, IdeBuildResolution,
    ReleaseDateOutcome, ResolveOutcome,
};
pub use domain::AppError;

/// Run the full build-configuration pass in the current directory.
pub fn resolve() -> Result<ResolveOutcome, AppError> {
    resolve_at(&std::env::current_dir()?)
}

/// Run the full build-configuration pass for a project root.
pub fn resolve_at(root: &Path) -> Result<ResolveOutcome, AppError> {
    let ctx = context_at(root)?;
    resolve::execute(&ctx, Local::now().date_naive())
}

/// Resolve the effective plugin release version in the current directory.
pub fn plugin_version() -> Result<String, AppError> {
    plugin_version_at(&std::env::current_dir()?)
}

pub fn plugin_version_at(root: &Path) -> Result<String, AppError> {
    let ctx = context_at(root)?;
    let properties = load_project_properties(&ctx.properties_path())?;
    plugin_version::execute(ctx.git(), &properties.plugin_version)
}

/// Resolve the IDE build for the configured channel, or for an explicit
/// selector when `channel` is given.
pub fn ide_build(channel: Option<&str>) -> Result<IdeBuildResolution, AppError> {
    ide_build_at(&std::env::current_dir()?, channel)
}

pub fn ide_build_at(root: &Path, channel: Option<&str>) -> Result<IdeBuildResolution, AppError> {
    let ctx = context_at(root)?;
    let selector = match channel {
        Some(raw) => raw.to_string(),
        None => load_project_properties(&ctx.properties_path())?.ide_version,
    };
    ide_build::execute(ctx.feed(), ctx.cache(), &IdeChannel::parse(&selector))
}

/// Look up (and record on first sight of a major line) the release date
/// of a version, defaulting to the resolved plugin version.
pub fn release_date(version: Option<&str>) -> Result<ReleaseDateOutcome, AppError> {
    release_date_at(&std::env::current_dir()?, version)
}

pub fn release_date_at(root: &Path, version: Option<&str>) -> Result<ReleaseDateOutcome, AppError> {
    let ctx = context_at(root)?;
    let version = match version {
        Some(value) => value.to_string(),
        None => {
            let properties = load_project_properties(&ctx.properties_path())?;
            plugin_version::execute(ctx.git(), &properties.plugin_version)?
        }
    };
    release_date::execute(&ctx.release_store(), &version, Local::now().date_naive())
}

/// Name the sandboxed-IDE directory for the configured channel.
pub fn sandbox_dir() -> Result<String, AppError> {
    sandbox_dir_at(&std::env::current_dir()?)
}

pub fn sandbox_dir_at(root: &Path) -> Result<String, AppError> {
    let ctx = context_at(root)?;
    let properties = load_project_properties(&ctx.properties_path())?;
    let channel = IdeChannel::parse(&properties.ide_version);
    let resolution = ide_build::execute(ctx.feed(), ctx.cache(), &channel)?;
    Ok(sandbox::sandbox_dir_name(&properties.platform_type, &channel, &resolution.build))
}

/// Delete the IDE log directories under `dir`, defaulting to the
/// configured sandbox root.
pub fn clear_logs(dir: Option<&Path>) -> Result<ClearLogsOutcome, AppError> {
    clear_logs_at(&std::env::current_dir()?, dir)
}

pub fn clear_logs_at(root: &Path, dir: Option<&Path>) -> Result<ClearLogsOutcome, AppError> {
    let ctx = context_at(root)?;
    let target = match dir {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => ctx.sandbox_root(),
    };
    sandbox::clear_logs(&target)
}

/// Check the project files and report diagnostics.
pub fn doctor(options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    doctor_at(&std::env::current_dir()?, options)
}

pub fn doctor_at(root: &Path, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let git = Git2Repository::new(root.to_path_buf());
    Ok(doctor::execute(root, &git, options))
}

/// Create starter project files in the current directory.
pub fn init() -> Result<(), AppError> {
    init_at(&std::env::current_dir()?)
}

pub fn init_at(root: &Path) -> Result<(), AppError> {
    init::execute(root)?;
    println!("✅ Created {} and a starter release-date store", paths::TOOL_CONFIG_FILE);
    Ok(())
}

fn context_at(root: &Path) -> Result<AppContext<Git2Repository, HttpUpdatesFeed>, AppError> {
    let root: PathBuf = root.to_path_buf();
    let config = ToolConfig::load(&root)?;
    let git = Git2Repository::new(root.clone());
    let feed = HttpUpdatesFeed::new(config.feed.url.clone(), config.feed.timeout())?;
    let cache = BuildCache::in_temp_dir(config.feed.cache_ttl());
    Ok(AppContext::new(root, config, git, feed, cache))
}
