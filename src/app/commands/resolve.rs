//! The build-configuration pass: one synchronous sweep over every input.

use chrono::NaiveDate;
use serde::Serialize;

use crate::app::AppContext;
use crate::app::commands::{ide_build, plugin_version, release_date, sandbox};
use crate::app::config::load_project_properties;
use crate::domain::{AppError, IdeChannel, compact_version, is_stable};
use crate::ports::{GitRepository, UpdatesFeed};

/// Everything one resolve pass determines for a project.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOutcome {
    /// Effective release version, after `auto` resolution.
    pub plugin_version: String,
    /// Dotless feature line of the release version.
    pub compact_version: String,
    /// Whether the release version is free of pre-release qualifiers.
    pub stable: bool,
    /// Channel selector or pinned build from the properties file.
    pub ide_channel: String,
    /// Resolved IDE build string.
    pub ide_build: String,
    /// Where the IDE build came from.
    pub build_source: String,
    /// Per-version sandbox directory name.
    pub sandbox_dir: String,
    /// `yyyyMMdd` release date, absent for dev versions.
    pub release_date: Option<String>,
    pub java_version: String,
    pub platform_type: String,
    pub since_build: String,
    pub until_build: String,
}

impl ResolveOutcome {
    /// The one-line summary of the pass.
    pub fn announcement(&self) -> String {
        format!(
            "Will use {} {} ({}) and Java {} compiler. Plugin version set to {}",
            self.platform_type,
            self.ide_channel,
            self.ide_build,
            self.java_version,
            self.plugin_version
        )
    }
}

pub fn execute<G: GitRepository, F: UpdatesFeed>(
    ctx: &AppContext<G, F>,
    today: NaiveDate,
) -> Result<ResolveOutcome, AppError> {
    let properties = load_project_properties(&ctx.properties_path())?;

    let plugin_version = plugin_version::execute(ctx.git(), &properties.plugin_version)?;
    let channel = IdeChannel::parse(&properties.ide_version);
    let resolution = ide_build::execute(ctx.feed(), ctx.cache(), &channel)?;
    let sandbox_dir =
        sandbox::sandbox_dir_name(&properties.platform_type, &channel, &resolution.build);
    let date = release_date::execute(&ctx.release_store(), &plugin_version, today)?;

    Ok(ResolveOutcome {
        compact_version: compact_version(&plugin_version),
        stable: is_stable(&plugin_version),
        plugin_version,
        ide_channel: channel.selector().to_string(),
        ide_build: resolution.build,
        build_source: resolution.source.as_str().to_string(),
        sandbox_dir,
        release_date: date.date,
        java_version: properties.java_version,
        platform_type: properties.platform_type,
        since_build: properties.since_build,
        until_build: properties.until_build,
    })
}
