//! Sandboxed-IDE directory naming and log cleanup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, IdeChannel};

/// Directory name for the sandboxed IDE of a resolved build.
///
/// Stable channels key the sandbox by the year segment of the build,
/// EAP channels by its first two characters, and pinned builds by the
/// pinned string itself. Degenerate build strings fall back to the whole
/// string.
pub fn sandbox_dir_name(platform_type: &str, channel: &IdeChannel, build: &str) -> String {
    match channel {
        IdeChannel::LatestStable => {
            let major = build.split('.').next().unwrap_or(build);
            format!("{}-{}", platform_type, major)
        }
        IdeChannel::LatestEap => {
            let prefix = build.get(..2).unwrap_or(build);
            format!("{}-eap-{}", platform_type, prefix)
        }
        IdeChannel::Fixed(version) => format!("{}-{}-manually-set", platform_type, version),
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ClearLogsOutcome {
    pub deleted: Vec<PathBuf>,
}

/// Remove the IDE log directories beneath a sandbox directory. Missing
/// directories are skipped, not errors.
pub fn clear_logs(sandbox_dir: &Path) -> Result<ClearLogsOutcome, AppError> {
    let mut outcome = ClearLogsOutcome::default();
    for candidate in [sandbox_dir.join("system").join("log"), sandbox_dir.join("log")] {
        if candidate.is_dir() {
            fs::remove_dir_all(&candidate)?;
            println!("Deleted: {}", candidate.display());
            outcome.deleted.push(candidate);
        }
    }
    Ok(outcome)
}
