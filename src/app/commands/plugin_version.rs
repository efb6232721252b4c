//! Plugin release version resolution.

use crate::domain::{AppError, version};
use crate::ports::GitRepository;

/// Property value that defers the version to the latest git tag.
pub const AUTO_VERSION: &str = "auto";

/// Resolve the effective release version from the configured value.
///
/// `auto` takes the most recent tag reachable from HEAD, with a leading
/// `v` or `V` stripped. Any other value passes through untouched.
pub fn execute<G: GitRepository>(git: &G, configured: &str) -> Result<String, AppError> {
    if configured != AUTO_VERSION {
        return Ok(configured.to_string());
    }

    match git.latest_tag()? {
        Some(tag) => Ok(version::version_from_tag(&tag).to_string()),
        None => Err(AppError::NoReleaseTag),
    }
}
