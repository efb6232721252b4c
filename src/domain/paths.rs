//! Well-known file names and path helpers.

use std::path::{Path, PathBuf};

/// Tool configuration file, looked up in the project root.
pub const TOOL_CONFIG_FILE: &str = "plugver.toml";

/// Default properties file carrying the plugin build inputs.
pub const DEFAULT_PROPERTIES_FILE: &str = "gradle.properties";

/// Default release-date store.
pub const DEFAULT_VERSIONS_FILE: &str = "versions";

/// Default root of the sandboxed IDE directories.
pub const DEFAULT_SANDBOX_ROOT: &str = ".idea-sandbox";

/// Cache file for the latest stable build, kept in the system temp dir.
pub const STABLE_CACHE_FILE: &str = "plugver-ij-latest-stable-version.txt";

/// Cache file for the latest EAP build, kept in the system temp dir.
pub const EAP_CACHE_FILE: &str = "plugver-ij-latest-eap-version.txt";

pub fn tool_config_path(root: &Path) -> PathBuf {
    root.join(TOOL_CONFIG_FILE)
}

/// Resolve a configured file path against the project root. Absolute
/// paths are taken as-is.
pub fn resolve_in(root: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
