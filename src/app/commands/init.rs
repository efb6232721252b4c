use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::paths::{self, DEFAULT_VERSIONS_FILE};

const STARTER_CONFIG: &str = r#"# plugver configuration
# Every section and key is optional; the values below are the defaults.

[feed]
# url = "https://www.jetbrains.com/updates/updates.xml"
# timeout_secs = 30
# cache_ttl_hours = 24

[files]
# properties = "gradle.properties"
# versions = "versions"

[sandbox]
# root = ".idea-sandbox"
"#;

const STARTER_VERSIONS: &str = "# Release dates recorded by plugver, one version=yyyyMMdd per line\n";

/// Write a starter `plugver.toml` and, if absent, an empty release-date
/// store. Refuses to overwrite an existing configuration.
pub fn execute(root: &Path) -> Result<(), AppError> {
    let config_path = paths::tool_config_path(root);
    if config_path.exists() {
        return Err(AppError::ConfigExists);
    }

    fs::write(&config_path, STARTER_CONFIG)?;

    let versions_path = root.join(DEFAULT_VERSIONS_FILE);
    if !versions_path.exists() {
        fs::write(&versions_path, STARTER_VERSIONS)?;
    }

    Ok(())
}
