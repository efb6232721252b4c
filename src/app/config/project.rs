//! Plugin build inputs read from the project properties file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, Properties};

pub const KEY_PLUGIN_VERSION: &str = "pluginVersion";
pub const KEY_JAVA_VERSION: &str = "pluginJavaVersion";
pub const KEY_IDE_VERSION: &str = "pluginIdeaVersion";
pub const KEY_PLATFORM_TYPE: &str = "pluginIdeaPlatformType";
pub const KEY_SINCE_BUILD: &str = "pluginSinceBuild";
pub const KEY_UNTIL_BUILD: &str = "pluginUntilBuild";

pub const REQUIRED_KEYS: [&str; 6] = [
    KEY_PLUGIN_VERSION,
    KEY_JAVA_VERSION,
    KEY_IDE_VERSION,
    KEY_PLATFORM_TYPE,
    KEY_SINCE_BUILD,
    KEY_UNTIL_BUILD,
];

/// The declared build inputs of the plugin project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectProperties {
    /// Release version, or `auto` to take it from the latest git tag.
    pub plugin_version: String,
    /// Java language level the plugin compiles against.
    pub java_version: String,
    /// IDE version channel selector or a pinned build.
    pub ide_version: String,
    /// Platform product code, e.g. `IC` or `IU`.
    pub platform_type: String,
    pub since_build: String,
    pub until_build: String,
}

/// Load and check the properties file. Every required key must be
/// present with a non-blank value.
pub fn load_project_properties(path: &Path) -> Result<ProjectProperties, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::PropertiesNotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let properties = Properties::parse(&content);
    Ok(ProjectProperties {
        plugin_version: require(&properties, KEY_PLUGIN_VERSION, path)?,
        java_version: require(&properties, KEY_JAVA_VERSION, path)?,
        ide_version: require(&properties, KEY_IDE_VERSION, path)?,
        platform_type: require(&properties, KEY_PLATFORM_TYPE, path)?,
        since_build: require(&properties, KEY_SINCE_BUILD, path)?,
        until_build: require(&properties, KEY_UNTIL_BUILD, path)?,
    })
}

fn require(properties: &Properties, key: &str, path: &Path) -> Result<String, AppError> {
    match properties.get(key) {
        // Parsing already trimmed the value.
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(AppError::PropertyMissing {
            key: key.to_string(),
            file: path.display().to_string(),
        }),
    }
}
