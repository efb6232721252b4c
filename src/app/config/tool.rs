//! Tool configuration loaded from `plugver.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;
use crate::domain::paths::{
    self, DEFAULT_PROPERTIES_FILE, DEFAULT_SANDBOX_ROOT, DEFAULT_VERSIONS_FILE,
};

/// Configuration read from `plugver.toml` in the project root. Every
/// section and field is optional; an absent file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Updates feed endpoint and caching.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Project file locations.
    #[serde(default)]
    pub files: FilesConfig,
    /// Sandboxed IDE directories.
    #[serde(default)]
    pub sandbox: SandboxConfig,
}

impl ToolConfig {
    /// Load the configuration for a project root. A missing file yields
    /// the defaults; a malformed or invalid file is an error.
    pub fn load(root: &Path) -> Result<Self, AppError> {
        let path = paths::tool_config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.feed.validate()?;
        self.files.validate()?;
        self.sandbox.validate()?;
        Ok(())
    }
}

/// Updates feed configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    /// Updates document URL.
    #[serde(default = "default_feed_url")]
    pub url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// How long a cached build stays fresh. Zero refetches every time.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_hours: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_timeout(),
            cache_ttl_hours: default_cache_ttl(),
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("feed.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours * 60 * 60)
    }
}

/// Project file locations, relative to the project root unless absolute.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Properties file carrying the plugin build inputs.
    #[serde(default = "default_properties_file")]
    pub properties: String,
    /// Release-date store.
    #[serde(default = "default_versions_file")]
    pub versions: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self { properties: default_properties_file(), versions: default_versions_file() }
    }
}

impl FilesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.properties.trim().is_empty() {
            return Err(AppError::config_error("files.properties must not be empty"));
        }
        if self.versions.trim().is_empty() {
            return Err(AppError::config_error("files.versions must not be empty"));
        }
        Ok(())
    }
}

/// Sandboxed IDE directory configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SandboxConfig {
    /// Directory holding the per-version sandbox directories.
    #[serde(default = "default_sandbox_root")]
    pub root: String,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self { root: default_sandbox_root() }
    }
}

impl SandboxConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.root.trim().is_empty() {
            return Err(AppError::config_error("sandbox.root must not be empty"));
        }
        Ok(())
    }
}

fn default_feed_url() -> Url {
    Url::parse("https://www.jetbrains.com/updates/updates.xml")
        .expect("Default feed URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_cache_ttl() -> u64 {
    24
}

fn default_properties_file() -> String {
    DEFAULT_PROPERTIES_FILE.to_string()
}

fn default_versions_file() -> String {
    DEFAULT_VERSIONS_FILE.to_string()
}

fn default_sandbox_root() -> String {
    DEFAULT_SANDBOX_ROOT.to_string()
}
