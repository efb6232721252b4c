use std::io;

use thiserror::Error;

/// Library-wide error type for plugver operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error (plugver.toml).
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// plugver.toml already exists at the target location.
    #[error("plugver.toml already exists")]
    ConfigExists,

    /// Project properties file is missing.
    #[error("Project properties file not found: {0}")]
    PropertiesNotFound(String),

    /// A required project property is missing or empty.
    #[error("Missing required property '{key}' in {file}")]
    PropertyMissing { key: String, file: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// `pluginVersion=auto` needs a tag reachable from HEAD.
    #[error("No release tag reachable from HEAD; cannot resolve pluginVersion=auto")]
    NoReleaseTag,

    /// Updates feed request or response failure.
    #[error("Updates feed error: {message}")]
    FeedError { message: String, status: Option<u16> },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// JSON rendering failure.
    #[error("Failed to render JSON output: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A patch release references a major line with no recorded date.
    #[error("Failed to find last major release {0}")]
    MissingMajorRelease(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn feed_error<S: Into<String>>(message: S) -> Self {
        AppError::FeedError { message: message.into(), status: None }
    }
}
