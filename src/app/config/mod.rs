mod project;
mod tool;

pub use project::{
    KEY_IDE_VERSION, KEY_JAVA_VERSION, KEY_PLATFORM_TYPE, KEY_PLUGIN_VERSION, KEY_SINCE_BUILD,
    KEY_UNTIL_BUILD, ProjectProperties, REQUIRED_KEYS, load_project_properties,
};
pub use tool::{FeedConfig, FilesConfig, SandboxConfig, ToolConfig};
