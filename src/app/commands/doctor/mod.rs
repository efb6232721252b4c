//! Health checks over the three project files.

mod diagnostics;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;

use crate::app::commands::plugin_version::AUTO_VERSION;
use crate::app::commands::release_date::DATE_FORMAT;
use crate::app::config::{KEY_IDE_VERSION, KEY_PLUGIN_VERSION, REQUIRED_KEYS, ToolConfig};
use crate::domain::paths::{self, TOOL_CONFIG_FILE};
use crate::domain::{IdeChannel, LATEST_EAP, LATEST_STABLE, Properties};
use crate::ports::GitRepository;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

pub fn execute<G: GitRepository>(root: &Path, git: &G, options: DoctorOptions) -> DoctorOutcome {
    let mut diagnostics = Diagnostics::default();

    let config = match ToolConfig::load(root) {
        Ok(config) => config,
        Err(e) => {
            diagnostics.push_error(TOOL_CONFIG_FILE, e.to_string());
            ToolConfig::default()
        }
    };

    check_properties(root, &config, git, &mut diagnostics);
    check_versions(root, &config, &mut diagnostics);

    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    DoctorOutcome { errors, warnings, exit_code }
}

fn check_properties<G: GitRepository>(
    root: &Path,
    config: &ToolConfig,
    git: &G,
    diagnostics: &mut Diagnostics,
) {
    let file = config.files.properties.as_str();
    let path = paths::resolve_in(root, file);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            diagnostics.push_error(file, "file not found");
            return;
        }
        Err(e) => {
            diagnostics.push_error(file, e.to_string());
            return;
        }
    };

    let properties = Properties::parse(&content);
    for key in REQUIRED_KEYS {
        match properties.get(key) {
            Some(value) if !value.is_empty() => {}
            Some(_) => diagnostics.push_error(file, format!("property '{}' is blank", key)),
            None => diagnostics.push_error(file, format!("missing property '{}'", key)),
        }
    }

    if let Some(value) = properties.get(KEY_IDE_VERSION) {
        let channel = IdeChannel::parse(value);
        if value.starts_with("LATEST") && !channel.is_remote() {
            diagnostics.push_warning(
                file,
                format!(
                    "'{}' matches neither {} nor {} and will be treated as a pinned build",
                    value, LATEST_STABLE, LATEST_EAP
                ),
            );
        }
    }

    if properties.get(KEY_PLUGIN_VERSION) == Some(AUTO_VERSION) {
        match git.latest_tag() {
            Ok(Some(_)) => {}
            Ok(None) => diagnostics.push_warning(
                file,
                "pluginVersion=auto but no release tag is reachable from HEAD",
            ),
            Err(_) => diagnostics
                .push_warning(file, "pluginVersion=auto outside a usable git repository"),
        }
    }
}

fn check_versions(root: &Path, config: &ToolConfig, diagnostics: &mut Diagnostics) {
    let file = config.files.versions.as_str();
    let path = paths::resolve_in(root, file);

    let content = match fs::read_to_string(&path) {
        // An absent store just means nothing has been released yet.
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return,
        Err(e) => {
            diagnostics.push_error(file, e.to_string());
            return;
        }
    };

    let store = Properties::parse(&content);
    for (key, value) in store.iter() {
        if value.is_empty() {
            diagnostics.push_error(file, format!("entry '{}' has no date", key));
        } else if NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
            diagnostics.push_error(
                file,
                format!("entry '{}' has invalid date '{}' (expected yyyyMMdd)", key, value),
            );
        }
    }

    for key in store.duplicate_keys() {
        diagnostics
            .push_warning(file, format!("key '{}' occurs more than once; the last value wins", key));
    }
}
