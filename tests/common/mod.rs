//! Shared testing utilities for plugver CLI tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

/// Updates document served by mock feeds.
#[allow(dead_code)]
pub const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<products>
  <product name="IntelliJ IDEA">
    <channel id="IC-IU-EAP-licensing-EAP" status="eap">
      <build number="243.21565" version="2024.3 EAP" fullNumber="243.21565.129"/>
    </channel>
    <channel id="IC-IU-RELEASE-licensing-RELEASE" status="release">
      <build number="242.23339" version="2024.2.3" fullNumber="242.23339.11"/>
    </channel>
  </product>
</products>
"#;

/// Testing harness providing an isolated project and build cache.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
    cache_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("project");
        let cache_dir = root.path().join("cache");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");
        fs::create_dir_all(&cache_dir).expect("Failed to create test cache directory");

        Self { root, project_dir, cache_dir }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Build a command invoking the compiled `plugver` binary inside the
    /// project, with the build cache redirected into this context.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("plugver").expect("Failed to locate plugver binary");
        cmd.current_dir(&self.project_dir).env("TMPDIR", &self.cache_dir);
        cmd
    }

    /// Write a properties file with all six required keys.
    pub fn write_properties(&self, plugin_version: &str, ide_version: &str) {
        let content = format!(
            "pluginVersion={plugin_version}\n\
             pluginJavaVersion=17\n\
             pluginIdeaVersion={ide_version}\n\
             pluginIdeaPlatformType=IC\n\
             pluginSinceBuild=242\n\
             pluginUntilBuild=243.*\n"
        );
        fs::write(self.project_dir.join("gradle.properties"), content)
            .expect("Failed to write properties");
    }

    pub fn write_tool_config(&self, content: &str) {
        fs::write(self.project_dir.join("plugver.toml"), content)
            .expect("Failed to write tool config");
    }

    /// Point the updates feed at a mock server.
    pub fn write_feed_config(&self, url: &str, cache_ttl_hours: u64) {
        self.write_tool_config(&format!(
            "[feed]\nurl = \"{}\"\ncache_ttl_hours = {}\n",
            url, cache_ttl_hours
        ));
    }

    pub fn write_versions(&self, content: &str) {
        fs::write(self.versions_path(), content).expect("Failed to write versions file");
    }

    pub fn read_versions(&self) -> String {
        fs::read_to_string(self.versions_path()).expect("Failed to read versions file")
    }

    pub fn versions_path(&self) -> PathBuf {
        self.project_dir.join("versions")
    }

    pub fn stable_cache_path(&self) -> PathBuf {
        self.cache_dir.join("plugver-ij-latest-stable-version.txt")
    }

    /// Initialize a git repository with one commit, optionally tagged.
    pub fn init_git_repo(&self, tag: Option<&str>) {
        git(&self.project_dir, &["init"]);
        git(&self.project_dir, &["config", "user.name", "Test User"]);
        git(&self.project_dir, &["config", "user.email", "test@example.com"]);
        fs::write(self.project_dir.join("README.md"), "# Test").expect("Failed to write README");
        git(&self.project_dir, &["add", "."]);
        git(&self.project_dir, &["commit", "-m", "Initial commit"]);
        if let Some(tag) = tag {
            git(&self.project_dir, &["tag", tag]);
        }
    }
}

#[allow(dead_code)]
fn git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
