use std::path::{Path, PathBuf};

use crate::app::config::ToolConfig;
use crate::domain::paths;
use crate::ports::{GitRepository, UpdatesFeed};
use crate::services::{BuildCache, ReleaseStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GitRepository, F: UpdatesFeed> {
    root: PathBuf,
    config: ToolConfig,
    git: G,
    feed: F,
    cache: BuildCache,
}

impl<G: GitRepository, F: UpdatesFeed> AppContext<G, F> {
    /// Create a new application context.
    pub fn new(root: PathBuf, config: ToolConfig, git: G, feed: F, cache: BuildCache) -> Self {
        Self { root, config, git, feed, cache }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn cache(&self) -> &BuildCache {
        &self.cache
    }

    /// Properties file path, resolved against the project root.
    pub fn properties_path(&self) -> PathBuf {
        paths::resolve_in(&self.root, &self.config.files.properties)
    }

    /// Release-date store rooted at the configured versions file.
    pub fn release_store(&self) -> ReleaseStore {
        ReleaseStore::new(paths::resolve_in(&self.root, &self.config.files.versions))
    }

    /// Sandbox root directory, resolved against the project root.
    pub fn sandbox_root(&self) -> PathBuf {
        paths::resolve_in(&self.root, &self.config.sandbox.root)
    }
}
