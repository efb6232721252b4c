//! File cache for discovered IDE builds.
//!
//! One small text file per remote channel, kept in the system temp
//! directory and trusted for a configurable time-to-live measured from
//! the file's modification time. A zero TTL disables freshness, so every
//! resolution refetches; the files are still written and still serve as
//! the fallback when the feed is unreachable.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::paths::{EAP_CACHE_FILE, STABLE_CACHE_FILE};
use crate::domain::{AppError, IdeChannel};

#[derive(Debug, Clone)]
pub struct BuildCache {
    dir: PathBuf,
    ttl: Duration,
}

impl BuildCache {
    pub fn new(dir: PathBuf, ttl: Duration) -> Self {
        Self { dir, ttl }
    }

    pub fn in_temp_dir(ttl: Duration) -> Self {
        Self::new(std::env::temp_dir(), ttl)
    }

    /// Cache file for a channel. Pinned builds are never cached.
    pub fn path_for(&self, channel: &IdeChannel) -> Option<PathBuf> {
        match channel {
            IdeChannel::LatestStable => Some(self.dir.join(STABLE_CACHE_FILE)),
            IdeChannel::LatestEap => Some(self.dir.join(EAP_CACHE_FILE)),
            IdeChannel::Fixed(_) => None,
        }
    }

    /// The cached build, regardless of age. Unreadable or blank entries
    /// count as absent.
    pub fn read(&self, channel: &IdeChannel) -> Option<String> {
        let path = self.path_for(channel)?;
        let raw = fs::read_to_string(path).ok()?;
        let value = raw.trim_end();
        if value.is_empty() { None } else { Some(value.to_string()) }
    }

    pub fn is_fresh(&self, channel: &IdeChannel) -> bool {
        if self.ttl.is_zero() {
            return false;
        }
        let Some(path) = self.path_for(channel) else {
            return false;
        };
        let Ok(metadata) = fs::metadata(&path) else {
            return false;
        };
        let Ok(modified) = metadata.modified() else {
            return false;
        };
        match modified.elapsed() {
            Ok(age) => age < self.ttl,
            // Modification time in the future; keep the entry.
            Err(_) => true,
        }
    }

    pub fn write(&self, channel: &IdeChannel, build: &str) -> Result<(), AppError> {
        let Some(path) = self.path_for(channel) else {
            return Ok(());
        };
        fs::create_dir_all(&self.dir)?;
        fs::write(path, format!("{build}\n"))?;
        Ok(())
    }
}
