//! Persistent version-to-release-date bookkeeping.
//!
//! The store is a properties file that only ever grows: recording a date
//! appends a comment line and a `version=yyyyMMdd` entry, leaving every
//! existing byte in place. Lookups read the whole file and take the last
//! entry for a key.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Properties, format_comment, format_entry};

#[derive(Debug, Clone)]
pub struct ReleaseStore {
    path: PathBuf,
}

impl ReleaseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All recorded entries. A missing file is an empty store.
    pub fn load(&self) -> Result<Properties, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Properties::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Properties::parse("")),
            Err(e) => Err(e.into()),
        }
    }

    pub fn get(&self, version: &str) -> Result<Option<String>, AppError> {
        Ok(self.load()?.get(version).map(str::to_string))
    }

    /// Record a date for a version, with a comment line above the entry.
    /// Recording a version that already has a date is a no-op.
    pub fn record(&self, version: &str, date: &str, note: &str) -> Result<(), AppError> {
        if self.get(version)?.is_some() {
            return Ok(());
        }

        let existing = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut addition = String::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            addition.push('\n');
        }
        addition.push_str(&format_comment(note));
        addition.push_str(&format_entry(version, date));

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(addition.as_bytes())?;
        Ok(())
    }
}
