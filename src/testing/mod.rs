//! Test doubles shared across unit tests.

use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{GitRepository, UpdatesFeed};

/// Scripted git repository.
#[derive(Default)]
pub struct FakeGit {
    pub tag: Option<String>,
    pub fail: bool,
}

impl FakeGit {
    pub fn with_tag(tag: &str) -> Self {
        Self { tag: Some(tag.to_string()), fail: false }
    }

    pub fn without_tags() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { tag: None, fail: true }
    }
}

impl GitRepository for FakeGit {
    fn latest_tag(&self) -> Result<Option<String>, AppError> {
        if self.fail {
            return Err(AppError::GitError {
                command: "fake git".to_string(),
                details: "forced failure".to_string(),
            });
        }
        Ok(self.tag.clone())
    }
}

/// Scripted updates feed that counts fetches.
pub struct FakeFeed {
    body: Result<String, String>,
    calls: Mutex<usize>,
}

impl FakeFeed {
    pub fn returning(body: &str) -> Self {
        Self { body: Ok(body.to_string()), calls: Mutex::new(0) }
    }

    pub fn failing(message: &str) -> Self {
        Self { body: Err(message.to_string()), calls: Mutex::new(0) }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl UpdatesFeed for FakeFeed {
    fn fetch(&self) -> Result<String, AppError> {
        *self.calls.lock().unwrap() += 1;
        match &self.body {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(AppError::feed_error(message.clone())),
        }
    }
}

/// Updates document with both remote channels populated.
pub const FEED_FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
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
