//! Updates-feed transport using reqwest.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::UpdatesFeed;

/// Blocking HTTP transport for the updates document.
///
/// Performs a single GET per call; caching sits in front of it.
#[derive(Debug, Clone)]
pub struct HttpUpdatesFeed {
    url: Url,
    client: Client,
}

impl HttpUpdatesFeed {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::feed_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { url, client })
    }
}

impl UpdatesFeed for HttpUpdatesFeed {
    fn fetch(&self) -> Result<String, AppError> {
        let started = Instant::now();

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .map_err(|e| AppError::feed_error(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = if status.is_server_error() {
                "Updates feed returned a server error".to_string()
            } else {
                format!("Updates feed request failed with status {}", status.as_u16())
            };
            return Err(AppError::FeedError { message, status: Some(status.as_u16()) });
        }

        let body = response.text().map_err(|e| AppError::FeedError {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;

        eprintln!(
            "Downloaded {} in {} ms ({} B)",
            self.url,
            started.elapsed().as_millis(),
            body.len()
        );

        Ok(body)
    }
}
