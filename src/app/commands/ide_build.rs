//! IDE build discovery with a cache in front of the updates feed.
//!
//! Resolution order for a remote channel: a fresh cache entry wins, then
//! a live fetch (which refreshes the cache), then a stale cache entry
//! when the fetch or its parsing fails. Only with no cached value at all
//! does the failure propagate. Pinned builds skip all of this.

use crate::domain::feed::{ChannelQuery, EAP_QUERY, STABLE_QUERY};
use crate::domain::{AppError, IdeChannel, select_build};
use crate::ports::UpdatesFeed;
use crate::services::BuildCache;

/// Where a resolved IDE build came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildSource {
    /// Pinned in the properties file.
    Pinned,
    /// Fresh cache entry.
    Cache,
    /// Live fetch from the updates feed.
    Feed,
    /// Expired cache entry used because the feed was unavailable.
    StaleCache,
}

impl BuildSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildSource::Pinned => "pinned",
            BuildSource::Cache => "cache",
            BuildSource::Feed => "feed",
            BuildSource::StaleCache => "stale-cache",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeBuildResolution {
    pub build: String,
    pub source: BuildSource,
}

pub fn execute<F: UpdatesFeed>(
    feed: &F,
    cache: &BuildCache,
    channel: &IdeChannel,
) -> Result<IdeBuildResolution, AppError> {
    let query = match channel {
        IdeChannel::Fixed(build) => {
            eprintln!("Will use user-defined IDE version {}", build);
            return Ok(IdeBuildResolution { build: build.clone(), source: BuildSource::Pinned });
        }
        IdeChannel::LatestStable => &STABLE_QUERY,
        IdeChannel::LatestEap => &EAP_QUERY,
    };

    if cache.is_fresh(channel) {
        if let Some(build) = cache.read(channel) {
            return Ok(IdeBuildResolution { build, source: BuildSource::Cache });
        }
    }

    match fetch_latest(feed, query) {
        Ok(build) => {
            // The fresh value is in hand; a cache write failure only
            // costs the next run a refetch.
            if let Err(e) = cache.write(channel, &build) {
                eprintln!("⚠️ Failed to cache the {} build: {}", channel.label(), e);
            }
            Ok(IdeBuildResolution { build, source: BuildSource::Feed })
        }
        Err(e) => match cache.read(channel) {
            Some(build) => {
                eprintln!("⚠️ {}. Falling back to cached {} build {}", e, channel.label(), build);
                Ok(IdeBuildResolution { build, source: BuildSource::StaleCache })
            }
            None => Err(e),
        },
    }
}

fn fetch_latest<F: UpdatesFeed>(feed: &F, query: &ChannelQuery) -> Result<String, AppError> {
    let xml = feed.fetch()?;
    select_build(&xml, query)
}
