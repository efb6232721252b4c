use std::fmt;

/// IDE version selector taken from the `pluginIdeaVersion` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeChannel {
    /// `LATEST-STABLE`: latest release build from the updates feed.
    LatestStable,
    /// `LATEST-EAP-SNAPSHOT`: latest EAP build from the updates feed.
    LatestEap,
    /// Any other value: a user-pinned build string (e.g. `2024.2.3`).
    Fixed(String),
}

/// Selector string for the stable channel.
pub const LATEST_STABLE: &str = "LATEST-STABLE";

/// Selector string for the EAP channel.
pub const LATEST_EAP: &str = "LATEST-EAP-SNAPSHOT";

impl IdeChannel {
    /// Parse a `pluginIdeaVersion` value. Selectors match exactly; anything
    /// else is a pinned build string.
    pub fn parse(raw: &str) -> IdeChannel {
        match raw {
            LATEST_STABLE => IdeChannel::LatestStable,
            LATEST_EAP => IdeChannel::LatestEap,
            other => IdeChannel::Fixed(other.to_string()),
        }
    }

    /// The selector string as it appears in the properties file.
    pub fn selector(&self) -> &str {
        match self {
            IdeChannel::LatestStable => LATEST_STABLE,
            IdeChannel::LatestEap => LATEST_EAP,
            IdeChannel::Fixed(value) => value,
        }
    }

    /// True when resolving this channel requires the updates feed.
    pub fn is_remote(&self) -> bool {
        !matches!(self, IdeChannel::Fixed(_))
    }

    /// Short lowercase label used in messages and cache file names.
    pub fn label(&self) -> &'static str {
        match self {
            IdeChannel::LatestStable => "stable",
            IdeChannel::LatestEap => "eap",
            IdeChannel::Fixed(_) => "pinned",
        }
    }
}

impl fmt::Display for IdeChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}
