pub mod channel;
pub mod error;
pub mod feed;
pub mod paths;
pub mod properties;
pub mod stability;
pub mod version;

pub use channel::{IdeChannel, LATEST_EAP, LATEST_STABLE};
pub use error::AppError;
pub use feed::{ChannelQuery, EAP_QUERY, STABLE_QUERY, select_build};
pub use properties::{Properties, format_comment, format_entry};
pub use stability::{is_non_stable, is_stable};
pub use version::{DEV_VERSION, compact_version, is_major_line, major_line_of, version_from_tag};
