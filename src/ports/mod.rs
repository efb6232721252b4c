mod git;
mod updates_feed;

pub use git::GitRepository;
pub use updates_feed::UpdatesFeed;
