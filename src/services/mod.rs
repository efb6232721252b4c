mod build_cache;
mod git_repository;
mod release_store;
mod updates_http;

pub use build_cache::BuildCache;
pub use git_repository::Git2Repository;
pub use release_store::ReleaseStore;
pub use updates_http::HttpUpdatesFeed;
