use crate::domain::AppError;

pub trait GitRepository {
    /// The most recent release tag reachable from HEAD, if any.
    fn latest_tag(&self) -> Result<Option<String>, AppError>;
}
