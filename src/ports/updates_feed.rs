use crate::domain::AppError;

pub trait UpdatesFeed {
    /// Fetch the raw updates document.
    fn fetch(&self) -> Result<String, AppError>;
}
