/// Core error types for Podcastr
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Podcastr
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A publication date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// An API record is missing data needed for display or playback
    #[error("Invalid episode record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
}

impl CoreError {
    /// Create an invalid record error
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
