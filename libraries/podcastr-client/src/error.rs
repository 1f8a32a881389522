//! Error types for the episode API client.

use thiserror::Error;

/// Errors that can occur when talking to the episode API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// No episode with this id
    #[error("Episode not found: {0}")]
    NotFound(String),

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// API is offline or unreachable
    #[error("API unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// True for failures where a cached copy is a reasonable substitute
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::ServerUnreachable(_) | ClientError::Request(_) => true,
            ClientError::ServerError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
