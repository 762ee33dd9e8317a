//! Error types for the visibility client.

/// Visibility client errors.
#[derive(Debug, thiserror::Error)]
pub enum VisibilityError {
    /// The API reported a non-success status.
    #[error("request failed: {status}")]
    RequestFailed { status: String },

    /// Network error (connect failure, body read failure).
    #[error("network error: {message}")]
    Network { message: String },

    /// Response body did not parse as the expected shape.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl From<reqwest::Error> for VisibilityError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for visibility operations.
pub type VisibilityResult<T> = Result<T, VisibilityError>;
