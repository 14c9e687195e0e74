/// Core error types for castdeck
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for castdeck
///
/// Catalog lookups never produce errors (they degrade to sentinels), so this
/// only covers getting raw album data into the process.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Raw album data could not be parsed
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
