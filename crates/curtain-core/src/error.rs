//! Centralized error types for the curtain relay.

use thiserror::Error;

/// Main error type for curtain operations.
#[derive(Error, Debug)]
pub enum CurtainError {
    #[error("Invalid client message: {0}")]
    InvalidMessage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for curtain operations.
pub type CurtainResult<T> = Result<T, CurtainError>;

impl CurtainError {
    /// Create an invalid message error.
    pub fn invalid_message(msg: impl Into<String>) -> Self {
        Self::InvalidMessage(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
