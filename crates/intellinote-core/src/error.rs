//! Error types for IntelliNote.

use thiserror::Error;

/// Result type alias using IntelliNote's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for IntelliNote operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
