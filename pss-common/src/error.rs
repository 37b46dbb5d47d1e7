//! Common error types for the PSS site

use thiserror::Error;

/// Common result type for PSS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the PSS crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
