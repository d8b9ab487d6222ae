// Rust guideline compliant 2026-10-19

//! Error types for the Pile core library.

use thiserror::Error;

/// Result type alias for Pile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Pile operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or corrupt pile entry data.
    #[error("Invalid pile entry: {0}")]
    InvalidEntry(String),

    /// Entry or user not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed Steam identifier.
    #[error("Invalid Steam ID: {0}")]
    InvalidSteamId(String),

    /// Caller supplied input that failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
