// Rust guideline compliant 2026-10-19

//! Error handling for Pile application services.

use pile_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and JSON responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested entry or user was not found.
    NotFound,
    /// Stored or supplied entry data failed validation.
    ValidationError,
    /// The Steam ID is malformed.
    InvalidSteamId,
    /// IO failure while reading or writing pile data.
    IoError,
    /// The pile directory has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration could not be loaded.
    ConfigError,
    /// The user synced too recently.
    RateLimited,
    /// The remote library could not be read.
    FetchError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Pile directory is missing or not initialized.
    #[error("Pile directory not initialized at {path}. Run 'pile init' first.")]
    RepoNotInitialized {
        /// Path where `.pile` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Another import or sync ran inside the cooldown window.
    #[error("Sync rate limited. Try again in {retry_after_hours:.1} hours")]
    RateLimited {
        /// Hours until the next sync is allowed.
        retry_after_hours: f64,
    },

    /// The remote library could not be fetched or decoded.
    #[error("Failed to fetch remote library: {0}")]
    Fetch(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::RateLimited { .. } => ErrorCode::RateLimited,
            AppError::Fetch(_) => ErrorCode::FetchError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidEntry(_) => ErrorCode::ValidationError,
                CoreError::InvalidSteamId(_) => ErrorCode::InvalidSteamId,
                CoreError::InvalidInput(_) => ErrorCode::InvalidInput,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::RateLimited { retry_after_hours } => Some(serde_json::json!({
                "retry_after_hours": retry_after_hours,
            })),
            _ => None,
        }
    }
}
