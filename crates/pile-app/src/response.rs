// Rust guideline compliant 2026-10-19

//! JSON envelopes for command output.
//!
//! Every JSON document the CLI prints is one of two shapes:
//! `{"status": "ok", "result": ...}` or
//! `{"status": "error", "code": ..., "message": ..., "details": ...}`.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Successful command output wrapping a borrowed payload.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<'a, T> {
    status: &'static str,
    result: &'a T,
}

impl<'a, T: Serialize> SuccessEnvelope<'a, T> {
    /// Wraps a payload.
    #[must_use]
    pub fn new(result: &'a T) -> Self {
        Self { status: "ok", result }
    }

    /// Renders the envelope as pretty JSON.
    ///
    /// A payload that fails to serialize is reported as an error document.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            ErrorEnvelope::from_message(format!("Failed to serialize output: {}", e)).to_json()
        })
    }
}

/// Failed command output.
///
/// Failures that never became an `AppError` (argument checks in the CLI)
/// carry no code.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    status: &'static str,
    /// Stable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates an envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: "error",
            code: Some(error.code()),
            message: error.to_string(),
            details: error.details(),
        }
    }

    /// Creates an envelope carrying only a message.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            code: None,
            message: message.into(),
            details: None,
        }
    }

    /// Renders the envelope as pretty JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| {
            serde_json::json!({ "status": "error", "message": self.message }).to_string()
        })
    }
}
