// Rust guideline compliant 2026-10-19

//! Pile Core Library
//!
//! This crate provides the foundational components for the Pile backlog tracker:
//! - Data models (PileEntry, RemoteGame, RemoteRecord, Status)
//! - Status derivation (effective status from stored state and activity signals)
//! - Sync reconciliation and import seeding
//! - Manual status actions
//! - Backlog statistics (reality check, shame score, insights)
//! - Storage engine (per-user JSONL piles, user directory, file locking)
//! - Configuration, input validation, and error types

pub mod actions;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod oracle;
pub mod reconcile;
pub mod stats;
pub mod storage;
pub mod time;
pub mod users;
pub mod validation;

pub use actions::Action;
pub use config::{Config, LogLevel, OutputFormat};
pub use error::{Error, Result};
pub use import::{import_library, seed_entry, ImportResult};
pub use models::{PileEntry, RemoteGame, RemoteRecord, Status};
pub use oracle::{effective_status, effective_statuses, reference_activity, ActivitySource};
pub use reconcile::{detect_abandonment, reconcile, ReconcileResult};
pub use stats::{insights, reality_check, shame_score, BehavioralInsights, RealityCheck, ShameScore};
pub use storage::Storage;
pub use users::{OperationKind, OperationState, OperationStatus, UserDirectory, UserRecord};
