// Rust guideline compliant 2026-10-19

//! Shared application services for Pile.
//!
//! This crate provides reusable, non-CLI-specific helpers for repository
//! discovery, remote library access, the per-user sync gate, sync and
//! import orchestration, pile listing, manual actions, and standardized
//! response envelopes.

pub mod actions;
pub mod error;
pub mod gate;
pub mod list;
pub mod repo;
pub mod response;
pub mod source;
pub mod sync;
pub mod view;

pub use actions::apply_action;
pub use error::{AppError, ErrorCode, Result};
pub use gate::SyncGate;
pub use list::{list_pile, parse_sort_direction, parse_sort_field, parse_status};
pub use list::{ListOptions, PilePage, SortDirection, SortField};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use source::{LibrarySource, SteamLibraryFile};
pub use sync::{clear_pile, OperationReport, SyncService};
pub use view::PileEntryView;
