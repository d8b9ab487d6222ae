// Rust guideline compliant 2026-10-19

//! Command implementations for the Pile CLI.

pub mod action;
pub mod clear;
pub mod import;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;
pub mod sync;
pub mod user;

use anyhow::Result;
use pile_app::RepoContext;
use std::path::Path;

/// Discovers the pile directory for a command.
///
/// # Errors
///
/// Returns an error if `.pile` is missing under the root.
pub(crate) fn open_repo(root: Option<&Path>) -> Result<RepoContext> {
    Ok(RepoContext::discover(root)?)
}
