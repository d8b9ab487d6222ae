// Rust guideline compliant 2026-10-19

//! Implementation of the manual status commands.
//!
//! `play`, `complete`, `abandon`, `amnesty`, and `set-status` all write the
//! stored status directly.

use crate::commands::open_repo;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::Utc;
use pile_app::{apply_action, parse_status};
use pile_core::Action;
use std::path::Path;

/// Applies a manual action to one entry.
///
/// # Errors
///
/// Returns an error if:
/// - The `.pile` directory does not exist
/// - The app id is not in the pile
/// - A reason is too long
/// - The pile is locked or cannot be written
pub fn execute(
    root: Option<&Path>,
    steam_id: &str,
    app_id: u32,
    action: Action,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let repo = open_repo(root)?;
    let storage = repo.open_storage(steam_id)?;

    let view = apply_action(&storage, app_id, &action, Utc::now())?;
    println!("{}", formatter.format_entry(&view));
    Ok(())
}

/// Builds a direct status action from user input.
///
/// # Errors
///
/// Returns an error if the status is invalid.
pub fn set_status_action(status: &str) -> Result<Action> {
    Ok(Action::SetStatus(parse_status(status)?))
}
