// Rust guideline compliant 2026-10-19

//! Implementation of the `pile user` command.

use crate::commands::open_repo;
use crate::OutputFormatter;
use anyhow::Result;
use pile_core::validation::validate_steam_id;
use std::path::Path;

/// Shows a user's sync state and last operation.
///
/// # Errors
///
/// Returns an error if the Steam ID is malformed or unknown.
pub fn execute(root: Option<&Path>, steam_id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let repo = open_repo(root)?;
    let steam_id = validate_steam_id(steam_id)?;
    let user = repo.users().get(&steam_id)?;

    println!("{}", formatter.format_user(&user));
    Ok(())
}
