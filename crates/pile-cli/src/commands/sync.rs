// Rust guideline compliant 2026-10-19

//! Implementation of the `pile sync` command.
//!
//! Refreshes playtime for known games and auto-abandons the ones with no
//! activity in the last 90 days.

use crate::commands::open_repo;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::Utc;
use pile_app::{SteamLibraryFile, SyncGate, SyncService};
use std::path::{Path, PathBuf};

/// Syncs a user's pile against a saved `GetOwnedGames` response.
///
/// # Errors
///
/// Returns an error if:
/// - The `.pile` directory does not exist
/// - The Steam ID is malformed
/// - The user is inside the sync cooldown
/// - The pile cannot be read or written
pub fn execute(
    root: Option<&Path>,
    steam_id: &str,
    library: PathBuf,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let repo = open_repo(root)?;
    let config = repo.load_config()?;
    let source = SteamLibraryFile::new(library);
    let service = SyncService::new(&repo, &source, SyncGate::from_config(&config));

    let report = service.sync(steam_id, Utc::now())?;
    println!("{}", formatter.format_sync(&report));
    Ok(())
}
