// Rust guideline compliant 2026-10-19

//! Implementation of the `pile show` command.

use crate::commands::open_repo;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::Utc;
use pile_app::PileEntryView;
use std::path::Path;

/// Shows one entry of a user's pile with its effective status.
///
/// # Errors
///
/// Returns an error if:
/// - The `.pile` directory does not exist
/// - The app id is not in the pile
/// - The pile cannot be read
pub fn execute(
    root: Option<&Path>,
    steam_id: &str,
    app_id: u32,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let repo = open_repo(root)?;
    let entry = repo.open_storage(steam_id)?.find(app_id)?;

    println!("{}", formatter.format_entry(&PileEntryView::at(&entry, Utc::now())));
    Ok(())
}
