// Rust guideline compliant 2026-10-19

//! Implementation of the `pile clear` command.

use crate::commands::open_repo;
use crate::OutputFormatter;
use anyhow::Result;
use pile_app::clear_pile;
use serde_json::json;
use std::path::Path;

/// Deletes every entry of a user's pile.
///
/// # Errors
///
/// Returns an error if:
/// - `confirmed` is false
/// - The `.pile` directory does not exist
/// - The pile is locked or cannot be removed
pub fn execute(
    root: Option<&Path>,
    steam_id: &str,
    confirmed: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    if !confirmed {
        anyhow::bail!("Refusing to clear the pile without --yes");
    }

    let repo = open_repo(root)?;
    let deleted = clear_pile(&repo, steam_id)?;

    println!(
        "{}",
        formatter.format_message(
            &format!("✓ Cleared {} games from the pile", deleted),
            json!({ "deleted": deleted }),
        )
    );
    Ok(())
}
