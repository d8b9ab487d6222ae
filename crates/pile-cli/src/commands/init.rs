// Rust guideline compliant 2026-10-19

//! Implementation of the `pile init` command.
//!
//! Creates the `.pile` directory with an empty user directory, a `piles/`
//! folder for per-user JSONL files, and a default configuration.

use crate::OutputFormatter;
use anyhow::Result;
use pile_app::RepoContext;
use serde_json::json;
use std::path::Path;

/// Initializes a Pile data directory.
///
/// Existing files are left untouched, so running it twice is harmless.
///
/// # Errors
///
/// Returns an error if the directories or config file cannot be created.
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let (repo, created_config) = RepoContext::init(root)?;

    let mut message = format!("✓ Pile initialized at {}", repo.pile_dir().display());
    if created_config {
        message.push_str("\n  - Created config.toml with defaults");
    }

    println!(
        "{}",
        formatter.format_message(
            &message,
            json!({
                "pile_dir": repo.pile_dir(),
                "created_config": created_config,
            }),
        )
    );
    Ok(())
}
