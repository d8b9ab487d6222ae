// Rust guideline compliant 2026-10-19

//! Implementation of the `pile stats` command.

use crate::commands::open_repo;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::Utc;
use pile_core::{insights, reality_check, shame_score};
use std::path::Path;

/// Which statistic to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatsKind {
    /// Unplayed count, time to finish, and money wasted.
    Reality,
    /// Shame score and rank.
    Shame,
    /// Buying patterns and recommendations.
    Insights,
}

/// Shows backlog statistics for a user.
///
/// # Errors
///
/// Returns an error if the `.pile` directory does not exist or the pile
/// cannot be read.
pub fn execute(
    root: Option<&Path>,
    steam_id: &str,
    kind: StatsKind,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let repo = open_repo(root)?;
    let entries = repo.open_storage(steam_id)?.load_all()?;
    let now = Utc::now();

    let output = match kind {
        StatsKind::Reality => formatter.format_reality(&reality_check(&entries, now)),
        StatsKind::Shame => formatter.format_shame(&shame_score(&entries, now)),
        StatsKind::Insights => formatter.format_insights(&insights(&entries, now)),
    };
    println!("{}", output);
    Ok(())
}
