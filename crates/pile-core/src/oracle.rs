// Rust guideline compliant 2026-10-19

//! Effective status derivation.
//!
//! The effective status is what a user sees for an entry. It is computed on
//! read from the stored status plus the best available activity signal and
//! is never written back by this module. Derivation only ever escalates
//! towards Abandoned:
//!
//! - Completed and AmnestyGranted are returned unchanged
//! - A manual abandonment (non-automatic reason) stays Abandoned
//! - Unplayed with zero playtime and no activity for 90 days → Abandoned
//! - Any playtime with no activity for 90 days → Abandoned
//! - Otherwise the stored status is returned

use crate::time::instant_from_epoch;
use crate::{PileEntry, Status};
use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

/// Days without activity after which a game counts as abandoned.
pub const ABANDON_AFTER_DAYS: i64 = 90;

/// How far past the threshold a missing activity signal is placed.
const MISSING_ACTIVITY_EXTRA_DAYS: i64 = 365;

/// Pile size above which bulk derivation runs in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Where a reference activity instant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivitySource {
    /// The remote library's last-played timestamp.
    Remote,
    /// Local bookkeeping (`updated_at`, `created_at`, or the missing-data sentinel).
    Local,
}

impl fmt::Display for ActivitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivitySource::Remote => f.write_str("Remote"),
            ActivitySource::Local => f.write_str("Local"),
        }
    }
}

/// Returns the instant before which activity counts as stale.
#[must_use]
pub fn abandonment_threshold(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(ABANDON_AFTER_DAYS)
}

/// Sentinel used when no activity signal exists at all: well past the threshold.
#[must_use]
pub fn missing_activity_instant(now: DateTime<Utc>) -> DateTime<Utc> {
    abandonment_threshold(now) - Duration::days(MISSING_ACTIVITY_EXTRA_DAYS)
}

/// Picks the best available activity instant for an entry.
///
/// Priority: a positive remote last-played timestamp, then `updated_at`,
/// then `created_at`, then the missing-activity sentinel.
///
/// # Arguments
///
/// * `entry` - The entry whose local timestamps are consulted
/// * `remote_last_played` - Remote last-played epoch seconds, if reported
/// * `now` - The current instant
///
/// # Returns
///
/// The reference instant and the source it was taken from.
pub fn reference_activity(
    entry: &PileEntry,
    remote_last_played: Option<i64>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, ActivitySource) {
    instant_from_epoch(remote_last_played)
        .map(|instant| (instant, ActivitySource::Remote))
        .or_else(|| entry.updated_at.map(|instant| (instant, ActivitySource::Local)))
        .or_else(|| entry.created_at.map(|instant| (instant, ActivitySource::Local)))
        .unwrap_or_else(|| (missing_activity_instant(now), ActivitySource::Local))
}

/// Computes the status shown to the user for an entry.
///
/// Pure: reads only the entry and `now`.
///
/// # Arguments
///
/// * `entry` - The stored entry
/// * `now` - The current instant
///
/// # Returns
///
/// The effective status.
pub fn effective_status(entry: &PileEntry, now: DateTime<Utc>) -> Status {
    if entry.status.is_terminal() {
        return entry.status;
    }

    if entry.is_manually_abandoned() {
        return Status::Abandoned;
    }

    let (reference, _) = reference_activity(entry, entry.game.last_played_timestamp, now);
    let stale = reference < abandonment_threshold(now);

    if entry.status == Status::Unplayed && entry.playtime_minutes == 0 && stale {
        return Status::Abandoned;
    }

    if entry.playtime_minutes > 0 && stale {
        return Status::Abandoned;
    }

    entry.status
}

/// Computes effective statuses for a whole pile, preserving order.
pub fn effective_statuses(entries: &[PileEntry], now: DateTime<Utc>) -> Vec<Status> {
    if entries.len() >= PARALLEL_THRESHOLD {
        entries
            .par_iter()
            .map(|entry| effective_status(entry, now))
            .collect()
    } else {
        entries
            .iter()
            .map(|entry| effective_status(entry, now))
            .collect()
    }
}
