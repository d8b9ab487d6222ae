// Rust guideline compliant 2026-10-19

//! Sync reconciliation.
//!
//! Merges freshly fetched remote library records into a user's stored pile:
//! playtime is adopted verbatim, and entries that show no recent activity are
//! escalated to Abandoned with an automatic reason. Entries absent from the
//! remote batch are left untouched.
//!
//! Mutations happen in place on the caller's working set. Committing (or
//! discarding) that set is the caller's job.

use crate::models::AUTO_ABANDON_PREFIX;
use crate::oracle::{abandonment_threshold, reference_activity, ActivitySource};
use crate::time::instant_from_epoch;
use crate::{PileEntry, RemoteRecord, Status};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Counters reported by a reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileResult {
    /// Entries that had a matching remote record.
    pub checked_count: usize,
    /// Entries whose playtime changed.
    pub updated_count: usize,
    /// Entries newly marked abandoned.
    pub abandoned_count: usize,
}

impl ReconcileResult {
    /// Returns true if the pass mutated at least one entry.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.updated_count > 0 || self.abandoned_count > 0
    }
}

/// Builds the abandon reason written for an automatic abandonment.
#[must_use]
pub fn auto_abandon_reason(source: ActivitySource) -> String {
    format!(
        "{} during sync - no recent activity (using {} data)",
        AUTO_ABANDON_PREFIX, source
    )
}

/// Decides at sync time whether an entry should become Abandoned.
///
/// Only Unplayed and Playing entries are considered; any other status is
/// returned unchanged. Once the reference activity is older than the
/// threshold:
///
/// - an Unplayed game the remote still reports at zero playtime is abandoned
/// - a game with playtime is abandoned only if that playtime did not move
///   since the last sync
///
/// A playtime change is fresh activity even when no last-played timestamp
/// backs it up, so it never triggers abandonment.
///
/// # Arguments
///
/// * `current_playtime` - Playtime reported by the remote library
/// * `stored_playtime` - Playtime stored before this sync
/// * `stored_status` - Status stored before this sync
/// * `reference` - Reference activity instant
/// * `now` - The current instant
///
/// # Returns
///
/// `Status::Abandoned` if the criteria are met, otherwise `stored_status`.
pub fn detect_abandonment(
    current_playtime: u32,
    stored_playtime: u32,
    stored_status: Status,
    reference: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Status {
    if !matches!(stored_status, Status::Unplayed | Status::Playing) {
        return stored_status;
    }

    if reference >= abandonment_threshold(now) {
        return stored_status;
    }

    if stored_status == Status::Unplayed && current_playtime == 0 {
        return Status::Abandoned;
    }

    if current_playtime > 0 && current_playtime == stored_playtime {
        return Status::Abandoned;
    }

    stored_status
}

/// Reconciles stored entries against a batch of remote records.
///
/// For every entry with a matching record: playtime is replaced by the
/// remote value when it differs, the remote last-played snapshot is
/// refreshed, and the entry is auto-abandoned when `detect_abandonment`
/// says so. `updated_at` is bumped whenever playtime or status changes.
///
/// # Arguments
///
/// * `entries` - The user's working set, mutated in place
/// * `records` - Freshly fetched remote records
/// * `now` - The current instant
///
/// # Returns
///
/// Counts of checked, updated, and newly abandoned entries.
pub fn reconcile(
    entries: &mut [PileEntry],
    records: &[RemoteRecord],
    now: DateTime<Utc>,
) -> ReconcileResult {
    let by_app: HashMap<u32, &RemoteRecord> =
        records.iter().map(|record| (record.app_id, record)).collect();

    let mut result = ReconcileResult::default();

    for entry in entries.iter_mut() {
        let Some(record) = by_app.get(&entry.app_id()) else {
            continue;
        };
        result.checked_count += 1;

        let current_playtime = record.playtime_minutes;
        let stored_playtime = entry.playtime_minutes;
        let (reference, source) = reference_activity(entry, record.last_played_timestamp, now);

        let derived = detect_abandonment(
            current_playtime,
            stored_playtime,
            entry.status,
            reference,
            now,
        );

        if current_playtime != stored_playtime {
            entry.playtime_minutes = current_playtime;
            entry.touch(now);
            result.updated_count += 1;
        }

        if derived == Status::Abandoned && entry.status != Status::Abandoned {
            entry.status = Status::Abandoned;
            entry.abandon_date = Some(now);
            entry.abandon_reason = Some(auto_abandon_reason(source));
            entry.touch(now);
            result.abandoned_count += 1;
        }

        if instant_from_epoch(record.last_played_timestamp).is_some() {
            entry.game.last_played_timestamp = record.last_played_timestamp;
        }
    }

    result
}
