// Rust guideline compliant 2026-10-19

//! Import-time seeding of new pile entries.
//!
//! An import creates entries for remote games the pile has never seen and
//! refreshes playtime and store metadata for the ones it already tracks.
//! No abandonment check runs here: an entry is never born Abandoned.

use crate::{PileEntry, RemoteGame, RemoteRecord, Status};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Counters reported by an import pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    /// New entries seeded from the remote library.
    pub created: usize,
    /// Existing entries whose playtime changed.
    pub refreshed: usize,
    /// Existing entries whose playtime was already current.
    pub unchanged: usize,
}

/// Creates a new pile entry from a remote library record.
///
/// The entry starts Unplayed when the remote reports no playtime and
/// Playing otherwise. The store price, when known, is used as the
/// purchase price.
///
/// # Arguments
///
/// * `record` - The remote record
/// * `now` - Creation instant
///
/// # Returns
///
/// A new entry.
pub fn seed_entry(record: &RemoteRecord, now: DateTime<Utc>) -> PileEntry {
    let status = if record.playtime_minutes == 0 {
        Status::Unplayed
    } else {
        Status::Playing
    };

    PileEntry {
        game: RemoteGame::from_record(record),
        status,
        playtime_minutes: record.playtime_minutes,
        purchase_date: None,
        purchase_price: record.price,
        completion_date: None,
        abandon_date: None,
        abandon_reason: None,
        amnesty_date: None,
        amnesty_reason: None,
        created_at: Some(now),
        updated_at: Some(now),
    }
}

/// Merges a remote library snapshot into a pile at import time.
///
/// # Arguments
///
/// * `entries` - The user's pile, extended and mutated in place
/// * `records` - The remote library snapshot
/// * `now` - The current instant
///
/// # Returns
///
/// Counts of created, refreshed, and unchanged entries.
pub fn import_library(
    entries: &mut Vec<PileEntry>,
    records: &[RemoteRecord],
    now: DateTime<Utc>,
) -> ImportResult {
    let mut positions: HashMap<u32, usize> = entries
        .iter()
        .enumerate()
        .map(|(pos, entry)| (entry.app_id(), pos))
        .collect();

    let mut result = ImportResult::default();

    for record in records {
        if record.app_id == 0 {
            continue;
        }

        match positions.get(&record.app_id) {
            Some(&pos) => {
                let entry = &mut entries[pos];
                entry.game.refresh_from(record);
                if entry.playtime_minutes != record.playtime_minutes {
                    entry.playtime_minutes = record.playtime_minutes;
                    entry.touch(now);
                    result.refreshed += 1;
                } else {
                    result.unchanged += 1;
                }
            }
            None => {
                positions.insert(record.app_id, entries.len());
                entries.push(seed_entry(record, now));
                result.created += 1;
            }
        }
    }

    result
}
