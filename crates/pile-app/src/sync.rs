// Rust guideline compliant 2026-10-19

//! Sync and import orchestration.
//!
//! One operation for one user runs as: cooldown gate, remote fetch,
//! then under the pile lock a load, an in-memory merge, and a single
//! atomic commit. A failed commit leaves the stored pile as it was.

use crate::error::Result;
use crate::gate::SyncGate;
use crate::repo::RepoContext;
use crate::source::LibrarySource;
use chrono::{DateTime, Utc};
use pile_core::time::instant_from_epoch;
use pile_core::{
    import_library, reconcile, shame_score, ImportResult, OperationKind, OperationState,
    OperationStatus, PileEntry, ReconcileResult, RemoteRecord, Storage, UserRecord,
};
use serde::Serialize;
use std::fmt::Debug;

/// Outcome of one import or sync.
#[derive(Debug, Clone, Serialize)]
pub struct OperationReport<T> {
    /// The user.
    pub steam_id: String,
    /// Import or sync.
    pub kind: OperationKind,
    /// Remote records received.
    pub records_fetched: usize,
    /// Why the fetch failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
    /// Merge counters.
    pub counts: T,
    /// Entries in the pile after the operation.
    pub total_games: usize,
    /// Shame score after the operation.
    pub shame_score: f64,
}

/// Runs imports and syncs for users of one pile directory.
pub struct SyncService<'a> {
    repo: &'a RepoContext,
    source: &'a dyn LibrarySource,
    gate: SyncGate,
}

impl<'a> SyncService<'a> {
    /// Creates a service over a pile directory and a remote library source.
    pub fn new(repo: &'a RepoContext, source: &'a dyn LibrarySource, gate: SyncGate) -> Self {
        Self { repo, source, gate }
    }

    /// Syncs a user's pile against the remote library.
    ///
    /// Playtime is refreshed and stale games are auto-abandoned; games the
    /// pile does not know yet are ignored (use `import` for those).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The Steam ID is malformed
    /// - The user synced within the cooldown window
    /// - The pile is locked, corrupt, or cannot be written
    pub fn sync(&self, steam_id: &str, now: DateTime<Utc>) -> Result<OperationReport<ReconcileResult>> {
        self.run(steam_id, OperationKind::Sync, now, |entries, records| {
            reconcile(entries, records, now)
        })
    }

    /// Imports a user's remote library into the pile.
    ///
    /// New games are seeded and known games have playtime and metadata
    /// refreshed. No game is abandoned by an import.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The Steam ID is malformed
    /// - The user synced within the cooldown window
    /// - The pile is locked, corrupt, or cannot be written
    pub fn import(&self, steam_id: &str, now: DateTime<Utc>) -> Result<OperationReport<ImportResult>> {
        self.run(steam_id, OperationKind::Import, now, |entries, records| {
            import_library(entries, records, now)
        })
    }

    fn run<T, F>(
        &self,
        steam_id: &str,
        kind: OperationKind,
        now: DateTime<Utc>,
        merge: F,
    ) -> Result<OperationReport<T>>
    where
        T: Debug,
        F: FnOnce(&mut Vec<PileEntry>, &[RemoteRecord]) -> T,
    {
        let storage = self.repo.open_storage(steam_id)?;
        let steam_id = pile_core::validation::validate_steam_id(steam_id)?;
        let users = self.repo.users();
        let mut user = users.get_or_create(&steam_id)?;

        self.gate.check(&user, now)?;
        tracing::info!(steam_id = %steam_id, kind = ?kind, "starting library operation");

        let (records, fetch_error) = match self.source.fetch_remote_library(&steam_id) {
            Ok(records) => (records, None),
            Err(err) => {
                tracing::warn!(
                    steam_id = %steam_id,
                    error = %err,
                    "remote fetch failed, continuing with no records"
                );
                (Vec::new(), Some(err.to_string()))
            }
        };
        log_privacy_analysis(&steam_id, &records);

        let committed = commit(&storage, &records, merge);

        let (counts, entries) = match committed {
            Ok(done) => done,
            Err(err) => {
                user.last_operation = Some(OperationStatus {
                    kind,
                    state: OperationState::Failed,
                    progress_total: records.len(),
                    error_message: Some(err.to_string()),
                    started_at: now,
                    completed_at: now,
                });
                if let Err(record_err) = users.upsert(&user) {
                    tracing::warn!(error = %record_err, "failed to record failed operation");
                }
                return Err(err.into());
            }
        };

        let score = shame_score(&entries, now).score;
        let state = if fetch_error.is_some() {
            OperationState::Failed
        } else {
            user.last_sync_at = Some(now);
            OperationState::Completed
        };
        user.shame_score = score;
        user.last_operation = Some(OperationStatus {
            kind,
            state,
            progress_total: records.len(),
            error_message: fetch_error.clone(),
            started_at: now,
            completed_at: now,
        });
        users.upsert(&user)?;

        tracing::info!(
            steam_id = %steam_id,
            kind = ?kind,
            counts = ?counts,
            total_games = entries.len(),
            shame_score = score,
            "library operation finished"
        );

        Ok(OperationReport {
            steam_id,
            kind,
            records_fetched: records.len(),
            fetch_error,
            counts,
            total_games: entries.len(),
            shame_score: score,
        })
    }
}

/// Loads, merges, and commits a pile under its lock.
fn commit<T, F>(
    storage: &Storage,
    records: &[RemoteRecord],
    merge: F,
) -> pile_core::Result<(T, Vec<PileEntry>)>
where
    F: FnOnce(&mut Vec<PileEntry>, &[RemoteRecord]) -> T,
{
    storage.with_lock(|| {
        let mut entries = storage.load_all()?;
        let counts = merge(&mut entries, records);
        if !records.is_empty() {
            storage.save_all(&entries)?;
        }
        Ok((counts, entries))
    })
}

/// Counts remote records with and without a usable last-played timestamp.
fn privacy_split(records: &[RemoteRecord]) -> (usize, usize) {
    let with_activity = records
        .iter()
        .filter(|record| instant_from_epoch(record.last_played_timestamp).is_some())
        .count();
    (with_activity, records.len() - with_activity)
}

/// Logs the privacy split; at warn level when any record hides its activity.
fn log_privacy_analysis(steam_id: &str, records: &[RemoteRecord]) {
    let (with_last_played, without_last_played) = privacy_split(records);
    if without_last_played > 0 {
        tracing::warn!(
            steam_id = %steam_id,
            total = records.len(),
            with_last_played,
            without_last_played,
            "remote library hides last-played data, falling back to local activity"
        );
    } else {
        tracing::info!(
            steam_id = %steam_id,
            total = records.len(),
            with_last_played,
            "remote library privacy analysis"
        );
    }
}

/// Deletes every entry of a user's pile and resets their sync state.
///
/// # Returns
///
/// The number of entries deleted.
///
/// # Errors
///
/// Returns an error if the Steam ID is malformed, the pile is locked, or
/// the files cannot be written.
pub fn clear_pile(repo: &RepoContext, steam_id: &str) -> Result<usize> {
    let storage = repo.open_storage(steam_id)?;
    let steam_id = pile_core::validation::validate_steam_id(steam_id)?;
    let deleted = storage.with_lock(|| storage.clear())?;

    let users = repo.users();
    let mut user: UserRecord = users.get_or_create(&steam_id)?;
    user.last_sync_at = None;
    user.shame_score = 0.0;
    users.upsert(&user)?;

    tracing::info!(steam_id = %steam_id, deleted, "cleared pile");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(app_id: u32, last_played: Option<i64>) -> RemoteRecord {
        RemoteRecord {
            app_id,
            name: String::new(),
            playtime_minutes: 0,
            last_played_timestamp: last_played,
            price: None,
            genres: Vec::new(),
            rating_percent: None,
        }
    }

    #[test]
    fn test_privacy_split_treats_non_positive_as_hidden() {
        let records = vec![
            record(1, Some(1_700_000_000)),
            record(2, None),
            record(3, Some(0)),
            record(4, Some(-5)),
        ];
        assert_eq!(privacy_split(&records), (1, 3));
        assert_eq!(privacy_split(&[]), (0, 0));
    }
}
