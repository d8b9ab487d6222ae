// Rust guideline compliant 2026-10-19

//! User directory: per-user sync bookkeeping.

use crate::storage::{read_jsonl, write_jsonl_atomic};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Kind of library operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Full library import.
    Import,
    /// Playtime sync.
    Sync,
}

/// Outcome of a library operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationState {
    /// Finished and committed.
    Completed,
    /// Did not commit, or ran on an empty fetch.
    Failed,
}

/// Record of the latest import or sync for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationStatus {
    /// Import or sync.
    pub kind: OperationKind,
    /// How it ended.
    pub state: OperationState,
    /// Remote records processed.
    #[serde(default)]
    pub progress_total: usize,
    /// Failure detail, if any.
    #[serde(default)]
    pub error_message: Option<String>,
    /// When it started.
    #[serde(deserialize_with = "crate::time::deserialize_utc")]
    pub started_at: DateTime<Utc>,
    /// When it ended.
    #[serde(deserialize_with = "crate::time::deserialize_utc")]
    pub completed_at: DateTime<Utc>,
}

/// A user known to this installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// 64-bit Steam ID in decimal.
    pub steam_id: String,
    /// Display name.
    #[serde(default)]
    pub username: String,
    /// When the last successful import or sync committed.
    #[serde(default, deserialize_with = "crate::time::deserialize_optional_utc")]
    pub last_sync_at: Option<DateTime<Utc>>,
    /// Shame score as of the last sync.
    #[serde(default)]
    pub shame_score: f64,
    /// The latest import or sync.
    #[serde(default)]
    pub last_operation: Option<OperationStatus>,
}

impl UserRecord {
    /// Creates a record for a user that has never synced.
    pub fn new(steam_id: String) -> Self {
        Self {
            username: steam_id.clone(),
            steam_id,
            last_sync_at: None,
            shame_score: 0.0,
            last_operation: None,
        }
    }
}

/// JSONL-backed directory of users.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    path: PathBuf,
}

impl UserDirectory {
    /// Creates a directory backed by the given JSONL file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid records.
    pub fn load_all(&self) -> Result<Vec<UserRecord>> {
        read_jsonl(&self.path)
    }

    /// Looks up a user by Steam ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user is unknown.
    pub fn get(&self, steam_id: &str) -> Result<UserRecord> {
        self.load_all()?
            .into_iter()
            .find(|user| user.steam_id == steam_id)
            .ok_or_else(|| Error::NotFound(format!("user {}", steam_id)))
    }

    /// Looks up a user, returning a fresh record if unknown. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn get_or_create(&self, steam_id: &str) -> Result<UserRecord> {
        match self.get(steam_id) {
            Ok(user) => Ok(user),
            Err(Error::NotFound(_)) => Ok(UserRecord::new(steam_id.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Inserts or replaces a user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or written.
    pub fn upsert(&self, user: &UserRecord) -> Result<()> {
        let mut users = self.load_all()?;
        match users.iter().position(|u| u.steam_id == user.steam_id) {
            Some(pos) => users[pos] = user.clone(),
            None => users.push(user.clone()),
        }
        write_jsonl_atomic(&self.path, &users)
    }
}
