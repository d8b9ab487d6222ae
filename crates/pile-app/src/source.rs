// Rust guideline compliant 2026-10-19

//! Remote library collaborators.
//!
//! The sync services never talk to Steam directly; they ask a
//! `LibrarySource` for the user's owned games. The shipped implementation
//! reads a saved `GetOwnedGames` response from disk.

use crate::error::{AppError, Result};
use pile_core::RemoteRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Provides a user's remote library.
pub trait LibrarySource {
    /// Fetches every owned game for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be fetched or decoded.
    fn fetch_remote_library(&self, steam_id: &str) -> Result<Vec<RemoteRecord>>;
}

#[derive(Debug, Deserialize)]
struct OwnedGamesDocument {
    #[serde(default)]
    response: OwnedGamesResponse,
}

#[derive(Debug, Default, Deserialize)]
struct OwnedGamesResponse {
    #[serde(default)]
    games: Vec<RemoteRecord>,
}

/// A Steam `GetOwnedGames` response saved as a JSON file.
///
/// The document has the shape `{"response": {"games": [...]}}`. A response
/// without `games` (private profiles) yields an empty library.
#[derive(Debug, Clone)]
pub struct SteamLibraryFile {
    path: PathBuf,
}

impl SteamLibraryFile {
    /// Creates a source reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LibrarySource for SteamLibraryFile {
    fn fetch_remote_library(&self, _steam_id: &str) -> Result<Vec<RemoteRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::Fetch(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        let document: OwnedGamesDocument = serde_json::from_str(&content).map_err(|e| {
            AppError::Fetch(format!("cannot decode {}: {}", self.path.display(), e))
        })?;
        Ok(document.response.games)
    }
}
