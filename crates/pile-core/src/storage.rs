// Rust guideline compliant 2026-10-19

//! Storage module for per-user JSONL piles.
//!
//! Each user's pile lives in its own JSONL file, one entry per line. Writes
//! replace the whole file through a temp file and an atomic rename, so a
//! batch either lands completely or not at all.

use crate::{Error, PileEntry, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Reads every record of a JSONL file.
///
/// Blank lines are skipped. A line that does not decode is a hard error: a
/// pile with corrupt rows must not be silently truncated on the next save.
pub(crate) fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| {
            Error::InvalidEntry(format!("{} line {}: {}", path.display(), idx + 1, e))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Replaces a JSONL file atomically (temp file, fsync, rename).
pub(crate) fn write_jsonl_atomic<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    use std::fs::File;
    use std::io::Write;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("jsonl.tmp");
    {
        let mut file = File::create(&temp_path)?;
        for record in records {
            let json = serde_json::to_string(record)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
        }
        file.sync_all()?;
    }

    std::fs::rename(&temp_path, path)?;
    Ok(())
}

/// Storage engine for one user's pile.
///
/// Manages JSONL file operations with atomic batch commits and file locking
/// so that two syncs of the same user never interleave.
#[derive(Debug, Clone)]
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every entry of the pile.
    ///
    /// # Returns
    ///
    /// All entries, in file order. A missing file is an empty pile.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - A line is not a valid entry (including unknown status values)
    /// - An entry fails validation
    pub fn load_all(&self) -> Result<Vec<PileEntry>> {
        let entries: Vec<PileEntry> = read_jsonl(&self.path)?;
        for entry in &entries {
            entry.validate()?;
        }
        tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded pile");
        Ok(entries)
    }

    /// Finds the entry for a remote app id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the pile has no such entry, or any load error.
    pub fn find(&self, app_id: u32) -> Result<PileEntry> {
        self.load_all()?
            .into_iter()
            .find(|entry| entry.app_id() == app_id)
            .ok_or_else(|| Error::NotFound(format!("app {} is not in this pile", app_id)))
    }

    /// Saves a single entry, replacing the one with the same app id or appending.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails validation or the file cannot be written.
    pub fn save(&self, entry: &PileEntry) -> Result<()> {
        entry.validate()?;

        let mut entries = self.load_all()?;
        match entries.iter().position(|e| e.app_id() == entry.app_id()) {
            Some(pos) => entries[pos] = entry.clone(),
            None => entries.push(entry.clone()),
        }

        self.save_all(&entries)
    }

    /// Replaces the whole pile with `entries`.
    ///
    /// All entries are validated before anything is written; the file is
    /// then swapped in atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any entry fails validation
    /// - Two entries share an app id
    /// - The file cannot be written
    pub fn save_all(&self, entries: &[PileEntry]) -> Result<()> {
        let mut seen = std::collections::HashSet::with_capacity(entries.len());
        for entry in entries {
            entry.validate()?;
            if !seen.insert(entry.app_id()) {
                return Err(Error::InvalidEntry(format!(
                    "Duplicate entry for app {}",
                    entry.app_id()
                )));
            }
        }

        write_jsonl_atomic(&self.path, entries)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "committed pile");
        Ok(())
    }

    /// Deletes every entry of the pile.
    ///
    /// # Returns
    ///
    /// The number of entries removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or removed.
    pub fn clear(&self) -> Result<usize> {
        let count = read_jsonl::<serde_json::Value>(&self.path)?.len();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(count)
    }

    /// Executes a closure with an exclusive lock on the pile.
    ///
    /// The lock is a sibling `.lock` file held for the duration of the
    /// closure. Acquisition does not wait: a pile that is already locked
    /// yields a `WouldBlock` IO error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The lock cannot be acquired
    /// - The closure returns an error
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock on {}: {}", lock_path.display(), e),
            ))
        })?;

        let result = f();

        // Release even if the closure failed.
        let _ = lock_file.unlock();

        result
    }
}
