// Rust guideline compliant 2026-10-19

//! Manual status actions against a stored pile.

use crate::error::Result;
use crate::view::PileEntryView;
use chrono::{DateTime, Utc};
use pile_core::{Action, Error as CoreError, Storage};

/// Applies a user action to one entry and commits the pile.
///
/// # Arguments
///
/// * `storage` - The user's pile
/// * `app_id` - Entry to change
/// * `action` - The action to apply
/// * `now` - The current instant
///
/// # Returns
///
/// The updated entry as a view.
///
/// # Errors
///
/// Returns an error if:
/// - The pile is locked by another operation
/// - The app id is not in the pile
/// - The action's reason fails validation
/// - The pile cannot be written
pub fn apply_action(
    storage: &Storage,
    app_id: u32,
    action: &Action,
    now: DateTime<Utc>,
) -> Result<PileEntryView> {
    let entry = storage.with_lock(|| {
        let mut entries = storage.load_all()?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.app_id() == app_id)
            .ok_or_else(|| CoreError::NotFound(format!("app {} is not in this pile", app_id)))?;

        entry.apply(action, now)?;
        let updated = entry.clone();

        storage.save_all(&entries)?;
        Ok(updated)
    })?;

    tracing::info!(app_id, status = %entry.status, "applied manual action");
    Ok(PileEntryView::at(&entry, now))
}
