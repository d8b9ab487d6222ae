// Rust guideline compliant 2026-10-19

//! Manual status actions.
//!
//! These are the transitions a user performs explicitly. They always write
//! the stored status directly and bump `updated_at`:
//!
//! - start playing → Playing
//! - complete → Completed (sets `completion_date`)
//! - abandon → Abandoned (sets `abandon_date` and a user reason)
//! - grant amnesty → AmnestyGranted (sets `amnesty_date` and reason)
//! - direct set → any status, with the matching date

use crate::validation::sanitize_reason;
use crate::{PileEntry, Result, Status};
use chrono::{DateTime, Utc};

/// A user-initiated change to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start (or resume) playing.
    StartPlaying,
    /// Mark as completed.
    Complete,
    /// Abandon with a reason.
    Abandon {
        /// Why the game was abandoned.
        reason: String,
    },
    /// Grant amnesty with a reason.
    GrantAmnesty {
        /// Why amnesty was granted.
        reason: String,
    },
    /// Set a status directly.
    SetStatus(Status),
}

impl PileEntry {
    /// Marks the entry as currently being played.
    pub fn start_playing(&mut self, now: DateTime<Utc>) {
        self.status = Status::Playing;
        self.touch(now);
    }

    /// Marks the entry as completed.
    pub fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.status = Status::Completed;
        self.completion_date = Some(now);
        self.touch(now);
    }

    /// Marks the entry as abandoned by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the reason is too long.
    pub fn mark_abandoned(&mut self, reason: &str, now: DateTime<Utc>) -> Result<()> {
        let reason = sanitize_reason(reason)?;
        self.status = Status::Abandoned;
        self.abandon_date = Some(now);
        self.abandon_reason = (!reason.is_empty()).then_some(reason);
        self.touch(now);
        Ok(())
    }

    /// Grants amnesty to the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the reason is too long.
    pub fn grant_amnesty(&mut self, reason: &str, now: DateTime<Utc>) -> Result<()> {
        let reason = sanitize_reason(reason)?;
        self.status = Status::AmnestyGranted;
        self.amnesty_date = Some(now);
        self.amnesty_reason = (!reason.is_empty()).then_some(reason);
        self.touch(now);
        Ok(())
    }

    /// Sets the stored status directly, stamping the matching date.
    pub fn set_status(&mut self, status: Status, now: DateTime<Utc>) {
        self.status = status;
        match status {
            Status::Completed => self.completion_date = Some(now),
            Status::Abandoned => self.abandon_date = Some(now),
            Status::AmnestyGranted => self.amnesty_date = Some(now),
            Status::Unplayed | Status::Playing => {}
        }
        self.touch(now);
    }

    /// Applies a user action to the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a supplied reason fails validation.
    pub fn apply(&mut self, action: &Action, now: DateTime<Utc>) -> Result<()> {
        match action {
            Action::StartPlaying => self.start_playing(now),
            Action::Complete => self.mark_completed(now),
            Action::Abandon { reason } => self.mark_abandoned(reason, now)?,
            Action::GrantAmnesty { reason } => self.grant_amnesty(reason, now)?,
            Action::SetStatus(status) => self.set_status(*status, now),
        }
        Ok(())
    }
}
