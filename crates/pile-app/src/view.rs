// Rust guideline compliant 2026-10-19

//! Presentation view of a pile entry.

use chrono::{DateTime, Utc};
use pile_core::{PileEntry, RemoteGame, Status};
use serde::Serialize;

/// A pile entry as shown to the user.
///
/// `status` is the effective status computed at the read boundary;
/// `stored_status` is what is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PileEntryView {
    /// Remote application identifier.
    pub app_id: u32,
    /// Game name.
    pub name: String,
    /// Effective status.
    pub status: Status,
    /// Persisted status.
    pub stored_status: Status,
    /// Playtime in minutes.
    pub playtime_minutes: u32,
    /// Purchase date.
    pub purchase_date: Option<DateTime<Utc>>,
    /// Purchase price.
    pub purchase_price: Option<f64>,
    /// Completion date.
    pub completion_date: Option<DateTime<Utc>>,
    /// Abandon date.
    pub abandon_date: Option<DateTime<Utc>>,
    /// Abandon reason.
    pub abandon_reason: Option<String>,
    /// Amnesty date.
    pub amnesty_date: Option<DateTime<Utc>>,
    /// Amnesty reason.
    pub amnesty_reason: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last change time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Remote game snapshot.
    pub game: RemoteGame,
}

impl PileEntryView {
    /// Builds a view from a stored entry and its effective status.
    #[must_use]
    pub fn new(entry: &PileEntry, effective: Status) -> Self {
        Self {
            app_id: entry.app_id(),
            name: entry.game.name.clone(),
            status: effective,
            stored_status: entry.status,
            playtime_minutes: entry.playtime_minutes,
            purchase_date: entry.purchase_date,
            purchase_price: entry.purchase_price,
            completion_date: entry.completion_date,
            abandon_date: entry.abandon_date,
            abandon_reason: entry.abandon_reason.clone(),
            amnesty_date: entry.amnesty_date,
            amnesty_reason: entry.amnesty_reason.clone(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            game: entry.game.clone(),
        }
    }

    /// Builds a view, deriving the effective status at `now`.
    #[must_use]
    pub fn at(entry: &PileEntry, now: DateTime<Utc>) -> Self {
        Self::new(entry, pile_core::effective_status(entry, now))
    }

    /// Playtime in hours, rounded to one decimal.
    #[must_use]
    pub fn playtime_hours(&self) -> f64 {
        (f64::from(self.playtime_minutes) / 6.0).round() / 10.0
    }
}
