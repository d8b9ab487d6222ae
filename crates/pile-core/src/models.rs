// Rust guideline compliant 2026-10-19

//! Core data models for Pile.

use crate::time::instant_from_epoch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix of every abandon reason written by the sync reconciler.
///
/// Abandon reasons that do not start with this prefix were entered by the
/// user and are never re-derived.
pub const AUTO_ABANDON_PREFIX: &str = "Automatically detected";

/// Maximum length of free-text reasons (abandon, amnesty).
pub const MAX_REASON_LEN: usize = 500;

/// Status of a game in a user's pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Owned but never started.
    Unplayed,
    /// Currently being played.
    Playing,
    /// Finished.
    Completed,
    /// Given up on, manually or by stale-activity detection.
    Abandoned,
    /// Forgiven: removed from the shame calculation by the user.
    AmnestyGranted,
}

impl Status {
    /// All statuses in display order.
    pub const ALL: [Status; 5] = [
        Status::Unplayed,
        Status::Playing,
        Status::Completed,
        Status::Abandoned,
        Status::AmnestyGranted,
    ];

    /// Returns the stable snake_case name of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unplayed => "unplayed",
            Status::Playing => "playing",
            Status::Completed => "completed",
            Status::Abandoned => "abandoned",
            Status::AmnestyGranted => "amnesty_granted",
        }
    }

    /// Returns true for statuses that derivation never overrides.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::AmnestyGranted)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "unplayed" => Ok(Status::Unplayed),
            "playing" => Ok(Status::Playing),
            "completed" => Ok(Status::Completed),
            "abandoned" => Ok(Status::Abandoned),
            "amnesty_granted" | "amnesty-granted" | "amnesty" => Ok(Status::AmnestyGranted),
            _ => Err(crate::Error::InvalidInput(format!(
                "Invalid status: {}. Must be one of: unplayed, playing, completed, abandoned, amnesty_granted",
                value
            ))),
        }
    }
}

/// One game as reported by the remote library (Steam `GetOwnedGames`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecord {
    /// Remote application identifier.
    #[serde(rename = "appid", alias = "app_id")]
    pub app_id: u32,
    /// Reported game name.
    #[serde(default)]
    pub name: String,
    /// Total playtime in minutes.
    #[serde(rename = "playtime_forever", alias = "playtime_minutes", default)]
    pub playtime_minutes: u32,
    /// Epoch seconds of the last play session, if the remote shares it.
    #[serde(
        rename = "rtime_last_played",
        alias = "last_played_timestamp",
        default,
        deserialize_with = "crate::time::deserialize_lenient_epoch"
    )]
    pub last_played_timestamp: Option<i64>,
    /// Store price, when known.
    #[serde(default)]
    pub price: Option<f64>,
    /// Store genres, when known.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Positive review percentage, when known.
    #[serde(default)]
    pub rating_percent: Option<u8>,
}

/// Snapshot of the remote game an entry refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteGame {
    /// Remote application identifier.
    pub app_id: u32,
    /// Game name.
    pub name: String,
    /// Current store price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Store genres.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Positive review percentage (0-100).
    #[serde(default)]
    pub rating_percent: Option<u8>,
    /// Epoch seconds of the last play session as reported remotely.
    #[serde(default, deserialize_with = "crate::time::deserialize_lenient_epoch")]
    pub last_played_timestamp: Option<i64>,
}

impl RemoteGame {
    /// Builds a game snapshot from a remote library record.
    pub fn from_record(record: &RemoteRecord) -> Self {
        let name = if record.name.trim().is_empty() {
            format!("App {}", record.app_id)
        } else {
            record.name.trim().to_string()
        };

        Self {
            app_id: record.app_id,
            name,
            price: record.price,
            genres: record.genres.clone(),
            rating_percent: record.rating_percent,
            last_played_timestamp: record.last_played_timestamp,
        }
    }

    /// Refreshes store metadata from a newer remote record.
    ///
    /// Fields the record does not carry are left as they are, and so is a
    /// valid last-played time when the record's is zero or negative.
    pub fn refresh_from(&mut self, record: &RemoteRecord) {
        if !record.name.trim().is_empty() {
            self.name = record.name.trim().to_string();
        }
        if record.price.is_some() {
            self.price = record.price;
        }
        if !record.genres.is_empty() {
            self.genres = record.genres.clone();
        }
        if record.rating_percent.is_some() {
            self.rating_percent = record.rating_percent;
        }
        if instant_from_epoch(record.last_played_timestamp).is_some() {
            self.last_played_timestamp = record.last_played_timestamp;
        }
    }
}

/// A single game in a user's pile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileEntry {
    /// The remote game this entry tracks.
    pub game: RemoteGame,
    /// Status persisted by imports, syncs, and user actions.
    pub status: Status,
    /// Playtime in minutes as of the latest reconciliation.
    #[serde(default)]
    pub playtime_minutes: u32,
    /// When the game was purchased.
    #[serde(default, deserialize_with = "crate::time::deserialize_optional_utc")]
    pub purchase_date: Option<DateTime<Utc>>,
    /// What the user paid.
    #[serde(default)]
    pub purchase_price: Option<f64>,
    /// When the game was marked completed.
    #[serde(default, deserialize_with = "crate::time::deserialize_optional_utc")]
    pub completion_date: Option<DateTime<Utc>>,
    /// When the game was marked abandoned.
    #[serde(default, deserialize_with = "crate::time::deserialize_optional_utc")]
    pub abandon_date: Option<DateTime<Utc>>,
    /// Why the game was abandoned.
    #[serde(default)]
    pub abandon_reason: Option<String>,
    /// When amnesty was granted.
    #[serde(default, deserialize_with = "crate::time::deserialize_optional_utc")]
    pub amnesty_date: Option<DateTime<Utc>>,
    /// Why amnesty was granted.
    #[serde(default)]
    pub amnesty_reason: Option<String>,
    /// When the entry was created.
    #[serde(default, deserialize_with = "crate::time::deserialize_optional_utc")]
    pub created_at: Option<DateTime<Utc>>,
    /// When playtime or status last changed.
    #[serde(default, deserialize_with = "crate::time::deserialize_optional_utc")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PileEntry {
    /// Returns the remote application identifier of the entry.
    #[must_use]
    pub fn app_id(&self) -> u32 {
        self.game.app_id
    }

    /// Returns true if the entry was abandoned by the user rather than by sync.
    #[must_use]
    pub fn is_manually_abandoned(&self) -> bool {
        self.status == Status::Abandoned
            && self
                .abandon_reason
                .as_deref()
                .is_some_and(|reason| !reason.is_empty() && !reason.starts_with(AUTO_ABANDON_PREFIX))
    }

    /// Price used for backlog value: purchase price, then store price, then zero.
    ///
    /// A zero purchase price falls through to the store price.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.purchase_price
            .filter(|price| *price != 0.0)
            .or(self.game.price)
            .unwrap_or(0.0)
    }

    /// Marks the entry as changed at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }

    /// Validates the entry data.
    ///
    /// # Returns
    ///
    /// Ok if the entry is valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The app id is zero
    /// - The game name is empty
    /// - A price is negative or not finite
    /// - A reason exceeds the maximum length
    pub fn validate(&self) -> crate::Result<()> {
        if self.game.app_id == 0 {
            return Err(crate::Error::InvalidEntry(
                "App id cannot be zero".to_string(),
            ));
        }

        if self.game.name.trim().is_empty() {
            return Err(crate::Error::InvalidEntry(format!(
                "Game name cannot be empty (app {})",
                self.game.app_id
            )));
        }

        for price in [self.purchase_price, self.game.price].into_iter().flatten() {
            if !price.is_finite() || price < 0.0 {
                return Err(crate::Error::InvalidEntry(format!(
                    "Price must be a non-negative number, got {} (app {})",
                    price, self.game.app_id
                )));
            }
        }

        if let Some(rating) = self.game.rating_percent {
            if rating > 100 {
                return Err(crate::Error::InvalidEntry(format!(
                    "Rating must be 0-100, got {} (app {})",
                    rating, self.game.app_id
                )));
            }
        }

        for reason in [&self.abandon_reason, &self.amnesty_reason].into_iter().flatten() {
            if reason.chars().count() > MAX_REASON_LEN {
                return Err(crate::Error::InvalidEntry(format!(
                    "Reason exceeds {} characters (app {})",
                    MAX_REASON_LEN, self.game.app_id
                )));
            }
        }

        Ok(())
    }
}
