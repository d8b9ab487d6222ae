// Rust guideline compliant 2026-10-19

//! Per-user sync cooldown gate.

use crate::error::{AppError, Result};
use chrono::{DateTime, Duration, Utc};
use pile_core::{Config, UserRecord};

/// Rejects imports and syncs that follow a previous one too closely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncGate {
    cooldown: Duration,
}

impl SyncGate {
    /// Creates a gate with the given cooldown in hours (0 disables it).
    #[must_use]
    pub fn new(cooldown_hours: u32) -> Self {
        Self {
            cooldown: Duration::hours(i64::from(cooldown_hours)),
        }
    }

    /// Creates a gate from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sync_cooldown_hours)
    }

    /// Checks whether the user may sync at `now`.
    ///
    /// # Errors
    ///
    /// Returns `RateLimited` with the remaining hours if the last sync is
    /// inside the cooldown window.
    pub fn check(&self, user: &UserRecord, now: DateTime<Utc>) -> Result<()> {
        if self.cooldown <= Duration::zero() {
            return Ok(());
        }

        let Some(last_sync) = user.last_sync_at else {
            return Ok(());
        };

        let next_allowed = last_sync + self.cooldown;
        if now < next_allowed {
            let remaining = next_allowed - now;
            return Err(AppError::RateLimited {
                retry_after_hours: remaining.num_seconds() as f64 / 3600.0,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn user_synced_at(at: Option<DateTime<Utc>>) -> UserRecord {
        let mut user = UserRecord::new("76561198000000001".to_string());
        user.last_sync_at = at;
        user
    }

    #[test]
    fn test_first_sync_allowed() {
        assert!(SyncGate::new(24).check(&user_synced_at(None), now()).is_ok());
    }

    #[test]
    fn test_sync_inside_window_rejected() {
        let user = user_synced_at(Some(now() - Duration::hours(18)));
        match SyncGate::new(24).check(&user, now()) {
            Err(AppError::RateLimited { retry_after_hours }) => {
                assert!((retry_after_hours - 6.0).abs() < 1e-9);
            }
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[test]
    fn test_sync_after_window_allowed() {
        let user = user_synced_at(Some(now() - Duration::hours(24)));
        assert!(SyncGate::new(24).check(&user, now()).is_ok());
    }

    #[test]
    fn test_zero_cooldown_disables_gate() {
        let user = user_synced_at(Some(now()));
        assert!(SyncGate::new(0).check(&user, now()).is_ok());
    }
}
