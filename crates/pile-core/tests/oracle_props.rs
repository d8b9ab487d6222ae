// Rust guideline compliant 2026-10-19

//! Property-based tests for effective status derivation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pile_core::{effective_status, PileEntry, RemoteGame, Status};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Generates arbitrary Status values.
fn arb_status() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

/// Generates an optional age in seconds, up to two years.
fn arb_age() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(0i64..(2 * 365 * 86_400))
}

fn build_entry(
    status: Status,
    playtime: u32,
    remote_age: Option<i64>,
    updated_age: Option<i64>,
    created_age: Option<i64>,
    abandon_reason: Option<String>,
) -> PileEntry {
    PileEntry {
        game: RemoteGame {
            app_id: 570,
            name: "Dota 2".to_string(),
            price: None,
            genres: Vec::new(),
            rating_percent: None,
            last_played_timestamp: remote_age.map(|age| (now() - Duration::seconds(age)).timestamp()),
        },
        status,
        playtime_minutes: playtime,
        purchase_date: None,
        purchase_price: None,
        completion_date: None,
        abandon_date: None,
        abandon_reason,
        amnesty_date: None,
        amnesty_reason: None,
        created_at: created_age.map(|age| now() - Duration::seconds(age)),
        updated_at: updated_age.map(|age| now() - Duration::seconds(age)),
    }
}

proptest! {
    /// Completed and AmnestyGranted are never overridden.
    #[test]
    fn prop_terminal_statuses_are_stable(
        terminal in prop::sample::select(vec![Status::Completed, Status::AmnestyGranted]),
        playtime in 0u32..100_000,
        remote in arb_age(),
        updated in arb_age(),
        created in arb_age(),
    ) {
        let entry = build_entry(terminal, playtime, remote, updated, created, None);
        prop_assert_eq!(effective_status(&entry, now()), terminal);
    }

    /// A manual abandonment stays Abandoned regardless of recency.
    #[test]
    fn prop_manual_abandon_is_stable(
        playtime in 0u32..100_000,
        remote in arb_age(),
        updated in arb_age(),
        reason in "[a-zA-Z ]{1,40}",
    ) {
        prop_assume!(!reason.starts_with("Automatically detected"));
        let entry = build_entry(Status::Abandoned, playtime, remote, updated, None, Some(reason));
        prop_assert_eq!(effective_status(&entry, now()), Status::Abandoned);
    }

    /// Never-played Unplayed games with stale activity are Abandoned.
    #[test]
    fn prop_stale_unplayed_is_abandoned(
        extra_age in 1i64..(365 * 86_400),
        use_remote in any::<bool>(),
    ) {
        let age = 90 * 86_400 + extra_age;
        let entry = if use_remote {
            build_entry(Status::Unplayed, 0, Some(age), None, None, None)
        } else {
            build_entry(Status::Unplayed, 0, None, Some(age), None, None)
        };
        prop_assert_eq!(effective_status(&entry, now()), Status::Abandoned);
    }

    /// Games with playtime and recent activity keep their stored status.
    #[test]
    fn prop_recent_activity_keeps_stored_status(
        status in prop::sample::select(vec![Status::Unplayed, Status::Playing]),
        playtime in 1u32..100_000,
        age in 0i64..(90 * 86_400),
    ) {
        let entry = build_entry(status, playtime, Some(age), None, None, None);
        prop_assert_eq!(effective_status(&entry, now()), status);
    }

    /// Derivation only ever moves within Unplayed, Playing, and Abandoned,
    /// and only towards Abandoned.
    #[test]
    fn prop_derivation_only_escalates(
        status in arb_status(),
        playtime in 0u32..100_000,
        remote in arb_age(),
        updated in arb_age(),
        created in arb_age(),
    ) {
        let entry = build_entry(status, playtime, remote, updated, created, None);
        let effective = effective_status(&entry, now());
        prop_assert!(effective == status || effective == Status::Abandoned);
        if status.is_terminal() {
            prop_assert_eq!(effective, status);
        }
    }
}
