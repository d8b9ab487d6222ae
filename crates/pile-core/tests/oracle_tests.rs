// Rust guideline compliant 2026-10-19

//! Unit tests for effective status derivation.
//!
//! These tests validate specific examples, edge cases, and the priority
//! order of activity sources.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pile_core::oracle::missing_activity_instant;
use pile_core::{effective_status, effective_statuses, reference_activity};
use pile_core::{ActivitySource, PileEntry, RemoteGame, Status};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

/// Helper to create a test entry with no local timestamps.
fn create_test_entry(status: Status, playtime: u32, last_played: Option<i64>) -> PileEntry {
    PileEntry {
        game: RemoteGame {
            app_id: 440,
            name: "Team Fortress 2".to_string(),
            price: Some(9.99),
            genres: vec!["Action".to_string()],
            rating_percent: Some(93),
            last_played_timestamp: last_played,
        },
        status,
        playtime_minutes: playtime,
        purchase_date: None,
        purchase_price: None,
        completion_date: None,
        abandon_date: None,
        abandon_reason: None,
        amnesty_date: None,
        amnesty_reason: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_stale_unplayed_without_remote_activity_is_abandoned() {
    let mut entry = create_test_entry(Status::Unplayed, 0, None);
    entry.updated_at = Some(days_ago(120));

    assert_eq!(effective_status(&entry, now()), Status::Abandoned);
    assert_eq!(entry.status, Status::Unplayed, "derivation must not mutate");
}

#[test]
fn test_recent_remote_activity_keeps_playing() {
    let entry = create_test_entry(Status::Playing, 300, Some(days_ago(5).timestamp()));
    assert_eq!(effective_status(&entry, now()), Status::Playing);
}

#[test]
fn test_auto_abandoned_stays_abandoned_with_recent_activity() {
    let mut entry = create_test_entry(Status::Abandoned, 120, Some(days_ago(1).timestamp()));
    entry.abandon_reason = Some(
        "Automatically detected during sync - no recent activity (using Remote data)".to_string(),
    );

    assert_eq!(effective_status(&entry, now()), Status::Abandoned);
}

#[test]
fn test_manual_abandon_is_honored_regardless_of_recency() {
    let mut entry = create_test_entry(Status::Abandoned, 0, Some(days_ago(1).timestamp()));
    entry.abandon_reason = Some("Not my genre".to_string());
    entry.updated_at = Some(now());

    assert!(entry.is_manually_abandoned());
    assert_eq!(effective_status(&entry, now()), Status::Abandoned);
}

#[test]
fn test_terminal_statuses_never_overridden() {
    for status in [Status::Completed, Status::AmnestyGranted] {
        for playtime in [0, 500] {
            let entry = create_test_entry(status, playtime, None);
            assert_eq!(effective_status(&entry, now()), status);
        }
    }
}

#[test]
fn test_non_positive_remote_timestamp_falls_through_to_local() {
    for bogus in [0, -1, -1_700_000_000] {
        let mut entry = create_test_entry(Status::Playing, 60, Some(bogus));
        entry.updated_at = Some(days_ago(10));

        let (instant, source) = reference_activity(&entry, entry.game.last_played_timestamp, now());
        assert_eq!(source, ActivitySource::Local);
        assert_eq!(instant, days_ago(10));
        assert_eq!(effective_status(&entry, now()), Status::Playing);
    }
}

#[test]
fn test_reference_priority_order() {
    let mut entry = create_test_entry(Status::Playing, 10, None);
    entry.created_at = Some(days_ago(300));
    assert_eq!(reference_activity(&entry, None, now()).0, days_ago(300));

    entry.updated_at = Some(days_ago(20));
    assert_eq!(reference_activity(&entry, None, now()).0, days_ago(20));

    let remote = days_ago(200).timestamp();
    let (instant, source) = reference_activity(&entry, Some(remote), now());
    assert_eq!(instant.timestamp(), remote);
    assert_eq!(source, ActivitySource::Remote);
}

#[test]
fn test_remote_timestamp_wins_even_when_older() {
    let mut entry = create_test_entry(Status::Playing, 10, Some(days_ago(200).timestamp()));
    entry.updated_at = Some(days_ago(1));

    assert_eq!(effective_status(&entry, now()), Status::Abandoned);
}

#[test]
fn test_missing_activity_uses_sentinel() {
    let entry = create_test_entry(Status::Unplayed, 0, None);
    let (instant, source) = reference_activity(&entry, None, now());

    assert_eq!(instant, missing_activity_instant(now()));
    assert_eq!(source, ActivitySource::Local);
    assert_eq!(effective_status(&entry, now()), Status::Abandoned);
}

#[test]
fn test_threshold_boundary_is_strict() {
    let mut entry = create_test_entry(Status::Unplayed, 0, None);
    entry.updated_at = Some(days_ago(90));
    assert_eq!(effective_status(&entry, now()), Status::Unplayed);

    entry.updated_at = Some(days_ago(90) - Duration::seconds(1));
    assert_eq!(effective_status(&entry, now()), Status::Abandoned);
}

#[test]
fn test_playing_without_playtime_is_not_escalated() {
    let mut entry = create_test_entry(Status::Playing, 0, None);
    entry.updated_at = Some(days_ago(400));
    assert_eq!(effective_status(&entry, now()), Status::Playing);
}

#[test]
fn test_effective_statuses_preserves_order_across_parallel_threshold() {
    let mut entries = Vec::new();
    for i in 0..2_500u32 {
        let mut entry = create_test_entry(Status::Unplayed, 0, None);
        entry.game.app_id = i + 1;
        entry.updated_at = Some(if i % 2 == 0 { days_ago(1) } else { days_ago(200) });
        entries.push(entry);
    }

    let statuses = effective_statuses(&entries, now());
    assert_eq!(statuses.len(), entries.len());
    for (i, status) in statuses.iter().enumerate() {
        let expected = if i % 2 == 0 {
            Status::Unplayed
        } else {
            Status::Abandoned
        };
        assert_eq!(*status, expected, "index {}", i);
    }
}
