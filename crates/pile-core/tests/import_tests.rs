// Rust guideline compliant 2026-10-19

//! Unit tests for import-time seeding.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pile_core::{effective_status, import_library, seed_entry, RemoteRecord, Status};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn record(app_id: u32, name: &str, playtime: u32) -> RemoteRecord {
    RemoteRecord {
        app_id,
        name: name.to_string(),
        playtime_minutes: playtime,
        last_played_timestamp: None,
        price: Some(19.99),
        genres: vec!["Indie".to_string()],
        rating_percent: Some(88),
    }
}

#[test]
fn test_seed_status_follows_playtime() {
    let unplayed = seed_entry(&record(1, "Celeste", 0), now());
    assert_eq!(unplayed.status, Status::Unplayed);
    assert_eq!(unplayed.playtime_minutes, 0);

    let playing = seed_entry(&record(2, "Hades", 42), now());
    assert_eq!(playing.status, Status::Playing);
    assert_eq!(playing.playtime_minutes, 42);
}

#[test]
fn test_seed_populates_metadata_and_timestamps() {
    let entry = seed_entry(&record(3, "  Outer Wilds  ", 0), now());

    assert_eq!(entry.game.name, "Outer Wilds");
    assert_eq!(entry.purchase_price, Some(19.99));
    assert_eq!(entry.game.rating_percent, Some(88));
    assert_eq!(entry.created_at, Some(now()));
    assert_eq!(entry.updated_at, Some(now()));
    assert!(entry.abandon_reason.is_none());
    assert!(entry.validate().is_ok());
}

#[test]
fn test_seed_names_nameless_games() {
    let entry = seed_entry(&record(4, "", 0), now());
    assert_eq!(entry.game.name, "App 4");
}

#[test]
fn test_seed_never_abandons_stale_games() {
    let mut stale = record(5, "Old Game", 120);
    stale.last_played_timestamp = Some((now() - Duration::days(800)).timestamp());

    let mut entries = Vec::new();
    let result = import_library(&mut entries, &[stale], now());

    assert_eq!(result.created, 1);
    assert_eq!(entries[0].status, Status::Playing);
}

#[test]
fn test_import_refreshes_existing_entries() {
    let earlier = now() - Duration::days(30);
    let mut entries = vec![seed_entry(&record(1, "Celeste", 0), earlier)];
    entries[0].mark_completed(earlier);

    let mut refreshed = record(1, "Celeste (Chapter 9)", 300);
    refreshed.price = Some(4.99);
    let records = vec![refreshed, record(2, "Hades", 0)];

    let result = import_library(&mut entries, &records, now());

    assert_eq!(result.created, 1);
    assert_eq!(result.refreshed, 1);
    assert_eq!(result.unchanged, 0);
    assert_eq!(entries.len(), 2);

    let existing = &entries[0];
    assert_eq!(existing.status, Status::Completed);
    assert_eq!(existing.playtime_minutes, 300);
    assert_eq!(existing.game.name, "Celeste (Chapter 9)");
    assert_eq!(existing.game.price, Some(4.99));
    assert_eq!(existing.purchase_price, Some(19.99));
    assert_eq!(existing.updated_at, Some(now()));
}

#[test]
fn test_import_unchanged_playtime_keeps_updated_at() {
    let earlier = now() - Duration::days(30);
    let mut entries = vec![seed_entry(&record(1, "Celeste", 10), earlier)];

    let result = import_library(&mut entries, &[record(1, "Celeste", 10)], now());

    assert_eq!(result.unchanged, 1);
    assert_eq!(entries[0].updated_at, Some(earlier));
}

#[test]
fn test_import_skips_zero_ids_and_duplicates() {
    let mut entries = Vec::new();
    let records = vec![
        record(0, "Broken", 0),
        record(9, "Twice", 0),
        record(9, "Twice", 15),
    ];

    let result = import_library(&mut entries, &records, now());

    assert_eq!(entries.len(), 1);
    assert_eq!(result.created, 1);
    assert_eq!(result.refreshed, 1);
    assert_eq!(entries[0].playtime_minutes, 15);
}

#[test]
fn test_import_zero_timestamp_keeps_valid_snapshot() {
    let known = (now() - Duration::days(5)).timestamp();
    let mut entries = vec![seed_entry(&record(10, "Hades", 100), now() - Duration::days(200))];
    entries[0].game.last_played_timestamp = Some(known);
    assert_eq!(effective_status(&entries[0], now()), Status::Playing);

    let mut hidden = record(10, "Hades", 100);
    hidden.last_played_timestamp = Some(0);
    import_library(&mut entries, &[hidden], now());

    assert_eq!(entries[0].game.last_played_timestamp, Some(known));
    assert_eq!(effective_status(&entries[0], now()), Status::Playing);
}

#[test]
fn test_import_adopts_newer_valid_timestamp() {
    let mut entries = vec![seed_entry(&record(11, "Celeste", 30), now() - Duration::days(20))];
    let fresh = (now() - Duration::days(1)).timestamp();

    let mut played = record(11, "Celeste", 30);
    played.last_played_timestamp = Some(fresh);
    import_library(&mut entries, &[played], now());

    assert_eq!(entries[0].game.last_played_timestamp, Some(fresh));
}
