// Rust guideline compliant 2026-10-19

//! Integration tests for the sync and import services.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pile_app::{clear_pile, AppError, LibrarySource, RepoContext, SyncGate, SyncService};
use pile_core::{OperationKind, OperationState, RemoteRecord, Status};
use std::cell::RefCell;
use tempfile::TempDir;

const STEAM_ID: &str = "76561198000000001";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// In-memory library that can be swapped between calls or made to fail.
struct FakeLibrary {
    records: RefCell<Vec<RemoteRecord>>,
    fail: RefCell<bool>,
}

impl FakeLibrary {
    fn new(records: Vec<RemoteRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            fail: RefCell::new(false),
        }
    }
}

impl LibrarySource for FakeLibrary {
    fn fetch_remote_library(&self, _steam_id: &str) -> pile_app::Result<Vec<RemoteRecord>> {
        if *self.fail.borrow() {
            return Err(AppError::Fetch("connection reset".to_string()));
        }
        Ok(self.records.borrow().clone())
    }
}

fn record(app_id: u32, playtime: u32, last_played: Option<DateTime<Utc>>) -> RemoteRecord {
    RemoteRecord {
        app_id,
        name: format!("Game {}", app_id),
        playtime_minutes: playtime,
        last_played_timestamp: last_played.map(|at| at.timestamp()),
        price: Some(10.0),
        genres: vec!["Indie".to_string()],
        rating_percent: None,
    }
}

fn setup() -> (TempDir, RepoContext) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (repo, _) = RepoContext::init(Some(temp_dir.path())).expect("Failed to init");
    (temp_dir, repo)
}

#[test]
fn test_import_then_sync_flow() {
    let (_temp_dir, repo) = setup();
    let library = FakeLibrary::new(vec![
        record(1, 0, None),
        record(2, 42, Some(now() - Duration::days(2))),
    ]);
    let service = SyncService::new(&repo, &library, SyncGate::new(0));

    let imported = service.import(STEAM_ID, now()).unwrap();
    assert_eq!(imported.kind, OperationKind::Import);
    assert_eq!(imported.records_fetched, 2);
    assert_eq!(imported.counts.created, 2);
    assert_eq!(imported.total_games, 2);

    let storage = repo.open_storage(STEAM_ID).unwrap();
    assert_eq!(storage.find(1).unwrap().status, Status::Unplayed);
    assert_eq!(storage.find(2).unwrap().status, Status::Playing);

    // 100 days later game 2 has not moved and game 1 was never touched.
    let later = now() + Duration::days(100);
    let synced = service.sync(STEAM_ID, later).unwrap();
    assert_eq!(synced.counts.checked_count, 2);
    assert_eq!(synced.counts.updated_count, 0);
    assert_eq!(synced.counts.abandoned_count, 2);

    let game2 = storage.find(2).unwrap();
    assert_eq!(game2.status, Status::Abandoned);
    assert!(game2
        .abandon_reason
        .as_deref()
        .unwrap()
        .contains("using Remote data"));
    let game1 = storage.find(1).unwrap();
    assert!(game1
        .abandon_reason
        .as_deref()
        .unwrap()
        .contains("using Local data"));

    let user = repo.users().get(STEAM_ID).unwrap();
    assert_eq!(user.last_sync_at, Some(later));
    let operation = user.last_operation.unwrap();
    assert_eq!(operation.kind, OperationKind::Sync);
    assert_eq!(operation.state, OperationState::Completed);
    assert_eq!(operation.progress_total, 2);
}

#[test]
fn test_sync_ignores_unknown_games() {
    let (_temp_dir, repo) = setup();
    let library = FakeLibrary::new(vec![record(1, 10, Some(now()))]);
    let service = SyncService::new(&repo, &library, SyncGate::new(0));
    service.import(STEAM_ID, now()).unwrap();

    *library.records.borrow_mut() = vec![record(1, 30, Some(now())), record(99, 5, Some(now()))];
    let synced = service.sync(STEAM_ID, now()).unwrap();

    assert_eq!(synced.counts.checked_count, 1);
    assert_eq!(synced.counts.updated_count, 1);
    assert_eq!(synced.total_games, 1);
    let storage = repo.open_storage(STEAM_ID).unwrap();
    assert_eq!(storage.find(1).unwrap().playtime_minutes, 30);
    assert!(storage.find(99).is_err());
}

#[test]
fn test_cooldown_rejects_second_sync() {
    let (_temp_dir, repo) = setup();
    let library = FakeLibrary::new(vec![record(1, 0, None)]);
    let service = SyncService::new(&repo, &library, SyncGate::new(24));

    service.import(STEAM_ID, now()).unwrap();
    let err = service
        .sync(STEAM_ID, now() + Duration::hours(1))
        .unwrap_err();
    match err {
        AppError::RateLimited { retry_after_hours } => {
            assert!((retry_after_hours - 23.0).abs() < 1e-9)
        }
        other => panic!("expected RateLimited, got {:?}", other),
    }

    assert!(service.sync(STEAM_ID, now() + Duration::hours(25)).is_ok());
}

#[test]
fn test_fetch_failure_is_a_recorded_no_op() {
    let (_temp_dir, repo) = setup();
    let library = FakeLibrary::new(vec![record(1, 0, Some(now()))]);
    let service = SyncService::new(&repo, &library, SyncGate::new(24));
    service.import(STEAM_ID, now() - Duration::days(2)).unwrap();
    let before = repo.open_storage(STEAM_ID).unwrap().load_all().unwrap();

    *library.fail.borrow_mut() = true;
    let report = service.sync(STEAM_ID, now()).unwrap();

    assert_eq!(report.records_fetched, 0);
    assert_eq!(report.counts.checked_count, 0);
    assert!(report.fetch_error.unwrap().contains("connection reset"));
    assert_eq!(repo.open_storage(STEAM_ID).unwrap().load_all().unwrap(), before);

    let user = repo.users().get(STEAM_ID).unwrap();
    assert_eq!(user.last_sync_at, Some(now() - Duration::days(2)));
    let operation = user.last_operation.unwrap();
    assert_eq!(operation.state, OperationState::Failed);
    assert!(operation.error_message.is_some());

    // A failed fetch does not start a new cooldown window.
    *library.fail.borrow_mut() = false;
    assert!(service.sync(STEAM_ID, now()).is_ok());
}

#[test]
fn test_corrupt_pile_fails_without_writing() {
    let (_temp_dir, repo) = setup();
    let library = FakeLibrary::new(vec![record(1, 0, None)]);
    let service = SyncService::new(&repo, &library, SyncGate::new(0));

    let storage = repo.open_storage(STEAM_ID).unwrap();
    std::fs::write(storage.path(), "{\"game\":{\"app_id\":1,\"name\":\"A\"},\"status\":\"shelved\"}\n").unwrap();

    let err = service.sync(STEAM_ID, now()).unwrap_err();
    assert_eq!(err.code(), pile_app::ErrorCode::ValidationError);

    let content = std::fs::read_to_string(storage.path()).unwrap();
    assert!(content.contains("shelved"), "corrupt pile left untouched");

    let operation = repo.users().get(STEAM_ID).unwrap().last_operation.unwrap();
    assert_eq!(operation.state, OperationState::Failed);
}

#[test]
fn test_invalid_steam_id_rejected() {
    let (_temp_dir, repo) = setup();
    let library = FakeLibrary::new(Vec::new());
    let service = SyncService::new(&repo, &library, SyncGate::new(0));

    let err = service.import("not-a-steam-id", now()).unwrap_err();
    assert_eq!(err.code(), pile_app::ErrorCode::InvalidSteamId);
}

#[test]
fn test_clear_pile_resets_sync_state() {
    let (_temp_dir, repo) = setup();
    let library = FakeLibrary::new(vec![record(1, 0, None), record(2, 5, None)]);
    let service = SyncService::new(&repo, &library, SyncGate::new(24));
    service.import(STEAM_ID, now()).unwrap();

    assert_eq!(clear_pile(&repo, STEAM_ID).unwrap(), 2);
    assert!(repo.open_storage(STEAM_ID).unwrap().load_all().unwrap().is_empty());

    let user = repo.users().get(STEAM_ID).unwrap();
    assert!(user.last_sync_at.is_none());

    // Cleared users may import again right away.
    assert!(service.import(STEAM_ID, now()).is_ok());
}
