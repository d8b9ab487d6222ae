// Rust guideline compliant 2026-10-19

//! Unit tests for output formatting module.

use chrono::{TimeZone, Utc};
use pile_app::{PileEntryView, PilePage};
use pile_cli::create_formatter;
use pile_core::{seed_entry, OutputFormat, RemoteRecord, Status, UserRecord};

fn create_test_view() -> PileEntryView {
    let record = RemoteRecord {
        app_id: 570,
        name: "Dota 2".to_string(),
        playtime_minutes: 90,
        last_played_timestamp: None,
        price: Some(19.99),
        genres: vec!["Strategy".to_string()],
        rating_percent: Some(88),
    };
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut entry = seed_entry(&record, now);
    entry.abandon_reason = Some("Too competitive".to_string());
    PileEntryView::new(&entry, Status::Abandoned)
}

fn create_test_page() -> PilePage {
    PilePage {
        entries: vec![create_test_view()],
        total: 3,
        offset: 1,
        limit: 1,
    }
}

#[test]
fn test_json_formatter_entry() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_entry(&create_test_view());

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["app_id"], 570);
    assert_eq!(value["result"]["status"], "abandoned");
    assert_eq!(value["result"]["stored_status"], "playing");
}

#[test]
fn test_json_formatter_page() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_page(&create_test_page());

    assert!(output.contains("Dota 2"));
    assert!(output.contains("\"total\": 3"));
}

#[test]
fn test_json_formatter_error() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_error("Test error message");

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["message"], "Test error message");
}

#[test]
fn test_table_formatter_entry_shows_both_statuses() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_entry(&create_test_view());

    assert!(output.contains("Dota 2"));
    assert!(output.contains("abandoned"));
    assert!(output.contains("playing"));
    assert!(output.contains("1.5 h"));
    assert!(output.contains("$19.99"));
    assert!(output.contains("Too competitive"));
}

#[test]
fn test_table_formatter_page_footer() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_page(&create_test_page());

    assert!(output.contains("88%"));
    assert!(output.contains("Showing 2-2 of 3"));
}

#[test]
fn test_empty_page() {
    let page = PilePage {
        entries: Vec::new(),
        total: 0,
        offset: 0,
        limit: 100,
    };

    for format in [OutputFormat::Table, OutputFormat::Plain] {
        assert_eq!(create_formatter(format).format_page(&page), "No games found.");
    }
}

#[test]
fn test_plain_formatter_page() {
    let formatter = create_formatter(OutputFormat::Plain);
    let output = formatter.format_page(&create_test_page());

    assert_eq!(output, "570 abandoned 90 Dota 2\n");
}

#[test]
fn test_plain_formatter_user() {
    let formatter = create_formatter(OutputFormat::Plain);
    let user = UserRecord::new("76561198000000001".to_string());

    assert_eq!(formatter.format_user(&user), "76561198000000001 - 0.0");
}

#[test]
fn test_error_formatting() {
    for format in [OutputFormat::Table, OutputFormat::Plain] {
        let output = create_formatter(format).format_error("boom");
        assert_eq!(output, "Error: boom");
    }
}
