// Rust guideline compliant 2026-10-19

//! Output formatting module for the Pile CLI.
//!
//! This module provides functionality for formatting pile data
//! in various output formats (JSON, table, plain text).

use chrono::{DateTime, Utc};
use pile_app::{ErrorEnvelope, OperationReport, PileEntryView, PilePage, SuccessEnvelope};
use pile_core::{
    BehavioralInsights, ImportResult, RealityCheck, ReconcileResult, ShameScore, UserRecord,
};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting pile data in different output formats.
pub trait OutputFormatter {
    /// Formats a single entry for display.
    fn format_entry(&self, entry: &PileEntryView) -> String;

    /// Formats one page of a listing.
    fn format_page(&self, page: &PilePage) -> String;

    /// Formats an import report.
    fn format_import(&self, report: &OperationReport<ImportResult>) -> String;

    /// Formats a sync report.
    fn format_sync(&self, report: &OperationReport<ReconcileResult>) -> String;

    /// Formats a reality check.
    fn format_reality(&self, reality: &RealityCheck) -> String;

    /// Formats a shame score.
    fn format_shame(&self, shame: &ShameScore) -> String;

    /// Formats behavioral insights.
    fn format_insights(&self, insights: &BehavioralInsights) -> String;

    /// Formats a user record.
    fn format_user(&self, user: &UserRecord) -> String;

    /// Formats a short confirmation with its structured payload.
    fn format_message(&self, message: &str, payload: serde_json::Value) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn format_time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_money(value: Option<f64>) -> String {
    value
        .map(|price| format!("${:.2}", price))
        .unwrap_or_else(|| "-".to_string())
}

fn key_value_table(rows: Vec<(&str, String)>) -> String {
    let mut builder = Builder::default();
    for (key, value) in rows {
        builder.push_record(vec![key.to_string(), value]);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// JSON output formatter.
///
/// Wraps every payload in a success envelope for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(value: &T) -> String {
        SuccessEnvelope::new(value).to_json()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_entry(&self, entry: &PileEntryView) -> String {
        Self::envelope(entry)
    }

    fn format_page(&self, page: &PilePage) -> String {
        Self::envelope(page)
    }

    fn format_import(&self, report: &OperationReport<ImportResult>) -> String {
        Self::envelope(report)
    }

    fn format_sync(&self, report: &OperationReport<ReconcileResult>) -> String {
        Self::envelope(report)
    }

    fn format_reality(&self, reality: &RealityCheck) -> String {
        Self::envelope(reality)
    }

    fn format_shame(&self, shame: &ShameScore) -> String {
        Self::envelope(shame)
    }

    fn format_insights(&self, insights: &BehavioralInsights) -> String {
        Self::envelope(insights)
    }

    fn format_user(&self, user: &UserRecord) -> String {
        Self::envelope(user)
    }

    fn format_message(&self, _message: &str, payload: serde_json::Value) -> String {
        Self::envelope(&payload)
    }

    fn format_error(&self, error: &str) -> String {
        ErrorEnvelope::from_message(error).to_json()
    }
}

/// Table output formatter.
///
/// Formats pile data as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_entry(&self, entry: &PileEntryView) -> String {
        let mut rows = vec![
            ("App ID", entry.app_id.to_string()),
            ("Name", entry.name.clone()),
            ("Status", entry.status.to_string()),
            ("Stored status", entry.stored_status.to_string()),
            ("Playtime", format!("{:.1} h", entry.playtime_hours())),
            ("Purchased", format_time(entry.purchase_date)),
            ("Price", format_money(entry.purchase_price.or(entry.game.price))),
            ("Created", format_time(entry.created_at)),
            ("Updated", format_time(entry.updated_at)),
        ];
        if !entry.game.genres.is_empty() {
            rows.push(("Genres", entry.game.genres.join(", ")));
        }
        if let Some(rating) = entry.game.rating_percent {
            rows.push(("Rating", format!("{}%", rating)));
        }
        if entry.completion_date.is_some() {
            rows.push(("Completed", format_time(entry.completion_date)));
        }
        if entry.abandon_date.is_some() || entry.abandon_reason.is_some() {
            rows.push(("Abandoned", format_time(entry.abandon_date)));
            rows.push((
                "Abandon reason",
                entry.abandon_reason.clone().unwrap_or_else(|| "-".to_string()),
            ));
        }
        if entry.amnesty_date.is_some() {
            rows.push(("Amnesty", format_time(entry.amnesty_date)));
            rows.push((
                "Amnesty reason",
                entry.amnesty_reason.clone().unwrap_or_else(|| "-".to_string()),
            ));
        }
        key_value_table(rows)
    }

    fn format_page(&self, page: &PilePage) -> String {
        if page.entries.is_empty() {
            return "No games found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["App ID", "Status", "Playtime (h)", "Rating", "Name"]);

        for entry in &page.entries {
            builder.push_record(vec![
                entry.app_id.to_string(),
                entry.status.to_string(),
                format!("{:.1}", entry.playtime_hours()),
                entry
                    .game
                    .rating_percent
                    .map(|rating| format!("{}%", rating))
                    .unwrap_or_else(|| "-".to_string()),
                entry.name.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!(
            "{}\nShowing {}-{} of {}",
            table,
            page.offset + 1,
            page.offset + page.entries.len(),
            page.total
        )
    }

    fn format_import(&self, report: &OperationReport<ImportResult>) -> String {
        let mut rows = vec![
            ("Steam ID", report.steam_id.clone()),
            ("Records fetched", report.records_fetched.to_string()),
            ("Created", report.counts.created.to_string()),
            ("Refreshed", report.counts.refreshed.to_string()),
            ("Unchanged", report.counts.unchanged.to_string()),
            ("Total games", report.total_games.to_string()),
            ("Shame score", format!("{:.1}", report.shame_score)),
        ];
        if let Some(error) = &report.fetch_error {
            rows.push(("Fetch error", error.clone()));
        }
        key_value_table(rows)
    }

    fn format_sync(&self, report: &OperationReport<ReconcileResult>) -> String {
        let mut rows = vec![
            ("Steam ID", report.steam_id.clone()),
            ("Records fetched", report.records_fetched.to_string()),
            ("Checked", report.counts.checked_count.to_string()),
            ("Updated", report.counts.updated_count.to_string()),
            ("Abandoned", report.counts.abandoned_count.to_string()),
            ("Total games", report.total_games.to_string()),
            ("Shame score", format!("{:.1}", report.shame_score)),
        ];
        if let Some(error) = &report.fetch_error {
            rows.push(("Fetch error", error.clone()));
        }
        key_value_table(rows)
    }

    fn format_reality(&self, reality: &RealityCheck) -> String {
        key_value_table(vec![
            ("Total games", reality.total_games.to_string()),
            ("Unplayed games", reality.unplayed_games.to_string()),
            ("Years to finish", format!("{:.1}", reality.completion_years)),
            ("Money wasted", format_money(Some(reality.money_wasted))),
            (
                "Most expensive unplayed",
                reality
                    .most_expensive_unplayed
                    .as_ref()
                    .map(|game| format!("{} ({})", game.name, format_money(Some(game.price))))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Oldest unplayed",
                reality
                    .oldest_unplayed
                    .as_ref()
                    .map(|game| format!("{} ({})", game.name, game.purchase_date.format("%Y-%m-%d")))
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ])
    }

    fn format_shame(&self, shame: &ShameScore) -> String {
        key_value_table(vec![
            ("Score", format!("{:.1}", shame.score)),
            ("Rank", shame.rank.title().to_string()),
            ("Unplayed games", format!("{:.1}", shame.breakdown.unplayed_games)),
            ("Money wasted", format!("{:.1}", shame.breakdown.money_wasted)),
            ("Time to complete", format!("{:.1}", shame.breakdown.time_to_complete)),
            ("Never played", format!("{:.1}", shame.breakdown.never_played)),
            ("Verdict", shame.message.clone()),
        ])
    }

    fn format_insights(&self, insights: &BehavioralInsights) -> String {
        let genres = insights
            .genre_preferences
            .iter()
            .map(|g| format!("{} ({})", g.genre, g.count))
            .collect::<Vec<_>>()
            .join(", ");
        key_value_table(vec![
            ("Completion rate", format!("{:.1}%", insights.completion_rate)),
            ("Top genres", if genres.is_empty() { "-".to_string() } else { genres }),
            (
                "Most neglected genre",
                insights
                    .most_neglected_genre
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ("Buying patterns", insights.buying_patterns.join("\n")),
            ("Recommendations", insights.recommendations.join("\n")),
        ])
    }

    fn format_user(&self, user: &UserRecord) -> String {
        let mut rows = vec![
            ("Steam ID", user.steam_id.clone()),
            ("Username", user.username.clone()),
            ("Last sync", format_time(user.last_sync_at)),
            ("Shame score", format!("{:.1}", user.shame_score)),
        ];
        if let Some(operation) = &user.last_operation {
            rows.push((
                "Last operation",
                format!(
                    "{:?} {:?} ({} records) at {}",
                    operation.kind,
                    operation.state,
                    operation.progress_total,
                    format_time(Some(operation.completed_at))
                ),
            ));
            if let Some(error) = &operation.error_message {
                rows.push(("Error", error.clone()));
            }
        }
        key_value_table(rows)
    }

    fn format_message(&self, message: &str, _payload: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// Formats pile data as simple plain text without tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_entry(&self, entry: &PileEntryView) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", entry.app_id));
        output.push_str(&format!("{}\n", entry.name));
        output.push_str(&format!("{}\n", entry.status));
        output.push_str(&format!("{}\n", entry.playtime_minutes));
        if let Some(reason) = &entry.abandon_reason {
            output.push_str(&format!("{}\n", reason));
        }
        output
    }

    fn format_page(&self, page: &PilePage) -> String {
        if page.entries.is_empty() {
            return "No games found.".to_string();
        }

        let mut output = String::new();
        for entry in &page.entries {
            output.push_str(&format!(
                "{} {} {} {}\n",
                entry.app_id, entry.status, entry.playtime_minutes, entry.name
            ));
        }
        output
    }

    fn format_import(&self, report: &OperationReport<ImportResult>) -> String {
        format!(
            "created={} refreshed={} unchanged={} total={}",
            report.counts.created, report.counts.refreshed, report.counts.unchanged, report.total_games
        )
    }

    fn format_sync(&self, report: &OperationReport<ReconcileResult>) -> String {
        format!(
            "checked={} updated={} abandoned={} total={}",
            report.counts.checked_count,
            report.counts.updated_count,
            report.counts.abandoned_count,
            report.total_games
        )
    }

    fn format_reality(&self, reality: &RealityCheck) -> String {
        format!(
            "total={} unplayed={} years={:.1} wasted={:.2}",
            reality.total_games, reality.unplayed_games, reality.completion_years, reality.money_wasted
        )
    }

    fn format_shame(&self, shame: &ShameScore) -> String {
        format!("{:.1} {}\n{}", shame.score, shame.rank.title(), shame.message)
    }

    fn format_insights(&self, insights: &BehavioralInsights) -> String {
        let mut output = format!("completion_rate={:.1}\n", insights.completion_rate);
        for line in insights.buying_patterns.iter().chain(&insights.recommendations) {
            output.push_str(&format!("{}\n", line));
        }
        output
    }

    fn format_user(&self, user: &UserRecord) -> String {
        format!(
            "{} {} {:.1}",
            user.steam_id,
            format_time(user.last_sync_at),
            user.shame_score
        )
    }

    fn format_message(&self, message: &str, _payload: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: pile_core::OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        pile_core::OutputFormat::Json => Box::new(JsonFormatter),
        pile_core::OutputFormat::Table => Box::new(TableFormatter),
        pile_core::OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
