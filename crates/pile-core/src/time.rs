// Rust guideline compliant 2026-10-19

//! Timestamp helpers for Pile.
//!
//! Stored timestamps are always UTC. Values written without an offset are
//! read as UTC, never as local time. Remote last-played values are epoch
//! seconds and are only meaningful when positive.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Offset-less layouts accepted when reading stored timestamps.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a timestamp string as a UTC instant.
///
/// RFC 3339 values keep their offset and are normalized to UTC. Values
/// without offset information are interpreted as UTC.
///
/// # Arguments
///
/// * `value` - The timestamp text
///
/// # Returns
///
/// The UTC instant, or None if the text is not a recognized timestamp.
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Converts a remote last-played value into a UTC instant.
///
/// Zero, negative, and out-of-range values are treated as absent rather
/// than as the Unix epoch.
pub fn instant_from_epoch(timestamp: Option<i64>) -> Option<DateTime<Utc>> {
    timestamp
        .filter(|secs| *secs > 0)
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
}

/// Deserializes a required stored timestamp, accepting offset-less values as UTC.
///
/// # Errors
///
/// Returns an error if the value is not a recognized timestamp.
pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_utc(&text).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {text}")))
}

/// Deserializes an optional stored timestamp, accepting offset-less values as UTC.
///
/// # Errors
///
/// Returns an error if a non-null value is not a recognized timestamp.
pub fn deserialize_optional_utc<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) => parse_utc(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {text}"))),
    }
}

/// Deserializes a remote last-played value leniently.
///
/// Integers and numeric strings are accepted. Anything that cannot be read
/// as an integer (floats with a fraction, booleans, garbage text) decodes as
/// absent instead of failing the whole record.
pub fn deserialize_lenient_epoch<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0 && value.abs() < i64::MAX as f64)
                .map(|value| value as i64)
        }),
        Some(serde_json::Value::String(text)) => text.trim().parse::<i64>().ok(),
        _ => None,
    })
}
