// Rust guideline compliant 2026-10-19

//! Input validation and sanitization.

use crate::models::MAX_REASON_LEN;
use crate::{Error, Result};

/// Prefix shared by individual-account Steam IDs.
const STEAM_ID_PREFIX: &str = "765611";

/// Length of a 64-bit Steam ID in decimal.
const STEAM_ID_LEN: usize = 17;

/// Largest page a listing may request.
pub const MAX_PAGE_LIMIT: usize = 1_000;

/// Characters stripped from free text before escaping.
const STRIPPED_CHARS: &[char] = &[
    '<', '>', '{', '}', '[', ']', '\\', '|', '`', '~', '@', '#', '$', '%', '^', '&', '*', '(',
    ')', '+', '=', ';', ':', '/', '-',
];

/// Validates a Steam ID and returns it trimmed.
///
/// # Errors
///
/// Returns an error unless the ID is 17 ASCII digits starting with `765611`.
pub fn validate_steam_id(steam_id: &str) -> Result<String> {
    let steam_id = steam_id.trim();
    if steam_id.is_empty() {
        return Err(Error::InvalidSteamId("Steam ID is required".to_string()));
    }

    let well_formed = steam_id.len() == STEAM_ID_LEN
        && steam_id.starts_with(STEAM_ID_PREFIX)
        && steam_id.bytes().all(|b| b.is_ascii_digit());

    if !well_formed {
        return Err(Error::InvalidSteamId(format!(
            "{}: must be a 17-digit number starting with {}",
            steam_id, STEAM_ID_PREFIX
        )));
    }

    Ok(steam_id.to_string())
}

/// Sanitizes free text supplied by a user.
///
/// Whitespace is trimmed, injection-prone characters are removed, and the
/// remainder is HTML-escaped.
///
/// # Arguments
///
/// * `text` - Raw input
/// * `max_len` - Maximum length in characters, checked before sanitizing
///
/// # Errors
///
/// Returns an error if the trimmed input exceeds `max_len` characters.
pub fn sanitize_text(text: &str, max_len: usize) -> Result<String> {
    let text = text.trim();
    if text.chars().count() > max_len {
        return Err(Error::InvalidInput(format!(
            "Text input too long. Maximum {} characters allowed",
            max_len
        )));
    }

    let mut sanitized = String::with_capacity(text.len());
    for ch in text.chars().filter(|ch| !STRIPPED_CHARS.contains(ch)) {
        match ch {
            '"' => sanitized.push_str("&quot;"),
            '\'' => sanitized.push_str("&#x27;"),
            _ => sanitized.push(ch),
        }
    }

    Ok(sanitized)
}

/// Sanitizes an abandon or amnesty reason.
///
/// # Errors
///
/// Returns an error if the reason is too long.
pub fn sanitize_reason(reason: &str) -> Result<String> {
    sanitize_text(reason, MAX_REASON_LEN)
}

/// Validates pagination parameters.
///
/// # Errors
///
/// Returns an error if `limit` is zero or above `MAX_PAGE_LIMIT`.
pub fn validate_pagination(offset: usize, limit: usize) -> Result<(usize, usize)> {
    if limit == 0 {
        return Err(Error::InvalidInput(
            "Limit parameter must be positive".to_string(),
        ));
    }

    if limit > MAX_PAGE_LIMIT {
        return Err(Error::InvalidInput(format!(
            "Limit parameter too large (max {})",
            MAX_PAGE_LIMIT
        )));
    }

    Ok((offset, limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steam_id_valid() {
        assert_eq!(
            validate_steam_id(" 76561198000000001 ").unwrap(),
            "76561198000000001"
        );
        assert!(validate_steam_id("76561197960287930").is_ok());
    }

    #[test]
    fn test_steam_id_invalid() {
        for bad in [
            "",
            "   ",
            "12345",
            "86561198000000001",
            "7656119800000000a",
            "765611980000000011",
            "../../etc/passwd",
        ] {
            assert!(validate_steam_id(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_sanitize_strips_and_escapes() {
        let out = sanitize_text("  <script>alert('hi')</script>  ", 500).unwrap();
        assert_eq!(out, "scriptalert&#x27;hi&#x27;script");

        let out = sanitize_text("Too long, didn't \"finish\"!", 500).unwrap();
        assert_eq!(out, "Too long, didn&#x27;t &quot;finish&quot;!");
    }

    #[test]
    fn test_sanitize_length_limit() {
        let long = "a".repeat(501);
        assert!(sanitize_reason(&long).is_err());
        assert!(sanitize_reason(&"a".repeat(500)).is_ok());
    }

    #[test]
    fn test_pagination_bounds() {
        assert_eq!(validate_pagination(0, 100).unwrap(), (0, 100));
        assert!(validate_pagination(0, 0).is_err());
        assert!(validate_pagination(10, 1_001).is_err());
    }
}
