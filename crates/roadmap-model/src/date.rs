//! Lenient calendar-date decoding
//!
//! The backend sends `YYYY-MM-DD` dates, but older payloads carry full
//! timestamps, `null`, empty strings or the literal `Unknown`. All of these
//! decode to `Option<NaiveDate>`; anything unparseable is treated as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Format used when writing dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a backend date value, returning `None` for missing or unknown dates
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("unknown") || raw.eq_ignore_ascii_case("n/a") {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(ts.date());
    }
    None
}

/// Serde adapter for optional lenient dates
///
/// Use with `#[serde(default, deserialize_with = "date::deserialize_opt")]`.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// Format an optional date for display, with a placeholder for missing dates
#[must_use]
pub fn format_opt(date: Option<NaiveDate>, missing: &str) -> String {
    date.map_or_else(|| missing.to_string(), |d| d.format(DATE_FORMAT).to_string())
}
