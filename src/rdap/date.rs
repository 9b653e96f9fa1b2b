//! Event date parsing and display.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Display value for event dates that are absent or cannot be parsed.
pub(crate) const INVALID_DATE: &str = "Invalid Date";

/// Attempts to parse an event date string in various formats
fn parse_event_date(date_str: &str) -> Option<DateTime<Utc>> {
    // RDAP mandates RFC 3339, so try that first
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // Registries deviate; try common date formats seen in the wild
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
    ];

    for format in &formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive_dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

/// Renders an event date for display.
///
/// Output is a pure function of the input string: a parseable date renders
/// as `YYYY-MM-DD HH:MM:SS UTC`, anything else (including an absent date)
/// renders as the `Invalid Date` placeholder rather than failing.
pub(crate) fn display_event_date(raw: Option<&str>) -> String {
    raw.and_then(parse_event_date)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
