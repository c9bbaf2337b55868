//! Time-related utilities for rendering server timestamps.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Parse an RFC 3339 string into Unix milliseconds.
///
/// Returns `None` when the string is not a valid RFC 3339 timestamp.
pub fn rfc3339_to_millis(value: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).timestamp_millis())
}

/// Format a Unix timestamp (milliseconds) as a wall-clock time in the given zone.
///
/// Out-of-range timestamps render as `--:--:--`.
pub fn millis_to_time_of_day_in<Tz: TimeZone>(timestamp_millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(timestamp_millis).single() {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

/// Format a Unix timestamp (milliseconds) as a local wall-clock time (`HH:MM:SS`).
pub fn millis_to_local_time_of_day(timestamp_millis: i64) -> String {
    millis_to_time_of_day_in(timestamp_millis, &Local)
}
