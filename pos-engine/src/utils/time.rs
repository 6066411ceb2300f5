//! Business time zone helpers
//!
//! Stored timestamps are Unix millis (UTC). Day boundaries and display
//! strings are computed in the configured business time zone.

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

/// Calendar date of `millis` in `tz`
pub fn local_date(millis: i64, tz: Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.with_timezone(&tz).date_naive())
}

/// Date start (00:00:00) → Unix millis (business time zone)
///
/// DST gap fallback: if local midnight does not exist, falls back to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Local midnight of the day containing `now`
pub fn today_start_millis(now: i64, tz: Tz) -> i64 {
    local_date(now, tz).map_or(now, |date| day_start_millis(date, tz))
}

/// `YYYY-MM-DD` in `tz`, empty when out of range
pub fn format_date(millis: i64, tz: Tz) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&tz).format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// `HH:MM` in `tz`, empty when out of range
pub fn format_time(millis: i64, tz: Tz) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&tz).format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Parse an IANA time zone name, falling back to UTC
pub fn parse_timezone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|e| {
        tracing::warn!("Failed to parse timezone '{}': {}, falling back to UTC", name, e);
        Tz::UTC
    })
}
