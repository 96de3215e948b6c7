use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};
use tracing::warn;

/// Reduce any supported date representation to its UTC calendar day.
///
/// Accepts RFC 3339 timestamps, bare `YYYY-MM-DD` dates, and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps (treated as UTC). Returns `None` for
/// anything else; callers must treat `None` as "never matches".
pub fn canonical_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.naive_utc().date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(timestamp.date());
    }

    warn!("Unparseable date input: {:?}", raw);
    None
}

/// Canonical `YYYY-MM-DD` day key for cross-format equality comparisons.
pub fn canonical_day_key(raw: &str) -> Option<String> {
    canonical_day(raw).map(|day| day.format("%Y-%m-%d").to_string())
}

/// UTC weekday index for a date (0 = Sunday, 6 = Saturday), or `None` when
/// the date cannot be parsed. Downstream schedule lookups treat `None` as
/// "no schedule for this day".
pub fn day_of_week(raw: &str) -> Option<u32> {
    let day = canonical_day(raw)?;
    let index = match day.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    };
    Some(index)
}
