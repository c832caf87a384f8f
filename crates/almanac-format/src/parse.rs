//! Lenient parsing of loosely formatted date and time strings.
//!
//! The CMS-facing fields carry `YYYY-MM-DD` dates and `HH:MM[:SS]`
//! times; these helpers accept those forms (with or without seconds,
//! space or `T` separator) and return `None` for everything else.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parses a date or datetime string into a UTC instant.
///
/// A bare date resolves to midnight. Instants before the epoch start
/// are rejected, matching the classification boundary.
#[must_use]
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let instant = parse_naive_datetime(s)?.and_utc();
    (instant.timestamp() >= 1).then_some(instant)
}

/// Parses a date or datetime string without attaching a zone.
#[must_use]
pub fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime);
        }
    }

    parse_date(s).map(|date| date.and_time(NaiveTime::MIN))
}

/// Parses a `YYYY-MM-DD` date string.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parses an `HH:MM[:SS]` time string.
#[must_use]
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
}
