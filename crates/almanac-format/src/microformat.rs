//! ISO-8601 "microformat" timestamps for markup output.

use std::fmt::Display;

use chrono::{Local, TimeZone};

use crate::parse;

/// Encodes a date/time pair as ISO-8601 in the system-local zone.
///
/// Returns `""` when the date is empty, when `date time` does not
/// parse, or when the result precedes the epoch start; the caller
/// simply omits the attribute in that case. A supplied `offset`
/// replaces the trailing timezone-offset segment verbatim.
#[must_use]
pub fn microformat(date: &str, time: &str, offset: Option<&str>) -> String {
    microformat_in(date, time, offset, &Local)
}

/// Encodes a date/time pair as ISO-8601 in an explicit zone, e.g. a
/// configured `chrono_tz::Tz` rather than wherever the server happens
/// to run.
#[must_use]
pub fn microformat_in<Tz>(date: &str, time: &str, offset: Option<&str>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if date.is_empty() {
        return String::new();
    }

    let Some(naive) = parse::parse_naive_datetime(&format!("{date} {time}")) else {
        return String::new();
    };
    // DST gap: no such wall time in this zone. DST fold: take the
    // earlier of the two instants.
    let Some(datetime) = zone.from_local_datetime(&naive).earliest() else {
        return String::new();
    };
    if datetime.timestamp() < 1 {
        return String::new();
    }

    let formatted = datetime.format("%Y-%m-%dT%H:%M:%S%:z").to_string();
    match offset {
        Some(offset) if !offset.is_empty() => replace_offset_segment(&formatted, offset),
        _ => formatted,
    }
}

/// Replaces the trailing `(+|-)[digits/colons]` segment with `offset`.
/// Strings without such a segment are returned unchanged.
fn replace_offset_segment(formatted: &str, offset: &str) -> String {
    let bytes = formatted.as_bytes();
    let mut at = bytes.len();
    while at > 0 && (bytes[at - 1].is_ascii_digit() || bytes[at - 1] == b':') {
        at -= 1;
    }

    if at > 0 && (bytes[at - 1] == b'+' || bytes[at - 1] == b'-') {
        format!("{}{}", &formatted[..at - 1], offset)
    } else {
        formatted.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    #[test]
    fn encodes_wall_time() {
        let encoded = microformat("2023-04-05", "14:30", None);
        assert!(encoded.starts_with("2023-04-05T14:30:00"));
        // Offset segment is always present, never a bare "Z".
        assert!(encoded.contains('+') || encoded.contains('-'));
    }

    #[test]
    fn empty_date_yields_empty_string() {
        assert_eq!(microformat("", "14:30", None), "");
    }

    #[test]
    fn unparsable_input_yields_empty_string() {
        assert_eq!(microformat("soon", "14:30", None), "");
        assert_eq!(microformat("2023-04-05", "half past", None), "");
    }

    #[test]
    fn forced_offset_replaces_segment() {
        let encoded = microformat("2023-04-05", "14:30", Some("+09:00"));
        assert!(encoded.starts_with("2023-04-05T14:30:00"));
        assert!(encoded.ends_with("+09:00"));
        // Exactly one offset segment remains.
        assert_eq!(encoded.len(), "2023-04-05T14:30:00+09:00".len());
    }

    #[test]
    fn fixed_zone_encodes_that_zone_offset() {
        let tokyo: Tz = "Asia/Tokyo".parse().unwrap();
        assert_eq!(
            microformat_in("2023-04-05", "14:30", None, &tokyo),
            "2023-04-05T14:30:00+09:00"
        );
    }

    #[test]
    fn fixed_zone_with_forced_offset() {
        let tokyo: Tz = "Asia/Tokyo".parse().unwrap();
        assert_eq!(
            microformat_in("2023-04-05", "14:30", Some("-05:00"), &tokyo),
            "2023-04-05T14:30:00-05:00"
        );
    }

    #[test]
    fn pre_epoch_yields_empty_string() {
        let utc = chrono::Utc;
        assert_eq!(microformat_in("1969-12-31", "23:00", None, &utc), "");
    }

    #[test]
    fn replace_offset_segment_without_sign_is_untouched() {
        assert_eq!(replace_offset_segment("14:30:00", "+09:00"), "14:30:00");
    }
}
