//! Deterministic ordering for event-like records.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};

use crate::parse;

/// Read-only view of a record carrying a start date and start time.
pub trait EventLike {
    fn start_date(&self) -> &str;
    fn start_time(&self) -> &str;
}

/// Total order: parsed start date first, then parsed start time.
///
/// Dates are compared as instants, not lexicographically. Unparsable
/// values sort before parsable ones, so garbage input still yields a
/// deterministic order.
#[must_use]
pub fn compare_events<E: EventLike + ?Sized>(a: &E, b: &E) -> Ordering {
    let by_date = date_key(a.start_date()).cmp(&date_key(b.start_date()));
    if by_date == Ordering::Equal {
        time_key(a.start_time()).cmp(&time_key(b.start_time()))
    } else {
        by_date
    }
}

/// Sorts records in place. The sort is stable, so records equal on both
/// keys keep their insertion order.
pub fn sort_events<E: EventLike>(events: &mut [E]) {
    events.sort_by(|a, b| compare_events(a, b));
}

fn date_key(s: &str) -> Option<NaiveDate> {
    parse::parse_date(s)
}

fn time_key(s: &str) -> Option<NaiveTime> {
    parse::parse_time(s)
}
