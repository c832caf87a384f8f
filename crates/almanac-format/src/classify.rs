//! Date-range classification.

use chrono::{DateTime, Datelike, Utc};

/// The four range categories. Exactly one applies to any valid
/// (start, end) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeCategory {
    OneDay,
    SameMonthSameYear,
    DiffMonthSameYear,
    DiffMonthDiffYear,
}

impl RangeCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "OneDay",
            Self::SameMonthSameYear => "SameMonthSameYear",
            Self::DiffMonthSameYear => "DiffMonthSameYear",
            Self::DiffMonthDiffYear => "DiffMonthDiffYear",
        }
    }
}

impl std::fmt::Display for RangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a start/end pair.
///
/// Returns `None` when `start` is missing or precedes the epoch start;
/// the caller skips formatting in that case. A missing, pre-epoch, or
/// equal `end` short-circuits to `OneDay` before any year/month
/// comparison.
#[must_use]
pub fn classify(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Option<RangeCategory> {
    let start = start.filter(|s| s.timestamp() >= 1)?;

    let Some(end) = end.filter(|e| e.timestamp() >= 1) else {
        return Some(RangeCategory::OneDay);
    };
    if end == start {
        return Some(RangeCategory::OneDay);
    }

    let category = if start.year() == end.year() {
        if start.month() == end.month() {
            RangeCategory::SameMonthSameYear
        } else {
            RangeCategory::DiffMonthSameYear
        }
    } else {
        RangeCategory::DiffMonthDiffYear
    };
    Some(category)
}
