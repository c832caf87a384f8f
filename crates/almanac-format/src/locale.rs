//! Locale seam for calendar names.
//!
//! The formatting core never hardcodes a language: weekday names, month
//! names, and day ordinal suffixes come through the [`CalendarNames`]
//! trait. [`EnglishNames`] is the baseline implementation; other locales
//! plug in by implementing the trait.

use chrono::Weekday;

use almanac_core::catalog::StaticCatalog;

/// Locale-sensitive calendar name provider.
///
/// `month` is 1-based; values outside 1..=12 are clamped to December,
/// so every input produces some name.
pub trait CalendarNames {
    fn weekday_short(&self, weekday: Weekday) -> String;
    fn weekday_long(&self, weekday: Weekday) -> String;
    fn month_short(&self, month: u32) -> String;
    fn month_long(&self, month: u32) -> String;
    /// Ordinal suffix for a day of month ("st", "nd", "rd", "th").
    fn day_suffix(&self, day: u32) -> String;
}

const WEEKDAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKDAYS_LONG: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_index(month: u32) -> usize {
    (month.saturating_sub(1) as usize).min(11)
}

/// English calendar names with English ordinal rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNames;

impl CalendarNames for EnglishNames {
    fn weekday_short(&self, weekday: Weekday) -> String {
        WEEKDAYS_SHORT[weekday.num_days_from_monday() as usize].to_string()
    }

    fn weekday_long(&self, weekday: Weekday) -> String {
        WEEKDAYS_LONG[weekday.num_days_from_monday() as usize].to_string()
    }

    fn month_short(&self, month: u32) -> String {
        MONTHS_SHORT[month_index(month)].to_string()
    }

    fn month_long(&self, month: u32) -> String {
        MONTHS_LONG[month_index(month)].to_string()
    }

    fn day_suffix(&self, day: u32) -> String {
        let suffix = match day % 100 {
            11..=13 => "th",
            _ => match day % 10 {
                1 => "st",
                2 => "nd",
                3 => "rd",
                _ => "th",
            },
        };
        suffix.to_string()
    }
}

/// Default English templates for the four range categories.
///
/// Hosts normally supply their own translated catalog; this one gives a
/// presentable result out of the box.
#[must_use]
pub fn default_templates() -> StaticCatalog {
    let mut catalog = StaticCatalog::new();
    catalog.insert(
        "Calendar.OneDay",
        "$StartMonthNameShort $StartDayNumberShort$StartDaySuffix, $StartYearLong",
    );
    catalog.insert(
        "Calendar.SameMonthSameYear",
        "$StartMonthNameShort $StartDayNumberShort$StartDaySuffix - $EndDayNumberShort$EndDaySuffix, $EndYearLong",
    );
    catalog.insert(
        "Calendar.DiffMonthSameYear",
        "$StartMonthNameShort $StartDayNumberShort$StartDaySuffix - $EndMonthNameShort $EndDayNumberShort$EndDaySuffix, $EndYearLong",
    );
    catalog.insert(
        "Calendar.DiffMonthDiffYear",
        "$StartMonthNameShort $StartDayNumberShort$StartDaySuffix, $StartYearLong - $EndMonthNameShort $EndDayNumberShort$EndDaySuffix, $EndYearLong",
    );
    catalog
}
