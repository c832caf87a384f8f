//! Localized month-name table for dropdowns and filters.

use std::collections::BTreeMap;

use crate::locale::CalendarNames;

/// Which rendering of the month name the table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthNameFormat {
    /// Abbreviated name ("Jan").
    #[default]
    Short,
    /// Full name ("January").
    Long,
}

/// Builds the ordered `"01".."12"` month-name map, as rendered for the
/// first day of each month of a fixed reference year (2000).
#[must_use]
pub fn month_names(
    format: MonthNameFormat,
    names: &dyn CalendarNames,
) -> BTreeMap<String, String> {
    (1..=12u32)
        .map(|month| {
            let name = match format {
                MonthNameFormat::Short => names.month_short(month),
                MonthNameFormat::Long => names.month_long(month),
            };
            (format!("{month:02}"), name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishNames;

    #[test]
    fn twelve_entries_in_ascending_order() {
        let table = month_names(MonthNameFormat::Short, &EnglishNames);
        assert_eq!(table.len(), 12);

        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys.first(), Some(&"01"));
        assert_eq!(keys.last(), Some(&"12"));
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn short_names() {
        let table = month_names(MonthNameFormat::Short, &EnglishNames);
        assert_eq!(table.get("01").map(String::as_str), Some("Jan"));
        assert_eq!(table.get("09").map(String::as_str), Some("Sep"));
    }

    #[test]
    fn long_names() {
        let table = month_names(MonthNameFormat::Long, &EnglishNames);
        assert_eq!(table.get("02").map(String::as_str), Some("February"));
        assert_eq!(table.get("12").map(String::as_str), Some("December"));
    }
}
