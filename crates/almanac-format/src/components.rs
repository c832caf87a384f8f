//! Calendar components derived from a single instant.

use chrono::{DateTime, Datelike, Utc};

use crate::locale::CalendarNames;

/// The eleven derived fields substitution draws from, always populated
/// together from the same instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarComponents {
    /// Abbreviated weekday name ("Tue").
    pub weekday_short: String,
    /// Full weekday name ("Tuesday").
    pub weekday_long: String,
    /// Day of month without leading zero ("5").
    pub day_numeric: String,
    /// Two-digit day of month ("05").
    pub day_padded: String,
    /// Ordinal suffix for the day ("th").
    pub day_suffix: String,
    /// Month number without leading zero ("4").
    pub month_numeric: String,
    /// Two-digit month number ("04").
    pub month_padded: String,
    /// Abbreviated month name ("Apr").
    pub month_short: String,
    /// Full month name ("April").
    pub month_long: String,
    /// Two-digit year ("23").
    pub year_short: String,
    /// Four-digit year ("2023").
    pub year_long: String,
}

impl CalendarComponents {
    /// Derives all eleven fields from one instant. Total: every valid
    /// datetime produces a complete record.
    #[must_use]
    pub fn from_datetime(datetime: &DateTime<Utc>, names: &dyn CalendarNames) -> Self {
        let day = datetime.day();
        let month = datetime.month();
        let year = datetime.year();

        Self {
            weekday_short: names.weekday_short(datetime.weekday()),
            weekday_long: names.weekday_long(datetime.weekday()),
            day_numeric: day.to_string(),
            day_padded: format!("{day:02}"),
            day_suffix: names.day_suffix(day),
            month_numeric: month.to_string(),
            month_padded: format!("{month:02}"),
            month_short: names.month_short(month),
            month_long: names.month_long(month),
            year_short: format!("{:02}", year.rem_euclid(100)),
            year_long: year.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishNames;
    use chrono::TimeZone;

    fn components(year: i32, month: u32, day: u32) -> CalendarComponents {
        let dt = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
        CalendarComponents::from_datetime(&dt, &EnglishNames)
    }

    #[test]
    fn derives_all_fields() {
        // 2023-04-05 was a Wednesday
        let c = components(2023, 4, 5);
        assert_eq!(c.weekday_short, "Wed");
        assert_eq!(c.weekday_long, "Wednesday");
        assert_eq!(c.day_numeric, "5");
        assert_eq!(c.day_padded, "05");
        assert_eq!(c.day_suffix, "th");
        assert_eq!(c.month_numeric, "4");
        assert_eq!(c.month_padded, "04");
        assert_eq!(c.month_short, "Apr");
        assert_eq!(c.month_long, "April");
        assert_eq!(c.year_short, "23");
        assert_eq!(c.year_long, "2023");
    }

    #[test]
    fn no_padding_needed_for_double_digits() {
        let c = components(2023, 12, 21);
        assert_eq!(c.day_numeric, "21");
        assert_eq!(c.day_padded, "21");
        assert_eq!(c.day_suffix, "st");
        assert_eq!(c.month_numeric, "12");
        assert_eq!(c.month_padded, "12");
    }

    #[test]
    fn year_short_is_zero_padded() {
        let c = components(2005, 1, 1);
        assert_eq!(c.year_short, "05");
        assert_eq!(c.year_long, "2005");
    }
}
