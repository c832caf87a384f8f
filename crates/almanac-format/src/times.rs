//! Time-of-day display honoring the 12/24-hour setting.

use chrono::{NaiveTime, Timelike};

/// 12- or 24-hour clock, from the `time_format` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl TimeFormat {
    /// `"24"` selects the 24-hour clock; anything else the 12-hour one.
    #[must_use]
    pub fn from_setting(setting: &str) -> Self {
        if setting.trim() == "24" {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }
}

/// Formats a time as `"14:30"` or `"2:30pm"` depending on the setting.
#[must_use]
pub fn format_time(time: NaiveTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwentyFourHour => time.format("%H:%M").to_string(),
        TimeFormat::TwelveHour => {
            let (is_pm, hour) = time.hour12();
            let meridiem = if is_pm { "pm" } else { "am" };
            format!("{hour}:{:02}{meridiem}", time.minute())
        }
    }
}
