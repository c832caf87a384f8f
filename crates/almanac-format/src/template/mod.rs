//! Range templates: resolution, placeholder substitution, and
//! start/end fragment splitting.
//!
//! A template is an opaque string carrying any of 22 recognized tokens,
//! eleven `$Start*` and eleven mirrored `$End*`. Anything else in the
//! template, including unrecognized `$` text, passes through untouched.

mod resolve;
mod substitute;

pub use resolve::{TemplateOverrides, resolve_template};
pub use substitute::{FormattedRange, substitute};

use crate::components::CalendarComponents;

/// Namespace prefixed to category names when querying the catalog.
pub const TEMPLATE_NAMESPACE: &str = "Calendar";

/// The 22 recognized tokens paired with their component values, start
/// tokens first, in declared order. No token is a prefix of another, so
/// declared-order matching is unambiguous.
pub(crate) fn token_pairs<'a>(
    start: &'a CalendarComponents,
    end: &'a CalendarComponents,
) -> [(&'static str, &'a str); 22] {
    [
        ("$StartDayNameShort", start.weekday_short.as_str()),
        ("$StartDayNameLong", start.weekday_long.as_str()),
        ("$StartDayNumberShort", start.day_numeric.as_str()),
        ("$StartDayNumberLong", start.day_padded.as_str()),
        ("$StartDaySuffix", start.day_suffix.as_str()),
        ("$StartMonthNumberShort", start.month_numeric.as_str()),
        ("$StartMonthNumberLong", start.month_padded.as_str()),
        ("$StartMonthNameShort", start.month_short.as_str()),
        ("$StartMonthNameLong", start.month_long.as_str()),
        ("$StartYearShort", start.year_short.as_str()),
        ("$StartYearLong", start.year_long.as_str()),
        ("$EndDayNameShort", end.weekday_short.as_str()),
        ("$EndDayNameLong", end.weekday_long.as_str()),
        ("$EndDayNumberShort", end.day_numeric.as_str()),
        ("$EndDayNumberLong", end.day_padded.as_str()),
        ("$EndDaySuffix", end.day_suffix.as_str()),
        ("$EndMonthNumberShort", end.month_numeric.as_str()),
        ("$EndMonthNumberLong", end.month_padded.as_str()),
        ("$EndMonthNameShort", end.month_short.as_str()),
        ("$EndMonthNameLong", end.month_long.as_str()),
        ("$EndYearShort", end.year_short.as_str()),
        ("$EndYearLong", end.year_long.as_str()),
    ]
}

/// Marker distinguishing end-side tokens during the substitution scan.
pub(crate) const END_TOKEN_PREFIX: &str = "$End";
