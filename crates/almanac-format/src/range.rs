//! The formatting pipeline: parse, classify, resolve, substitute,
//! split.

use tracing::debug;

use almanac_core::catalog::LocaleCatalog;

use crate::classify;
use crate::components::CalendarComponents;
use crate::locale::CalendarNames;
use crate::parse;
use crate::template::{self, FormattedRange, TemplateOverrides};

/// Formats a start/end date-string pair into start and end display
/// fragments.
///
/// Returns `None` when the start date does not parse to a valid
/// instant; the caller skips formatting for that record. A missing or
/// invalid end collapses to a one-day range, and end-side tokens then
/// render from the start instant.
#[must_use]
pub fn format_date_range(
    start_date: &str,
    end_date: &str,
    catalog: &dyn LocaleCatalog,
    overrides: Option<&TemplateOverrides>,
    names: &dyn CalendarNames,
) -> Option<FormattedRange> {
    let start = parse::parse_instant(start_date);
    let end = parse::parse_instant(end_date);

    let category = classify::classify(start, end)?;
    let start = start?;

    let template = template::resolve_template(category, overrides, catalog);
    debug!(%category, %template, "formatting date range");

    let start_components = CalendarComponents::from_datetime(&start, names);
    let end_components = CalendarComponents::from_datetime(&end.unwrap_or(start), names);

    Some(template::substitute(
        &template,
        &start_components,
        &end_components,
    ))
}
