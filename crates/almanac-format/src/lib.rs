//! Human-readable date-range formatting for event calendars.
//!
//! A start/end pair is classified into one of four categories, a
//! localized template is resolved for that category, and the template's
//! `$Start*`/`$End*` placeholder tokens are substituted with calendar
//! components derived from each endpoint. The substituted string is
//! split into start/end fragments at the first end-side token.
//!
//! Supporting utilities: loose date-string normalization, ISO-8601
//! microformat encoding, a localized month-name table, and a stable
//! comparator for event records.

pub mod classify;
pub mod components;
pub mod locale;
pub mod microformat;
pub mod months;
pub mod normalize;
pub mod ordering;
pub mod parse;
pub mod range;
pub mod template;
pub mod times;

pub use classify::{RangeCategory, classify};
pub use components::CalendarComponents;
pub use locale::{CalendarNames, EnglishNames, default_templates};
pub use range::format_date_range;
pub use template::{FormattedRange, TemplateOverrides, resolve_template, substitute};
