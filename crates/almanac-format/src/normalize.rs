//! Canonicalization of loosely-specified date strings.

use chrono::Local;
use tracing::warn;

/// Normalizes a partial or compact date string into `YYYY-MM-DD`.
///
/// Hyphens are stripped first. A remainder that is not purely digits
/// falls back to today's date; this keeps the function total, with a
/// `warn!` so garbage input is still visible. Short all-digit input is
/// right-padded with `"01"` (missing month/day default to the first)
/// and anything past eight digits is dropped.
#[must_use]
pub fn normalize_date(input: &str) -> String {
    let mut digits: String = input.chars().filter(|c| *c != '-').collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        warn!(input, "unparsable date string, falling back to today");
        return Local::now().format("%Y-%m-%d").to_string();
    }

    while digits.len() < 8 {
        digits.push_str("01");
    }
    digits.truncate(8);

    format!("{}-{}-{}", &digits[0..4], &digits[4..6], &digits[6..8])
}
