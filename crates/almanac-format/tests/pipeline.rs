//! End-to-end pipeline coverage: loose date strings in, split display
//! fragments out.

use almanac_core::catalog::StaticCatalog;
use almanac_format::locale::{EnglishNames, default_templates};
use almanac_format::template::TemplateOverrides;
use almanac_format::{RangeCategory, format_date_range};

#[test_log::test]
fn fragments_reassemble_exactly() {
    let cases = [
        ("2023-04-05", "2023-04-05"),
        ("2023-04-05", "2023-04-08"),
        ("2023-04-05", "2023-06-09"),
        ("2023-12-30", "2024-01-02"),
        ("2023-04-05", ""),
    ];

    for (start, end) in cases {
        let result =
            format_date_range(start, end, &default_templates(), None, &EnglishNames).unwrap();
        let reassembled = format!("{}{}", result.start, result.end);
        assert_eq!(reassembled, result.full(), "case {start}..{end}");
        assert!(!result.full().contains('$'), "case {start}..{end}");
    }
}

#[test_log::test]
fn override_bypasses_catalog_for_its_category_only() {
    let mut overrides = TemplateOverrides::new();
    overrides.insert(
        RangeCategory::SameMonthSameYear,
        "$StartDayNumberLong.$StartMonthNumberLong. to $EndDayNumberLong.$EndMonthNumberLong.",
    );

    let overridden = format_date_range(
        "2023-04-05",
        "2023-04-08",
        &default_templates(),
        Some(&overrides),
        &EnglishNames,
    )
    .unwrap();
    assert_eq!(overridden.start, "05.04. to ");
    assert_eq!(overridden.end, "08.04.");

    let untouched = format_date_range(
        "2023-04-05",
        "2023-04-05",
        &default_templates(),
        Some(&overrides),
        &EnglishNames,
    )
    .unwrap();
    assert_eq!(untouched.full(), "Apr 5th, 2023");
}

#[test_log::test]
fn empty_catalog_falls_back_to_category_name() {
    let result = format_date_range(
        "2023-04-05",
        "2023-06-09",
        &StaticCatalog::new(),
        None,
        &EnglishNames,
    )
    .unwrap();
    // The category name contains no tokens, so it passes through whole.
    assert_eq!(result.start, "DiffMonthSameYear");
    assert_eq!(result.end, "");
}

#[test_log::test]
fn datetime_valued_endpoints_classify_like_their_dates() {
    let result = format_date_range(
        "2023-04-05 09:00",
        "2023-04-05 17:00",
        &StaticCatalog::new(),
        None,
        &EnglishNames,
    )
    .unwrap();
    // Different instants on the same day are still a same-month range,
    // not OneDay; equality is on the instant, not the calendar day.
    assert_eq!(result.start, "SameMonthSameYear");
}

#[test_log::test]
fn invalid_start_produces_no_result() {
    assert!(
        format_date_range("", "2023-04-08", &default_templates(), None, &EnglishNames).is_none()
    );
    assert!(
        format_date_range("1969-07-20", "", &default_templates(), None, &EnglishNames).is_none()
    );
}
