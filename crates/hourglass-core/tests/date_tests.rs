use hourglass_core::classify;

fn canonical(input: &str) -> String {
    classify(input).unwrap_or_else(|| panic!("expected '{input}' to classify"))
}

fn rejected(input: &str) {
    assert!(
        classify(input).is_none(),
        "expected '{input}' to be rejected, got {:?}",
        classify(input)
    );
}

// ============================================================================
// Numeric slash dates
// ============================================================================

#[test]
fn numeric_date_without_year() {
    assert_eq!(canonical("1/1"), "1 January");
    assert_eq!(canonical("01/01"), "1 January");
}

#[test]
fn numeric_date_two_digit_year() {
    assert_eq!(canonical("1/1/19"), "1 January 2019");
    assert_eq!(canonical("01/01/19"), "1 January 2019");
}

#[test]
fn numeric_date_four_digit_year() {
    assert_eq!(canonical("1/1/2019"), "1 January 2019");
    assert_eq!(canonical("01/01/2019"), "1 January 2019");
}

#[test]
fn month_first_is_the_default_reading() {
    // 5/13 could be 5 May backwards, but month-first wins when it can.
    assert_eq!(canonical("5/13"), "13 May");
    assert_eq!(canonical("12/31"), "31 December");
}

#[test]
fn day_first_only_on_magnitude_necessity() {
    assert_eq!(canonical("13/5"), "13 May");
    assert_eq!(canonical("31/12/99"), "31 December 1999");
}

#[test]
fn year_windowing_splits_at_69() {
    assert_eq!(canonical("1/1/69"), "1 January 2069");
    assert_eq!(canonical("1/1/70"), "1 January 1970");
}

#[test]
fn numeric_date_out_of_range() {
    rejected("13/13");
    rejected("0/5");
    rejected("2/32");
}

// ============================================================================
// Long-form dates
// ============================================================================

#[test]
fn month_day() {
    assert_eq!(canonical("January 1"), "1 January");
    assert_eq!(canonical("Jan 1"), "1 January");
}

#[test]
fn day_month() {
    assert_eq!(canonical("1 January"), "1 January");
    assert_eq!(canonical("1 Jan"), "1 January");
}

#[test]
fn month_day_with_year() {
    assert_eq!(canonical("January 1, 2019"), "1 January 2019");
    assert_eq!(canonical("Jan 1, 2019"), "1 January 2019");
}

#[test]
fn day_month_with_year() {
    assert_eq!(canonical("1 January, 2019"), "1 January 2019");
    assert_eq!(canonical("1 Jan, 2019"), "1 January 2019");
}

#[test]
fn comma_is_optional() {
    assert_eq!(canonical("January 1 2019"), "1 January 2019");
}

#[test]
fn month_prefix_is_case_insensitive() {
    assert_eq!(canonical("jan 1"), "1 January");
    assert_eq!(canonical("SEPT 5"), "5 September");
    assert_eq!(canonical("1 decem"), "1 December");
}

#[test]
fn long_date_two_digit_year_is_windowed() {
    assert_eq!(canonical("January 1, 19"), "1 January 2019");
}

#[test]
fn long_date_large_year_passes_through() {
    assert_eq!(canonical("January 1, 125"), "1 January 125");
}

#[test]
fn long_date_day_out_of_range() {
    rejected("January 32");
    rejected("January 0");
}

#[test]
fn unknown_month_word() {
    rejected("Pizzember 5");
}

// ============================================================================
// Compact month-day
// ============================================================================

#[test]
fn compact_month_day() {
    assert_eq!(canonical("Jan1"), "1 January");
    assert_eq!(canonical("September5"), "5 September");
}

#[test]
fn compact_month_day_out_of_range() {
    rejected("Jan32");
    rejected("Jan0");
}

#[test]
fn compact_unknown_month() {
    rejected("Xyz1");
}
