//! Calendar-date rules: numeric `D/M/Y`, long `Month D[, Y]`, compact `Jan1`.
//!
//! Dates are normalized to `D MonthFullName[ Year]` with the year omitted
//! when the input carries none. Month and day are range-checked (1-12 and
//! 1-31), but there is deliberately no days-in-month or leap-year
//! validation — the downstream timer owns real calendar semantics.
//!
//! Numeric dates are ambiguous between month-first and day-first readings.
//! The established heuristic is month-first unless the first field exceeds
//! 12 and the second does not; callers depend on that exact bias, so it is
//! preserved rather than validated against a calendar.

use regex::Regex;
use std::sync::OnceLock;

use crate::normalize::{format_dmy, month_by_prefix, to_four_digit_year};

struct DatePatterns {
    /// `1/1`, `01/01/19`, `1/1/2019`
    numeric: Regex,
    /// `January 1 2019` (commas already stripped)
    month_day: Regex,
    /// `1 January 2019` (commas already stripped)
    day_month: Regex,
    /// `Jan1`
    compact: Regex,
}

fn patterns() -> &'static DatePatterns {
    static PATTERNS: OnceLock<DatePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| DatePatterns {
        numeric: Regex::new(r"^(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?$").unwrap(),
        month_day: Regex::new(r"^([A-Za-z]+)\s+(\d{1,2})(?:\s+(\d{2,4}))?$").unwrap(),
        day_month: Regex::new(r"^(\d{1,2})\s+([A-Za-z]+)(?:\s+(\d{2,4}))?$").unwrap(),
        compact: Regex::new(r"^([A-Za-z]+)\s*(\d{1,2})$").unwrap(),
    })
}

fn to_u32(s: &str) -> u32 {
    s.parse().unwrap_or(0)
}

/// Numeric slash-date shape test.
pub fn matches_numeric(input: &str) -> bool {
    patterns().numeric.is_match(input.trim())
}

/// Parse `A/B[/Y]`: month-first by default, day-first only when magnitude
/// forces it (first field > 12, second ≤ 12). 2-digit years are windowed.
pub fn parse_numeric(input: &str) -> Option<String> {
    let cap = patterns().numeric.captures(input.trim())?;
    let a = to_u32(&cap[1]);
    let b = to_u32(&cap[2]);
    let (day, month) = if a > 12 && b <= 12 { (a, b) } else { (b, a) };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let year = cap.get(3).map(|y| to_four_digit_year(to_u32(y.as_str())));
    Some(format_dmy(day, month as usize, year))
}

/// Long-form shape test: `Month D[, Y]` or `D Month[, Y]`.
pub fn matches_long(input: &str) -> bool {
    let s = input.trim().replace(',', "");
    patterns().month_day.is_match(&s) || patterns().day_month.is_match(&s)
}

/// Parse the long form. The month is matched by case-insensitive prefix of
/// its full name, so `Jan 1` and `1 Janu 2019` both resolve to January.
pub fn parse_long(input: &str) -> Option<String> {
    let s = input.trim().replace(',', "");
    let p = patterns();

    let (month_text, day, year) = if let Some(cap) = p.month_day.captures(&s) {
        (
            cap[1].to_string(),
            to_u32(&cap[2]),
            cap.get(3).map(|y| to_u32(y.as_str())),
        )
    } else if let Some(cap) = p.day_month.captures(&s) {
        (
            cap[2].to_string(),
            to_u32(&cap[1]),
            cap.get(3).map(|y| to_u32(y.as_str())),
        )
    } else {
        return None;
    };

    let month = month_by_prefix(&month_text)?;
    if !(1..=31).contains(&day) {
        return None;
    }
    Some(format_dmy(day, month, year.map(to_four_digit_year)))
}

/// Compact `MonthD` shape test.
pub fn matches_compact(input: &str) -> bool {
    patterns().compact.is_match(input.trim())
}

/// Parse the compact month-day form (`Jan1`). No year in this shape.
pub fn parse_compact(input: &str) -> Option<String> {
    let cap = patterns().compact.captures(input.trim())?;
    let month = month_by_prefix(&cap[1])?;
    let day = to_u32(&cap[2]);
    if !(1..=31).contains(&day) {
        return None;
    }
    Some(format_dmy(day, month, None))
}
