//! Shared formatting and lookup helpers used by every rule.
//!
//! All canonical output strings are assembled here: pluralized unit phrases,
//! the compact hour/minute/second form, the full multi-unit duration form,
//! and the `D MonthName [Year]` date form. The month and weekday tables are
//! immutable statics; prefix lookups against them are case-insensitive.

/// Full English month names, January first.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English weekday names. Sunday-first order, matching the convention
/// of the downstream timer; the first prefix match in this order wins.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The seven-unit decomposition of a span of time, coarsest first.
///
/// A successfully parsed duration has at least one non-zero component;
/// zero components are never printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationComponents {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Format a count with the correct singular/plural noun: `1 minute`, `5 minutes`.
pub fn pluralize(n: u64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Compose the compact hour/minute/second phrase, omitting zero components.
///
/// Returns an empty string when every component is zero — callers treat that
/// as "no duration here", never as a canonical result.
pub fn format_hms(hours: u64, minutes: u64, seconds: u64) -> String {
    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(pluralize(hours, "hour", "hours"));
    }
    if minutes > 0 {
        parts.push(pluralize(minutes, "minute", "minutes"));
    }
    if seconds > 0 {
        parts.push(pluralize(seconds, "second", "seconds"));
    }
    parts.join(" ")
}

/// Compose the full multi-unit duration phrase, years through seconds,
/// omitting zero components. Empty when all components are zero.
pub fn format_duration(c: &DurationComponents) -> String {
    let units: [(u64, &str, &str); 7] = [
        (c.years, "year", "years"),
        (c.months, "month", "months"),
        (c.weeks, "week", "weeks"),
        (c.days, "day", "days"),
        (c.hours, "hour", "hours"),
        (c.minutes, "minute", "minutes"),
        (c.seconds, "second", "seconds"),
    ];
    let parts: Vec<String> = units
        .iter()
        .filter(|(n, _, _)| *n > 0)
        .map(|(n, sing, plur)| pluralize(*n, sing, plur))
        .collect();
    parts.join(" ")
}

/// Look up a month by case-insensitive prefix of its full name.
///
/// Returns the 1-based month number, so `"jan"`, `"Janu"`, and `"January"`
/// all yield `Some(1)`. Empty input never matches.
pub fn month_by_prefix(s: &str) -> Option<usize> {
    if s.is_empty() {
        return None;
    }
    let lower = s.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| m.to_ascii_lowercase().starts_with(&lower))
        .map(|i| i + 1)
}

/// Look up a weekday by case-insensitive prefix of its full name.
///
/// `"Wed"` and `"wednesday"` both yield `Some("Wednesday")`. The table is
/// Sunday-first, so a bare `"s"` resolves to Sunday, `"t"` to Tuesday.
pub fn weekday_by_prefix(s: &str) -> Option<&'static str> {
    if s.is_empty() {
        return None;
    }
    let lower = s.to_ascii_lowercase();
    WEEKDAYS
        .iter()
        .find(|d| d.to_ascii_lowercase().starts_with(&lower))
        .copied()
}

/// Window a 2-digit year into a 4-digit one: 0-69 becomes 20xx, 70-99
/// becomes 19xx. Values of 100 and above pass through unchanged.
pub fn to_four_digit_year(y: u32) -> u32 {
    if y >= 100 {
        y
    } else if y <= 69 {
        2000 + y
    } else {
        1900 + y
    }
}

/// Zero-pad a number to two digits.
pub fn pad2(n: u32) -> String {
    format!("{n:02}")
}

/// Compose the canonical `D MonthFullName[ Year]` date phrase.
///
/// `month` is 1-based and must already be validated to 1..=12.
pub fn format_dmy(day: u32, month: usize, year: Option<u32>) -> String {
    let name = MONTHS[month - 1];
    match year {
        Some(y) => format!("{day} {name} {y}"),
        None => format!("{day} {name}"),
    }
}
