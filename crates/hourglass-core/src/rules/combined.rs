//! Combined date-time rule: a date/weekday/`tomorrow` part plus a clock
//! part in one phrase, in either order, optionally joined by `at`/`on`.
//!
//! `January 1, 2019 at 2 pm`, `2 pm on Wednesday`, and `tomorrow 2 pm` all
//! land here. After dropping connector tokens, the token sequence is split
//! at every boundary, scanned left to right, and each split is tried in
//! both orientations (`left=date, right=time` and the reverse) with the
//! date rules on one side and the clock-time rule on the other. The first
//! split where exactly one orientation succeeds on both sides wins; a split
//! where both orientations succeed is ambiguous and is skipped. The scan is
//! a plain double loop over token boundaries — worst case quadratic in the
//! token count, which is negligible for short typed phrases and obviously
//! terminating.

use super::{date, time, weekday};

/// The shape of the date side, which decides how the result is recomposed.
enum DateSide {
    /// `until <time> tomorrow` — no `on` connector.
    Tomorrow,
    /// `until <time> on <Weekday>`
    Weekday(&'static str),
    /// `until <time> on <D Month[ Year]>`
    Calendar(String),
}

/// Try the date rules against one side of a split, most specific first.
fn parse_date_side(side: &str) -> Option<DateSide> {
    if weekday::matches_tomorrow(side) {
        return Some(DateSide::Tomorrow);
    }
    if let Some(formatted) = date::parse_numeric(side)
        .or_else(|| date::parse_long(side))
        .or_else(|| date::parse_compact(side))
    {
        return Some(DateSide::Calendar(formatted));
    }
    // Whole side must be a single weekday token.
    if !side.contains(char::is_whitespace) {
        if let Some(day) = crate::normalize::weekday_by_prefix(side.trim()) {
            return Some(DateSide::Weekday(day));
        }
    }
    None
}

/// Try the clock-time rule against one side of a split. The rule's own
/// `until ` prefix is dropped so recomposition does not duplicate it.
fn parse_time_side(side: &str) -> Option<String> {
    if !time::matches_clock(side) {
        return None;
    }
    time::normalize_time_of_day(side)
}

fn compose(date_side: DateSide, time_side: String) -> String {
    match date_side {
        DateSide::Tomorrow => format!("until {time_side} tomorrow"),
        DateSide::Weekday(day) => format!("until {time_side} on {day}"),
        DateSide::Calendar(dmy) => format!("until {time_side} on {dmy}"),
    }
}

/// Cheap shape test: a combined phrase needs at least two tokens.
pub fn matches(input: &str) -> bool {
    input.trim().split_whitespace().nth(1).is_some()
}

pub fn parse(input: &str) -> Option<String> {
    let tokens: Vec<&str> = input
        .split_whitespace()
        .filter(|t| !t.eq_ignore_ascii_case("at") && !t.eq_ignore_ascii_case("on"))
        .collect();
    if tokens.len() < 2 {
        return None;
    }

    for split in 1..tokens.len() {
        let left = tokens[..split].join(" ");
        let right = tokens[split..].join(" ");

        let date_then_time = parse_date_side(&left).zip(parse_time_side(&right));
        let time_then_date = parse_time_side(&left).zip(parse_date_side(&right));

        match (date_then_time, time_then_date) {
            (Some((d, t)), None) => return Some(compose(d, t)),
            (None, Some((t, d))) => return Some(compose(d, t)),
            // Both orientations parsing is ambiguous; neither is trusted.
            _ => continue,
        }
    }
    None
}
