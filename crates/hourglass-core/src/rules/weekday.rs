//! Weekday, relative-weekday, and `tomorrow` rules.
//!
//! These emit symbolic day tokens, not resolved dates — the engine has no
//! "today" anchor. A weekday alone denotes a day rather than a deadline,
//! so no `until` wrapper is added here.

use regex::Regex;
use std::sync::OnceLock;

use crate::normalize::weekday_by_prefix;

/// `<weekday> next week|next|after next`
fn relative_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([A-Za-z]+)\s+(next week|next|after next)$").unwrap())
}

/// Bare weekday test, by case-insensitive prefix of the full name.
pub fn matches_weekday(input: &str) -> bool {
    weekday_by_prefix(input.trim()).is_some()
}

pub fn parse_weekday(input: &str) -> Option<String> {
    weekday_by_prefix(input.trim()).map(str::to_string)
}

/// `Wednesday next week` / `Thu after next` shape test.
pub fn matches_relative(input: &str) -> bool {
    let lower = input.trim().to_ascii_lowercase();
    match relative_pattern().captures(&lower) {
        Some(cap) => weekday_by_prefix(&cap[1]).is_some(),
        None => false,
    }
}

/// Normalize to `<FullWeekday> <qualifier>` with the qualifier lowercased.
pub fn parse_relative(input: &str) -> Option<String> {
    let lower = input.trim().to_ascii_lowercase();
    let cap = relative_pattern().captures(&lower)?;
    let day = weekday_by_prefix(&cap[1])?;
    Some(format!("{day} {}", &cap[2]))
}

/// Literal `tomorrow`.
pub fn matches_tomorrow(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("tomorrow")
}

pub fn parse_tomorrow(input: &str) -> Option<String> {
    if matches_tomorrow(input) {
        Some("tomorrow".to_string())
    } else {
        None
    }
}
