//! Duration rules: bare minute counts, colon/dot groups, and unit tokens.
//!
//! Three mutually exclusive shapes, tried in rule-set order:
//!
//! - `5:30` / `7.30.00` — two groups read as M:S, three as H:M:S (colon and
//!   dot are interchangeable separators)
//! - `1h 5m`, `7 hours 30 minutes`, `1.5 hours`, `5m30s` — a run of
//!   `<number><unit>` tokens; repeated units accumulate, fractional counts
//!   are demoted one level into the next finer unit
//! - `5` — a bare integer read as whole minutes
//!
//! Durations deliberately outrank the clock-time rule, so `5:30` is five
//! minutes thirty seconds and a bare `5` is five minutes, not 5:00.

use regex::Regex;
use std::sync::OnceLock;

use crate::normalize::{format_duration, format_hms, DurationComponents};

struct DurationPatterns {
    /// 2 or 3 numeric groups: `5:30`, `7.30.00`
    grouped: Regex,
    /// Whole expression is a run of `<number><unit>` tokens.
    unit_run: Regex,
    /// One `<number><unit>` token, for extraction.
    unit_token: Regex,
    /// Bare integer.
    bare_number: Regex,
}

// Longer unit spellings must precede their prefixes ("seconds" before
// "sec" before "s") so capture extraction picks the whole word.
const UNITS: &str = "years|year|yrs|yr|y|months|month|mo|weeks|week|wks|wk|w|\
                     days|day|d|hours|hour|hrs|hr|h|minutes|minute|mins|min|m|\
                     seconds|second|secs|sec|s";

fn patterns() -> &'static DurationPatterns {
    static PATTERNS: OnceLock<DurationPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| DurationPatterns {
        grouped: Regex::new(r"^\d{1,3}[:.]\d{1,2}(?:[:.]\d{1,2})?$").unwrap(),
        unit_run: Regex::new(&format!(r"^(?:\s*\d+(?:\.\d+)?\s*(?:{UNITS}))+\s*$")).unwrap(),
        unit_token: Regex::new(&format!(r"(\d+(?:\.\d+)?)\s*({UNITS})")).unwrap(),
        bare_number: Regex::new(r"^\d+$").unwrap(),
    })
}

/// `5:30` / `7:30:00` shape test.
pub fn matches_grouped(input: &str) -> bool {
    patterns().grouped.is_match(input.trim())
}

/// Parse colon/dot groups: two groups are minutes:seconds, three are
/// hours:minutes:seconds. All-zero groups yield no duration.
pub fn parse_grouped(input: &str) -> Option<String> {
    if !patterns().grouped.is_match(input.trim()) {
        return None;
    }
    let normalized = input.trim().replace('.', ":");
    let groups: Vec<u64> = normalized
        .split(':')
        .map(|g| g.parse::<u64>())
        .collect::<Result<_, _>>()
        .ok()?;
    let formatted = match groups.as_slice() {
        [m, s] => format_hms(0, *m, *s),
        [h, m, s] => format_hms(*h, *m, *s),
        _ => return None,
    };
    if formatted.is_empty() {
        None
    } else {
        Some(formatted)
    }
}

/// Unit-token run shape test. The whole expression must consist of
/// `<number><unit>` tokens, so `1h pizza` is left to title resolution.
pub fn matches_units(input: &str) -> bool {
    patterns()
        .unit_run
        .is_match(&input.trim().to_ascii_lowercase())
}

/// Parse a run of `<number><unit>` tokens into the seven-unit decomposition.
///
/// Fractional counts demote exactly one level, with per-unit rounding kept
/// as the downstream timer established it: years and months split into
/// whole + rounded remainder (1.5 years → 1 year 6 months), weeks and days
/// demote their entire value (0.5 weeks → 4 days), hours and minutes split
/// like years, and seconds round outright.
pub fn parse_units(input: &str) -> Option<String> {
    let lower = input.trim().to_ascii_lowercase();
    if !patterns().unit_run.is_match(&lower) {
        return None;
    }

    // Accumulation saturates so absurd counts cannot overflow. Float-to-int
    // `as` casts already saturate on their own.
    let mut c = DurationComponents::default();
    for cap in patterns().unit_token.captures_iter(&lower) {
        let n: f64 = cap[1].parse().ok()?;
        let whole = n.trunc() as u64;
        let fract = n.fract();
        match &cap[2] {
            "y" | "yr" | "yrs" | "year" | "years" => {
                c.years = c.years.saturating_add(whole);
                if fract > 0.0 {
                    c.months = c.months.saturating_add((fract * 12.0).round() as u64);
                }
            }
            "mo" | "month" | "months" => {
                c.months = c.months.saturating_add(whole);
                if fract > 0.0 {
                    c.days = c.days.saturating_add((fract * 30.0).round() as u64);
                }
            }
            "w" | "wk" | "wks" | "week" | "weeks" => {
                if fract == 0.0 {
                    c.weeks = c.weeks.saturating_add(whole);
                } else {
                    c.days = c.days.saturating_add((n * 7.0).round() as u64);
                }
            }
            "d" | "day" | "days" => {
                if fract == 0.0 {
                    c.days = c.days.saturating_add(whole);
                } else {
                    c.hours = c.hours.saturating_add((n * 24.0).round() as u64);
                }
            }
            "h" | "hr" | "hrs" | "hour" | "hours" => {
                c.hours = c.hours.saturating_add(whole);
                if fract > 0.0 {
                    c.minutes = c.minutes.saturating_add((fract * 60.0).round() as u64);
                }
            }
            "m" | "min" | "mins" | "minute" | "minutes" => {
                c.minutes = c.minutes.saturating_add(whole);
                if fract > 0.0 {
                    c.seconds = c.seconds.saturating_add((fract * 60.0).round() as u64);
                }
            }
            _ => c.seconds = c.seconds.saturating_add(n.round() as u64),
        }
    }

    // Compact H/M/S phrasing unless a coarser unit is present.
    let formatted = if c.years == 0 && c.months == 0 && c.weeks == 0 && c.days == 0 {
        format_hms(c.hours, c.minutes, c.seconds)
    } else {
        format_duration(&c)
    };
    if formatted.is_empty() {
        None
    } else {
        Some(formatted)
    }
}

/// Bare integer shape test.
pub fn matches_bare_minutes(input: &str) -> bool {
    patterns().bare_number.is_match(input.trim())
}

/// Parse a bare integer as whole minutes. Zero is not a duration.
pub fn parse_bare_minutes(input: &str) -> Option<String> {
    let minutes: u64 = input.trim().parse().ok()?;
    let formatted = format_hms(0, minutes, 0);
    if formatted.is_empty() {
        None
    } else {
        Some(formatted)
    }
}
