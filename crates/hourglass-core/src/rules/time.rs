//! Clock-time rules: `until` deadlines, noon/midnight, and time-of-day.
//!
//! A clock time always denotes a deadline, so every canonical form produced
//! here carries the `until ` prefix. [`normalize_time_of_day`] accepts, in
//! order: 24-hour `HH:MM[:SS]`, an undelimited 3-4 digit `HHMM` run,
//! 12-hour `H[:MM[:SS]] am|pm`, undelimited `HMM am|pm` (`210pm`), and a
//! bare hour or hour:minute read as 24-hour time (`5` → `5:00`).
//!
//! The clock rule's `matches` is narrower than the normalizer: it insists
//! on a separator or an am/pm suffix. Bare digit runs stay with the
//! duration rules at the top level and the HHMM reading is reachable only
//! behind an explicit `until`/`u` prefix; the time side of a combined
//! date-time expression is gated on the same narrow shape test.

use regex::Regex;
use std::sync::OnceLock;

use crate::normalize::pad2;

struct TimePatterns {
    /// 24-hour with separator: `14:10`, `7.30.15`
    t24: Regex,
    /// Undelimited 24-hour: `1410`
    hhmm: Regex,
    /// 12-hour with separator and am/pm: `2 pm`, `2:30 pm`, `2.30.15 pm`
    t12: Regex,
    /// Undelimited 12-hour: `210pm`
    hmm_ampm: Regex,
    /// Bare hour or hour:minute, 24-hour default: `5`, `5:30`
    bare: Regex,
    /// Cheap shape test for the clock rule.
    clock_shape: Regex,
    /// `until <rest>` / `u <rest>`
    until: Regex,
}

fn patterns() -> &'static TimePatterns {
    static PATTERNS: OnceLock<TimePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TimePatterns {
        t24: Regex::new(r"^([01]?\d|2[0-3])[:.]([0-5]\d)(?:[:.]([0-5]\d))?$").unwrap(),
        hhmm: Regex::new(r"^([01]?\d|2[0-3])([0-5]\d)$").unwrap(),
        t12: Regex::new(r"^(\d{1,2})(?:[:.]([0-5]\d))?(?:[:.]([0-5]\d))?\s*(am|pm)$").unwrap(),
        hmm_ampm: Regex::new(r"^(\d{1,2})([0-5]\d)\s*(am|pm)$").unwrap(),
        bare: Regex::new(r"^(\d{1,2})(?:[:.]([0-5]\d))?$").unwrap(),
        clock_shape: Regex::new(
            r"^(?:\d{1,2}(?:[:.][0-5]\d){1,2}\s*(?:am|pm)?|\d{1,2}(?:[0-5]\d)?\s*(?:am|pm))$",
        )
        .unwrap(),
        until: Regex::new(r"^(?:until|u)\s+(.+)$").unwrap(),
    })
}

fn to_u32(s: &str) -> u32 {
    // Capture groups are 1-2 digits, so this cannot fail or overflow.
    s.parse().unwrap_or(0)
}

/// Normalize a time-of-day phrase to its canonical spelling, without the
/// `until ` prefix. Returns `None` when the phrase is not a clock time or
/// an hour field is out of range (12-hour: 1-12, 24-hour: 0-23).
pub fn normalize_time_of_day(input: &str) -> Option<String> {
    let t = input.trim().to_ascii_lowercase();
    let p = patterns();

    if let Some(cap) = p.t24.captures(&t) {
        let hh = to_u32(&cap[1]);
        let mm = to_u32(&cap[2]);
        return Some(match cap.get(3) {
            Some(ss) => format!("{}:{}:{}", pad2(hh), pad2(mm), pad2(to_u32(ss.as_str()))),
            None => format!("{}:{}", pad2(hh), pad2(mm)),
        });
    }

    if let Some(cap) = p.hhmm.captures(&t) {
        let hh = to_u32(&cap[1]);
        let mm = to_u32(&cap[2]);
        return Some(format!("{}:{}", pad2(hh), pad2(mm)));
    }

    if let Some(cap) = p.t12.captures(&t) {
        let h = to_u32(&cap[1]);
        if !(1..=12).contains(&h) {
            return None;
        }
        let mm = cap.get(2).map(|m| to_u32(m.as_str())).unwrap_or(0);
        let ampm = &cap[4];
        return Some(match cap.get(3) {
            Some(ss) => format!("{h}:{}:{} {ampm}", pad2(mm), pad2(to_u32(ss.as_str()))),
            None if mm == 0 => format!("{h} {ampm}"),
            None => format!("{h}:{} {ampm}", pad2(mm)),
        });
    }

    if let Some(cap) = p.hmm_ampm.captures(&t) {
        let h = to_u32(&cap[1]);
        if !(1..=12).contains(&h) {
            return None;
        }
        let mm = to_u32(&cap[2]);
        let ampm = &cap[3];
        return Some(format!("{h}:{} {ampm}", pad2(mm)));
    }

    if let Some(cap) = p.bare.captures(&t) {
        let h = to_u32(&cap[1]);
        if h > 23 {
            return None;
        }
        let mm = cap.get(2).map(|m| to_u32(m.as_str())).unwrap_or(0);
        return Some(format!("{h}:{}", pad2(mm)));
    }

    None
}

/// `noon` / `midnight` literal test.
pub fn matches_noon_midnight(input: &str) -> bool {
    let t = input.trim();
    t.eq_ignore_ascii_case("noon") || t.eq_ignore_ascii_case("midnight")
}

pub fn parse_noon_midnight(input: &str) -> Option<String> {
    let t = input.trim();
    if t.eq_ignore_ascii_case("noon") {
        Some("until 12 noon".to_string())
    } else if t.eq_ignore_ascii_case("midnight") {
        Some("until 12 midnight".to_string())
    } else {
        None
    }
}

/// Explicit `until `/`u ` prefix test.
pub fn matches_until(input: &str) -> bool {
    patterns()
        .until
        .is_match(&input.trim().to_ascii_lowercase())
}

/// Strip the `until`/`u` prefix, normalize the remainder as a clock time,
/// and re-prefix the canonical `until `.
pub fn parse_until(input: &str) -> Option<String> {
    let lower = input.trim().to_ascii_lowercase();
    let cap = patterns().until.captures(&lower)?;
    let normalized = normalize_time_of_day(&cap[1])?;
    Some(format!("until {normalized}"))
}

/// Clock-time shape test: separator or am/pm required.
pub fn matches_clock(input: &str) -> bool {
    patterns()
        .clock_shape
        .is_match(&input.trim().to_ascii_lowercase())
}

/// An un-prefixed clock time is still a deadline, so the canonical form is
/// wrapped in `until `.
pub fn parse_clock(input: &str) -> Option<String> {
    if !matches_clock(input) {
        return None;
    }
    let normalized = normalize_time_of_day(input)?;
    Some(format!("until {normalized}"))
}
