//! The classification rules and their fixed precedence order.
//!
//! Each rule is a matcher plus a normalizer for one phrase shape. `matches`
//! is a cheap, possibly over-approximate shape test; `parse` is the
//! authoritative attempt and may still decline (`None`) after `matches`
//! said yes — the resolver then simply moves on to the next rule.
//!
//! Precedence is part of the contract, not configuration, so the rule set
//! is a closed enum in a fixed list rather than an extensible registry.
//! Two orderings carry the whole disambiguation story: durations come
//! before the clock rule (a bare `5` is five minutes, `5:30` is a
//! minutes-seconds duration, neither is a time of day), and the combined
//! date-time rule comes before both so `Jan 1 at 2 pm` is not torn apart.

pub mod combined;
pub mod date;
pub mod duration;
pub mod time;
pub mod weekday;

/// One classification rule. The set of kinds is closed; see [`rule_set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Explicit `until <time>` / `u <time>` deadline.
    UntilPrefix,
    /// Literal `noon` / `midnight`.
    NoonMidnight,
    /// Date/weekday/`tomorrow` combined with a clock time.
    CombinedDateTime,
    /// `5:30`, `7.30.00` — colon/dot duration groups.
    GroupedDuration,
    /// `1h 5m`, `7 hours 30 minutes` — unit-token duration.
    UnitDuration,
    /// Bare integer as whole minutes.
    BareMinutes,
    /// `2 pm`, `14:10` behind a prefix — time of day.
    ClockTime,
    /// `1/1/2019` — numeric slash date.
    NumericDate,
    /// `January 1, 2019` / `1 Jan` — long-form date.
    LongDate,
    /// `Jan1` — compact month-day.
    CompactDate,
    /// `Wednesday next week` / `Thu after next`.
    RelativeWeekday,
    /// Bare weekday name or prefix.
    Weekday,
    /// Literal `tomorrow`.
    Tomorrow,
}

impl Rule {
    /// Stable rule name, for diagnostics and tests.
    pub fn name(self) -> &'static str {
        match self {
            Rule::UntilPrefix => "until-prefix",
            Rule::NoonMidnight => "noon-midnight",
            Rule::CombinedDateTime => "combined-date-time",
            Rule::GroupedDuration => "grouped-duration",
            Rule::UnitDuration => "unit-duration",
            Rule::BareMinutes => "bare-minutes",
            Rule::ClockTime => "clock-time",
            Rule::NumericDate => "numeric-date",
            Rule::LongDate => "long-date",
            Rule::CompactDate => "compact-date",
            Rule::RelativeWeekday => "relative-weekday",
            Rule::Weekday => "weekday",
            Rule::Tomorrow => "tomorrow",
        }
    }

    /// Cheap membership test for this rule's phrase shape.
    pub fn matches(self, input: &str) -> bool {
        match self {
            Rule::UntilPrefix => time::matches_until(input),
            Rule::NoonMidnight => time::matches_noon_midnight(input),
            Rule::CombinedDateTime => combined::matches(input),
            Rule::GroupedDuration => duration::matches_grouped(input),
            Rule::UnitDuration => duration::matches_units(input),
            Rule::BareMinutes => duration::matches_bare_minutes(input),
            Rule::ClockTime => time::matches_clock(input),
            Rule::NumericDate => date::matches_numeric(input),
            Rule::LongDate => date::matches_long(input),
            Rule::CompactDate => date::matches_compact(input),
            Rule::RelativeWeekday => weekday::matches_relative(input),
            Rule::Weekday => weekday::matches_weekday(input),
            Rule::Tomorrow => weekday::matches_tomorrow(input),
        }
    }

    /// Authoritative parse: the canonical string, or `None` when this rule
    /// does not apply after all.
    pub fn parse(self, input: &str) -> Option<String> {
        match self {
            Rule::UntilPrefix => time::parse_until(input),
            Rule::NoonMidnight => time::parse_noon_midnight(input),
            Rule::CombinedDateTime => combined::parse(input),
            Rule::GroupedDuration => duration::parse_grouped(input),
            Rule::UnitDuration => duration::parse_units(input),
            Rule::BareMinutes => duration::parse_bare_minutes(input),
            Rule::ClockTime => time::parse_clock(input),
            Rule::NumericDate => date::parse_numeric(input),
            Rule::LongDate => date::parse_long(input),
            Rule::CompactDate => date::parse_compact(input),
            Rule::RelativeWeekday => weekday::parse_relative(input),
            Rule::Weekday => weekday::parse_weekday(input),
            Rule::Tomorrow => weekday::parse_tomorrow(input),
        }
    }
}

/// The fixed rule order, most specific and least ambiguous first.
pub fn rule_set() -> &'static [Rule] {
    &[
        Rule::UntilPrefix,
        Rule::NoonMidnight,
        Rule::CombinedDateTime,
        Rule::GroupedDuration,
        Rule::UnitDuration,
        Rule::BareMinutes,
        Rule::ClockTime,
        Rule::NumericDate,
        Rule::LongDate,
        Rule::CompactDate,
        Rule::RelativeWeekday,
        Rule::Weekday,
        Rule::Tomorrow,
    ]
}
