//! Entry points: boundary validation and title-ambiguity resolution.
//!
//! [`validate_args`] is the wire boundary: empty/help no-ops, explicit
//! `--title` stripping, then classification under the fixed rule order.
//! It never second-guesses the expression, so `5:30 pizza` is invalid here.
//!
//! [`resolve_args`] layers the launcher-side heuristics on top: when the
//! expression as a whole does not classify, a trailing token, a leading
//! token, or a quoted substring may really be a timer title. Each candidate
//! peel is re-classified and the first one that works wins.

use regex::Regex;
use std::sync::OnceLock;

use crate::rules::rule_set;
use crate::types::{Resolution, ValidationResult};

fn double_quoted() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""([^"]*)""#).unwrap())
}

fn single_quoted() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"'([^']*)'").unwrap())
}

/// Classify one trimmed expression under the fixed rule order.
///
/// The first rule whose `matches` and `parse` both succeed produces the
/// canonical string. A rule that matches but declines to parse does not
/// abort the walk.
pub fn classify(expression: &str) -> Option<String> {
    let expr = expression.trim();
    if expr.is_empty() {
        return None;
    }
    for rule in rule_set() {
        if rule.matches(expr) {
            if let Some(canonical) = rule.parse(expr) {
                return Some(canonical);
            }
        }
    }
    None
}

/// Remove every `--title <value>` pair from the argument list, joining what
/// remains into the expression. Returns the expression and the last
/// explicit title value, if any.
fn strip_title_args(args: &[String]) -> (String, Option<String>) {
    let mut parts: Vec<&str> = Vec::with_capacity(args.len());
    let mut title = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--title" {
            if let Some(value) = iter.next() {
                title = Some(value.clone());
            }
        } else {
            parts.push(arg);
        }
    }
    (parts.join(" ").trim().to_string(), title)
}

fn is_help_flag(arg: &str) -> bool {
    arg.eq_ignore_ascii_case("--help") || arg == "/?"
}

/// Validate an argument list at the wire boundary.
///
/// Empty argv, a lone help flag, or an expression emptied by `--title`
/// stripping are valid no-ops with no time strings. Everything else either
/// classifies to exactly one canonical string or is invalid.
pub fn validate_args(args: &[String]) -> ValidationResult {
    if args.is_empty() {
        return ValidationResult::valid_empty();
    }
    if args.len() == 1 && is_help_flag(&args[0]) {
        return ValidationResult::valid_empty();
    }

    let (expression, _title) = strip_title_args(args);
    if expression.is_empty() {
        return ValidationResult::valid_empty();
    }

    match classify(&expression) {
        Some(canonical) => ValidationResult::valid(canonical),
        None => ValidationResult::invalid(),
    }
}

/// Resolve an argument list, peeling an implicit title when needed.
///
/// After explicit `--title` stripping, the expression is classified as-is.
/// When that fails and the expression is multi-token, three peels are tried
/// in order: the last token as title, the first token as title, and a
/// quoted substring (double quotes first, then single) as title. The first
/// peel whose remainder classifies wins.
pub fn resolve_args(args: &[String]) -> Resolution {
    let (expression, explicit_title) = strip_title_args(args);
    if expression.is_empty() {
        return Resolution {
            valid: true,
            title: explicit_title,
            expression,
            time_string: None,
        };
    }

    if let Some(canonical) = classify(&expression) {
        return Resolution {
            valid: true,
            title: explicit_title,
            expression,
            time_string: Some(canonical),
        };
    }

    let tokens: Vec<&str> = expression.split_whitespace().collect();
    if tokens.len() > 1 {
        // Last token as title, then first token as title.
        let last_peel = (
            tokens[tokens.len() - 1],
            tokens[..tokens.len() - 1].join(" "),
        );
        let first_peel = (tokens[0], tokens[1..].join(" "));
        for (title, remainder) in [last_peel, first_peel] {
            if let Some(canonical) = classify(&remainder) {
                return Resolution {
                    valid: true,
                    title: Some(title.to_string()),
                    expression: remainder,
                    time_string: Some(canonical),
                };
            }
        }

        // A quoted substring anywhere in the expression as title.
        for quoted in [double_quoted(), single_quoted()] {
            if let Some(cap) = quoted.captures(&expression) {
                let title = cap[1].to_string();
                let remainder = quoted.replace(&expression, "").trim().to_string();
                if let Some(canonical) = classify(&remainder) {
                    return Resolution {
                        valid: true,
                        title: Some(title),
                        expression: remainder,
                        time_string: Some(canonical),
                    };
                }
            }
        }
    }

    Resolution::invalid(expression, explicit_title)
}
