//! Value types crossing the validator boundary.

use serde::{Deserialize, Serialize};

/// The two-outcome result of validating an argument list.
///
/// Serializes with the exact wire field names the launcher layer expects:
/// `{"result": bool, "timeStrings": [...]}`. `result == false` implies
/// `time_strings` is empty; `result == true` carries either no strings
/// (empty/help no-op input) or exactly one canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub result: bool,
    #[serde(rename = "timeStrings")]
    pub time_strings: Vec<String>,
}

impl ValidationResult {
    /// A valid result carrying one canonical string.
    pub fn valid(time_string: String) -> Self {
        Self {
            result: true,
            time_strings: vec![time_string],
        }
    }

    /// A valid no-op result (empty input, help flag) with no strings.
    pub fn valid_empty() -> Self {
        Self {
            result: true,
            time_strings: Vec::new(),
        }
    }

    /// The invalid outcome.
    pub fn invalid() -> Self {
        Self {
            result: false,
            time_strings: Vec::new(),
        }
    }
}

/// The outcome of full ambiguity resolution, including implicit-title
/// peeling (see [`crate::resolver::resolve_args`]).
///
/// Unlike [`ValidationResult`], this reports which part of the input was
/// treated as a timer title and what expression was actually classified —
/// the launcher needs both to build the downstream command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Whether any interpretation of the input classified successfully.
    pub valid: bool,
    /// The explicit `--title` value or the implicitly peeled title, if any.
    pub title: Option<String>,
    /// The expression that was classified (title removed).
    pub expression: String,
    /// The canonical string, when `valid` and the input was not a no-op.
    pub time_string: Option<String>,
}

impl Resolution {
    pub fn invalid(expression: String, title: Option<String>) -> Self {
        Self {
            valid: false,
            title,
            expression,
            time_string: None,
        }
    }
}
