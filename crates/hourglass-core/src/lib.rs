//! # hourglass-core
//!
//! Classifier for short natural-language time phrases — the validation
//! engine behind a launcher plugin for the Hourglass timer. Given a phrase
//! like `5:30`, `1h 5m`, `2 pm`, `Jan 1, 2019`, `Wednesday next week`, or
//! `January 1, 2019 at 2 pm`, it decides whether the phrase denotes a valid
//! point or span of time and produces one canonical English string for it.
//!
//! The engine is a single-shot, stateless classifier: an ordered set of
//! rules, a fixed tie-break order between competing readings (durations
//! outrank clock times, combined date-times outrank both), a brute-force
//! split search for phrases that carry both a date and a time, and a layer
//! of title-ambiguity heuristics for inputs like `5:30 pizza`. There is no
//! timezone model and no real calendar arithmetic — `tomorrow` and weekday
//! names are emitted as symbolic tokens, and nothing checks that `Feb 31`
//! exists.
//!
//! ## Quick start
//!
//! ```rust
//! use hourglass_core::validate_args;
//!
//! let result = validate_args(&["5:30".to_string()]);
//! assert!(result.result);
//! assert_eq!(result.time_strings, vec!["5 minutes 30 seconds"]);
//! ```
//!
//! ## Modules
//!
//! - [`rules`] — the thirteen rule kinds and their fixed precedence
//! - [`normalize`] — pluralization, duration/date formatting, name tables
//! - [`resolver`] — boundary validation and implicit-title resolution
//! - [`types`] — the `ValidationResult` wire record and `Resolution`

pub mod normalize;
pub mod resolver;
pub mod rules;
pub mod types;

pub use resolver::{classify, resolve_args, validate_args};
pub use rules::{rule_set, Rule};
pub use types::{Resolution, ValidationResult};
