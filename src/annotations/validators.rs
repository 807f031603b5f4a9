//! Validation strategies for raw annotation values
//!
//! Three reusable archetypes cover every field in a registry: boolean
//! spellings, regex-constrained strings, and enumerated options. A validator
//! never fails hard; it reports acceptance or rejection through [`Outcome`]
//! and leaves conversion to the extraction engine.

/// Result of checking a raw annotation value.
///
/// `Accepted` carries the normalized form of the value (canonical casing for
/// booleans and options, the raw string for regex matches). `Rejected` means
/// the value is syntactically invalid for the field; the extraction engine
/// reacts by falling back to the field's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(String),
    Rejected,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

/// Validation strategy attached to a field definition.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Accepts exactly `"true"` or `"false"`, case-insensitively, and
    /// normalizes to the lowercase spelling.
    Bool,

    /// Accepts a value iff it matches `pattern`. Patterns are expected to be
    /// anchored (`^...$`) when a full match is intended. With `allow_empty`,
    /// the empty string is accepted regardless of the pattern.
    Regex {
        pattern: regex::Regex,
        allow_empty: bool,
    },

    /// Accepts a value iff it equals one of `allowed`, normalizing to the
    /// canonical allowed-list spelling when matching case-insensitively.
    /// `allow_empty` accepts the empty string separately from the set.
    Options {
        allowed: &'static [&'static str],
        case_sensitive: bool,
        allow_empty: bool,
    },
}

impl Validator {
    /// Checks a raw annotation value against this strategy.
    ///
    /// An empty string is a value like any other: it is accepted only when
    /// the strategy's configuration says so, never because it resembles a
    /// missing annotation.
    pub fn check(&self, raw: &str) -> Outcome {
        match self {
            Validator::Bool => match raw.to_ascii_lowercase().as_str() {
                spelling @ ("true" | "false") => Outcome::Accepted(spelling.to_string()),
                _ => Outcome::Rejected,
            },

            Validator::Regex {
                pattern,
                allow_empty,
            } => {
                if raw.is_empty() && *allow_empty {
                    return Outcome::Accepted(String::new());
                }
                if pattern.is_match(raw) {
                    Outcome::Accepted(raw.to_string())
                } else {
                    Outcome::Rejected
                }
            }

            Validator::Options {
                allowed,
                case_sensitive,
                allow_empty,
            } => {
                if raw.is_empty() && *allow_empty {
                    return Outcome::Accepted(String::new());
                }
                for option in *allowed {
                    let matched = if *case_sensitive {
                        raw == *option
                    } else {
                        raw.eq_ignore_ascii_case(option)
                    };
                    if matched {
                        return Outcome::Accepted((*option).to_string());
                    }
                }
                Outcome::Rejected
            }
        }
    }
}
