//! Sentinel-returning increment entry points
//!
//! These functions are total: they never panic and never return an error.
//! Every rejected input, whatever the reason, produces [`SENTINEL`].

use crate::error::TokenResult;
use crate::token::Token;
use serde_json::Value;

/// Output for every invalid input
///
/// It carries no digit suffix, so the success path can never produce it.
pub const SENTINEL: &str = "Error";

/// Result of evaluating one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was a valid token; holds its successor
    Next(Token),
    /// Input was rejected
    Invalid,
}

impl Outcome {
    /// Returns true if the input was rejected
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// The successor token, if any
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        match self {
            Self::Next(token) => Some(token),
            Self::Invalid => None,
        }
    }

    /// The string form: the successor token or [`SENTINEL`]
    #[must_use]
    pub fn as_output(&self) -> String {
        match self {
            Self::Next(token) => token.to_string(),
            Self::Invalid => SENTINEL.to_string(),
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.as_output()
    }
}

/// Typed increment: the successor of `input`, or why it is not a token
pub fn try_increment(input: &str) -> TokenResult<Token> {
    Token::parse(input).map(|token| token.successor())
}

/// Evaluates a string input
#[must_use]
pub fn evaluate_str(input: &str) -> Outcome {
    match try_increment(input) {
        Ok(token) => Outcome::Next(token),
        Err(err) => {
            tracing::debug!(error = %err, "rejected input");
            Outcome::Invalid
        }
    }
}

/// Evaluates an arbitrary value; only JSON strings can succeed
#[must_use]
pub fn evaluate(input: &Value) -> Outcome {
    match input {
        Value::String(s) => evaluate_str(s),
        other => {
            tracing::debug!(kind = value_kind(other), "rejected non-string input");
            Outcome::Invalid
        }
    }
}

/// Increments a token string, e.g. `"A009"` -> `"A010"`
///
/// ```rust
/// use token_increment::{increment, SENTINEL};
///
/// assert_eq!(increment("A009"), "A010");
/// assert_eq!(increment("A9"), "A10");
/// assert_eq!(increment("A9999"), "A0000");
/// assert_eq!(increment("A-1"), SENTINEL);
/// ```
#[must_use]
pub fn increment(input: &str) -> String {
    evaluate_str(input).as_output()
}

/// Increments a possibly-omitted input; `None` yields [`SENTINEL`]
#[must_use]
pub fn increment_opt(input: Option<&str>) -> String {
    input.map_or_else(|| SENTINEL.to_string(), increment)
}

/// Increments a dynamically-typed input
///
/// Null, numbers, booleans, arrays and objects all yield [`SENTINEL`].
#[must_use]
pub fn increment_value(input: &Value) -> String {
    evaluate(input).as_output()
}

/// Short name of a JSON value's kind, for log fields
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
