//! Letter-prefixed numeric tokens
//!
//! A token is 1-4 ASCII letters followed by 1-4 ASCII digits, e.g. `A009`
//! or `FxYz123`. The digits are always read as base 10; leading zeros only
//! fix the printed width.

use crate::error::{TokenError, TokenResult};
use crate::sequence::Sequence;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum number of letters in a prefix
pub const MAX_PREFIX_LEN: usize = 4;

/// Maximum number of digits in a suffix
pub const MAX_SUFFIX_LEN: usize = 4;

fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        Regex::new(&format!(
            r"\A(?P<prefix>[A-Za-z]{{1,{MAX_PREFIX_LEN}}})(?P<suffix>[0-9]{{1,{MAX_SUFFIX_LEN}}})\z"
        ))
        .expect("token grammar is a valid regex")
    })
}

/// A validated token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token {
    prefix: String,
    value: u16,
    width: u8,
}

impl Token {
    /// Parses a token, rejecting anything outside the grammar.
    ///
    /// No trimming is done: `" A1"` and `"A1\n"` are malformed.
    pub fn parse(input: &str) -> TokenResult<Self> {
        if input.is_empty() {
            return Err(TokenError::Empty);
        }

        let caps = grammar()
            .captures(input)
            .ok_or_else(|| TokenError::malformed(input))?;
        let prefix = &caps["prefix"];
        let suffix = &caps["suffix"];

        // At most four ASCII digits, so this cannot fail.
        let value = suffix
            .parse::<u16>()
            .map_err(|_| TokenError::malformed(input))?;

        Ok(Self {
            prefix: prefix.to_string(),
            value,
            width: suffix.len() as u8,
        })
    }

    /// The letter prefix, case as supplied
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The numeric value of the suffix
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Number of digits the suffix is printed with
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// The suffix as printed, zero-padded to [`Token::width`]
    #[must_use]
    pub fn suffix(&self) -> String {
        format!("{:0width$}", self.value, width = self.width())
    }

    /// Returns the next token in sequence.
    ///
    /// The prefix is kept untouched. The suffix keeps its width unless the
    /// new value needs more digits (`A9` -> `A10`). A value that would need
    /// five digits wraps to zeros at the original width (`A9999` -> `A0000`).
    #[must_use]
    pub fn successor(&self) -> Self {
        let next = u32::from(self.value) + 1;
        let digits = next.to_string().len();

        if digits > MAX_SUFFIX_LEN {
            tracing::debug!(token = %self, "suffix overflow, wrapping to zero");
            return Self {
                prefix: self.prefix.clone(),
                value: 0,
                width: self.width,
            };
        }

        Self {
            prefix: self.prefix.clone(),
            value: next as u16,
            width: self.width.max(digits as u8),
        }
    }

    /// Endless iterator over the tokens following this one
    #[must_use]
    pub fn successors(&self) -> Sequence {
        Sequence::starting_after(self.clone())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.prefix,
            self.value,
            width = self.width()
        )
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Token {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Token {
    type Error = TokenError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}
