//! Iteration over successive tokens

use crate::error::TokenResult;
use crate::token::Token;

/// Endless iterator of successive tokens.
///
/// Wraps at overflow exactly like [`Token::successor`], so it never ends;
/// bound it with [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct Sequence {
    current: Token,
}

impl Sequence {
    /// Starts a sequence whose first item is the successor of `token`
    #[must_use]
    pub const fn starting_after(token: Token) -> Self {
        Self { current: token }
    }

    /// Parses `input` and starts a sequence after it
    pub fn parse(input: &str) -> TokenResult<Self> {
        Token::parse(input).map(Self::starting_after)
    }

    /// The most recently yielded token (the start token before any call
    /// to `next`)
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }
}

impl Iterator for Sequence {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.current.successor();
        Some(self.current.clone())
    }
}
