//! Error types for the typed token API

use thiserror::Error;

/// Result type for token parsing
pub type TokenResult<T> = Result<T, TokenError>;

/// Reasons a string is not a token.
///
/// Only the typed API reports these. The sentinel API in
/// [`crate::increment`] collapses every variant into [`crate::SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Empty input
    #[error("Empty token")]
    Empty,

    /// Input does not match 1-4 letters followed by 1-4 digits
    #[error("Malformed token: {input:?} (expected 1-4 letters followed by 1-4 digits)")]
    Malformed {
        /// The rejected input
        input: String,
    },
}

impl TokenError {
    /// Create a malformed token error
    #[must_use]
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
        }
    }
}
