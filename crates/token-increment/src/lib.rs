//! Token Increment - next-in-sequence for letter-prefixed numeric tokens
//!
//! A token is 1-4 ASCII letters followed by 1-4 ASCII digits (`A009`,
//! `fx001`, `ABCD1234`). Incrementing keeps the prefix exactly as written
//! and bumps the digits:
//!
//! - fixed width is preserved: `A009` -> `A010`
//! - a carry may add one digit: `A99` -> `A100`
//! - five digits never appear: `A9999` -> `A0000`
//!
//! # Example
//!
//! ```rust
//! use token_increment::prelude::*;
//!
//! // Sentinel API: total over any input
//! assert_eq!(increment("FxYz123"), "FxYz124");
//! assert_eq!(increment("A 1"), SENTINEL);
//! assert_eq!(increment_value(&serde_json::json!(42)), SENTINEL);
//!
//! // Typed API
//! let token = Token::parse("inv098").unwrap();
//! let next: Vec<String> = token.successors().take(3).map(|t| t.to_string()).collect();
//! assert_eq!(next, ["inv099", "inv100", "inv101"]);
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod batch;
mod error;
pub mod increment;
pub mod sequence;
pub mod token;

pub use batch::{BatchEntry, BatchReport, InputMode};
pub use error::{TokenError, TokenResult};
pub use increment::{
    evaluate, evaluate_str, increment, increment_opt, increment_value, try_increment, Outcome,
    SENTINEL,
};
pub use sequence::Sequence;
pub use token::{Token, MAX_PREFIX_LEN, MAX_SUFFIX_LEN};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::batch::{BatchEntry, BatchReport, InputMode};
    pub use crate::error::{TokenError, TokenResult};
    pub use crate::increment::{
        increment, increment_opt, increment_value, try_increment, Outcome, SENTINEL,
    };
    pub use crate::sequence::Sequence;
    pub use crate::token::Token;
}
