//! Property-based tests for the increment engine

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use token_increment::{increment, Token, SENTINEL};

// ===== Strategy definitions =====

/// Any valid token string
fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,4}[0-9]{1,4}"
}

/// Strings that carry at least one character outside the token alphabet
fn foreign_char_strategy() -> impl Strategy<Value = String> {
    ("[A-Za-z0-9]{0,4}", "[^A-Za-z0-9]", "[A-Za-z0-9]{0,4}")
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

fn is_token_shape(s: &str) -> bool {
    let letters = s.chars().take_while(char::is_ascii_alphabetic).count();
    let digits = &s[letters..];
    (1..=4).contains(&letters)
        && (1..=4).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
}

proptest! {
    /// Output of a valid token is itself a valid token
    #[test]
    fn prop_output_is_a_token(input in token_strategy()) {
        let out = increment(&input);
        prop_assert!(is_token_shape(&out), "{} -> {}", input, out);
        prop_assert!(Token::parse(&out).is_ok());
    }

    /// Prefix comes back byte-for-byte
    #[test]
    fn prop_prefix_preserved(input in token_strategy()) {
        let token = Token::parse(&input).unwrap();
        let out = increment(&input);
        prop_assert!(out.starts_with(token.prefix()));
        let after = Token::parse(&out).unwrap();
        prop_assert_eq!(after.prefix(), token.prefix());
    }

    /// Width is kept, grows by exactly one on carry, and never passes four
    #[test]
    fn prop_width_rules(input in token_strategy()) {
        let before = Token::parse(&input).unwrap();
        let after = Token::parse(&increment(&input)).unwrap();
        let needed = (u32::from(before.value()) + 1).to_string().len();

        prop_assert!(after.width() <= 4);
        if needed > 4 {
            prop_assert_eq!(after.value(), 0);
            prop_assert_eq!(after.width(), before.width());
        } else if needed > before.width() {
            prop_assert_eq!(after.width(), before.width() + 1);
        } else {
            prop_assert_eq!(after.width(), before.width());
        }
    }

    /// Value goes up by one, or wraps to zero from 9999
    #[test]
    fn prop_value_steps_by_one(input in token_strategy()) {
        let before = Token::parse(&input).unwrap();
        let after = Token::parse(&increment(&input)).unwrap();
        if before.value() == 9999 {
            prop_assert_eq!(after.value(), 0);
        } else {
            prop_assert_eq!(after.value(), before.value() + 1);
        }
    }

    /// Same input, same output
    #[test]
    fn prop_deterministic(input in ".*") {
        prop_assert_eq!(increment(&input), increment(&input));
    }

    /// Any character outside [A-Za-z0-9] is rejected
    #[test]
    fn prop_foreign_chars_rejected(input in foreign_char_strategy()) {
        prop_assert_eq!(increment(&input), SENTINEL);
    }

    /// Too many letters or digits is rejected
    #[test]
    fn prop_overlong_parts_rejected(
        letters in "[A-Za-z]{5,8}",
        digits in "[0-9]{1,4}",
        short in "[A-Za-z]{1,4}",
        long_digits in "[0-9]{5,8}",
    ) {
        prop_assert_eq!(increment(&format!("{letters}{digits}")), SENTINEL);
        prop_assert_eq!(increment(&format!("{short}{long_digits}")), SENTINEL);
    }

    /// Digits before letters is rejected
    #[test]
    fn prop_reversed_order_rejected(digits in "[0-9]{1,4}", letters in "[A-Za-z]{1,4}") {
        prop_assert_eq!(increment(&format!("{digits}{letters}")), SENTINEL);
    }
}
