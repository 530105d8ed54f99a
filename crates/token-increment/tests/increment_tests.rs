//! Behaviour of the sentinel API over its whole input domain

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use token_increment::{increment, increment_opt, increment_value, SENTINEL};

#[test]
fn case_is_preserved() {
    assert_eq!(increment("fx001"), "fx002");
    assert_eq!(increment("FxYz123"), "FxYz124");
    assert_ne!(increment("Zz100"), "ZZ101");
}

#[test]
fn padding_is_preserved() {
    assert_eq!(increment("A009"), "A010");
    assert_eq!(increment("F001"), "F002");
}

#[test]
fn carry_grows_the_suffix() {
    assert_eq!(increment("A9"), "A10");
    assert_eq!(increment("A99"), "A100");
    assert_eq!(increment("A999"), "A1000");
}

#[test]
fn overflow_resets_to_zeros() {
    assert_eq!(increment("A9999"), "A0000");
    assert_eq!(increment("ZZ9999"), "ZZ0000");
}

#[test]
fn boundary_shapes_are_accepted() {
    assert_eq!(increment("A1"), "A2");
    assert_eq!(increment("ABCD1234"), "ABCD1235");
}

#[test]
fn leading_zeros_are_decimal() {
    assert_eq!(increment("A010"), "A011");
    assert_eq!(increment("A0017"), "A0018");
}

#[test]
fn malformed_strings_are_rejected() {
    for input in ["", "ABC", "123", "ABCDE1", "A12345", "A1B2", "A-1", "A 1"] {
        assert_eq!(increment(input), SENTINEL, "{input:?}");
    }
}

#[test]
fn non_string_values_are_rejected() {
    assert_eq!(increment_opt(None), SENTINEL);
    for value in [
        json!(null),
        json!(7),
        json!(-3.25),
        json!(false),
        json!({ "prefix": "A", "suffix": "1" }),
        json!(["A", 1]),
    ] {
        assert_eq!(increment_value(&value), SENTINEL, "{value}");
    }
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| increment("A099")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "A100");
    }
}
