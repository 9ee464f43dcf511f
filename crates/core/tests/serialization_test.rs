//! Serialization tests for Outcome.
//!
//! An Outcome serializes as an externally tagged enum. A Failure keeps only
//! the rendered message of its cause.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io;

use outcome_core::{Error, Fatal, Outcome};
use serde_json::json;

#[test]
fn test_success_serializes_as_tagged_value() {
    let value = serde_json::to_value(Outcome::success(42)).unwrap();
    assert_eq!(value, json!({ "Success": 42 }));
}

#[test]
fn test_failure_serializes_cause_message() {
    let outcome = Outcome::<i32>::failure(io::Error::other("disk full"));
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value, json!({ "Failure": "disk full" }));
}

#[test]
fn test_success_round_trip_is_equal() {
    let outcome = Outcome::success(vec!["a".to_string(), "b".to_string()]);
    let text = serde_json::to_string(&outcome).unwrap();
    let back: Outcome<Vec<String>> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn test_failure_round_trip_keeps_message_not_identity() {
    let outcome = Outcome::<u8>::failure(Error::predicate_failed(&3));
    let text = serde_json::to_string(&outcome).unwrap();
    let back: Outcome<u8> = serde_json::from_str(&text).unwrap();

    assert!(back.is_failure());
    assert_ne!(back, outcome);
    assert_eq!(
        back.cause().unwrap().to_string(),
        outcome.cause().unwrap().to_string()
    );
    assert_eq!(
        back.cause().unwrap().downcast_ref::<Error>(),
        Some(&Error::Message("predicate does not hold for 3".to_string()))
    );
}

#[test]
fn test_deserialized_failure_text_is_never_fatal() {
    let back: Outcome<u8> =
        serde_json::from_value(json!({ "Failure": Fatal::interrupted("x").to_string() })).unwrap();
    assert!(back.is_failure());
    assert!(!back.cause().unwrap().is::<Fatal>());
}

#[test]
fn test_unknown_variant_is_rejected() {
    let result = serde_json::from_value::<Outcome<u8>>(json!({ "Pending": 1 }));
    assert!(result.is_err());
}
