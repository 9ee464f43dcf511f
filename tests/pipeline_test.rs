//! Integration tests for Outcome pipelines through the prelude.
//!
//! These tests verify that:
//! - A chain of combinators short-circuits on the first failure
//! - Recovery turns a failure back into a value
//! - Outcomes interoperate with `?`-based code

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::num::ParseIntError;

use outcome::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

fn parse_port(raw: &str) -> Outcome<u16> {
    Outcome::try_of(|| raw.trim().parse::<u16>()).filter(|port| *port >= 1024)
}

fn lookup<'a>(settings: &HashMap<&str, &'a str>, key: &str) -> Outcome<&'a str> {
    Outcome::of(|| {
        settings
            .get(key)
            .copied()
            .unwrap_or_else(|| panic!("missing setting {key}"))
    })
}

/// Test that a valid setting flows through every stage.
///
/// # GIVEN
/// A settings map with a valid port
///
/// # WHEN
/// The port is looked up, parsed, filtered and formatted
///
/// # THEN
/// The pipeline yields the formatted address
#[test]
fn test_pipeline_success() {
    let settings = HashMap::from([("port", "8080")]);

    let address = lookup(&settings, "port")
        .flat_map(parse_port)
        .map(|port| format!("127.0.0.1:{port}"));

    assert_eq!(address, Outcome::success("127.0.0.1:8080".to_string()));
    assert_eq!(address.to_string(), "Success(127.0.0.1:8080)");
}

/// Test that the first failing stage decides the cause.
///
/// # GIVEN
/// A settings map with a privileged port
///
/// # WHEN
/// The pipeline runs
///
/// # THEN
/// The filter failure is reported and later stages never run
#[test]
fn test_pipeline_short_circuits() {
    let settings = HashMap::from([("port", "80")]);
    let mut formatted = false;

    let address = lookup(&settings, "port")
        .flat_map(parse_port)
        .map(|port| {
            formatted = true;
            format!("127.0.0.1:{port}")
        });

    assert!(!formatted);
    assert_eq!(
        address.cause().unwrap().to_string(),
        "predicate does not hold for 80"
    );
}

/// Test that a missing key, a panic inside `lookup`, becomes a failure.
#[test]
fn test_pipeline_missing_setting() {
    init_tracing();
    let settings: HashMap<&str, &str> = HashMap::new();

    let port = lookup(&settings, "port").flat_map(parse_port);

    assert!(port.is_failure());
    assert_eq!(
        port.cause().unwrap().to_string(),
        "computation panicked: missing setting port"
    );
    assert_eq!(port.or_default_logged(8080), 8080);
}

/// Test recovery of a parse error with `transform`.
#[test]
fn test_pipeline_recovers_parse_error() {
    let port = parse_port("not-a-port").transform(Outcome::success, |cause| {
        if cause.is::<ParseIntError>() {
            Outcome::success(8080)
        } else {
            Outcome::failure(cause)
        }
    });

    assert_eq!(port.get(), Ok(&8080));
}

/// Test that an Outcome feeds `?`-based code through `or_else_throw`.
#[test]
fn test_pipeline_with_question_mark() {
    fn total(raw: &[&str]) -> std::result::Result<u32, Cause> {
        raw.iter().try_fold(0_u32, |acc, item| {
            let port = parse_port(item).or_else_throw()?;
            Ok(acc + u32::from(port))
        })
    }

    assert_eq!(total(&["2000", "3000"]).unwrap(), 5000);
    assert!(total(&["2000", "oops"]).unwrap_err().is::<ParseIntError>());
}

/// Test that accessor misuse is a typed error, not an application failure.
#[test]
fn test_accessor_misuse_is_typed() {
    let port = parse_port("9000");
    let err = port.cause().unwrap_err();
    assert_eq!(
        err,
        Error::NoSuchElement {
            operation: "cause() on Success"
        }
    );
}
