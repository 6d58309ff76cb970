//! Canonical tests loaded from YAML fixtures
//!
//! Each case runs twice over:
//! 1. Canonical: exact input, expected outcome (and dump text, if given)
//! 2. Reformat variations: the parsed tree is re-dumped with a random
//!    indentation config and re-parsed; the result must be structurally
//!    identical. This exercises the line-oriented machine against many
//!    physical layouts of the same document.

mod common;

use common::{load_fixtures_by_name, Expect, Gen, TestCase};
use ljson_core::parse;

fn run_case(case: &TestCase) -> Result<(), String> {
    let result = parse(&case.json);
    match (case.expect, result) {
        (Expect::Ok, Err(err)) => Err(format!("expected success, got: {err}")),
        (Expect::Error, Ok(node)) => {
            Err(format!("expected failure, parsed: {}", node.dump_to_string()))
        }
        (Expect::Error, Err(_)) => Ok(()),
        (Expect::Ok, Ok(node)) => {
            if let Some(expected) = &case.dump {
                let actual = node.dump_to_string();
                if actual.trim_end() != expected.trim_end() {
                    return Err(format!(
                        "dump mismatch\n--- expected ---\n{expected}\n--- actual ---\n{actual}",
                    ));
                }
            }
            Ok(())
        }
    }
}

fn run_variations(case: &TestCase, gen: &mut Gen) -> Result<(), String> {
    if case.expect != Expect::Ok {
        return Ok(());
    }
    let node = parse(&case.json).map_err(|e| format!("canonical parse failed: {e}"))?;
    let count = 1 + gen.geometric(0.6);
    for i in 0..count {
        let cfg = gen.indent_config();
        let reflowed = node.dump_to_string_with(&cfg);
        let reparsed = parse(&reflowed).map_err(|e| {
            format!("variation {i} (pad {:?}, width {}) failed: {e}\ninput:\n{reflowed}", cfg.pad, cfg.width)
        })?;
        if reparsed != node {
            return Err(format!(
                "variation {i} (pad {:?}, width {}) changed the tree\ninput:\n{reflowed}",
                cfg.pad, cfg.width,
            ));
        }
    }
    Ok(())
}

/// Run canonical tests and variations for a fixture file
fn run_fixture(name: &str) {
    let cases = load_fixtures_by_name(name);
    assert!(!cases.is_empty(), "fixture file {name} is empty");

    let mut gen = Gen::from_env_or_random();
    let mut failures = Vec::new();

    for case in &cases {
        if let Err(msg) = run_case(case) {
            failures.push(format!("{}::{} - {}", name, case.id, msg));
        }
        if let Err(msg) = run_variations(case, &mut gen) {
            failures.push(format!("{}::{} - {}", name, case.id, msg));
        }
    }

    if !failures.is_empty() {
        panic!(
            "\n{} tests failed:\n  {}\n\nSeed: {} (set LJSON_TEST_SEED={} to reproduce)",
            failures.len(),
            failures.join("\n  "),
            gen.seed,
            gen.seed,
        );
    }
}

#[test]
fn test_objects() {
    run_fixture("objects");
}

#[test]
fn test_arrays() {
    run_fixture("arrays");
}

#[test]
fn test_errors() {
    run_fixture("errors");
}
