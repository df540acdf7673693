//! Rule-Chain Invariant Tests
//!
//! - Clauses evaluate in declaration order with full short-circuit
//! - Compiled predicates are deterministic and snapshot-isolated
//! - The optional gate accepts falsy input before any later clause
//! - Evaluation is total: no input errors or panics

use gatekeeper::chain::{ChainError, RuleChain};
use gatekeeper::value::{Kind, NativeFn, Value};

use chrono::{TimeZone, Utc};
use regex::Regex;
use std::sync::Arc;

// =============================================================================
// Helper Functions
// =============================================================================

/// Every kind of value the clause catalogue can meet.
fn one_of_each_kind() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::from(true),
        Value::from(42),
        Value::from("hello"),
        Value::Array(vec![Value::from(1)]),
        Value::from(serde_json::json!({ "k": 1 })),
        Value::Date(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        Value::Pattern(Regex::new("test").unwrap()),
        Value::Function(Arc::new(|_: &[Value]| Value::Null) as NativeFn),
    ]
}

// =============================================================================
// Determinism
// =============================================================================

/// Same predicate, same value, same answer - every time.
#[test]
fn test_predicates_are_deterministic() {
    let predicate = RuleChain::new()
        .string()
        .length_between(3, 10)
        .unwrap()
        .not(["pedobear"])
        .compile();

    for value in one_of_each_kind() {
        let first = predicate.check(&value);
        for _ in 0..50 {
            assert_eq!(predicate.check(&value), first);
        }
    }
}

/// Checking never panics, whatever the kind of the input.
#[test]
fn test_evaluation_is_total_over_all_kinds() {
    let predicates = vec![
        RuleChain::new().length(3).compile(),
        RuleChain::new().above(10.0).compile(),
        RuleChain::new().have(["x"]).compile(),
        RuleChain::new().unique(["x"]).compile(),
        RuleChain::new().divides_by(2.0).unwrap().compile(),
        RuleChain::new().matches(Regex::new("x").unwrap()).compile(),
        RuleChain::new().lowercase().compile(),
        RuleChain::new().number_loose().compile(),
    ];

    for predicate in &predicates {
        for value in one_of_each_kind() {
            // Result is irrelevant here; not panicking is the contract.
            let _ = predicate.check(&value);
        }
    }
}

// =============================================================================
// Kind Checks
// =============================================================================

/// Each type clause accepts exactly its own kind.
#[test]
fn test_each_type_clause_accepts_exactly_one_kind() {
    let chains: Vec<(Kind, RuleChain)> = vec![
        (Kind::Undefined, RuleChain::new().undefined()),
        (Kind::Null, RuleChain::new().null()),
        (Kind::Bool, RuleChain::new().boolean()),
        (Kind::Number, RuleChain::new().number()),
        (Kind::String, RuleChain::new().string()),
        (Kind::Array, RuleChain::new().array()),
        (Kind::Object, RuleChain::new().object()),
        (Kind::Date, RuleChain::new().date()),
        (Kind::Pattern, RuleChain::new().regexp()),
        (Kind::Function, RuleChain::new().function()),
    ];

    for (kind, chain) in chains {
        let predicate = chain.compile();
        for value in one_of_each_kind() {
            assert_eq!(
                predicate.check(&value),
                value.kind() == kind,
                "kind clause for {} mis-handled a {} value",
                kind,
                value.kind()
            );
        }
    }
}

// =============================================================================
// Ordering and Short-Circuit
// =============================================================================

/// Length on a sequence of exactly n passes; n plus or minus one fails.
#[test]
fn test_length_off_by_one() {
    let predicate = RuleChain::new().length(3).compile();
    assert!(predicate.check(&Value::from("abc")));
    assert!(!predicate.check(&Value::from("ab")));
    assert!(!predicate.check(&Value::from("abcd")));

    assert!(predicate.check(&Value::Array(vec![Value::Null; 3])));
    assert!(!predicate.check(&Value::Array(vec![Value::Null; 2])));
    assert!(!predicate.check(&Value::Array(vec![Value::Null; 4])));
}

/// between(low, high) passes iff low < v < high.
#[test]
fn test_between_boundary_values() {
    let predicate = RuleChain::new().between(10.0, 15.0).compile();
    assert!(!predicate.check(&Value::from(10)));
    assert!(predicate.check(&Value::from(11)));
    assert!(predicate.check(&Value::from(14)));
    assert!(!predicate.check(&Value::from(15)));
}

/// An inverted between range compiles and simply never passes.
#[test]
fn test_inverted_between_is_always_false() {
    let predicate = RuleChain::new().between(15.0, 10.0).compile();
    for n in 0..30 {
        assert!(!predicate.check(&Value::from(n)));
    }
}

/// A failing early clause hides any passing later clause.
#[test]
fn test_first_failing_clause_decides() {
    // "42" would pass the equal clause if the strict number check did not
    // stop evaluation first.
    let predicate = RuleChain::new().number().equal("42").compile();
    assert!(!predicate.check(&Value::from("42")));
}

/// Build-time errors surface at the introducing call, not at compile.
#[test]
fn test_invalid_arguments_fail_the_introducing_call() {
    assert!(matches!(
        RuleChain::new().string().length_between(9, 3),
        Err(ChainError::InvertedLengthRange { min: 9, max: 3 })
    ));
    assert!(matches!(
        RuleChain::new().number().divides_by(0.0),
        Err(ChainError::InvalidDivisor(_))
    ));
}

// =============================================================================
// Optional Gate
// =============================================================================

/// optional() accepts every falsy input regardless of later clauses, and
/// applies later clauses only to truthy input.
#[test]
fn test_optional_gate_bypasses_the_chain_for_falsy_input() {
    let predicate = RuleChain::new()
        .optional()
        .string()
        .length_between(5, 25)
        .unwrap()
        .compile();

    let falsy = [
        Value::Undefined,
        Value::Null,
        Value::from(false),
        Value::from(0),
        Value::from(""),
        Value::Array(vec![]),
    ];
    for value in falsy {
        assert!(predicate.check(&value), "falsy {value:?} should bypass the chain");
    }

    assert!(predicate.check(&Value::from("administrator")));
    assert!(!predicate.check(&Value::from("abc")));
    assert!(!predicate.check(&Value::from(123456)));
}

/// The preserved quirk: a present-but-zero number passes an optional
/// numeric chain that zero would otherwise fail.
#[test]
fn test_optional_accepts_present_zero() {
    let predicate = RuleChain::new().optional().number().above(10.0).compile();
    assert!(predicate.check(&Value::from(0)));
    assert!(!predicate.check(&Value::from(5)));
    assert!(predicate.check(&Value::from(20)));
}

// =============================================================================
// Snapshot Compilation
// =============================================================================

/// Predicates issued before later appends never see them.
#[test]
fn test_snapshot_isolation_between_compiles() {
    let chain = RuleChain::new().string();
    let just_string = chain.compile();

    let chain = chain.length(4);
    let string_of_four = chain.compile();

    assert_eq!(just_string.clause_count(), 1);
    assert_eq!(string_of_four.clause_count(), 2);

    assert!(just_string.check(&Value::from("pewpew")));
    assert!(!string_of_four.check(&Value::from("pewpew")));
    assert!(string_of_four.check(&Value::from("pewp")));
}

/// Predicates can cross threads and be shared concurrently.
#[test]
fn test_concurrent_checking() {
    let predicate = RuleChain::new().number().between(0.0, 1000.0).compile();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let predicate = predicate.clone();
            std::thread::spawn(move || {
                for n in 1..250 {
                    assert!(predicate.check(&Value::from(worker * 250 + n)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

// =============================================================================
// Set Membership
// =============================================================================

/// either('a', 'b') passes for exactly 'a' or 'b' and nothing else.
#[test]
fn test_either_is_exhaustive() {
    let predicate = RuleChain::new().either(["a", "b"]).compile();
    assert!(predicate.check(&Value::from("a")));
    assert!(predicate.check(&Value::from("b")));
    assert!(!predicate.check(&Value::from("c")));
    assert!(!predicate.check(&Value::from(0)));
}

/// Membership clauses work over arrays with strict element equality.
#[test]
fn test_membership_over_arrays() {
    let tags = Value::from(serde_json::json!(["rust", "db", "rust"]));

    assert!(RuleChain::new().have(["rust"]).compile().check(&tags));
    assert!(!RuleChain::new().have(["go"]).compile().check(&tags));
    assert!(RuleChain::new().not(["go"]).compile().check(&tags));
    assert!(!RuleChain::new().unique(["rust"]).compile().check(&tags));
    assert!(RuleChain::new().unique(["db"]).compile().check(&tags));
}
