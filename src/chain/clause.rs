//! Constraint clauses and their evaluation
//!
//! One clause is one atomic, side-effect-free test over a single value.
//! Clauses never hold references back to the chain that produced them.

use regex::Regex;

use crate::value::{Kind, Value};

/// Result of evaluating one clause against a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Clause holds; continue with the next clause
    Pass,
    /// Clause fails; the whole predicate is false
    Fail,
    /// Gate fired; the whole predicate is true, skip remaining clauses
    AcceptAll,
}

fn verdict(holds: bool) -> Outcome {
    if holds {
        Outcome::Pass
    } else {
        Outcome::Fail
    }
}

/// An atomic constraint test.
#[derive(Debug, Clone)]
pub enum Clause {
    /// Strict runtime-kind check
    Kind(Kind),
    /// Value must coerce to a number
    LooseNumber,
    /// Exact length
    LengthExact(usize),
    /// Length within the inclusive range
    LengthRange(usize, usize),
    /// Strictly greater than the bound
    Above(f64),
    /// Strictly less than the bound
    Below(f64),
    /// Item must occur in the value
    Have(Value),
    /// Item must not occur in the value
    NotHave(Value),
    /// Item may occur at most once in the value
    Unique(Value),
    /// Value modulo the divisor must be zero
    DividesBy(f64),
    /// Strict equality to a fixed literal
    Equal(Value),
    /// Strict equality to any one of the options
    Either(Vec<Value>),
    /// Regular expression must match the (string) value
    Match(Regex),
    /// Value equals its lowercased self
    Lowercase,
    /// Value equals its uppercased self
    Uppercase,
    /// Gate: a falsy value short-circuits the predicate to true
    Optional,
}

impl Clause {
    /// Evaluates this clause against a value.
    ///
    /// Total over every `Value`: kinds outside a clause's domain fail the
    /// clause rather than erroring.
    pub(crate) fn eval(&self, value: &Value) -> Outcome {
        match self {
            Clause::Kind(kind) => verdict(value.kind() == *kind),
            Clause::LooseNumber => verdict(value.coerce_number().is_some()),
            Clause::LengthExact(expected) => verdict(value.length() == Some(*expected)),
            Clause::LengthRange(min, max) => {
                verdict(matches!(value.length(), Some(len) if len >= *min && len <= *max))
            }
            Clause::Above(bound) => {
                verdict(matches!(value.as_number(), Some(n) if n > *bound))
            }
            Clause::Below(bound) => {
                verdict(matches!(value.as_number(), Some(n) if n < *bound))
            }
            Clause::Have(item) => {
                verdict(matches!(value.occurrences(item), Some(n) if n > 0))
            }
            Clause::NotHave(item) => verdict(value.occurrences(item) == Some(0)),
            Clause::Unique(item) => {
                verdict(matches!(value.occurrences(item), Some(n) if n <= 1))
            }
            Clause::DividesBy(divisor) => {
                verdict(matches!(value.as_number(), Some(n) if n % *divisor == 0.0))
            }
            Clause::Equal(expected) => verdict(value == expected),
            Clause::Either(options) => verdict(options.iter().any(|option| option == value)),
            Clause::Match(re) => {
                verdict(matches!(value.as_str(), Some(s) if re.is_match(s)))
            }
            Clause::Lowercase => {
                verdict(matches!(value.as_str(), Some(s) if s.to_lowercase() == s))
            }
            Clause::Uppercase => {
                verdict(matches!(value.as_str(), Some(s) if s.to_uppercase() == s))
            }
            Clause::Optional => {
                if value.is_truthy() {
                    Outcome::Pass
                } else {
                    Outcome::AcceptAll
                }
            }
        }
    }
}
