//! Compiled predicates
//!
//! The terminal product of a rule chain: an immutable clause sequence that
//! can be checked against any number of values, from any number of threads.

use std::sync::Arc;

use super::clause::{Clause, Outcome};
use crate::value::Value;

/// A compiled, reusable predicate over a single value.
///
/// Holds a frozen snapshot of the clause sequence it was compiled from and
/// no reference back to the chain. Cloning is cheap (shared clause storage)
/// and checking is pure, so predicates are safe to store, share and invoke
/// concurrently.
#[derive(Debug, Clone)]
pub struct CompiledPredicate {
    clauses: Arc<[Clause]>,
}

impl CompiledPredicate {
    pub(crate) fn new(clauses: Vec<Clause>) -> Self {
        Self {
            clauses: clauses.into(),
        }
    }

    /// Checks a value against every clause in declaration order.
    ///
    /// Stops at the first failing clause. The optional gate may end
    /// evaluation early with an accept. An empty clause sequence always
    /// passes.
    pub fn check(&self, value: &Value) -> bool {
        for clause in self.clauses.iter() {
            match clause.eval(value) {
                Outcome::Pass => {}
                Outcome::Fail => return false,
                Outcome::AcceptAll => return true,
            }
        }
        true
    }

    /// Returns the number of clauses in this predicate.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}
