//! Rule-chain compiler
//!
//! A `RuleChain` accumulates constraint clauses in declaration order and
//! compiles them into a single reusable predicate.
//!
//! # Design Principles
//!
//! - Clauses are data, never generated source text
//! - Declaration order is evaluation order, with full short-circuit
//! - Compilation snapshots the chain; issued predicates are immutable
//! - Evaluation is total: out-of-domain inputs fail, they never panic

mod builder;
mod clause;
mod errors;
mod predicate;

pub use builder::RuleChain;
pub use clause::Clause;
pub use errors::{ChainError, ChainResult};
pub use predicate::CompiledPredicate;
