//! Schema maps and object checkers
//!
//! A `SchemaMap` pairs field names with compiled predicates; the evaluator
//! enforces it against a target object. Structure matching compares key
//! topology only.
//!
//! # Design Principles
//!
//! - Fail closed: empty or unresolvable schemas reject, never pass
//! - Checks are total boolean functions; they never error or panic
//! - Targets are never mutated
//! - Short-circuit on first violation

mod evaluator;
mod map;
pub mod structure;

pub use evaluator::evaluate;
pub use map::SchemaMap;
