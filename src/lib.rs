//! gatekeeper - a strict, deterministic runtime validation toolkit
//!
//! Rule chains compile once into reusable predicates; schema maps and
//! structure templates check arbitrary objects against them.

pub mod chain;
pub mod facade;
pub mod observability;
pub mod registry;
pub mod schema;
pub mod value;
