//! Fluent rule-chain builder
//!
//! Each constraint method appends exactly one clause (or one clause per
//! listed item) and returns the chain, so constraints read in the order
//! they will evaluate:
//!
//! ```
//! use gatekeeper::chain::RuleChain;
//! use gatekeeper::value::Value;
//!
//! let id = RuleChain::new()
//!     .number()
//!     .above(10.0)
//!     .divides_by(10.0)?
//!     .compile();
//!
//! assert!(id.check(&Value::from(20)));
//! assert!(!id.check(&Value::from(15)));
//! # Ok::<(), gatekeeper::chain::ChainError>(())
//! ```

use regex::Regex;

use super::clause::Clause;
use super::errors::{ChainError, ChainResult};
use super::predicate::CompiledPredicate;
use crate::value::{Kind, Value};

/// An ordered, mutable-until-compiled sequence of constraint clauses.
///
/// Chains are single-owner builders: constraint methods consume and return
/// the chain. [`compile`](RuleChain::compile) snapshots the clause list, so
/// a chain may keep growing after compilation without affecting predicates
/// it already issued.
#[derive(Debug, Clone, Default)]
pub struct RuleChain {
    clauses: Vec<Clause>,
}

impl RuleChain {
    /// Starts an empty chain. Compiled as-is it passes every value.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    // ==================
    // Type clauses
    // ==================

    /// The value must be a string.
    pub fn string(self) -> Self {
        self.push(Clause::Kind(Kind::String))
    }

    /// The value must be a number.
    pub fn number(self) -> Self {
        self.push(Clause::Kind(Kind::Number))
    }

    /// The value must coerce to a number (loose variant of [`number`]).
    ///
    /// Booleans, null, numeric strings, dates and empty or single-element
    /// arrays all coerce; see [`Value::coerce_number`].
    ///
    /// [`number`]: RuleChain::number
    pub fn number_loose(self) -> Self {
        self.push(Clause::LooseNumber)
    }

    /// The value must be an array.
    pub fn array(self) -> Self {
        self.push(Clause::Kind(Kind::Array))
    }

    /// The value must be an object.
    pub fn object(self) -> Self {
        self.push(Clause::Kind(Kind::Object))
    }

    /// The value must be a date.
    pub fn date(self) -> Self {
        self.push(Clause::Kind(Kind::Date))
    }

    /// The value must be a compiled regular expression.
    pub fn regexp(self) -> Self {
        self.push(Clause::Kind(Kind::Pattern))
    }

    /// The value must be a function.
    pub fn function(self) -> Self {
        self.push(Clause::Kind(Kind::Function))
    }

    /// The value must be undefined.
    pub fn undefined(self) -> Self {
        self.push(Clause::Kind(Kind::Undefined))
    }

    /// The value must be null.
    pub fn null(self) -> Self {
        self.push(Clause::Kind(Kind::Null))
    }

    /// The value must be a boolean.
    pub fn boolean(self) -> Self {
        self.push(Clause::Kind(Kind::Bool))
    }

    /// The value must be exactly `true`.
    pub fn is_true(self) -> Self {
        self.push(Clause::Equal(Value::Bool(true)))
    }

    /// The value must be exactly `false`.
    pub fn is_false(self) -> Self {
        self.push(Clause::Equal(Value::Bool(false)))
    }

    // ==================
    // Length and numeric clauses
    // ==================

    /// The value must have exactly this length.
    ///
    /// Applies to strings (character count) and arrays; kinds without a
    /// length concept fail.
    pub fn length(self, expected: usize) -> Self {
        self.push(Clause::LengthExact(expected))
    }

    /// The value's length must fall within the inclusive range.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::InvertedLengthRange` if `min > max`.
    pub fn length_between(self, min: usize, max: usize) -> ChainResult<Self> {
        if min > max {
            return Err(ChainError::InvertedLengthRange { min, max });
        }
        Ok(self.push(Clause::LengthRange(min, max)))
    }

    /// The value must be strictly greater than the bound.
    pub fn above(self, bound: f64) -> Self {
        self.push(Clause::Above(bound))
    }

    /// The value must be strictly less than the bound.
    pub fn below(self, bound: f64) -> Self {
        self.push(Clause::Below(bound))
    }

    /// The value must lie strictly between `low` and `high`.
    ///
    /// Composes [`below(high)`](RuleChain::below) then
    /// [`above(low)`](RuleChain::above); both boundaries themselves fail.
    pub fn between(self, low: f64, high: f64) -> Self {
        self.below(high).above(low)
    }

    /// The value must divide evenly by the given amount.
    ///
    /// # Errors
    ///
    /// Returns `ChainError::InvalidDivisor` if the divisor is zero or not
    /// finite.
    pub fn divides_by(self, divisor: f64) -> ChainResult<Self> {
        if divisor == 0.0 || !divisor.is_finite() {
            return Err(ChainError::InvalidDivisor(divisor));
        }
        Ok(self.push(Clause::DividesBy(divisor)))
    }

    /// The value must be a whole number.
    ///
    /// Literally "divides by 1": `20` passes, `10.10` fails. Despite the
    /// name this is a multiple-of-one check, not an IEEE float-type check;
    /// the semantics are intentional and preserved.
    pub fn float(self) -> Self {
        self.push(Clause::DividesBy(1.0))
    }

    // ==================
    // Membership clauses
    // ==================

    /// Every listed item must occur in the value.
    ///
    /// Substring membership for strings, strict-equality element membership
    /// for arrays. One clause is appended per item, so the first missing
    /// item short-circuits the rest.
    pub fn have<I, V>(self, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        items
            .into_iter()
            .fold(self, |chain, item| chain.push(Clause::Have(item.into())))
    }

    /// None of the listed items may occur in the value.
    pub fn not<I, V>(self, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        items
            .into_iter()
            .fold(self, |chain, item| chain.push(Clause::NotHave(item.into())))
    }

    /// Each listed item may occur in the value at most once.
    ///
    /// Substring occurrences advance one character at a time, so
    /// overlapping hits count separately.
    pub fn unique<I, V>(self, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        items
            .into_iter()
            .fold(self, |chain, item| chain.push(Clause::Unique(item.into())))
    }

    // ==================
    // Equality and string clauses
    // ==================

    /// The value must strictly equal the given literal.
    pub fn equal(self, expected: impl Into<Value>) -> Self {
        self.push(Clause::Equal(expected.into()))
    }

    /// The value must strictly equal one of the options.
    pub fn either<I, V>(self, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push(Clause::Either(
            options.into_iter().map(Into::into).collect(),
        ))
    }

    /// The value must match the regular expression.
    pub fn matches(self, re: Regex) -> Self {
        self.push(Clause::Match(re))
    }

    /// The value must already be fully lowercase.
    pub fn lowercase(self) -> Self {
        self.push(Clause::Lowercase)
    }

    /// The value must already be fully uppercase.
    pub fn uppercase(self) -> Self {
        self.push(Clause::Uppercase)
    }

    // ==================
    // Gate
    // ==================

    /// Marks the value as optional: an absent value passes immediately.
    ///
    /// When the input is falsy (undefined, null, `false`, numeric zero,
    /// empty string, empty collection) the whole predicate returns `true`
    /// and every later clause is skipped, type checks included. Note the
    /// legacy quirk this preserves: a present-but-zero number is treated
    /// as absent.
    pub fn optional(self) -> Self {
        self.push(Clause::Optional)
    }

    // ==================
    // Terminal
    // ==================

    /// Compiles the chain into an immutable predicate.
    ///
    /// Takes a snapshot of the current clause sequence. Compiling twice
    /// yields two independent, behaviorally identical predicates; clauses
    /// appended afterwards affect neither.
    pub fn compile(&self) -> CompiledPredicate {
        CompiledPredicate::new(self.clauses.clone())
    }

    /// Returns the number of clauses appended so far.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether no clause has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
