//! Dynamic value model for the validation toolkit
//!
//! Chains validate arbitrary runtime values whose kinds go beyond JSON:
//! dates, compiled patterns, opaque callables and an explicit "undefined".
//! `Value` carries exactly the kinds the clause catalogue can test.
//!
//! # Design Principles
//!
//! - Strict equality: no cross-kind comparison, ever
//! - Validation never mutates a value
//! - Deterministic: equal inputs always behave identically

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Opaque callable stored in [`Value::Function`].
///
/// Functions are never invoked by the toolkit; they only participate in
/// kind checks and identity comparison.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Date,
    Pattern,
    Function,
}

impl Kind {
    /// Returns the lowercase kind name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Date => "date",
            Kind::Pattern => "regexp",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A dynamic runtime value.
///
/// Numbers are 64-bit floats; objects keep their keys sorted so that
/// iteration order is deterministic.
#[derive(Clone)]
pub enum Value {
    /// Absent value, distinct from `Null`
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit floating point number
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// String-keyed mapping
    Object(BTreeMap<String, Value>),
    /// Point in time (UTC)
    Date(DateTime<Utc>),
    /// Compiled regular expression
    Pattern(Regex),
    /// Opaque callable, compared by identity
    Function(NativeFn),
}

impl Value {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Date(_) => Kind::Date,
            Value::Pattern(_) => Kind::Pattern,
            Value::Function(_) => Kind::Function,
        }
    }

    /// Whether this value counts as "present" for the optional gate.
    ///
    /// `Undefined`, `Null`, `false`, numeric zero (and NaN), the empty
    /// string and empty collections are all absent. Numeric zero counting
    /// as absent is a preserved legacy quirk: a chain gated by `optional()`
    /// silently accepts a present-but-zero number.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(entries) => !entries.is_empty(),
            Value::Date(_) | Value::Pattern(_) | Value::Function(_) => true,
        }
    }

    /// Returns the number if this value is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the entry map if this value is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Coerces this value to a number, for the loose number check.
    ///
    /// Booleans become 0/1, null becomes 0, strings are parsed after
    /// trimming (empty string is 0), a single-element array coerces its
    /// element and an empty array is 0, dates coerce to their millisecond
    /// timestamp. Everything else does not coerce.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null => Some(0.0),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            Value::Array(items) => match items.as_slice() {
                [] => Some(0.0),
                [only] => only.coerce_number(),
                _ => None,
            },
            Value::Date(d) => Some(d.timestamp_millis() as f64),
            _ => None,
        }
    }

    /// Length of this value, if it has one.
    ///
    /// Strings count characters, arrays count elements. Kinds without a
    /// length concept return `None` and fail length clauses.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Counts occurrences of `item` within this value.
    ///
    /// Strings count substring hits, advancing one character per hit so
    /// overlapping occurrences are all counted; a non-string item never
    /// occurs in a string. Arrays count strictly-equal elements. Kinds
    /// without a membership concept return `None` and fail membership
    /// clauses.
    pub fn occurrences(&self, item: &Value) -> Option<usize> {
        match self {
            Value::String(s) => {
                let Value::String(needle) = item else {
                    return Some(0);
                };
                if needle.is_empty() {
                    return Some(1);
                }
                let mut count = 0;
                let mut start = 0;
                while let Some(pos) = s[start..].find(needle.as_str()) {
                    count += 1;
                    let hit = start + pos;
                    match s[hit..].chars().next() {
                        Some(c) => start = hit + c.len_utf8(),
                        None => break,
                    }
                }
                Some(count)
            }
            Value::Array(items) => Some(items.iter().filter(|v| *v == item).count()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Strict equality: values of different kinds are never equal.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a.as_str() == b.as_str(),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(entries) => f.debug_tuple("Object").field(entries).finish(),
            Value::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Value::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Value::Function(_) => write!(f, "Function(..)"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Value::Pattern(re)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<serde_json::Value> for Value {
    /// Lossless conversion from a JSON document.
    ///
    /// JSON has no undefined/date/pattern/function kinds, so the mapping is
    /// total in this direction only.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, val)| (key, Value::from(val)))
                    .collect(),
            ),
        }
    }
}
