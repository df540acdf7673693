//! Structured JSON logger
//!
//! - One log line = one event
//! - Event name first, then severity, then fields in alphabetical order
//! - Synchronous, no buffering
//! - Writes to stderr, never to the caller's stdout

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value as Json};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Degraded but recoverable situations
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that emits one JSON object per line.
pub struct Logger;

impl Logger {
    /// Logs an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "{line}");
        let _ = stderr.flush();
    }

    /// Renders the log line without writing it (also used by tests).
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut entry = Map::new();
        entry.insert("event".into(), Json::String(event.into()));
        entry.insert("severity".into(), Json::String(severity.as_str().into()));

        // Alphabetical field order keeps output deterministic.
        let mut sorted: Vec<_> = fields.to_vec();
        sorted.sort_by_key(|(key, _)| *key);
        for (key, value) in sorted {
            entry.insert(key.into(), Json::String(value.into()));
        }

        Json::Object(entry).to_string()
    }
}
