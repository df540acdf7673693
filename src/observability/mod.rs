//! Observability for the validation toolkit
//!
//! Evaluators are pure boolean functions, so logging is sparse by design:
//! only registry lifecycle events and resolution failures are reported.

mod logger;

pub use logger::{Logger, Severity};
