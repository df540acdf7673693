//! Build-time errors for rule-chain construction
//!
//! Invalid constraint arguments are rejected at the builder call that
//! introduces them, never deferred to compile or evaluation time. Most
//! argument families are already unrepresentable through the type system
//! (patterns arrive pre-compiled, bounds are numbers); the two checks
//! below are the remainder.

use thiserror::Error;

/// Result type for fallible chain-building operations
pub type ChainResult<T> = Result<T, ChainError>;

/// Invalid constraint arguments detected while building a chain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    /// Length range where the minimum exceeds the maximum
    #[error("invalid length range: minimum {min} exceeds maximum {max}")]
    InvertedLengthRange { min: usize, max: usize },

    /// Divisor that no value could divide by
    #[error("invalid divisor {0}: must be a non-zero finite number")]
    InvalidDivisor(f64),
}
