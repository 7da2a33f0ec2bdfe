//! Crate error type.
//!
//! Only structural contract violations surface as errors. Ordinary
//! illegal-timing calls from the presentation layer are silent no-ops, and
//! resource shortfalls are reported through `PlayOutcome`.

use thiserror::Error;

/// Errors raised when a run or map cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A map needs at least the boss floor.
    #[error("map must have at least one floor (got {0})")]
    NoFloors(usize),

    /// A configuration value is out of its legal range.
    #[error("invalid run configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for fallible engine construction.
pub type Result<T> = std::result::Result<T, EngineError>;
