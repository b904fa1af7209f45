//! Error types for formula construction, signal validation and evaluation.

use std::time::Duration;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StlError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StlError {
    #[error("Invalid time interval [{start}, {end}]: {reason}")]
    IntervalError {
        start: f64,
        end: f64,
        reason: &'static str,
    },
    #[error("{operator} requires at least 2 operands, got {actual}")]
    ArityError {
        operator: &'static str,
        actual: usize,
    },
    #[error("Node {id} does not belong to this formula (arena holds {len} nodes)")]
    UnknownNode { id: usize, len: usize },
    #[error("Predicate has {expected} coefficients but the signal state has dimension {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Predicate coefficients and bound must be finite")]
    NonFinitePredicate,
    #[error(
        "Sample {index} at {time:?} needs {horizon:?} of look-ahead but the signal ends at {end:?}"
    )]
    HorizonExceeded {
        index: usize,
        time: Duration,
        horizon: Duration,
        end: Duration,
    },
    #[error("Window [{start:?}, {end:?}] after {time:?} contains no evaluable sample")]
    EmptyWindow {
        time: Duration,
        start: Duration,
        end: Duration,
    },
    #[error("Signal must contain at least one sample")]
    EmptySignal,
    #[error("Timestamps must be strictly increasing (sample {index} at {time:?})")]
    UnsortedTimestamps { index: usize, time: Duration },
    #[error("Sample {index} has dimension {actual}, expected {expected}")]
    InconsistentDimension {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Sample {index} contains a non-finite value")]
    NonFiniteSample { index: usize },
}
