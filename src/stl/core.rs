use crate::error::{Result, StlError};
use std::fmt::{Debug, Display};
use std::time::Duration;

/// A bounded temporal window `[start, end]`, relative to the evaluation instant.
///
/// Construction guarantees `start <= end`; both bounds are non-negative by type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: Duration,
    end: Duration,
}

impl TimeInterval {
    pub fn new(start: Duration, end: Duration) -> Result<Self> {
        if start > end {
            return Err(StlError::IntervalError {
                start: start.as_secs_f64(),
                end: end.as_secs_f64(),
                reason: "start is after end",
            });
        }
        Ok(TimeInterval { start, end })
    }

    pub fn from_secs(start: u64, end: u64) -> Result<Self> {
        Self::new(Duration::from_secs(start), Duration::from_secs(end))
    }

    /// Builds an interval from fractional seconds, rejecting negative or
    /// non-finite bounds.
    pub fn from_secs_f64(start: f64, end: f64) -> Result<Self> {
        let invalid = |reason| StlError::IntervalError { start, end, reason };
        if !start.is_finite() || !end.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if start < 0.0 || end < 0.0 {
            return Err(invalid("bounds must be non-negative"));
        }
        if start > end {
            return Err(invalid("start is after end"));
        }
        let start = Duration::try_from_secs_f64(start).map_err(|_| invalid("bound out of range"))?;
        let end = Duration::try_from_secs_f64(end).map_err(|_| invalid("bound out of range"))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> Duration {
        self.start
    }

    pub fn end(&self) -> Duration {
        self.end
    }

    pub fn is_point(&self) -> bool {
        self.start == self.end
    }
}

impl Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}]",
            self.start.as_secs_f64(),
            self.end.as_secs_f64()
        )
    }
}

/// The value domain a formula is evaluated into.
///
/// `f64` gives the quantitative robustness (sign is the verdict, magnitude the
/// margin); `bool` gives the classical satisfaction relation.
pub trait RobustnessSemantics: Copy + PartialEq + Debug {
    fn and(l: Self, r: Self) -> Self;
    fn or(l: Self, r: Self) -> Self;
    fn not(val: Self) -> Self;
    fn eventually_identity() -> Self;
    fn globally_identity() -> Self;
    fn atomic_true() -> Self;
    fn atomic_false() -> Self;
    /// Lifts a signed distance `a·x - b` into this domain.
    fn atomic(distance: f64) -> Self;
}

impl RobustnessSemantics for f64 {
    fn and(l: f64, r: f64) -> f64 {
        l.min(r)
    }
    fn or(l: f64, r: f64) -> f64 {
        l.max(r)
    }
    fn not(val: f64) -> f64 {
        -val
    }
    fn eventually_identity() -> Self {
        f64::NEG_INFINITY
    }
    fn globally_identity() -> Self {
        f64::INFINITY
    }
    fn atomic_true() -> Self {
        f64::INFINITY
    }
    fn atomic_false() -> Self {
        f64::NEG_INFINITY
    }
    fn atomic(distance: f64) -> Self {
        distance
    }
}

impl RobustnessSemantics for bool {
    fn and(l: bool, r: bool) -> bool {
        l && r
    }
    fn or(l: bool, r: bool) -> bool {
        l || r
    }
    fn not(val: bool) -> bool {
        !val
    }
    fn eventually_identity() -> Self {
        false
    }
    fn globally_identity() -> Self {
        true
    }
    fn atomic_true() -> Self {
        true
    }
    fn atomic_false() -> Self {
        false
    }
    fn atomic(distance: f64) -> Self {
        distance >= 0.0
    }
}
