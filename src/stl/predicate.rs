//! Linear predicates `a·x - b >= 0` over a signal's state vector.

use crate::error::{Result, StlError};
use crate::signal::Signal;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    coeffs: Vec<f64>,
    bound: f64,
}

impl Predicate {
    /// The region `{x : coeffs·x - bound >= 0}`.
    pub fn new(coeffs: Vec<f64>, bound: f64) -> Result<Self> {
        if !bound.is_finite() || coeffs.iter().any(|c| !c.is_finite()) {
            return Err(StlError::NonFinitePredicate);
        }
        Ok(Predicate { coeffs, bound })
    }

    /// `x[axis] >= c` over a `dimension`-sized state.
    pub fn greater_than(dimension: usize, axis: usize, c: f64) -> Result<Self> {
        Self::new(unit(dimension, axis, 1.0)?, c)
    }

    /// `x[axis] <= c` over a `dimension`-sized state.
    pub fn less_than(dimension: usize, axis: usize, c: f64) -> Result<Self> {
        Self::new(unit(dimension, axis, -1.0)?, -c)
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn dimension(&self) -> usize {
        self.coeffs.len()
    }

    /// Signed distance `a·x - b` for a single state.
    pub fn distance(&self, state: &[f64]) -> f64 {
        self.coeffs
            .iter()
            .zip(state)
            .map(|(a, x)| a * x)
            .sum::<f64>()
            - self.bound
    }

    /// Signed distance at the first `len` samples of `signal`.
    pub fn distances(&self, signal: &Signal, len: usize) -> Result<Vec<f64>> {
        if self.dimension() != signal.dimension() {
            return Err(StlError::DimensionMismatch {
                expected: self.dimension(),
                actual: signal.dimension(),
            });
        }
        Ok(signal
            .iter()
            .take(len)
            .map(|step| self.distance(&step.value))
            .collect())
    }
}

fn unit(dimension: usize, axis: usize, sign: f64) -> Result<Vec<f64>> {
    if axis >= dimension {
        return Err(StlError::DimensionMismatch {
            expected: axis + 1,
            actual: dimension,
        });
    }
    let mut coeffs = vec![0.0; dimension];
    coeffs[axis] = sign;
    Ok(coeffs)
}

/// Renders the non-zero terms, e.g. `x0 - 8 ≥ 0` or `2·x0 - x1 + 0.5 ≥ 0`.
impl Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut wrote_term = false;
        for (axis, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let magnitude = c.abs();
            match (wrote_term, c < 0.0) {
                (false, false) => {}
                (false, true) => write!(f, "-")?,
                (true, false) => write!(f, " + ")?,
                (true, true) => write!(f, " - ")?,
            }
            if magnitude == 1.0 {
                write!(f, "x{axis}")?;
            } else {
                write!(f, "{magnitude}·x{axis}")?;
            }
            wrote_term = true;
        }
        if !wrote_term {
            write!(f, "0")?;
        }
        match self.bound {
            b if b > 0.0 => write!(f, " - {b} ≥ 0"),
            b if b < 0.0 => write!(f, " + {} ≥ 0", -b),
            _ => write!(f, " ≥ 0"),
        }
    }
}
