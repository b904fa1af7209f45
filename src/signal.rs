//! Timestamped trajectories.
//!
//! A [`Signal`] is an immutable, non-empty sequence of [`Step`]s whose
//! timestamps strictly increase and whose state vectors share one dimension.

use crate::error::{Result, StlError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_SIGNAL_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step<T> {
    pub value: T,
    pub timestamp: Duration,
}

impl<T> Step<T> {
    pub fn new(value: T, timestamp: Duration) -> Self {
        Step { value, timestamp }
    }
}

/// Process-unique identity of a [`Signal`], used to tag cached traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignalId(u64);

#[derive(Clone, Debug)]
pub struct Signal {
    id: SignalId,
    steps: Vec<Step<Vec<f64>>>,
    dimension: usize,
}

impl Signal {
    /// Builds a signal from already ordered samples.
    ///
    /// Fails if `steps` is empty, if timestamps do not strictly increase, if
    /// state dimensions differ, or if any state component is not finite.
    pub fn new(steps: Vec<Step<Vec<f64>>>) -> Result<Self> {
        let first = steps.first().ok_or(StlError::EmptySignal)?;
        let dimension = first.value.len();

        for (index, step) in steps.iter().enumerate() {
            if step.value.len() != dimension {
                return Err(StlError::InconsistentDimension {
                    index,
                    expected: dimension,
                    actual: step.value.len(),
                });
            }
            if step.value.iter().any(|v| !v.is_finite()) {
                return Err(StlError::NonFiniteSample { index });
            }
            if index > 0 && steps[index - 1].timestamp >= step.timestamp {
                return Err(StlError::UnsortedTimestamps {
                    index,
                    time: step.timestamp,
                });
            }
        }

        Ok(Signal {
            id: SignalId(NEXT_SIGNAL_ID.fetch_add(1, Ordering::Relaxed)),
            steps,
            dimension,
        })
    }

    /// Builds a signal sampled every `period`, starting at `t = 0`.
    pub fn from_uniform(period: Duration, states: Vec<Vec<f64>>) -> Result<Self> {
        let mut timestamp = Duration::ZERO;
        let mut steps = Vec::with_capacity(states.len());
        for (index, state) in states.into_iter().enumerate() {
            if index > 0 {
                timestamp = timestamp
                    .checked_add(period)
                    .ok_or(StlError::UnsortedTimestamps {
                        index,
                        time: timestamp,
                    })?;
            }
            steps.push(Step::new(state, timestamp));
        }
        Signal::new(steps)
    }

    pub fn id(&self) -> SignalId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Dimension of every state vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get_front(&self) -> &Step<Vec<f64>> {
        &self.steps[0]
    }

    pub fn get_back(&self) -> &Step<Vec<f64>> {
        &self.steps[self.steps.len() - 1]
    }

    /// Timestamp of the last sample, the `T` that bounds every look-ahead.
    pub fn end_time(&self) -> Duration {
        self.get_back().timestamp
    }

    pub fn timestamp(&self, index: usize) -> Duration {
        self.steps[index].timestamp
    }

    pub fn state(&self, index: usize) -> &[f64] {
        &self.steps[index].value
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<Vec<f64>>> {
        self.steps.iter()
    }

    /// Number of leading samples with `t_i + horizon <= T`.
    pub fn evaluable_len(&self, horizon: Duration) -> usize {
        let end = self.end_time();
        self.steps
            .partition_point(|step| step.timestamp.checked_add(horizon).is_some_and(|t| t <= end))
    }

    /// Index of the last sample at or before `time`, if any.
    pub fn floor_index(&self, time: Duration) -> Option<usize> {
        self.steps
            .partition_point(|step| step.timestamp <= time)
            .checked_sub(1)
    }

    /// Index of the first sample at or after `time`, if any.
    pub fn ceil_index(&self, time: Duration) -> Option<usize> {
        let index = self.steps.partition_point(|step| step.timestamp < time);
        (index < self.steps.len()).then_some(index)
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a Step<Vec<f64>>;
    type IntoIter = std::slice::Iter<'a, Step<Vec<f64>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
