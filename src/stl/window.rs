//! Mapping of temporal windows `[t + a, t + b]` onto sample indices.

use crate::error::{Result, StlError};
use crate::signal::Signal;
use crate::stl::core::TimeInterval;
use std::ops::Range;

/// How window bounds that fall between two samples are resolved.
///
/// Both policies pick exactly the samples in `[t + a, t + b]` when the bounds
/// coincide with sample times, and both are monotone in the upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// Snap the lower bound down to the previous sample and the upper bound up
    /// to the next sample. A window never resolves to fewer samples than it
    /// spans.
    ///
    /// When a bound falls between samples the result is a superset of the
    /// samples inside `[t + a, t + b]`, even if that set is non-empty: with
    /// samples at 0, 2 and 4, `[1, 3]` reads all three where [`Inner`] reads
    /// only the sample at 2.
    ///
    /// [`Inner`]: WindowPolicy::Inner
    #[default]
    Outward,
    /// Keep only samples inside the window. A window that lies strictly
    /// between two samples fails with [`StlError::EmptyWindow`].
    Inner,
}

/// Resolves the window of `interval` relative to sample `index`.
///
/// The result is clipped to the first `limit` samples, the range on which the
/// operand's trace is defined.
pub fn resolve(
    signal: &Signal,
    index: usize,
    interval: &TimeInterval,
    policy: WindowPolicy,
    limit: usize,
) -> Result<Range<usize>> {
    let t = signal.timestamp(index);
    let start = t.saturating_add(interval.start());
    let end = t.saturating_add(interval.end());
    let empty = || StlError::EmptyWindow {
        time: t,
        start: interval.start(),
        end: interval.end(),
    };

    let (lo, hi) = match policy {
        WindowPolicy::Outward => (
            signal.floor_index(start).unwrap_or(index),
            signal.ceil_index(end).unwrap_or(signal.len() - 1),
        ),
        WindowPolicy::Inner => (
            signal.ceil_index(start).ok_or_else(empty)?,
            signal.floor_index(end).ok_or_else(empty)?,
        ),
    };

    let hi = hi.min(limit.saturating_sub(1));
    if limit == 0 || lo > hi {
        return Err(empty());
    }
    Ok(lo..hi + 1)
}
