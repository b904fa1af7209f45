//! Signal Temporal Logic (STL) public module.
//!
//! This namespace contains the building blocks for offline robustness evaluation:
//! - [`core`] time intervals and robustness semantics,
//! - [`predicate`] linear predicates over state vectors,
//! - [`formula`] the arena-backed formula tree and its builder,
//! - [`formulas`] helper constructors for common formula patterns,
//! - [`horizon`] look-ahead computation,
//! - [`window`] mapping of temporal windows to sample indices,
//! - [`operators`] per-node trace kernels, and
//! - [`evaluator`] the memoised robustness evaluator.

pub mod core;
pub mod evaluator;
pub mod formula;
pub mod formulas;
pub mod horizon;
pub mod operators;
pub mod predicate;
pub mod window;
