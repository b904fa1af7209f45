//! # robstl - offline Signal Temporal Logic robustness
//!
//! `robstl` evaluates Signal Temporal Logic (STL) formulas over recorded,
//! finitely sampled trajectories and reports a signed robustness margin
//! instead of a bare verdict.
//!
//! It includes:
//! - a [`signal::Signal`] model for timestamped state vectors,
//! - linear [`stl::predicate::Predicate`]s and an arena-backed formula builder,
//! - a horizon calculator that refuses to evaluate past the end of a signal, and
//! - a memoised, non-recursive robustness evaluator with quantitative (`f64`)
//!   and qualitative (`bool`) semantics.
//!
//! ## Simple usage
//!
//! ```
//! use robstl::signal::Signal;
//! use robstl::stl::core::TimeInterval;
//! use robstl::stl::formula::FormulaBuilder;
//! use robstl::stl::predicate::Predicate;
//! use std::time::Duration;
//!
//! // x(t) = (t, 0) for t = 0..=10
//! let states = (0..=10).map(|t| vec![t as f64, 0.0]).collect();
//! let signal = Signal::from_uniform(Duration::from_secs(1), states).unwrap();
//!
//! let mut builder = FormulaBuilder::new();
//! let goal = builder.predicate(Predicate::greater_than(2, 0, 8.0).unwrap());
//! let reach = builder
//!     .eventually(TimeInterval::from_secs(0, 10).unwrap(), goal)
//!     .unwrap();
//! let formula = builder.build(reach).unwrap();
//!
//! assert_eq!(robstl::robustness(&formula, &signal).unwrap(), 2.0);
//! assert!(robstl::satisfies(&formula, &signal).unwrap());
//! ```

pub mod error;
pub mod signal;
pub mod stl;

pub use error::{Result, StlError};
pub use signal::{Signal, Step};
pub use stl::evaluator::{Evaluation, EvaluationStats, Evaluator, EvaluatorBuilder};
pub use stl::formula::{Formula, FormulaBuilder, Node, NodeId};
pub use stl::window::WindowPolicy;

/// Robustness of `formula` at the first sample of `signal`, using the
/// default quantitative evaluator.
pub fn robustness(formula: &Formula, signal: &Signal) -> Result<f64> {
    Evaluator::<f64>::default().robustness(formula, signal)
}

/// Robustness of `formula` at every evaluable sample of `signal`.
pub fn robustness_trace(formula: &Formula, signal: &Signal) -> Result<Vec<Step<f64>>> {
    Evaluator::<f64>::default().robustness_trace(formula, signal)
}

/// `true` when the robustness at the first sample is non-negative.
pub fn satisfies(formula: &Formula, signal: &Signal) -> Result<bool> {
    Evaluator::<f64>::default().satisfies(formula, signal)
}
