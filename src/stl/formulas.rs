//! Helper constructors for common formula patterns.
//!
//! All helpers only add nodes to the given [`FormulaBuilder`]; they introduce
//! no operators beyond the core set.

use crate::error::Result;
use crate::stl::core::TimeInterval;
use crate::stl::formula::{FormulaBuilder, NodeId};
use crate::stl::predicate::Predicate;

/// `lhs → rhs`, encoded as `¬lhs ∨ rhs` (robustness `max(-ρ(lhs), ρ(rhs))`).
pub fn implies(builder: &mut FormulaBuilder, lhs: NodeId, rhs: NodeId) -> Result<NodeId> {
    let not_lhs = builder.not(lhs)?;
    builder.or([not_lhs, rhs])
}

/// Axis-aligned box over two coordinates of the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x_axis: usize,
    pub y_axis: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Rectangle {
    /// A box over state coordinates 0 (x) and 1 (y).
    pub fn planar(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Rectangle {
            x_axis: 0,
            y_axis: 1,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// The state lies inside `rect`: conjunction of the four half-planes.
pub fn in_rectangle(
    builder: &mut FormulaBuilder,
    dimension: usize,
    rect: Rectangle,
) -> Result<NodeId> {
    let Rectangle {
        x_axis,
        y_axis,
        x_min,
        x_max,
        y_min,
        y_max,
    } = rect;
    let above_x_min = builder.predicate(Predicate::greater_than(dimension, x_axis, x_min)?);
    let below_x_max = builder.predicate(Predicate::less_than(dimension, x_axis, x_max)?);
    let above_y_min = builder.predicate(Predicate::greater_than(dimension, y_axis, y_min)?);
    let below_y_max = builder.predicate(Predicate::less_than(dimension, y_axis, y_max)?);

    let in_x_range = builder.and([above_x_min, below_x_max])?;
    let in_y_range = builder.and([above_y_min, below_y_max])?;
    builder.and([in_x_range, in_y_range])
}

/// `F[I](goal) ∧ G[I](¬unsafe)`.
pub fn reach_avoid(
    builder: &mut FormulaBuilder,
    goal: NodeId,
    unsafe_region: NodeId,
    interval: TimeInterval,
) -> Result<NodeId> {
    let reach = builder.eventually(interval, goal)?;
    let outside = builder.not(unsafe_region)?;
    let avoid = builder.always(interval, outside)?;
    builder.and([reach, avoid])
}
