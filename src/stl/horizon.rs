//! Look-ahead ("horizon") of formula nodes.
//!
//! `H(node)` is the span of future signal a node needs to be defined at an
//! instant `t`: a sample `t_i` is evaluable iff `t_i + H(node) <= T`, where
//! `T` is the timestamp of the last sample.

use crate::stl::formula::{Formula, Node, NodeId};
use std::time::Duration;

/// Horizon of every node in the arena, indexed by [`NodeId::index`].
///
/// Children always precede their parents, so one forward pass suffices.
pub fn horizons(formula: &Formula) -> Vec<Duration> {
    let mut out: Vec<Duration> = Vec::with_capacity(formula.len());
    for node in formula.nodes() {
        let of = |id: &NodeId| out[id.index()];
        let h = match node {
            Node::True | Node::False | Node::Predicate(_) => Duration::ZERO,
            Node::Not(child) => of(child),
            Node::And(children) | Node::Or(children) => {
                children.iter().map(of).max().unwrap_or(Duration::ZERO)
            }
            Node::Always(interval, child) | Node::Eventually(interval, child) => {
                interval.end().saturating_add(of(child))
            }
            Node::Until {
                interval,
                left,
                right,
            } => interval.end().saturating_add(of(left).max(of(right))),
        };
        out.push(h);
    }
    out
}

/// Horizon of the formula's root.
pub fn horizon(formula: &Formula) -> Duration {
    horizon_of(formula, formula.root())
}

pub fn horizon_of(formula: &Formula, id: NodeId) -> Duration {
    horizons(formula)[id.index()]
}
