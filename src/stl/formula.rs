//! Arena-backed STL formula trees.
//!
//! Formulas are assembled through a [`FormulaBuilder`]. Every node gets a stable
//! [`NodeId`] at construction time and may only refer to nodes created before
//! it, so the arena is acyclic by construction and ascending id order is a
//! valid bottom-up (post-) order. Reusing a `NodeId` shares a subformula; the
//! evaluator computes a shared node's trace once.

use crate::error::{Result, StlError};
use crate::stl::core::TimeInterval;
use crate::stl::horizon;
use crate::stl::predicate::Predicate;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

/// Stable index of a node inside its arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single STL operator. Children are referenced by [`NodeId`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Boolean constant `True` (robustness `+∞`).
    True,
    /// Boolean constant `False` (robustness `-∞`).
    False,
    /// Linear predicate `a·x - b ≥ 0`.
    Predicate(Predicate),
    /// Negation `¬f`.
    Not(NodeId),
    /// Conjunction of two or more operands.
    And(Vec<NodeId>),
    /// Disjunction of two or more operands.
    Or(Vec<NodeId>),
    /// `G[a,b] f`.
    Always(TimeInterval, NodeId),
    /// `F[a,b] f`.
    Eventually(TimeInterval, NodeId),
    /// `lhs U[a,b] rhs`.
    Until {
        interval: TimeInterval,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    /// Operands in evaluation order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::True | Node::False | Node::Predicate(_) => vec![],
            Node::Not(child) | Node::Always(_, child) | Node::Eventually(_, child) => {
                vec![*child]
            }
            Node::And(children) | Node::Or(children) => children.clone(),
            Node::Until { left, right, .. } => vec![*left, *right],
        }
    }

    fn label(&self) -> String {
        match self {
            Node::True => "True".to_string(),
            Node::False => "False".to_string(),
            Node::Predicate(p) => p.to_string(),
            Node::Not(_) => "Not".to_string(),
            Node::And(_) => "And".to_string(),
            Node::Or(_) => "Or".to_string(),
            Node::Always(interval, _) => format!("Always{interval}"),
            Node::Eventually(interval, _) => format!("Eventually{interval}"),
            Node::Until { interval, .. } => format!("Until{interval}"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormulaBuilder {
    nodes: Vec<Node>,
}

impl FormulaBuilder {
    pub fn new() -> Self {
        FormulaBuilder { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn constant(&mut self, value: bool) -> NodeId {
        self.insert(if value { Node::True } else { Node::False })
    }

    pub fn predicate(&mut self, predicate: Predicate) -> NodeId {
        self.insert(Node::Predicate(predicate))
    }

    pub fn not(&mut self, child: NodeId) -> Result<NodeId> {
        self.check(child)?;
        Ok(self.insert(Node::Not(child)))
    }

    pub fn and(&mut self, children: impl IntoIterator<Item = NodeId>) -> Result<NodeId> {
        let children = self.operands("And", children)?;
        Ok(self.insert(Node::And(children)))
    }

    pub fn or(&mut self, children: impl IntoIterator<Item = NodeId>) -> Result<NodeId> {
        let children = self.operands("Or", children)?;
        Ok(self.insert(Node::Or(children)))
    }

    pub fn always(&mut self, interval: TimeInterval, child: NodeId) -> Result<NodeId> {
        self.check(child)?;
        Ok(self.insert(Node::Always(interval, child)))
    }

    pub fn eventually(&mut self, interval: TimeInterval, child: NodeId) -> Result<NodeId> {
        self.check(child)?;
        Ok(self.insert(Node::Eventually(interval, child)))
    }

    pub fn until(&mut self, interval: TimeInterval, left: NodeId, right: NodeId) -> Result<NodeId> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.insert(Node::Until {
            interval,
            left,
            right,
        }))
    }

    /// Snapshots the arena into an immutable [`Formula`] rooted at `root`.
    ///
    /// The builder stays usable, so several formulas may share its nodes.
    pub fn build(&self, root: NodeId) -> Result<Formula> {
        self.check(root)?;
        let nodes: Arc<[Node]> = self.nodes.clone().into();
        Ok(Formula { nodes, root })
    }

    fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.0 >= self.nodes.len() {
            return Err(StlError::UnknownNode {
                id: id.0,
                len: self.nodes.len(),
            });
        }
        Ok(())
    }

    fn operands(
        &self,
        operator: &'static str,
        children: impl IntoIterator<Item = NodeId>,
    ) -> Result<Vec<NodeId>> {
        let children: Vec<NodeId> = children.into_iter().collect();
        if children.len() < 2 {
            return Err(StlError::ArityError {
                operator,
                actual: children.len(),
            });
        }
        for &child in &children {
            self.check(child)?;
        }
        Ok(children)
    }
}

/// An immutable formula: a shared arena snapshot plus its root.
#[derive(Clone, Debug)]
pub struct Formula {
    nodes: Arc<[Node]>,
    root: NodeId,
}

impl Formula {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Size of the underlying arena, including nodes unreachable from the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look-ahead of the whole formula, see [`horizon::horizon`].
    pub fn horizon(&self) -> Duration {
        horizon::horizon(self)
    }

    /// Nodes reachable from the root, each listed once, in ascending id order.
    pub fn reachable(&self) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.0], true) {
                continue;
            }
            stack.extend(self.node(id).children());
        }
        seen.iter()
            .enumerate()
            .filter_map(|(i, &hit)| hit.then_some(NodeId(i)))
            .collect()
    }

    /// Builds a `tree`-style dump of the formula rooted at `root`.
    ///
    /// Shared subformulas are printed at every place they occur.
    ///
    /// ```text
    /// And
    ///     ├── Eventually[0, 10]
    ///     │   └── x0 - 8 ≥ 0
    ///     └── Always[0, 10]
    ///         └── ...
    /// ```
    pub fn to_tree_string(&self, indent: usize) -> String {
        let padding = " ".repeat(indent);
        let mut out = format!("{}{}\n", padding, self.node(self.root).label());

        // (node, prefix, is_last), visited depth-first
        let root_children = self.node(self.root).children();
        let child_prefix = format!("{padding}    ");
        let mut stack: Vec<(NodeId, String, bool)> = root_children
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &c)| (c, child_prefix.clone(), i + 1 == root_children.len()))
            .collect();

        while let Some((id, prefix, is_last)) = stack.pop() {
            let connector = if is_last { "└── " } else { "├── " };
            out.push_str(&format!("{}{}{}\n", prefix, connector, self.node(id).label()));

            let next_prefix = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            let children = self.node(id).children();
            for (i, &child) in children.iter().enumerate().rev() {
                stack.push((child, next_prefix.clone(), i + 1 == children.len()));
            }
        }

        out.trim_end().to_string()
    }

    /// Writes the formula rooted at `root` without recursing, so nesting depth
    /// is bounded by memory rather than the call stack.
    fn fmt_from(&self, root: NodeId, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut work = vec![Piece::Node(root)];
        while let Some(piece) = work.pop() {
            let id = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Interval(prefix, interval) => {
                    write!(f, "{prefix}{interval}")?;
                    continue;
                }
                Piece::Node(id) => id,
            };
            // pieces are pushed in reverse of their output order
            match self.node(id) {
                Node::True => f.write_str("True")?,
                Node::False => f.write_str("False")?,
                Node::Predicate(p) => write!(f, "{p}")?,
                Node::Not(child) => {
                    work.extend([Piece::Text(")"), Piece::Node(*child), Piece::Text("¬(")]);
                }
                Node::And(children) => push_nary(&mut work, children, " ∧ "),
                Node::Or(children) => push_nary(&mut work, children, " ∨ "),
                Node::Always(interval, child) => {
                    work.extend([
                        Piece::Text(")"),
                        Piece::Node(*child),
                        Piece::Text("("),
                        Piece::Interval("G", *interval),
                    ]);
                }
                Node::Eventually(interval, child) => {
                    work.extend([
                        Piece::Text(")"),
                        Piece::Node(*child),
                        Piece::Text("("),
                        Piece::Interval("F", *interval),
                    ]);
                }
                Node::Until {
                    interval,
                    left,
                    right,
                } => {
                    work.extend([
                        Piece::Text(")"),
                        Piece::Node(*right),
                        Piece::Text(" ("),
                        Piece::Interval(") U", *interval),
                        Piece::Node(*left),
                        Piece::Text("("),
                    ]);
                }
            }
        }
        Ok(())
    }
}

/// One pending unit of `Display` output.
enum Piece {
    Node(NodeId),
    Text(&'static str),
    /// `prefix` followed by the interval.
    Interval(&'static str, TimeInterval),
}

/// Queues `(c0) sep (c1) sep ... (cn)` so that it pops in order.
fn push_nary(work: &mut Vec<Piece>, children: &[NodeId], separator: &'static str) {
    for (i, &child) in children.iter().enumerate().rev() {
        work.extend([Piece::Text(")"), Piece::Node(child), Piece::Text("(")]);
        if i > 0 {
            work.push(Piece::Text(separator));
        }
    }
}

/// Renders formulas using compact mathematical notation.
///
/// Temporal operators are printed as `F[start, end](...)`, `G[start, end](...)`,
/// and `(...) U[start, end] (...)`, where interval bounds are shown in seconds.
impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_from(self.root, f)
    }
}
