//! Robustness evaluation of a [`Formula`] over a [`Signal`].
//!
//! The evaluator walks the formula with an explicit frame stack (no recursion),
//! computes each visited node's trace over its whole evaluable prefix, and
//! caches it by node so shared subformulas are computed once. The cache lives
//! for a single call and is tagged with the identity of the signal it was
//! filled from.

use crate::error::{Result, StlError};
use crate::signal::{Signal, SignalId, Step};
use crate::stl::core::RobustnessSemantics;
use crate::stl::formula::{Formula, Node, NodeId};
use crate::stl::horizon;
use crate::stl::operators::{
    eval_always, eval_and, eval_constant, eval_eventually, eval_not, eval_or, eval_predicate,
    eval_until,
};
use crate::stl::window::WindowPolicy;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, trace};

/// Work counters for one evaluation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Node traces actually computed.
    pub nodes_evaluated: usize,
    /// Visits answered from the memo table.
    pub cache_hits: usize,
}

/// Result of a full evaluation: the root trace plus bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<Y> {
    pub trace: Vec<Step<Y>>,
    pub horizon: Duration,
    pub stats: EvaluationStats,
}

/// Quantitative (`Y = f64`) or qualitative (`Y = bool`) robustness evaluator.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<Y = f64> {
    policy: WindowPolicy,
    memoize: bool,
    _phantom: PhantomData<Y>,
}

impl<Y> Default for Evaluator<Y> {
    fn default() -> Self {
        EvaluatorBuilder::new().build()
    }
}

/// The Builder pattern struct for [`Evaluator`].
#[derive(Debug, Clone, Copy)]
pub struct EvaluatorBuilder<Y> {
    policy: WindowPolicy,
    memoize: bool,
    _phantom: PhantomData<Y>,
}

impl<Y> Default for EvaluatorBuilder<Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Y> EvaluatorBuilder<Y> {
    pub fn new() -> Self {
        EvaluatorBuilder {
            policy: WindowPolicy::default(),
            memoize: true,
            _phantom: PhantomData,
        }
    }

    /// Configures how window bounds between samples are resolved.
    pub fn window_policy(mut self, policy: WindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables reuse of shared subformula traces. Results are the
    /// same either way.
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn build(self) -> Evaluator<Y> {
        Evaluator {
            policy: self.policy,
            memoize: self.memoize,
            _phantom: PhantomData,
        }
    }
}

/// Flat per-node trace table for one `(formula, signal)` evaluation.
///
/// A table is created at the start of a call and dropped at its end, so every
/// entry was computed from the signal named by `signal`.
struct TraceTable<Y> {
    signal: SignalId,
    traces: Vec<Option<Rc<Vec<Y>>>>,
}

impl<Y> TraceTable<Y> {
    fn new(signal: SignalId, nodes: usize) -> Self {
        TraceTable {
            signal,
            traces: (0..nodes).map(|_| None).collect(),
        }
    }

    fn get(&self, id: NodeId) -> Option<Rc<Vec<Y>>> {
        self.traces[id.index()].clone()
    }

    fn insert(&mut self, id: NodeId, trace: Rc<Vec<Y>>) {
        self.traces[id.index()] = Some(trace);
    }
}

enum Frame {
    Enter(NodeId),
    Exit(NodeId),
}

impl<Y> Evaluator<Y> {
    pub fn builder() -> EvaluatorBuilder<Y> {
        EvaluatorBuilder::new()
    }

    pub fn window_policy(&self) -> WindowPolicy {
        self.policy
    }

    pub fn is_memoized(&self) -> bool {
        self.memoize
    }
}

impl<Y: RobustnessSemantics> Evaluator<Y> {
    /// Robustness at the first sample of `signal`.
    pub fn robustness(&self, formula: &Formula, signal: &Signal) -> Result<Y> {
        self.robustness_at(formula, signal, 0)
    }

    /// Robustness at sample `index`.
    ///
    /// Fails with [`StlError::HorizonExceeded`] when the signal ends before
    /// `t_index + H(formula)`, or when `index` is past the last sample.
    pub fn robustness_at(&self, formula: &Formula, signal: &Signal, index: usize) -> Result<Y> {
        let horizons = horizon::horizons(formula);
        let h = horizons[formula.root().index()];
        let end = signal.end_time();
        if index >= signal.evaluable_len(h) {
            let time = if index < signal.len() {
                signal.timestamp(index)
            } else {
                end
            };
            return Err(StlError::HorizonExceeded {
                index,
                time,
                horizon: h,
                end,
            });
        }
        let (trace, _) = self.root_trace(formula, signal, &horizons)?;
        Ok(trace[index])
    }

    /// Robustness at every evaluable sample, as `(time, value)` steps.
    pub fn robustness_trace(&self, formula: &Formula, signal: &Signal) -> Result<Vec<Step<Y>>> {
        Ok(self.evaluate(formula, signal)?.trace)
    }

    /// Full evaluation with horizon and work counters.
    pub fn evaluate(&self, formula: &Formula, signal: &Signal) -> Result<Evaluation<Y>> {
        let horizons = horizon::horizons(formula);
        let h = horizons[formula.root().index()];
        if signal.evaluable_len(h) == 0 {
            return Err(StlError::HorizonExceeded {
                index: 0,
                time: signal.get_front().timestamp,
                horizon: h,
                end: signal.end_time(),
            });
        }

        let (values, stats) = self.root_trace(formula, signal, &horizons)?;
        let trace = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Step::new(v, signal.timestamp(i)))
            .collect();
        Ok(Evaluation {
            trace,
            horizon: h,
            stats,
        })
    }

    /// Post-order walk from the root using an explicit frame stack.
    ///
    /// Operand traces are kept on `values`; an `Exit` frame pops exactly as
    /// many traces as its node has children, in child order.
    fn root_trace(
        &self,
        formula: &Formula,
        signal: &Signal,
        horizons: &[Duration],
    ) -> Result<(Rc<Vec<Y>>, EvaluationStats)> {
        let mut table = TraceTable::new(signal.id(), formula.len());
        debug!(
            nodes = formula.len(),
            signal = ?table.signal,
            samples = signal.len(),
            horizon = ?horizons[formula.root().index()],
            policy = ?self.policy,
            memoize = self.memoize,
            "evaluating formula"
        );
        let mut stats = EvaluationStats::default();
        let mut frames = vec![Frame::Enter(formula.root())];
        let mut values: Vec<Rc<Vec<Y>>> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Enter(id) => {
                    if self.memoize
                        && let Some(cached) = table.get(id)
                    {
                        stats.cache_hits += 1;
                        values.push(cached);
                        continue;
                    }
                    frames.push(Frame::Exit(id));
                    for child in formula.node(id).children().into_iter().rev() {
                        frames.push(Frame::Enter(child));
                    }
                }
                Frame::Exit(id) => {
                    let node = formula.node(id);
                    let arity = node.children().len();
                    let operands = values.split_off(values.len() - arity);
                    let len = signal.evaluable_len(horizons[id.index()]);

                    let trace = Rc::new(self.eval_node(node, &operands, signal, len)?);
                    trace!(node = id.index(), len, "computed node trace");
                    stats.nodes_evaluated += 1;

                    if self.memoize {
                        table.insert(id, Rc::clone(&trace));
                    }
                    values.push(trace);
                }
            }
        }

        debug!(
            nodes_evaluated = stats.nodes_evaluated,
            cache_hits = stats.cache_hits,
            "evaluation finished"
        );
        // The root's Exit frame is always the last one processed.
        let root = values.pop().unwrap_or_default();
        Ok((root, stats))
    }

    fn eval_node(
        &self,
        node: &Node,
        operands: &[Rc<Vec<Y>>],
        signal: &Signal,
        len: usize,
    ) -> Result<Vec<Y>> {
        let trace = match node {
            Node::True => eval_constant(Y::atomic_true(), len),
            Node::False => eval_constant(Y::atomic_false(), len),
            Node::Predicate(p) => eval_predicate(p, signal, len)?,
            Node::Not(_) => eval_not(&operands[0], len),
            Node::And(_) => eval_and(&slices(operands), len),
            Node::Or(_) => eval_or(&slices(operands), len),
            Node::Always(interval, _) => {
                eval_always(interval, &operands[0], signal, self.policy, len)?
            }
            Node::Eventually(interval, _) => {
                eval_eventually(interval, &operands[0], signal, self.policy, len)?
            }
            Node::Until { interval, .. } => eval_until(
                interval,
                &operands[0],
                &operands[1],
                signal,
                self.policy,
                len,
            )?,
        };
        Ok(trace)
    }
}

impl Evaluator<f64> {
    /// `true` iff the robustness at the first sample is non-negative.
    pub fn satisfies(&self, formula: &Formula, signal: &Signal) -> Result<bool> {
        Ok(self.robustness(formula, signal)? >= 0.0)
    }
}

fn slices<Y>(operands: &[Rc<Vec<Y>>]) -> Vec<&[Y]> {
    operands.iter().map(|o| o.as_slice()).collect()
}
