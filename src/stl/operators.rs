//! Per-operator trace kernels.
//!
//! Each kernel turns the operand traces of a node into the node's own trace
//! over its evaluable prefix `0..len`. Operand traces are always at least as
//! long as the parent needs for Boolean operators; temporal operators clip
//! their windows to the operand's length.

use crate::error::Result;
use crate::signal::Signal;
use crate::stl::core::{RobustnessSemantics, TimeInterval};
use crate::stl::predicate::Predicate;
use crate::stl::window::{self, WindowPolicy};

pub fn eval_constant<Y: RobustnessSemantics>(value: Y, len: usize) -> Vec<Y> {
    vec![value; len]
}

pub fn eval_predicate<Y: RobustnessSemantics>(
    predicate: &Predicate,
    signal: &Signal,
    len: usize,
) -> Result<Vec<Y>> {
    Ok(predicate
        .distances(signal, len)?
        .into_iter()
        .map(Y::atomic)
        .collect())
}

pub fn eval_not<Y: RobustnessSemantics>(operand: &[Y], len: usize) -> Vec<Y> {
    operand[..len].iter().map(|&v| Y::not(v)).collect()
}

pub fn eval_and<Y: RobustnessSemantics>(operands: &[&[Y]], len: usize) -> Vec<Y> {
    (0..len)
        .map(|i| {
            operands
                .iter()
                .fold(Y::globally_identity(), |acc, op| Y::and(acc, op[i]))
        })
        .collect()
}

pub fn eval_or<Y: RobustnessSemantics>(operands: &[&[Y]], len: usize) -> Vec<Y> {
    (0..len)
        .map(|i| {
            operands
                .iter()
                .fold(Y::eventually_identity(), |acc, op| Y::or(acc, op[i]))
        })
        .collect()
}

/// `G[a,b]`: minimum of the operand over each sample's window.
pub fn eval_always<Y: RobustnessSemantics>(
    interval: &TimeInterval,
    operand: &[Y],
    signal: &Signal,
    policy: WindowPolicy,
    len: usize,
) -> Result<Vec<Y>> {
    (0..len)
        .map(|t| {
            let w = window::resolve(signal, t, interval, policy, operand.len())?;
            Ok(operand[w]
                .iter()
                .fold(Y::globally_identity(), |acc, &v| Y::and(acc, v)))
        })
        .collect()
}

/// `F[a,b]`: maximum of the operand over each sample's window.
pub fn eval_eventually<Y: RobustnessSemantics>(
    interval: &TimeInterval,
    operand: &[Y],
    signal: &Signal,
    policy: WindowPolicy,
    len: usize,
) -> Result<Vec<Y>> {
    (0..len)
        .map(|t| {
            let w = window::resolve(signal, t, interval, policy, operand.len())?;
            Ok(operand[w]
                .iter()
                .fold(Y::eventually_identity(), |acc, &v| Y::or(acc, v)))
        })
        .collect()
}

/// `l U[a,b] r`:
/// `max_{t1 ∈ W(t)} min(r(t1), min_{t2 ∈ [t, t1]} l(t2))`, iterated literally.
pub fn eval_until<Y: RobustnessSemantics>(
    interval: &TimeInterval,
    left: &[Y],
    right: &[Y],
    signal: &Signal,
    policy: WindowPolicy,
    len: usize,
) -> Result<Vec<Y>> {
    let limit = left.len().min(right.len());
    (0..len)
        .map(|t| {
            let w = window::resolve(signal, t, interval, policy, limit)?;
            let result = w.fold(Y::eventually_identity(), |best, t1| {
                let left_holds = left[t..=t1]
                    .iter()
                    .fold(Y::globally_identity(), |acc, &v| Y::and(acc, v));
                Y::or(best, Y::and(right[t1], left_holds))
            });
            Ok(result)
        })
        .collect()
}
