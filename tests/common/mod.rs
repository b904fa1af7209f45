#![allow(dead_code)]

use robstl::signal::{Signal, Step};
use std::time::Duration;

// Helper to create a one-dimensional signal sampled every second
pub fn scalar_signal(values: &[f64]) -> Signal {
    Signal::from_uniform(
        Duration::from_secs(1),
        values.iter().map(|&v| vec![v]).collect(),
    )
    .unwrap()
}

pub fn planar_signal(points: Vec<[f64; 2]>) -> Signal {
    Signal::from_uniform(
        Duration::from_secs(1),
        points.into_iter().map(|p| p.to_vec()).collect(),
    )
    .unwrap()
}

pub fn values<Y: Copy>(trace: &[Step<Y>]) -> Vec<Y> {
    trace.iter().map(|step| step.value).collect()
}
