#![allow(dead_code)]

use robstl::signal::Signal;
use rstest::fixture;
use std::time::Duration;

use crate::common::{planar_signal, scalar_signal};

// ---
// Signal Fixtures
// ---

#[fixture]
pub fn signal_1() -> Signal {
    scalar_signal(&[5.0, 4.0, 6.0, 2.0, 5.0])
}

#[fixture]
pub fn signal_2() -> Signal {
    scalar_signal(&[1.0, 1.0, 1.0, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0, 1.0, 2.0])
}

#[fixture]
pub fn signal_3() -> Signal {
    scalar_signal(&[0.0, 6.0, 1.0, 0.0, 8.0, 1.0, 7.0])
}

/// x(t) = (t, 0) sampled at t = 0..=10.
#[fixture]
pub fn straight_line() -> Signal {
    planar_signal((0..=10).map(|t| [t as f64, 0.0]).collect())
}

/// Reaches the goal box but cuts through the obstacle.
#[fixture]
pub fn trajectory_through_obstacle() -> Signal {
    planar_signal((0..25).map(|i| [0.4 * i as f64, 0.45 * i as f64]).collect())
}

/// Avoids the obstacle but never gets close to the goal.
#[fixture]
pub fn trajectory_short() -> Signal {
    planar_signal((0..25).map(|i| [0.1 * i as f64, 0.3 * i as f64]).collect())
}

/// Bends below the obstacle and ends up in the goal.
#[fixture]
pub fn trajectory_curved() -> Signal {
    planar_signal(
        (0..25)
            .map(|i| {
                let i = i as f64;
                [0.43 * i, 0.0015 * i.powi(3)]
            })
            .collect(),
    )
}

#[fixture]
pub fn monotonic_increasing() -> Signal {
    const N: usize = 51;
    let values: Vec<f64> = (0..N)
        .map(|i| {
            let t = i as f64 / (N as f64 - 1.0);
            -10.0 + 20.0 * t // from -10 to 10
        })
        .collect();
    scalar_signal(&values)
}

/// Samples at 0, 2, 4, 6 and 8 seconds.
#[fixture]
pub fn coarse_signal() -> Signal {
    Signal::from_uniform(
        Duration::from_secs(2),
        vec![vec![1.0], vec![-1.0], vec![3.0], vec![0.0], vec![2.0]],
    )
    .unwrap()
}
