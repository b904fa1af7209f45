mod common;
mod fixtures;

use approx::assert_relative_eq;
use common::values;
use fixtures::formulas::*;
use fixtures::signals::*;
use pretty_assertions::assert_eq;
use robstl::signal::{Signal, Step};
use robstl::stl::evaluator::Evaluator;
use robstl::stl::formula::Formula;
use robstl::stl::window::WindowPolicy;
use robstl::{StlError, robustness, robustness_trace, satisfies};
use rstest::rstest;
use std::time::Duration;

// ---
// Expected Result "Oracles"
// ---

fn exp_f1_s1() -> Vec<f64> {
    vec![1.0, -1.0, -1.0]
}

fn exp_f2_s2() -> Vec<f64> {
    vec![1.0, 1.0, 1.0]
}

fn exp_f3_s3() -> Vec<f64> {
    vec![0.0, 0.0, 0.0, 0.0, 1.0]
}

fn exp_f4_s3() -> Vec<f64> {
    vec![-5.0, 1.0, -4.0, -5.0, 3.0, -4.0, 2.0]
}

fn exp_f5_s3() -> Vec<f64> {
    vec![-2.0, -4.0, -4.0, -4.0]
}

fn exp_f6_s2() -> Vec<f64> {
    vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]
}

/// This helper function contains the actual test logic.
/// It is called by the `rstest` runners below.
fn run_trace_test(formula: Formula, signal: Signal, expected: Vec<f64>) {
    println!("Testing formula:\n{}\n", formula.to_tree_string(2));

    for memoize in [true, false] {
        let trace = Evaluator::<f64>::builder()
            .memoize(memoize)
            .build()
            .robustness_trace(&formula, &signal)
            .unwrap();

        assert_eq!(
            values(&trace),
            expected,
            "Test failed for formula {} (memoize = {})",
            formula,
            memoize
        );
        let timestamps: Vec<Duration> = trace.iter().map(|s| s.timestamp).collect();
        let expected_timestamps: Vec<Duration> = (0..expected.len())
            .map(|i| signal.timestamp(i))
            .collect();
        assert_eq!(timestamps, expected_timestamps);
    }
}

#[rstest]
#[case::f1_s1(formula_1(), signal_1(), exp_f1_s1())]
#[case::f2_s2(formula_2(), signal_2(), exp_f2_s2())]
#[case::f3_s3(formula_3(), signal_3(), exp_f3_s3())]
#[case::f4_s3(formula_4(), signal_3(), exp_f4_s3())]
#[case::f5_s3(formula_5(), signal_3(), exp_f5_s3())]
#[case::f6_s2(formula_6(), signal_2(), exp_f6_s2())]
#[case::f6_alt_s2(formula_6_alt(), signal_2(), exp_f6_s2())]
fn test_robustness_trace(
    #[case] formula: Formula,
    #[case] signal: Signal,
    #[case] expected: Vec<f64>,
) {
    run_trace_test(formula, signal, expected);
}

#[rstest]
#[case::f1_s1(formula_1(), signal_1())]
#[case::f3_s3(formula_3(), signal_3())]
#[case::f5_s3(formula_5(), signal_3())]
fn qualitative_trace_matches_sign(#[case] formula: Formula, #[case] signal: Signal) {
    let quantitative = robustness_trace(&formula, &signal).unwrap();
    let qualitative = Evaluator::<bool>::default()
        .robustness_trace(&formula, &signal)
        .unwrap();
    let expected: Vec<Step<bool>> = quantitative
        .iter()
        .map(|s| Step::new(s.value >= 0.0, s.timestamp))
        .collect();
    assert_eq!(qualitative, expected);
}

// ---
// Reach-avoid scenarios
// ---

#[rstest]
fn reach_avoid_band_is_violated(reach_goal_avoid_band: Formula, straight_line: Signal) {
    assert_eq!(robustness(&reach_goal_avoid_band, &straight_line).unwrap(), -1.0);
    assert!(!satisfies(&reach_goal_avoid_band, &straight_line).unwrap());

    // horizon is the whole signal, so exactly one value is defined
    let trace = robustness_trace(&reach_goal_avoid_band, &straight_line).unwrap();
    assert_eq!(trace, vec![Step::new(-1.0, Duration::ZERO)]);
}

#[rstest]
fn reach_avoid_band_components(straight_line: Signal) {
    use robstl::stl::formula::FormulaBuilder;
    use robstl::stl::predicate::Predicate;

    let mut b = FormulaBuilder::new();
    let goal = b.predicate(Predicate::new(vec![1.0, 0.0], 8.0).unwrap());
    let above = b.predicate(Predicate::new(vec![0.0, 1.0], 1.0).unwrap());
    let below = b.predicate(Predicate::new(vec![0.0, -1.0], 1.0).unwrap());
    let avoid_obstacle = b.or([above, below]).unwrap();
    let reach = b.eventually(interval(0, 10), goal).unwrap();
    let avoid = b.always(interval(0, 10), avoid_obstacle).unwrap();

    let eval = Evaluator::<f64>::default();
    assert_eq!(eval.robustness(&b.build(reach).unwrap(), &straight_line).unwrap(), 2.0);
    assert_eq!(eval.robustness(&b.build(avoid).unwrap(), &straight_line).unwrap(), -1.0);

    let avoid_trace = eval
        .robustness_trace(&b.build(avoid_obstacle).unwrap(), &straight_line)
        .unwrap();
    assert_eq!(values(&avoid_trace), vec![-1.0; 11]);

    let goal = b.build(goal).unwrap();
    assert_eq!(eval.robustness_at(&goal, &straight_line, 8).unwrap(), 0.0);
    assert_eq!(eval.robustness_at(&goal, &straight_line, 10).unwrap(), 2.0);
}

#[rstest]
#[case::through_obstacle(trajectory_through_obstacle(), -0.5999999999999996)]
#[case::short(trajectory_short(), -5.0)]
#[case::curved(trajectory_curved(), 0.25200000000000067)]
fn box_reach_avoid_trajectories(
    box_reach_avoid: Formula,
    #[case] trajectory: Signal,
    #[case] expected: f64,
) {
    let rho = robustness(&box_reach_avoid, &trajectory).unwrap();
    assert_relative_eq!(rho, expected, epsilon = 1e-9);
    assert_eq!(satisfies(&box_reach_avoid, &trajectory).unwrap(), expected >= 0.0);
    // 25 samples at 1 s, horizon 20 s
    assert_eq!(robustness_trace(&box_reach_avoid, &trajectory).unwrap().len(), 5);
}

// ---
// Window resolution on coarse sampling
// ---

#[rstest]
fn outward_policy_snaps_to_enclosing_samples(coarse_signal: Signal) {
    let mut b = robstl::FormulaBuilder::new();
    let p = x_gt(&mut b, 0.0);
    let f = b.eventually(interval(1, 1), p).unwrap();
    let formula = b.build(f).unwrap();

    let trace = robustness_trace(&formula, &coarse_signal).unwrap();
    assert_eq!(values(&trace), vec![1.0, 3.0, 3.0, 2.0]);
}

#[rstest]
fn inner_policy_rejects_windows_between_samples(coarse_signal: Signal) {
    let mut b = robstl::FormulaBuilder::new();
    let p = x_gt(&mut b, 0.0);
    let f = b.eventually(interval(1, 1), p).unwrap();
    let formula = b.build(f).unwrap();

    let err = Evaluator::<f64>::builder()
        .window_policy(WindowPolicy::Inner)
        .build()
        .robustness_trace(&formula, &coarse_signal)
        .unwrap_err();
    assert_eq!(
        err,
        StlError::EmptyWindow {
            time: Duration::ZERO,
            start: Duration::from_secs(1),
            end: Duration::from_secs(1),
        }
    );
}

#[rstest]
#[case::outward(WindowPolicy::Outward)]
#[case::inner(WindowPolicy::Inner)]
fn policies_agree_when_windows_cover_samples(coarse_signal: Signal, #[case] policy: WindowPolicy) {
    let mut b = robstl::FormulaBuilder::new();
    let p = x_gt(&mut b, 0.0);
    let g = b.always(interval(0, 3), p).unwrap();
    let formula = b.build(g).unwrap();

    let trace = Evaluator::<f64>::builder()
        .window_policy(policy)
        .build()
        .robustness_trace(&formula, &coarse_signal)
        .unwrap();
    assert_eq!(values(&trace), vec![-1.0, -1.0, 0.0]);
}
