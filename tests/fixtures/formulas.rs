#![allow(dead_code)]

use robstl::stl::core::TimeInterval;
use robstl::stl::formula::{Formula, FormulaBuilder, NodeId};
use robstl::stl::formulas::{Rectangle, in_rectangle, reach_avoid};
use robstl::stl::predicate::Predicate;
use rstest::fixture;

// x > c over a scalar signal
pub fn x_gt(builder: &mut FormulaBuilder, c: f64) -> NodeId {
    builder.predicate(Predicate::greater_than(1, 0, c).unwrap())
}

pub fn x_lt(builder: &mut FormulaBuilder, c: f64) -> NodeId {
    builder.predicate(Predicate::less_than(1, 0, c).unwrap())
}

pub fn interval(start: u64, end: u64) -> TimeInterval {
    TimeInterval::from_secs(start, end).unwrap()
}

// ---
// Formula Fixtures
// ---

/// G[0,2](x > 3)
#[fixture]
pub fn formula_1() -> Formula {
    let mut b = FormulaBuilder::new();
    let p = x_gt(&mut b, 3.0);
    let g = b.always(interval(0, 2), p).unwrap();
    b.build(g).unwrap()
}

/// (G[0,2](x > 0)) U[0,6] (F[0,2](x > 3))
#[fixture]
pub fn formula_2() -> Formula {
    let mut b = FormulaBuilder::new();
    let pos = x_gt(&mut b, 0.0);
    let big = x_gt(&mut b, 3.0);
    let left = b.always(interval(0, 2), pos).unwrap();
    let right = b.eventually(interval(0, 2), big).unwrap();
    let until = b.until(interval(0, 6), left, right).unwrap();
    b.build(until).unwrap()
}

/// F[0,2](x > 5) ∧ G[0,2](x > 0)
#[fixture]
pub fn formula_3() -> Formula {
    let mut b = FormulaBuilder::new();
    let big = x_gt(&mut b, 5.0);
    let pos = x_gt(&mut b, 0.0);
    let f = b.eventually(interval(0, 2), big).unwrap();
    let g = b.always(interval(0, 2), pos).unwrap();
    let and = b.and([f, g]).unwrap();
    b.build(and).unwrap()
}

/// x > 5
#[fixture]
pub fn formula_4() -> Formula {
    let mut b = FormulaBuilder::new();
    let p = x_gt(&mut b, 5.0);
    b.build(p).unwrap()
}

/// (x < 4) U[1,3] (x > 5)
#[fixture]
pub fn formula_5() -> Formula {
    let mut b = FormulaBuilder::new();
    let low = x_lt(&mut b, 4.0);
    let high = x_gt(&mut b, 5.0);
    let until = b.until(interval(1, 3), low, high).unwrap();
    b.build(until).unwrap()
}

/// ¬F[0,3](¬(x > 0)), which must equal G[0,3](x > 0)
#[fixture]
pub fn formula_6() -> Formula {
    let mut b = FormulaBuilder::new();
    let p = x_gt(&mut b, 0.0);
    let not_p = b.not(p).unwrap();
    let f = b.eventually(interval(0, 3), not_p).unwrap();
    let root = b.not(f).unwrap();
    b.build(root).unwrap()
}

/// G[0,3](x > 0)
#[fixture]
pub fn formula_6_alt() -> Formula {
    let mut b = FormulaBuilder::new();
    let p = x_gt(&mut b, 0.0);
    let g = b.always(interval(0, 3), p).unwrap();
    b.build(g).unwrap()
}

/// F[0,10](x0 ≥ 8) ∧ G[0,10]((x1 - 1 ≥ 0) ∨ (-x1 - 1 ≥ 0))
#[fixture]
pub fn reach_goal_avoid_band() -> Formula {
    let mut b = FormulaBuilder::new();
    let goal = b.predicate(Predicate::new(vec![1.0, 0.0], 8.0).unwrap());
    let above_band = b.predicate(Predicate::new(vec![0.0, 1.0], 1.0).unwrap());
    let below_band = b.predicate(Predicate::new(vec![0.0, -1.0], 1.0).unwrap());
    let avoid_obstacle = b.or([above_band, below_band]).unwrap();
    let reach = b.eventually(interval(0, 10), goal).unwrap();
    let avoid = b.always(interval(0, 10), avoid_obstacle).unwrap();
    let spec = b.and([reach, avoid]).unwrap();
    b.build(spec).unwrap()
}

/// Always avoid the box [3,5]×[4,6] and eventually reach [7,8]×[8,9], within 20 s.
#[fixture]
pub fn box_reach_avoid() -> Formula {
    let mut b = FormulaBuilder::new();
    let obstacle = in_rectangle(&mut b, 2, Rectangle::planar(3.0, 5.0, 4.0, 6.0)).unwrap();
    let goal = in_rectangle(&mut b, 2, Rectangle::planar(7.0, 8.0, 8.0, 9.0)).unwrap();
    let spec = reach_avoid(&mut b, goal, obstacle, interval(0, 20)).unwrap();
    b.build(spec).unwrap()
}
