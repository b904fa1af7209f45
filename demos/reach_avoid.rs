use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use robstl::stl::core::TimeInterval;
use robstl::stl::formulas::{Rectangle, in_rectangle, reach_avoid};
use robstl::{Evaluator, FormulaBuilder, Signal};
use std::error::Error;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Run with `RUST_LOG=robstl=debug` to see per-evaluation details.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Avoid the obstacle box, reach the goal box within 20 s.
    let mut b = FormulaBuilder::new();
    let obstacle = in_rectangle(&mut b, 2, Rectangle::planar(3.0, 5.0, 4.0, 6.0))?;
    let goal = in_rectangle(&mut b, 2, Rectangle::planar(7.0, 8.0, 8.0, 9.0))?;
    let root = reach_avoid(&mut b, goal, obstacle, TimeInterval::from_secs(0, 20)?)?;
    let formula = b.build(root)?;

    println!("Formula:\n{}\n", formula);
    println!("Formula Structure:\n{}", formula.to_tree_string(2));

    let period = Duration::from_secs(1);
    let through_obstacle: Vec<Vec<f64>> = (0..25)
        .map(|i| vec![0.4 * i as f64, 0.45 * i as f64])
        .collect();
    let short: Vec<Vec<f64>> = (0..25)
        .map(|i| vec![0.1 * i as f64, 0.3 * i as f64])
        .collect();
    let curved: Vec<Vec<f64>> = (0..25)
        .map(|i| {
            let i = i as f64;
            vec![0.43 * i, 0.0015 * i.powi(3)]
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 0.05)?;
    let noisy: Vec<Vec<f64>> = curved
        .iter()
        .map(|p| vec![p[0] + noise.sample(&mut rng), p[1] + noise.sample(&mut rng)])
        .collect();

    let eval = Evaluator::<f64>::default();
    let qualitative = Evaluator::<bool>::default();
    for (name, states) in [
        ("through obstacle", through_obstacle),
        ("too short", short),
        ("curved", curved),
        ("curved + noise", noisy),
    ] {
        let signal = Signal::from_uniform(period, states)?;
        let evaluation = eval.evaluate(&formula, &signal)?;
        let rho = evaluation.trace[0].value;
        info!(
            trajectory = name,
            nodes_evaluated = evaluation.stats.nodes_evaluated,
            cache_hits = evaluation.stats.cache_hits,
            "evaluated"
        );
        println!(
            "{:<18} robustness = {:>8.4}  satisfied = {}",
            name,
            rho,
            qualitative.robustness(&formula, &signal)?
        );
    }

    Ok(())
}
