//! Demo of simplex projection with random and deterministic pivots
//!
//! Run with `RUST_LOG=debug` to see the per-call projection summary.

use hibachi::core::PivotRule;
use hibachi::simplex::{project_sorted, SimplexProjector};
use hibachi::utils::in_simplex;
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Simplex Projection Demo ===");

    let v = array![0.8, -0.3, 1.7, 0.2, 1.1, -2.0];
    println!("Input vector: {v}");

    for &z in &[0.5, 1.0, 3.0, 10.0] {
        let w = SimplexProjector::new().with_seed(42).project(&v, z)?;
        let support = w.iter().filter(|&&x| x > 0.0).count();
        println!("\n--- z = {z} ---");
        println!("Weights:  {w:.4}");
        println!("Sum:      {:.6}", w.sum());
        println!("Support:  {support} of {}", w.len());
        println!("On simplex: {}", in_simplex(&w, z, 1e-9));
    }

    println!("\n--- Pivot rules agree ---");
    let random = SimplexProjector::new().with_seed(1).project(&v, 1.0)?;
    let first = SimplexProjector::new()
        .with_pivot(PivotRule::First)
        .project(&v, 1.0)?;
    let sorted = project_sorted(&v, 1.0)?;
    println!("Random pivot: {random:.4}");
    println!("First pivot:  {first:.4}");
    println!("Sort-based:   {sorted:.4}");

    println!("\n--- Invalid input ---");
    match SimplexProjector::new().project(&v, 0.0) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("z = 0 rejected: {e}"),
    }

    Ok(())
}
