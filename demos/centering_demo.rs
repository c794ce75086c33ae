//! Demo of double-centering a kernel matrix

use hibachi::center;
use ndarray::{Array2, Axis};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Double-Centering Demo ===");

    // RBF Gram matrix of a handful of 1-d points
    let points: [f64; 5] = [0.0, 0.5, 1.0, 3.0, 3.2];
    let n = points.len();
    let gamma = 0.5_f64;
    let k = Array2::from_shape_fn((n, n), |(i, j)| {
        let d = points[i] - points[j];
        (-gamma * d * d).exp()
    });

    println!("Kernel matrix:\n{k:.3}");

    let centered = center(&k)?;
    println!("\nCentered matrix:\n{centered:.3}");
    println!("\nRow sums:    {:.2e}", centered.sum_axis(Axis(1)));
    println!("Column sums: {:.2e}", centered.sum_axis(Axis(0)));

    let rectangular = Array2::<f64>::zeros((2, 3));
    match center(&rectangular) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\nNon-square input rejected: {e}"),
    }

    Ok(())
}
