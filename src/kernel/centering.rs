//! Double-centering of square matrices
//!
//! For an `n x n` matrix `X` and the all-ones matrix `J`, the centered
//! matrix is
//!
//! ```text
//! H X H = X - (1/n) J X - (1/n) X J + (1/n²) J X J,   H = I - (1/n) J
//! ```
//!
//! Entry-wise this is `X[i][j] - rowMean[i] - colMean[j] + grandMean`, which
//! is how it is computed here: O(n²) instead of two dense products.

use crate::core::{HibachiError, Result};
use crate::utils::to_f64_array;
use log::debug;
use ndarray::{Array2, ArrayBase, Axis, Data, Dimension, Ix2};

/// Double-center a square matrix
///
/// Every row and every column of the result sums to zero. The input is
/// copied and promoted to `f64`; it is never modified.
///
/// # Errors
/// * `InvalidShape` if `x` is not two-dimensional, not square, or empty
/// * `NonFinite` if `x` contains NaN or infinity
pub fn center<A, S, D>(x: &ArrayBase<S, D>) -> Result<Array2<f64>>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    if x.ndim() != 2 {
        return Err(HibachiError::InvalidShape(format!(
            "expected a two-dimensional matrix, got {} dimensions",
            x.ndim()
        )));
    }

    let mut centered = to_f64_array(x)?
        .into_dimensionality::<Ix2>()
        .map_err(|e| HibachiError::InvalidShape(e.to_string()))?;
    center_in_place(&mut centered)?;
    Ok(centered)
}

/// Double-center a square `f64` matrix without allocating a copy
pub fn center_in_place(x: &mut Array2<f64>) -> Result<()> {
    let (rows, cols) = x.dim();
    if rows != cols {
        return Err(HibachiError::InvalidShape(format!(
            "expected a square matrix, got {rows}x{cols}"
        )));
    }
    let (row_means, col_means) = match (x.mean_axis(Axis(1)), x.mean_axis(Axis(0))) {
        (Some(r), Some(c)) if rows > 0 => (r, c),
        _ => {
            return Err(HibachiError::InvalidShape(
                "cannot center an empty matrix".to_string(),
            ))
        }
    };
    let grand_mean = row_means.sum() / rows as f64;

    debug!("double-centering {rows}x{cols} matrix, grand mean {grand_mean}");

    for (i, mut row) in x.axis_iter_mut(Axis(0)).enumerate() {
        let shift = grand_mean - row_means[i];
        for (value, &col_mean) in row.iter_mut().zip(col_means.iter()) {
            *value += shift - col_mean;
        }
    }
    Ok(())
}
