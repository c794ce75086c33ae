//! Utility functions shared by the numeric routines

use crate::core::{HibachiError, Result};
use ndarray::{ArrayBase, ArrayD, Data, Dimension, Ix1};

/// Copy `x` into an owned `f64` array, promoting the element type
///
/// # Errors
/// `NonFinite` if any promoted entry is NaN or infinite.
pub fn to_f64_array<A, S, D>(x: &ArrayBase<S, D>) -> Result<ArrayD<f64>>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let promoted: ArrayD<f64> = x.mapv(Into::into).into_dyn();
    if let Some((idx, value)) = promoted.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(HibachiError::NonFinite(format!(
            "entry at {:?} is {}",
            idx.slice(),
            value
        )));
    }
    Ok(promoted)
}

/// Check whether `w` lies on the simplex of mass `z`
///
/// Every entry must be non-negative and the entries must sum to `z`
/// within `tol`.
pub fn in_simplex<S>(w: &ArrayBase<S, Ix1>, z: f64, tol: f64) -> bool
where
    S: Data<Elem = f64>,
{
    w.iter().all(|&x| x >= 0.0) && (w.sum() - z).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_promotes_integers() {
        let x = array![[1i32, -2], [3, 4]];
        let promoted = to_f64_array(&x).unwrap();
        assert_eq!(promoted.shape(), &[2, 2]);
        assert_eq!(
            promoted.iter().copied().collect::<Vec<_>>(),
            vec![1.0, -2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn test_promotes_f32() {
        let x = array![0.5f32, 1.5];
        let promoted = to_f64_array(&x).unwrap();
        assert_eq!(promoted.ndim(), 1);
        assert_eq!(promoted.iter().copied().collect::<Vec<_>>(), vec![0.5, 1.5]);
    }

    #[test]
    fn test_rejects_non_finite() {
        let x = array![1.0, f64::INFINITY];
        assert!(matches!(
            to_f64_array(&x),
            Err(HibachiError::NonFinite(_))
        ));

        let x = array![[f64::NAN]];
        assert!(matches!(
            to_f64_array(&x),
            Err(HibachiError::NonFinite(_))
        ));
    }

    #[test]
    fn test_in_simplex() {
        assert!(in_simplex(&array![0.25, 0.75, 0.0], 1.0, 1e-9));
        assert!(!in_simplex(&array![-0.25, 1.25], 1.0, 1e-9));
        assert!(!in_simplex(&array![0.5, 0.4], 1.0, 1e-9));
        assert!(in_simplex(&array![1.0, 1.0], 2.0, 1e-9));
    }
}
