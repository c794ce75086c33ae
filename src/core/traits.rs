//! Core traits for feature selection

use crate::core::{FeatureSelection, HibachiError, Result};
use ndarray::{ArrayView1, ArrayView2};

/// Feature selection strategy
///
/// A selector looks at a feature matrix `x` (rows are samples, columns are
/// features) and a label vector `y` with one entry per sample, and returns
/// the chosen or ranked feature indices.
///
/// Any closure with the matching signature is a selector, so strategies can
/// be plugged in without defining a type.
pub trait Selector: Send + Sync {
    /// Human-readable name, recorded when a selection is saved
    fn name(&self) -> &str {
        "selector"
    }

    /// Choose features from `x` given labels `y`
    fn select(&self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<FeatureSelection>;
}

impl<F> Selector for F
where
    F: Fn(ArrayView2<'_, f64>, ArrayView1<'_, f64>) -> Result<FeatureSelection> + Send + Sync,
{
    fn select(&self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<FeatureSelection> {
        self(x, y)
    }
}

/// Check that `x` and `y` describe the same non-empty set of samples
pub fn validate_inputs(x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<()> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(HibachiError::EmptyDataset);
    }
    if y.len() != x.nrows() {
        return Err(HibachiError::DimensionMismatch {
            expected: x.nrows(),
            actual: y.len(),
        });
    }
    Ok(())
}
