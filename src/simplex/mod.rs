//! Euclidean projection onto the positive simplex
//!
//! The scaled positive simplex is the set
//!
//! ```text
//! { w : sum_i w_i = z, w_i >= 0 }
//! ```
//!
//! Projection follows Figure 2 of Duchi, Shalev-Shwartz, Singer & Chandra,
//! "Efficient Projections onto the l1-Ball for Learning in High Dimensions"
//! (ICML 2008): a randomized pivot partition that finds the threshold in
//! expected O(n) time without sorting.
//!
//! # Example
//!
//! ```rust
//! use hibachi::simplex::SimplexProjector;
//! use ndarray::array;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let w = SimplexProjector::new()
//!     .with_seed(7)
//!     .project(&array![3.0, 1.0, 2.0], 1.0)?;
//! assert!((w.sum() - 1.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

pub mod reference;

pub use self::reference::project_sorted;

use crate::core::{HibachiError, PivotRule, ProjectorConfig, Result};
use crate::utils::to_f64_array;
use log::{debug, trace};
use ndarray::{Array1, ArrayBase, Data, Dimension, Ix1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simplex projector with configurable pivot selection
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexProjector {
    config: ProjectorConfig,
}

impl SimplexProjector {
    /// Create a projector with a random, entropy-seeded pivot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector from an explicit configuration
    pub fn with_config(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// Seed the pivot generator so every call is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the pivot selection rule
    pub fn with_pivot(mut self, pivot: PivotRule) -> Self {
        self.config.pivot = pivot;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Project `v` onto the simplex of mass `z`
    ///
    /// A fresh generator is built for each call, from the configured seed
    /// or from OS entropy.
    pub fn project<A, S, D>(&self, v: &ArrayBase<S, D>, z: f64) -> Result<Array1<f64>>
    where
        A: Copy + Into<f64>,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let values = validate(v, z)?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(project_values(&values, z, self.config.pivot, &mut rng))
    }
}

/// Project `v` onto the simplex of mass `z` using a random pivot
///
/// # Arguments
/// * `v` - One-dimensional array of any element type convertible to `f64`
/// * `z` - Target mass, finite and strictly positive
///
/// # Errors
/// * `InvalidShape` if `v` is not one-dimensional or is empty
/// * `InvalidTarget` if `z` is not a finite positive number
/// * `NonFinite` if `v` contains NaN or infinity
pub fn project<A, S, D>(v: &ArrayBase<S, D>, z: f64) -> Result<Array1<f64>>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    SimplexProjector::new().project(v, z)
}

/// Project `v` onto the simplex of mass `z`, drawing pivots from `rng`
pub fn project_with_rng<A, S, D, R>(
    v: &ArrayBase<S, D>,
    z: f64,
    rng: &mut R,
) -> Result<Array1<f64>>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
    R: Rng + ?Sized,
{
    let values = validate(v, z)?;
    Ok(project_values(&values, z, PivotRule::Random, rng))
}

/// Check the preconditions and promote `v` to a one-dimensional `f64` array
pub(crate) fn validate<A, S, D>(v: &ArrayBase<S, D>, z: f64) -> Result<Array1<f64>>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    if v.ndim() != 1 {
        return Err(HibachiError::InvalidShape(format!(
            "expected a one-dimensional vector, got {} dimensions",
            v.ndim()
        )));
    }
    if v.is_empty() {
        return Err(HibachiError::InvalidShape(
            "cannot project an empty vector".to_string(),
        ));
    }
    if !(z.is_finite() && z > 0.0) {
        return Err(HibachiError::InvalidTarget(z));
    }

    to_f64_array(v)?
        .into_dimensionality::<Ix1>()
        .map_err(|e| HibachiError::InvalidShape(e.to_string()))
}

/// Shift by the largest entry and divide by `z`, giving a unit-mass problem
///
/// Projection commutes with adding a constant to every entry, and
/// `P(v, z) = z * P(v / z, 1)`. Entries more than `z` below the maximum are
/// always zero in the output, so they are clamped to `-1`. Every value then
/// lies in `[-1, 0]` and the running sums cannot overflow for finite input.
pub(crate) fn to_unit_mass(values: &Array1<f64>, z: f64) -> (Array1<f64>, f64) {
    let top = values.fold(f64::NEG_INFINITY, |m, &x| m.max(x));
    let unit = values.mapv(|x| ((x - top) / z).max(-1.0));
    (unit, top)
}

/// Randomized threshold search over validated values
fn project_values<R>(values: &Array1<f64>, z: f64, pivot: PivotRule, rng: &mut R) -> Array1<f64>
where
    R: Rng + ?Sized,
{
    let (unit, top) = to_unit_mass(values, z);
    let mut candidates: Vec<usize> = (0..unit.len()).collect();
    let mut s = 0.0;
    let mut p = 0usize;
    let mut rounds = 0usize;

    while !candidates.is_empty() {
        let k = match pivot {
            PivotRule::Random => candidates[rng.gen_range(0..candidates.len())],
            PivotRule::First => candidates[0],
        };
        let pivot_value = unit[k];

        // Ties with the pivot (and the pivot itself) go to the upper set
        let (upper, lower): (Vec<usize>, Vec<usize>) = candidates
            .iter()
            .partition(|&&j| unit[j] >= pivot_value);
        let delta_s: f64 = upper.iter().map(|&j| unit[j]).sum();
        let delta_p = upper.len();

        if (s + delta_s) - (p + delta_p) as f64 * pivot_value < 1.0 {
            s += delta_s;
            p += delta_p;
            candidates = lower;
        } else {
            candidates = upper.into_iter().filter(|&j| j != k).collect();
        }

        rounds += 1;
        trace!(
            "round {rounds}: pivot={pivot_value}, kept={p}, remaining={}",
            candidates.len()
        );
    }

    // The largest value always passes the test since the mass is positive
    debug_assert!(p > 0);
    let theta = (s - 1.0) / p as f64;
    debug!(
        "simplex projection: n={}, rounds={rounds}, support={p}, theta={}",
        unit.len(),
        top + theta * z
    );

    unit.mapv(|x| (x - theta).max(0.0) * z)
}
