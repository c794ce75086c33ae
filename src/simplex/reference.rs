//! Sort-based simplex projection
//!
//! Figure 1 of Duchi et al. (2008): sort once, scan for the largest support
//! size whose threshold keeps every member positive. O(n log n) and fully
//! deterministic.

use crate::core::Result;
use crate::simplex::{to_unit_mass, validate};
use ndarray::{Array1, ArrayBase, Data, Dimension};

/// Project `v` onto the simplex of mass `z` by sorting
///
/// Accepts and rejects exactly the same inputs as [`crate::simplex::project`].
pub fn project_sorted<A, S, D>(v: &ArrayBase<S, D>, z: f64) -> Result<Array1<f64>>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let values = validate(v, z)?;
    let (unit, _) = to_unit_mass(&values, z);

    let mut sorted = unit.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut cumulative = 0.0;
    let mut support_sum = 0.0;
    let mut support = 0usize;
    for (j, &u) in sorted.iter().enumerate() {
        cumulative += u;
        if u - (cumulative - 1.0) / (j + 1) as f64 > 0.0 {
            support = j + 1;
            support_sum = cumulative;
        }
    }

    // The top entry always qualifies, so support >= 1
    let theta = (support_sum - 1.0) / support.max(1) as f64;
    Ok(unit.mapv(|x| (x - theta).max(0.0) * z))
}
