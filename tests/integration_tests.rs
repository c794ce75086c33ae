//! Integration tests for the hibachi library
//!
//! These tests plug the numeric primitives into a selector the way a
//! kernel-based strategy would, and exercise the public API end to end.

use approx::assert_abs_diff_eq;
use hibachi::{
    center, project, validate_inputs, FeatureSelection, HibachiError, Result,
    SerializableSelection, Selector,
};
use ndarray::{array, Array1, Array2, ArrayView1, ArrayView2, Axis};
use tempfile::NamedTempFile;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Linear-kernel Gram matrix of a single column
fn gram(col: ArrayView1<'_, f64>) -> Array2<f64> {
    let n = col.len();
    Array2::from_shape_fn((n, n), |(i, j)| col[i] * col[j])
}

/// Biased HSIC estimate tr(K_c L_c) / n² for each feature
fn hsic_scores(x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<Vec<f64>> {
    let n = x.nrows() as f64;
    let l = center(&gram(y))?;
    x.axis_iter(Axis(1))
        .map(|col| -> Result<f64> {
            let k = center(&gram(col))?;
            Ok((&k * &l).sum() / (n * n))
        })
        .collect()
}

struct HsicSelector {
    k: usize,
}

impl Selector for HsicSelector {
    fn name(&self) -> &str {
        "hsic"
    }

    fn select(&self, x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>) -> Result<FeatureSelection> {
        validate_inputs(x, y)?;
        let scores = hsic_scores(x, y)?;
        Ok(FeatureSelection::from_scores(&scores)?.top_k(self.k))
    }
}

fn toy_data() -> (Array2<f64>, Array1<f64>) {
    let y = array![1.0, -1.0, 2.0, -2.0, 0.5, -0.5];
    // Feature 1 tracks y, feature 0 is noise, feature 2 is constant
    let x = array![
        [0.3, 1.1, 4.0],
        [-0.2, -0.9, 4.0],
        [0.1, 2.1, 4.0],
        [0.4, -2.0, 4.0],
        [-0.3, 0.4, 4.0],
        [0.0, -0.6, 4.0]
    ];
    (x, y)
}

#[test]
fn test_hsic_selector_workflow() {
    init_logging();
    let (x, y) = toy_data();
    let selector = HsicSelector { k: 2 };

    let selection = selector.select(x.view(), y.view()).expect("selection should succeed");
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.indices()[0], 1);

    let reduced = selection.apply(&x).expect("columns should match");
    assert_eq!(reduced.dim(), (6, 2));
    assert_eq!(reduced.column(0), x.column(1));
}

#[test]
fn test_constant_feature_scores_zero() {
    let (x, y) = toy_data();
    let scores = hsic_scores(x.view(), y.view()).unwrap();
    assert_abs_diff_eq!(scores[2], 0.0, epsilon = 1e-12);
    assert!(scores[1] > scores[0]);
}

#[test]
fn test_scores_to_simplex_weights() {
    init_logging();
    let (x, y) = toy_data();
    let scores = Array1::from(hsic_scores(x.view(), y.view()).unwrap());

    let weights = project(&scores, 1.0).expect("projection should succeed");
    assert_abs_diff_eq!(weights.sum(), 1.0, epsilon = 1e-9);
    assert!(weights.iter().all(|&w| w >= 0.0));
    assert!(weights[1] >= weights[0]);
}

#[test]
fn test_selector_rejects_mismatched_labels() {
    let (x, _) = toy_data();
    let y = array![1.0, 2.0];
    let result = HsicSelector { k: 1 }.select(x.view(), y.view());
    assert!(matches!(
        result,
        Err(HibachiError::DimensionMismatch {
            expected: 6,
            actual: 2
        })
    ));
}

#[test]
fn test_selection_persistence_workflow() {
    init_logging();
    let (x, y) = toy_data();
    let selector = HsicSelector { k: 2 };
    let selection = selector.select(x.view(), y.view()).unwrap();

    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    SerializableSelection::from_selection(&selection, selector.name())
        .save_to_file(temp_file.path())
        .expect("save should succeed");

    let loaded = SerializableSelection::load_from_file(temp_file.path())
        .expect("load should succeed");
    assert_eq!(loaded.metadata.selector, "hsic");

    let restored = loaded.to_selection().expect("indices should be valid");
    assert_eq!(restored.indices(), selection.indices());
    assert_eq!(restored.apply(&x).unwrap(), selection.apply(&x).unwrap());
}

#[test]
fn test_public_errors() {
    let matrix = Array2::<f64>::zeros((2, 2));
    assert!(matches!(
        project(&matrix, 1.0),
        Err(HibachiError::InvalidShape(_))
    ));
    assert!(matches!(
        project(&array![1.0, 2.0], 0.0),
        Err(HibachiError::InvalidTarget(_))
    ));
    assert!(matches!(
        center(&Array2::<f64>::zeros((3, 2))),
        Err(HibachiError::InvalidShape(_))
    ));
}

#[test]
fn test_center_random_matrix_sums() {
    let x = Array2::from_shape_fn((25, 25), |(i, j)| ((i * 31 + j * 17) % 11) as f64 - 5.0);
    let c = center(&x).unwrap();
    for s in c.sum_axis(Axis(0)).iter() {
        assert_abs_diff_eq!(*s, 0.0, epsilon = 1e-9);
    }
    for s in c.sum_axis(Axis(1)).iter() {
        assert_abs_diff_eq!(*s, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_center_rbf_gram_matrix() {
    let points: [f64; 5] = [0.0, 0.5, 1.0, 3.0, 3.2];
    let gamma = 0.5_f64;
    let n = points.len();
    let k = Array2::from_shape_fn((n, n), |(i, j)| {
        let d = points[i] - points[j];
        (-gamma * d * d).exp()
    });

    let c = center(&k).unwrap();
    for s in c.sum_axis(Axis(0)).iter().chain(c.sum_axis(Axis(1)).iter()) {
        assert_abs_diff_eq!(*s, 0.0, epsilon = 1e-12);
    }
    // Centering keeps the Gram matrix symmetric
    for i in 0..n {
        for j in 0..n {
            assert_abs_diff_eq!(c[[i, j]], c[[j, i]], epsilon = 1e-12);
        }
    }
}
