//! Core type definitions for feature selection

use crate::core::{HibachiError, Result};
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of a feature selector: feature indices ordered best first
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSelection {
    indices: Vec<usize>,
    scores: Option<Vec<f64>>,
    n_features: usize,
}

impl FeatureSelection {
    /// Create a selection from explicit indices
    ///
    /// # Arguments
    /// * `indices` - Selected feature indices, most relevant first
    /// * `n_features` - Number of features the selection was drawn from
    ///
    /// # Errors
    /// `InvalidParameter` if an index is out of range or repeated.
    pub fn from_indices(indices: Vec<usize>, n_features: usize) -> Result<Self> {
        let mut seen = HashSet::with_capacity(indices.len());
        for &idx in &indices {
            if idx >= n_features {
                return Err(HibachiError::InvalidParameter(format!(
                    "feature index {idx} out of range for {n_features} features"
                )));
            }
            if !seen.insert(idx) {
                return Err(HibachiError::InvalidParameter(format!(
                    "feature index {idx} selected more than once"
                )));
            }
        }

        Ok(Self {
            indices,
            scores: None,
            n_features,
        })
    }

    /// Rank every feature by score, highest first
    ///
    /// Equal scores keep the lower feature index first.
    pub fn from_scores(scores: &[f64]) -> Result<Self> {
        if let Some(pos) = scores.iter().position(|s| !s.is_finite()) {
            return Err(HibachiError::NonFinite(format!(
                "score for feature {pos} is {}",
                scores[pos]
            )));
        }

        let mut ranked: Vec<usize> = (0..scores.len()).collect();
        // Stable sort keeps ties in index order
        ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        let ranked_scores = ranked.iter().map(|&i| scores[i]).collect();

        Ok(Self {
            indices: ranked,
            scores: Some(ranked_scores),
            n_features: scores.len(),
        })
    }

    /// Attach scores aligned with the selected indices
    pub fn with_scores(mut self, scores: Vec<f64>) -> Result<Self> {
        if scores.len() != self.indices.len() {
            return Err(HibachiError::DimensionMismatch {
                expected: self.indices.len(),
                actual: scores.len(),
            });
        }
        if let Some(pos) = scores.iter().position(|s| !s.is_finite()) {
            return Err(HibachiError::NonFinite(format!(
                "score for feature {} is {}",
                self.indices[pos], scores[pos]
            )));
        }
        self.scores = Some(scores);
        Ok(self)
    }

    /// Keep only the `k` best entries
    pub fn top_k(&self, k: usize) -> Self {
        let k = k.min(self.indices.len());
        Self {
            indices: self.indices[..k].to_vec(),
            scores: self.scores.as_ref().map(|s| s[..k].to_vec()),
            n_features: self.n_features,
        }
    }

    /// Extract the selected columns of `x`, in selection order
    pub fn apply<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array2<f64>>
    where
        S: Data<Elem = f64>,
    {
        if x.ncols() != self.n_features {
            return Err(HibachiError::DimensionMismatch {
                expected: self.n_features,
                actual: x.ncols(),
            });
        }
        Ok(x.select(Axis(1), &self.indices))
    }

    /// Selected feature indices, best first
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Scores aligned with `indices()`, when the selector produced them
    pub fn scores(&self) -> Option<&[f64]> {
        self.scores.as_deref()
    }

    /// Number of features in the data the selection refers to
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of selected features
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// How the simplex projection picks its partition pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PivotRule {
    /// Uniformly random candidate; expected linear time
    #[default]
    Random,
    /// First remaining candidate; deterministic but quadratic on sorted input
    First,
}

/// Configuration for the simplex projector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Pivot selection rule
    pub pivot: PivotRule,
    /// Seed for the pivot generator; `None` seeds from entropy on every call
    pub seed: Option<u64>,
}
