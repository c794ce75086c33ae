//! Selection serialization and persistence
//!
//! Saves the outcome of a feature selector as JSON so a ranking computed
//! once can be reapplied to new data later.

use crate::core::{FeatureSelection, HibachiError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializable representation of a feature selection
#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableSelection {
    /// Selected feature indices, best first
    pub indices: Vec<usize>,
    /// Scores aligned with `indices`, if any
    pub scores: Option<Vec<f64>>,
    /// Number of features in the source data
    pub n_features: usize,
    /// Selection metadata
    pub metadata: SelectionMetadata,
}

/// Metadata for tracking where a selection came from
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionMetadata {
    /// Library version used to create the selection
    pub library_version: String,
    /// Name of the selector that produced it
    pub selector: String,
    /// Creation timestamp
    pub created_at: String,
}

impl SerializableSelection {
    /// Capture a selection together with the producing selector's name
    pub fn from_selection(selection: &FeatureSelection, selector: &str) -> Self {
        Self {
            indices: selection.indices().to_vec(),
            scores: selection.scores().map(<[f64]>::to_vec),
            n_features: selection.n_features(),
            metadata: SelectionMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                selector: selector.to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Save selection to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| HibachiError::SerializationError(e.to_string()))?;
        debug!("saved {} selected features to {:?}", self.indices.len(), path);
        Ok(())
    }

    /// Load selection from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let selection: Self = serde_json::from_reader(reader)
            .map_err(|e| HibachiError::SerializationError(e.to_string()))?;
        debug!("loaded selection from {:?}", path);
        Ok(selection)
    }

    /// Rebuild the selection, re-checking its indices
    pub fn to_selection(&self) -> Result<FeatureSelection> {
        let selection = FeatureSelection::from_indices(self.indices.clone(), self.n_features)?;
        match &self.scores {
            Some(scores) => selection.with_scores(scores.clone()),
            None => Ok(selection),
        }
    }
}
