//! Error types for feature selection primitives

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HibachiError {
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Invalid target: expected a finite value > 0, got {0}")]
    InvalidTarget(f64),

    #[error("Non-finite input: {0}")]
    NonFinite(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, HibachiError>;
