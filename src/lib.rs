//! Feature selection primitives
//!
//! Two numeric building blocks used by kernel- and sparsity-based feature
//! selection, plus the [`Selector`] abstraction that strategies implement:
//!
//! - [`project`]: Euclidean projection onto the scaled positive simplex
//!   (Duchi et al., 2008), randomized with expected linear time
//! - [`center`]: double-centering of a square (kernel) matrix, as used by
//!   Hilbert-Schmidt independence criteria

pub mod core;
pub mod kernel;
pub mod persistence;
pub mod simplex;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{HibachiError, Result};
pub use crate::kernel::{center, center_in_place};
pub use crate::persistence::SerializableSelection;
pub use crate::simplex::{project, project_sorted, project_with_rng, SimplexProjector};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
