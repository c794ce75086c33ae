//! Kernel matrix utilities

pub mod centering;

pub use self::centering::*;
