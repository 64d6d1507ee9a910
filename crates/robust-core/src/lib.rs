//! Core types and primitives for robust statistical estimation
//!
//! This crate provides the foundation shared by the estimator crates:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Numeric`] and [`EpsilonContext`]: precision-agnostic float support
//! - [`TieBreak`]: the tie-break policy for weighted medians
//! - [`selection`]: quickselect and partitioning primitives
//!
//! # Example
//!
//! ```rust
//! use robust_core::{selection::kth_smallest, EpsilonContext};
//!
//! let data = vec![9.0, 1.0, 4.0, 7.0, 3.0];
//! assert_eq!(kth_smallest(&data, 2).unwrap(), 4.0);
//!
//! let eps = EpsilonContext::<f64>::machine();
//! assert_eq!(eps.relative, f64::EPSILON);
//! ```

pub mod error;
pub mod numeric;
pub mod selection;
pub mod types;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::{EpsilonContext, Numeric};
pub use types::TieBreak;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::selection::{kth_smallest, lower_median, select_kth};
    pub use crate::{EpsilonContext, Numeric, Result, TieBreak};
}
