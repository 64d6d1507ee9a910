//! Robust skewness estimation
//!
//! Classical moment skewness is driven by the most extreme observations. The
//! medcouple instead compares, for every pair of observations on opposite
//! sides of the median, how far each lies from the median, and takes the
//! median of those comparisons. It is bounded in `[-1, 1]`, invariant to
//! location and scale, and tolerates up to 25% contamination.
//!
//! # Examples
//!
//! ```rust
//! use robust_core::EpsilonContext;
//! use robust_skewness::medcouple;
//!
//! let eps = EpsilonContext::machine();
//! assert_eq!(medcouple(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], eps).unwrap(), 0.0);
//! assert_eq!(medcouple(&[1.0, 2.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0], eps).unwrap(), 1.0);
//! ```

pub mod medcouple;
pub mod traits;

// Re-exports
pub use medcouple::{medcouple, Medcouple};
pub use traits::SkewnessEstimator;
