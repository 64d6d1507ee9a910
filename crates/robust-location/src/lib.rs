//! Robust location estimators
//!
//! This crate provides two outlier-resistant estimators of where a sample
//! is centered:
//!
//! - **Weighted median**: the value where cumulative weight crosses half of
//!   the total, with a configurable [`TieBreak`](robust_core::TieBreak)
//! - **Half-sample mode**: recursive narrowing to the densest half of the
//!   sorted sample
//!
//! # Estimator Properties
//!
//! | Estimator | Breakdown Point | Cost |
//! |-----------|----------------|------|
//! | Weighted median | 50% | O(n) expected |
//! | Half-sample mode | 50% | O(n log n) |
//!
//! # Examples
//!
//! ```rust
//! use robust_core::TieBreak;
//! use robust_location::{mode, weighted_median};
//!
//! let wm = weighted_median(&[1.0, 2.0, 3.0], &[3.0, 1.0, 1.0], TieBreak::Lower).unwrap();
//! assert_eq!(wm, 1.0);
//!
//! let hsm = mode(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(hsm, 2.0);
//! ```

pub mod mode;
pub mod traits;
pub mod weighted_median;

// Re-exports
pub use mode::{mode, mode_sorted, HalfSampleMode};
pub use traits::{LocationEstimator, WeightedLocationEstimator};
pub use weighted_median::{weighted_median, WeightedMedian};
