//! Robust estimators of location and skewness
//!
//! This crate bundles three estimators that stay meaningful when a sample
//! contains outliers:
//!
//! - [`weighted_median`]: the value splitting the total weight in half
//! - [`medcouple`]: a bounded, outlier-resistant measure of skewness
//! - [`mode`]: the half-sample mode, a fast estimate of the density peak
//!
//! The functions here work on `f64` slices. The member crates expose the same
//! estimators generically over `f32`/`f64` together with configurable
//! estimator types.
//!
//! # Estimator Properties
//!
//! | Estimator | Breakdown Point | Complexity | Measures |
//! |-----------|----------------|------------|----------|
//! | Weighted median | 50% | O(n) expected | Location |
//! | Half-sample mode | 50% | O(n log n) | Location of the peak |
//! | Medcouple | 25% | O(n log n) | Skewness in [-1, 1] |
//!
//! # Examples
//!
//! ```rust
//! use robustats::{medcouple, mode, weighted_median, TieBreak};
//!
//! let median = weighted_median(&[1.0, 2.0, 3.0], &[3.0, 1.0, 1.0], TieBreak::Lower).unwrap();
//! assert_eq!(median, 1.0);
//!
//! let sample = [1.0, 2.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let skew = medcouple(&sample, f64::EPSILON, f64::MIN_POSITIVE).unwrap();
//! assert_eq!(skew, 1.0);
//!
//! assert_eq!(mode(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 2.0);
//! ```

pub use robust_core::{EpsilonContext, Error, Numeric, Result, TieBreak};
pub use robust_location::{
    HalfSampleMode, LocationEstimator, WeightedLocationEstimator, WeightedMedian,
};
pub use robust_skewness::{Medcouple, SkewnessEstimator};

pub use robust_core::selection;

/// Member crates, for the generic entry points
pub use robust_location as location;
pub use robust_skewness as skewness;

/// Weighted median of `sample`
///
/// Weights must be finite and non-negative with a positive total. When the
/// total weight splits exactly in half, `tie_break` decides between the two
/// candidates.
///
/// # Errors
///
/// `InvalidInput` for an empty sample, mismatched lengths, non-finite values,
/// negative weights, or a zero total weight.
pub fn weighted_median(sample: &[f64], weights: &[f64], tie_break: TieBreak) -> Result<f64> {
    robust_location::weighted_median(sample, weights, tie_break)
}

/// Medcouple of `sample` with explicit tie tolerances
///
/// `epsilon_relative` is the relative precision used when comparing kernel
/// values (normally `f64::EPSILON`); `epsilon_min` the smallest magnitude
/// distinguishing two values from a tie (normally `f64::MIN_POSITIVE`).
///
/// # Errors
///
/// `InvalidParameter` when either tolerance is negative or not finite,
/// `InvalidInput` for an empty or non-finite sample.
pub fn medcouple(sample: &[f64], epsilon_relative: f64, epsilon_min: f64) -> Result<f64> {
    let epsilon = EpsilonContext::new(epsilon_relative, epsilon_min)?;
    robust_skewness::medcouple(sample, epsilon)
}

/// Half-sample mode of `sample`
///
/// # Errors
///
/// `InvalidInput` for an empty or non-finite sample.
pub fn mode(sample: &[f64]) -> Result<f64> {
    robust_location::mode(sample)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{medcouple, mode, weighted_median};
    pub use crate::{EpsilonContext, Error, Result, TieBreak};
    pub use crate::{HalfSampleMode, Medcouple, WeightedMedian};
    pub use crate::{LocationEstimator, SkewnessEstimator, WeightedLocationEstimator};
}
