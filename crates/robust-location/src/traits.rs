//! Core traits for location estimation

use robust_core::{Numeric, Result};

/// Estimator of the "center" of a sample
///
/// Implementations never reorder the caller's slice; any sorting or
/// partitioning happens on a private copy.
pub trait LocationEstimator<T: Numeric = f64>: Send + Sync + Clone {
    /// Estimate the location of an unsorted sample
    fn estimate(&self, sample: &[T]) -> Result<T>;

    /// Estimate from pre-sorted (ascending) data
    fn estimate_sorted(&self, sorted_sample: &[T]) -> Result<T> {
        self.estimate(sorted_sample)
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;
}

/// Location estimator that accepts per-observation weights
pub trait WeightedLocationEstimator<T: Numeric = f64>: LocationEstimator<T> {
    /// Estimate the location of `sample` where `weights[i]` applies to `sample[i]`
    fn estimate_weighted(&self, sample: &[T], weights: &[T]) -> Result<T>;
}
