//! Core traits for skewness estimation

use robust_core::{Numeric, Result};

/// Estimator of the asymmetry of a sample
///
/// Results lie in `[-1, 1]` for bounded estimators such as the medcouple:
/// positive values indicate a longer right tail.
pub trait SkewnessEstimator<T: Numeric = f64>: Send + Sync + Clone {
    /// Estimate skewness of an unsorted sample
    fn estimate(&self, sample: &[T]) -> Result<T>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;
}
