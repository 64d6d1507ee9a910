//! Half-sample mode
//!
//! Repeatedly keeps the densest half of the sorted sample: among all windows
//! of `ceil(m / 2)` consecutive values, the one with the smallest span. When
//! several windows share the smallest span the leftmost one wins. Narrowing
//! stops at three or fewer values:
//!
//! - one value: that value
//! - two values: their mean
//! - three values: the mean of the closer adjacent pair, or the middle value
//!   when both gaps are equal
//!
//! The result estimates the location of the density peak and need not be a
//! sample member.

use crate::traits::LocationEstimator;
use robust_core::utils::{ensure_non_empty, sorted, validate_sample};
use robust_core::{Numeric, Result};
use tracing::{instrument, trace};

/// Half-sample mode estimator
///
/// ```rust
/// use robust_location::{HalfSampleMode, LocationEstimator};
///
/// let hsm = HalfSampleMode::new();
/// assert_eq!(hsm.estimate(&[1.0f64, 2.0, 3.0, 4.0, 5.0][..]).unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfSampleMode;

impl HalfSampleMode {
    /// Create a new half-sample mode estimator
    pub fn new() -> Self {
        Self
    }
}

impl<T: Numeric> LocationEstimator<T> for HalfSampleMode {
    fn estimate(&self, sample: &[T]) -> Result<T> {
        mode(sample)
    }

    fn estimate_sorted(&self, sorted_sample: &[T]) -> Result<T> {
        mode_sorted(sorted_sample)
    }

    fn name(&self) -> &str {
        "Half-sample mode"
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

/// Half-sample mode of an unsorted sample
///
/// # Errors
///
/// `InvalidInput` when the sample is empty or contains non-finite values.
#[instrument(level = "debug", skip_all, fields(n = sample.len()))]
pub fn mode<T: Numeric>(sample: &[T]) -> Result<T> {
    validate_sample(sample, "half-sample mode")?;
    Ok(narrow(&sorted(sample)))
}

/// Half-sample mode of data already sorted ascending
pub fn mode_sorted<T: Numeric>(sorted_sample: &[T]) -> Result<T> {
    ensure_non_empty(sorted_sample, "half-sample mode")?;
    Ok(narrow(sorted_sample))
}

fn narrow<T: Numeric>(sorted: &[T]) -> T {
    let mut begin = 0;
    let mut end = sorted.len();

    loop {
        let window = &sorted[begin..end];
        match window.len() {
            1 => return window[0],
            2 => return T::midpoint(window[0], window[1]),
            3 => {
                let left = span(window[0], window[1]);
                let right = span(window[1], window[2]);
                return if left < right {
                    T::midpoint(window[0], window[1])
                } else if left > right {
                    T::midpoint(window[1], window[2])
                } else {
                    window[1]
                };
            }
            m => {
                let half = (m + 1) / 2;
                let mut best = 0;
                let mut min_width = span(window[0], window[half - 1]);
                for i in 1..=m - half {
                    let width = span(window[i], window[i + half - 1]);
                    if width < min_width {
                        min_width = width;
                        best = i;
                    }
                }
                trace!(begin = begin + best, half, "densest half window");
                begin += best;
                end = begin + half;
            }
        }
    }
}

/// Half the distance from `lo` to `hi`; finite for any finite pair
#[inline]
fn span<T: Numeric>(lo: T, hi: T) -> T {
    hi / T::two() - lo / T::two()
}
