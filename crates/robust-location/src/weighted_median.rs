//! Weighted median
//!
//! A value `v` is a weighted median when the weight of the observations
//! strictly below `v` and the weight strictly above `v` are both at most half
//! of the total. When the total splits exactly in half, two adjacent order
//! statistics qualify and [`TieBreak`] picks one of them.
//!
//! The search is a quickselect over `(value, weight)` records: partition
//! around a pivot, compare the accumulated weight with the target, and keep
//! only the side that still contains the answer. Expected O(n); a run of
//! unlucky pivots degrades to O(n²).

use crate::traits::{LocationEstimator, WeightedLocationEstimator};
use robust_core::selection::{median_of_three_by, partition3_by};
use robust_core::utils::ensure_non_empty;
use robust_core::{Error, Numeric, Result, TieBreak};
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Weighted median estimator
///
/// ```rust
/// use robust_core::TieBreak;
/// use robust_location::{WeightedLocationEstimator, WeightedMedian};
///
/// let sample: &[f64] = &[1.0, 2.0, 3.0, 4.0];
/// let weights: &[f64] = &[1.0, 1.0, 1.0, 1.0];
///
/// let lower = WeightedMedian::new();
/// assert_eq!(lower.estimate_weighted(sample, weights).unwrap(), 2.0);
///
/// let higher = WeightedMedian::new().with_tie_break(TieBreak::Higher);
/// assert_eq!(higher.estimate_weighted(sample, weights).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedMedian {
    tie_break: TieBreak,
}

impl WeightedMedian {
    /// Create a weighted median reporting the lower candidate on ties
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the tie-break policy
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The configured tie-break policy
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl<T: Numeric> LocationEstimator<T> for WeightedMedian {
    /// Unweighted median: every observation carries weight one
    fn estimate(&self, sample: &[T]) -> Result<T> {
        let weights = vec![T::one(); sample.len()];
        weighted_median(sample, &weights, self.tie_break)
    }

    fn name(&self) -> &str {
        "Weighted median"
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

impl<T: Numeric> WeightedLocationEstimator<T> for WeightedMedian {
    fn estimate_weighted(&self, sample: &[T], weights: &[T]) -> Result<T> {
        weighted_median(sample, weights, self.tie_break)
    }
}

/// Compute the weighted median of `sample`
///
/// Weights whose sum overflows are divided by the largest weight first, so
/// any finite non-negative weight vector with a positive sum is accepted.
///
/// # Errors
///
/// `InvalidInput` when the sample is empty, the lengths differ, a value or
/// weight is not finite, a weight is negative, or the weights sum to zero.
#[instrument(level = "debug", skip_all, fields(n = sample.len(), tie_break = ?tie_break))]
pub fn weighted_median<T: Numeric>(
    sample: &[T],
    weights: &[T],
    tie_break: TieBreak,
) -> Result<T> {
    let (weights, total) = validate(sample, weights)?;

    if sample.len() == 1 {
        return Ok(sample[0]);
    }

    let target = total / T::two();
    let value = match tie_break {
        TieBreak::Lower => {
            let mut records: Vec<(T, T)> = sample
                .iter()
                .copied()
                .zip(weights.iter().copied())
                .collect();
            lower_weighted_median(&mut records, target)
        }
        // The largest qualifying value is the smallest one after negation.
        TieBreak::Higher => {
            let mut records: Vec<(T, T)> = sample
                .iter()
                .map(|&x| -x)
                .zip(weights.iter().copied())
                .collect();
            -lower_weighted_median(&mut records, target)
        }
    };

    debug!(%value, "weighted median selected");
    Ok(value)
}

/// Check the inputs and return the weights to use with their total
fn validate<'a, T: Numeric>(sample: &[T], weights: &'a [T]) -> Result<(Cow<'a, [T]>, T)> {
    ensure_non_empty(sample, "weighted median")?;
    if weights.len() != sample.len() {
        return Err(Error::size_mismatch(sample.len(), weights.len(), "weight vector"));
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    if weights.iter().any(|w| !w.is_finite()) {
        return Err(Error::non_finite("weights"));
    }
    if weights.iter().any(|&w| w < T::zero()) {
        return Err(Error::InvalidInput("weights must be non-negative".to_string()));
    }

    let mut weights = Cow::Borrowed(weights);
    let mut total = weight_total(&weights);
    if !total.is_finite() {
        let max = weights.iter().copied().fold(T::zero(), T::max);
        debug!(%max, "total weight overflows, rescaling by the largest weight");
        weights = Cow::Owned(weights.iter().map(|&w| w / max).collect());
        total = weight_total(&weights);
    }

    if total <= T::zero() {
        return Err(Error::InvalidInput(format!(
            "total weight must be positive, got {total}"
        )));
    }
    Ok((weights, total))
}

fn weight_total<T: Numeric>(weights: &[T]) -> T {
    weights.iter().fold(T::zero(), |acc, &w| acc + w)
}

/// Smallest value whose cumulative weight (values `<=` it) reaches `target`
///
/// `records` must be non-empty and its weights must sum to at least `target`.
fn lower_weighted_median<T: Numeric>(records: &mut [(T, T)], target: T) -> T {
    let mut lo = 0;
    let mut hi = records.len();
    // Weight of everything left of `lo`; always below `target`.
    let mut below = T::zero();

    loop {
        let range = &mut records[lo..hi];
        if range.len() == 1 {
            return range[0].0;
        }

        let pivot = median_of_three_by(range, |r| r.0);
        let (lt, gt) = partition3_by(range, pivot, |r| r.0);

        let less = below + weight_sum(&range[..lt]);
        if lt > 0 && less >= target {
            hi = lo + lt;
            continue;
        }

        let through = less + weight_sum(&range[lt..gt]);
        if through >= target || gt == range.len() {
            return pivot;
        }

        below = through;
        lo += gt;
    }
}

fn weight_sum<T: Numeric>(records: &[(T, T)]) -> T {
    records.iter().fold(T::zero(), |acc, r| acc + r.1)
}
