//! Medcouple
//!
//! The medcouple is the median of the kernel
//!
//! ```text
//! h(xi, xj) = ((xj - m) - (m - xi)) / (xj - xi),    xi <= m <= xj
//! ```
//!
//! over all pairs straddling the sample median `m`. Observations equal to
//! the median sit on both sides; pairs of two such observations are ranked by
//! their position inside the tied block and score +1, 0 or -1.
//!
//! # Algorithm
//!
//! With the sample sorted descending, `h` forms an implicit matrix whose rows
//! (values above the median) and columns (values below it) are both
//! non-increasing. The target entry is found without materializing the
//! matrix: every round takes the middle candidate of each row, pivots on
//! their weighted median, counts the entries above and below the pivot with
//! two staircase walks, and drops the side that cannot contain the target.
//! Once at most one candidate per row remains the answer is picked by
//! quickselect. Time O(n log n), memory O(n).
//!
//! # Anchoring
//!
//! For an even sample the matrix depends on which middle value serves as
//! `m`. The estimator evaluates the matrix anchored at the lower median and
//! at the upper median and reports the stronger of the two skews (their mean
//! when the magnitudes agree), which keeps `medcouple(-x) == -medcouple(x)`.

use crate::traits::SkewnessEstimator;
use robust_core::selection::select_kth;
use robust_core::utils::{sorted_descending, validate_sample};
use robust_core::{EpsilonContext, Numeric, Result, TieBreak};
use robust_location::weighted_median;
use std::cmp::Ordering;
use tracing::{debug, instrument, trace};

/// Medcouple skewness estimator
///
/// ```rust
/// use robust_skewness::{Medcouple, SkewnessEstimator};
///
/// let mc = Medcouple::<f64>::new();
/// assert_eq!(mc.estimate(&[1.0, 2.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medcouple<T: Numeric = f64> {
    epsilon: EpsilonContext<T>,
}

impl<T: Numeric> Medcouple<T> {
    /// Medcouple using the machine precision of `T`
    pub fn new() -> Self {
        Self {
            epsilon: EpsilonContext::machine(),
        }
    }

    /// Use explicit tie tolerances
    pub fn with_epsilon(mut self, epsilon: EpsilonContext<T>) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// The configured tie tolerances
    pub fn epsilon(&self) -> EpsilonContext<T> {
        self.epsilon
    }
}

impl<T: Numeric> Default for Medcouple<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> SkewnessEstimator<T> for Medcouple<T> {
    fn estimate(&self, sample: &[T]) -> Result<T> {
        medcouple(sample, self.epsilon)
    }

    fn name(&self) -> &str {
        "Medcouple"
    }

    fn breakdown_point(&self) -> f64 {
        0.25
    }
}

/// Compute the medcouple of `sample`
///
/// Samples with fewer than three observations have no straddling pair and
/// yield zero.
///
/// # Errors
///
/// `InvalidInput` when the sample is empty or contains non-finite values.
#[instrument(level = "debug", skip_all, fields(n = sample.len()))]
pub fn medcouple<T: Numeric>(sample: &[T], epsilon: EpsilonContext<T>) -> Result<T> {
    validate_sample(sample, "medcouple")?;
    if sample.len() < 3 {
        debug!("fewer than three observations, medcouple is zero");
        return Ok(T::zero());
    }

    let lower = anchored(sample, &epsilon)?;
    let negated: Vec<T> = sample.iter().map(|&x| -x).collect();
    let upper = -anchored(&negated, &epsilon)?;

    debug!(%lower, %upper, "anchored medcouples");
    Ok(reconcile(lower, upper))
}

fn reconcile<T: Numeric>(lower: T, upper: T) -> T {
    match T::order(&lower.abs(), &upper.abs()) {
        Ordering::Greater => lower,
        Ordering::Less => upper,
        Ordering::Equal => T::midpoint(lower, upper),
    }
}

/// Medcouple anchored at the lower median of `sample`
fn anchored<T: Numeric>(sample: &[T], epsilon: &EpsilonContext<T>) -> Result<T> {
    match Anchor::new(sample, epsilon) {
        Anchor::Edge(value) => Ok(value),
        Anchor::Matrix(matrix) => matrix.select(matrix.target(), epsilon),
    }
}

/// Outcome of anchoring a sample at its lower median
enum Anchor<T> {
    /// The median coincides with the sample maximum (-1) or minimum (+1)
    Edge(T),
    Matrix(KernelMatrix<T>),
}

impl<T: Numeric> Anchor<T> {
    /// `sample` must hold at least one value
    fn new(sample: &[T], epsilon: &EpsilonContext<T>) -> Self {
        let x = sorted_descending(sample);
        let n = x.len();
        let median = x[n / 2];
        let (max, min) = (x[0], x[n - 1]);

        if max == median || epsilon.approx_eq(max, median, median) {
            debug!(%median, "median equals the sample maximum");
            return Anchor::Edge(-T::one());
        }
        if min == median || epsilon.approx_eq(min, median, median) {
            debug!(%median, "median equals the sample minimum");
            return Anchor::Edge(T::one());
        }

        // Rescale into [-0.5, 0.5]. Differences are taken between halved
        // values so that extreme finite samples cannot overflow.
        let half = |v: T| v / T::two();
        let half_scale = T::two() * (half(max) - half(median)).max(half(median) - half(min));
        let z = |v: T| (half(v) - half(median)) / half_scale;

        let n_plus = x.iter().take_while(|&&v| v >= median).count();
        let first_minus = x.iter().position(|&v| v <= median).unwrap_or(n);

        Anchor::Matrix(KernelMatrix {
            z_plus: x[..n_plus].iter().map(|&v| z(v)).collect(),
            z_minus: x[first_minus..].iter().map(|&v| z(v)).collect(),
            tie_tolerance: T::two() * epsilon.min,
        })
    }
}

/// Implicit `h` matrix: rows index `z_plus`, columns index `z_minus`
///
/// Both vectors are sorted descending, so every row and every column of the
/// matrix is non-increasing.
struct KernelMatrix<T> {
    z_plus: Vec<T>,
    z_minus: Vec<T>,
    tie_tolerance: T,
}

impl<T: Numeric> KernelMatrix<T> {
    fn rows(&self) -> usize {
        self.z_plus.len()
    }

    fn cols(&self) -> usize {
        self.z_minus.len()
    }

    /// Descending rank of the medcouple among all entries
    fn target(&self) -> usize {
        self.rows() * self.cols() / 2
    }

    fn h(&self, i: usize, j: usize) -> T {
        let a = self.z_plus[i];
        let b = self.z_minus[j];

        if (a - b).abs() <= self.tie_tolerance {
            // Both at the median: score by position in the tied block
            match (i + j + 1).cmp(&self.rows()) {
                Ordering::Less => T::one(),
                Ordering::Equal => T::zero(),
                Ordering::Greater => -T::one(),
            }
        } else {
            (a + b) / (a - b)
        }
    }

    /// Per row, the number of entries strictly above `u`
    fn count_greater(&self, u: T, tolerance: T, out: &mut [usize]) {
        let mut j = 0;
        for i in (0..self.rows()).rev() {
            while j < self.cols() && self.h(i, j) - u > tolerance {
                j += 1;
            }
            out[i] = j;
        }
    }

    /// Per row, the number of entries at or above `u`
    fn count_at_least(&self, u: T, tolerance: T, out: &mut [usize]) {
        let mut j = self.cols();
        for i in 0..self.rows() {
            while j > 0 && self.h(i, j - 1) - u < -tolerance {
                j -= 1;
            }
            out[i] = j;
        }
    }

    /// Entry at descending rank `target`
    fn select(&self, target: usize, epsilon: &EpsilonContext<T>) -> Result<T> {
        let rows = self.rows();

        // Candidates of row i are the columns left[i]..right[i]
        let mut left = vec![0usize; rows];
        let mut right = vec![self.cols(); rows];
        let mut left_total = 0;
        let mut right_total = rows * self.cols();

        let mut greater = vec![0usize; rows];
        let mut at_least = vec![0usize; rows];
        let mut pivots = Vec::with_capacity(rows);
        let mut counts = Vec::with_capacity(rows);

        while right_total - left_total > rows {
            pivots.clear();
            counts.clear();
            for i in 0..rows {
                if left[i] < right[i] {
                    let mid = left[i] + (right[i] - left[i] - 1) / 2;
                    pivots.push(self.h(i, mid));
                    counts.push(T::from_count(right[i] - left[i]));
                }
            }

            let u = weighted_median(&pivots, &counts, TieBreak::Lower)?;
            let tolerance = epsilon.tolerance(u);
            self.count_greater(u, tolerance, &mut greater);
            self.count_at_least(u, tolerance, &mut at_least);

            let greater_total: usize = greater.iter().sum();
            let at_least_total: usize = at_least.iter().sum();
            trace!(%u, left_total, right_total, greater_total, at_least_total, "narrowing");

            if target < greater_total {
                let total = clamp_to_bounds(&mut greater, &left, &right);
                if total >= right_total || total <= target {
                    break;
                }
                right.copy_from_slice(&greater);
                right_total = total;
            } else if target >= at_least_total {
                let total = clamp_to_bounds(&mut at_least, &left, &right);
                if total <= left_total || total > target {
                    break;
                }
                left.copy_from_slice(&at_least);
                left_total = total;
            } else {
                return Ok(u);
            }
        }

        let mut remaining: Vec<T> = (0..rows)
            .flat_map(|i| (left[i]..right[i]).map(move |j| (i, j)))
            .map(|(i, j)| self.h(i, j))
            .collect();
        let rank = target - left_total;
        trace!(remaining = remaining.len(), rank, "final selection");
        let k = remaining.len() - 1 - rank;
        select_kth(&mut remaining, k)
    }
}

/// Clamp proposed per-row bounds into the current candidate ranges
///
/// Returns the sum of the clamped bounds.
fn clamp_to_bounds(proposed: &mut [usize], left: &[usize], right: &[usize]) -> usize {
    proposed
        .iter_mut()
        .zip(left.iter().zip(right))
        .map(|(p, (&lo, &hi))| {
            *p = (*p).clamp(lo, hi);
            *p
        })
        .sum()
}
