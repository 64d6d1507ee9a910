//! Floating-point type foundation for the estimators
//!
//! The estimator engine is generic over the float width. Everything that
//! depends on precision (tie tolerances in particular) is expressed through
//! [`EpsilonContext`] rather than hard-coded constants.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: `Numeric` only names the float operations the
//!   estimators need
//! - **Explicit precision**: tolerances travel as a parameter object
//! - **Extensible**: any `num_traits::Float` with the marker impl works

use crate::{Error, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Float types the estimators operate on
pub trait Numeric: Float + Debug + Display + Default + Send + Sync + 'static {
    /// `2` in this type, used for midpoints and scale factors
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Midpoint of two values
    ///
    /// Finite inputs give a finite result: when the sum overflows, both
    /// values are halved before adding.
    #[inline]
    fn midpoint(a: Self, b: Self) -> Self {
        let sum = a + b;
        if sum.is_finite() {
            sum / Self::two()
        } else {
            a / Self::two() + b / Self::two()
        }
    }

    /// Convert an element count, e.g. to use it as a weight
    #[inline]
    fn from_count(count: usize) -> Self {
        <Self as num_traits::NumCast>::from(count).unwrap_or_else(Self::max_value)
    }

    /// Total order over validated (finite) values
    ///
    /// NaN never reaches the estimators; it compares equal here so that the
    /// comparator stays total.
    #[inline]
    fn order(a: &Self, b: &Self) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

impl Numeric for f64 {}

impl Numeric for f32 {}

/// Precision context for tie detection
///
/// `relative` is the smallest relative difference between two values of the
/// float type (machine epsilon) and `min` the smallest positive normal value.
/// Two kernel arguments closer than `2 * min` are treated as an exact tie;
/// comparisons against a pivot `u` use the tolerance
/// `relative * (relative + |u|)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsilonContext<T> {
    /// Relative precision (machine epsilon)
    pub relative: T,
    /// Smallest representable positive normal magnitude
    pub min: T,
}

impl<T: Numeric> EpsilonContext<T> {
    /// Create a context from explicit values
    ///
    /// Both values must be finite and non-negative.
    pub fn new(relative: T, min: T) -> Result<Self> {
        if !relative.is_finite() || relative < T::zero() {
            return Err(Error::InvalidParameter(format!(
                "epsilon_relative must be finite and non-negative, got {relative}"
            )));
        }
        if !min.is_finite() || min < T::zero() {
            return Err(Error::InvalidParameter(format!(
                "epsilon_min must be finite and non-negative, got {min}"
            )));
        }
        Ok(Self { relative, min })
    }

    /// Context matching the precision of `T`
    pub fn machine() -> Self {
        Self {
            relative: T::epsilon(),
            min: T::min_positive_value(),
        }
    }

    /// Tolerance for comparing a value against `reference`
    #[inline]
    pub fn tolerance(&self, reference: T) -> T {
        self.relative * (self.relative + reference.abs())
    }

    /// Whether `a` and `b` are equal up to the tolerance around `reference`
    #[inline]
    pub fn approx_eq(&self, a: T, b: T, reference: T) -> bool {
        (a - b).abs() < self.tolerance(reference)
    }
}

impl<T: Numeric> Default for EpsilonContext<T> {
    fn default() -> Self {
        Self::machine()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_context() {
        let ctx = EpsilonContext::<f64>::machine();
        assert_eq!(ctx.relative, f64::EPSILON);
        assert_eq!(ctx.min, f64::MIN_POSITIVE);

        let ctx = EpsilonContext::<f32>::default();
        assert_eq!(ctx.relative, f32::EPSILON);
        assert_eq!(ctx.min, f32::MIN_POSITIVE);
    }

    #[test]
    fn test_context_validation() {
        assert!(EpsilonContext::new(1e-10, 1e-300).is_ok());
        assert!(EpsilonContext::new(0.0, 0.0).is_ok());
        assert!(EpsilonContext::new(-1e-10, 1e-300).is_err());
        assert!(EpsilonContext::new(1e-10, f64::NAN).is_err());
        assert!(EpsilonContext::new(f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_tolerance_scales_with_magnitude() {
        let ctx = EpsilonContext::<f64>::machine();
        assert!(ctx.tolerance(1e6) > ctx.tolerance(1.0));
        assert!(ctx.approx_eq(1e6, 1e6 + 1e-12, 1e6));
        assert!(!ctx.approx_eq(1.0, 1.0 + 1e-6, 1.0));
    }

    #[test]
    fn test_numeric_helpers() {
        assert_eq!(f64::two(), 2.0);
        assert_eq!(<f64 as Numeric>::midpoint(1.0, 4.0), 2.5);
        assert_eq!(<f32 as Numeric>::midpoint(-1.0, 1.0), 0.0);
        assert_eq!(f64::order(&1.0, &2.0), Ordering::Less);
        assert_eq!(f64::order(&2.0, &2.0), Ordering::Equal);
        assert_eq!(f64::from_count(12), 12.0);
        assert_eq!(f32::from_count(3), 3.0);
    }

    #[test]
    fn test_midpoint_of_extreme_values() {
        assert_eq!(<f64 as Numeric>::midpoint(1.7e308, 1.7e308), 1.7e308);
        assert_eq!(<f64 as Numeric>::midpoint(f64::MAX, f64::MAX), f64::MAX);
        assert_eq!(<f64 as Numeric>::midpoint(-f64::MAX, f64::MAX), 0.0);
        assert_eq!(<f32 as Numeric>::midpoint(f32::MAX, f32::MAX / 2.0), f32::MAX * 0.75);
    }

    #[test]
    fn test_context_serde_round_trip() {
        let ctx = EpsilonContext::<f64>::machine();
        let json = serde_json::to_string(&ctx).unwrap();
        let back: EpsilonContext<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}
