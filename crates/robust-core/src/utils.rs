//! Utility functions for working with data slices

use crate::{Error, Numeric, Result};

/// Sort data ascending and return a new vector
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted<T: Numeric>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(T::order);
    sorted
}

/// Sort data descending and return a new vector
pub fn sorted_descending<T: Numeric>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| T::order(b, a));
    sorted
}

/// Reject an empty sample
pub fn ensure_non_empty<T>(data: &[T], operation: &str) -> Result<()> {
    if data.is_empty() {
        return Err(Error::empty_input(operation));
    }
    Ok(())
}

/// Reject NaN and infinite values
pub fn ensure_finite<T: Numeric>(data: &[T], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Validate a sample: non-empty and finite
pub fn validate_sample<T: Numeric>(data: &[T], operation: &str) -> Result<()> {
    ensure_non_empty(data, operation)?;
    ensure_finite(data, "sample")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(sorted_descending(&data), vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_sorted_empty() {
        let data: Vec<f64> = vec![];
        assert!(sorted(&data).is_empty());
    }

    #[test]
    fn test_sorted_duplicates_and_negatives() {
        let data = vec![3.0, -1.0, 3.0, 0.0, -1.0];
        assert_eq!(sorted(&data), vec![-1.0, -1.0, 0.0, 3.0, 3.0]);
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0f32, 1.0, 2.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_validate_sample() {
        assert!(validate_sample(&[1.0, 2.0], "mode").is_ok());
        assert!(validate_sample::<f64>(&[], "mode").unwrap_err().is_invalid_input());
        assert!(validate_sample(&[1.0, f64::NAN], "mode").is_err());
        assert!(validate_sample(&[f64::NEG_INFINITY], "mode").is_err());
    }
}
