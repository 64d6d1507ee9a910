//! Order-statistics primitives
//!
//! Quickselect and partitioning over a single owned buffer. All narrowing
//! loops carry explicit `lo..hi` index bounds instead of allocating
//! sub-arrays.
//!
//! Partitioning is three-way: values equal to the pivot are grouped in the
//! middle region, so inputs dominated by duplicates still shrink on every
//! pass.
//!
//! # Example
//!
//! ```rust
//! use robust_core::selection::{kth_smallest, lower_median};
//!
//! let data = [6.0, 1.0, 2.0, 4.0, 3.0, 5.0, 3.0];
//! assert_eq!(kth_smallest(&data, 4).unwrap(), 4.0);
//! assert_eq!(lower_median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.0);
//! ```

use crate::{Error, Numeric, Result};
use std::cmp::Ordering;

/// Three-way partition of `records` around `pivot`, comparing by `key`
///
/// On return `records[..lt]` are below the pivot, `records[lt..gt]` equal to
/// it and `records[gt..]` above it. Records move as a unit, so any payload
/// stays paired with its key.
pub fn partition3_by<R, T, F>(records: &mut [R], pivot: T, key: F) -> (usize, usize)
where
    T: Numeric,
    F: Fn(&R) -> T,
{
    let mut lt = 0;
    let mut i = 0;
    let mut gt = records.len();

    while i < gt {
        match T::order(&key(&records[i]), &pivot) {
            Ordering::Less => {
                records.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                records.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}

/// Three-way partition of plain values around `pivot`
///
/// ```rust
/// use robust_core::selection::partition3;
///
/// let mut data = [3.0, 1.0, 3.0, 5.0, 2.0];
/// let (lt, gt) = partition3(&mut data, 3.0);
/// assert_eq!((lt, gt), (2, 4));
/// assert!(data[..lt].iter().all(|&x| x < 3.0));
/// assert_eq!(data[4], 5.0);
/// ```
pub fn partition3<T: Numeric>(data: &mut [T], pivot: T) -> (usize, usize) {
    partition3_by(data, pivot, |&x| x)
}

/// Median of the first, middle and last keys of a non-empty range
pub fn median_of_three_by<R, T, F>(records: &[R], key: F) -> T
where
    T: Numeric,
    F: Fn(&R) -> T,
{
    let a = key(&records[0]);
    let b = key(&records[records.len() / 2]);
    let c = key(&records[records.len() - 1]);

    if (a <= b) == (b <= c) {
        b
    } else if (b <= a) == (a <= c) {
        a
    } else {
        c
    }
}

/// Select the `k`-th smallest value (0-based), reordering `data` in place
///
/// Expected linear time. After the call, `data[k]` is not guaranteed to hold
/// the result; only the returned value is.
pub fn select_kth<T: Numeric>(data: &mut [T], k: usize) -> Result<T> {
    if data.is_empty() {
        return Err(Error::empty_input("order statistic selection"));
    }
    if k >= data.len() {
        return Err(Error::InvalidParameter(format!(
            "order statistic index {k} out of range for {} values",
            data.len()
        )));
    }

    let mut lo = 0;
    let mut hi = data.len();

    loop {
        let range = &mut data[lo..hi];
        if range.len() == 1 {
            return Ok(range[0]);
        }

        let pivot = median_of_three_by(range, |&x| x);
        let (lt, gt) = partition3(range, pivot);
        let (lt, gt) = (lo + lt, lo + gt);

        if k < lt {
            hi = lt;
        } else if k >= gt {
            lo = gt;
        } else {
            return Ok(pivot);
        }
    }
}

/// Select the `k`-th smallest value from a private copy of `data`
pub fn kth_smallest<T: Numeric>(data: &[T], k: usize) -> Result<T> {
    let mut work = data.to_vec();
    select_kth(&mut work, k)
}

/// Lower median: the order statistic at index `(n - 1) / 2`
pub fn lower_median<T: Numeric>(data: &[T]) -> Result<T> {
    if data.is_empty() {
        return Err(Error::empty_input("median"));
    }
    kth_smallest(data, (data.len() - 1) / 2)
}
