//! Quickselect agrees with a full sort on every rank

mod common;

use common::{duplicate_heavy_data, edge_case_lengths, random_data, sorted_rank};
use proptest::prelude::*;
use robust_core::selection::{kth_smallest, lower_median, partition3, select_kth};

#[test]
fn test_every_rank_for_edge_lengths() {
    for len in edge_case_lengths() {
        let data = random_data(len, 100.0, len as u64);
        for k in 0..len {
            assert_eq!(
                kth_smallest(&data, k).unwrap(),
                sorted_rank(&data, k),
                "len {len}, rank {k}"
            );
        }
    }
}

#[test]
fn test_duplicate_heavy_inputs() {
    for distinct in [1, 2, 3, 10] {
        let data = duplicate_heavy_data(2_000, distinct, 7);
        for k in [0, 1, 999, 1000, 1998, 1999] {
            assert_eq!(kth_smallest(&data, k).unwrap(), sorted_rank(&data, k));
        }
    }
}

#[test]
fn test_sorted_and_reversed_inputs() {
    let ascending: Vec<f64> = (0..1_000).map(|i| i as f64).collect();
    let descending: Vec<f64> = ascending.iter().rev().copied().collect();
    assert_eq!(lower_median(&ascending).unwrap(), 499.0);
    assert_eq!(lower_median(&descending).unwrap(), 499.0);
}

#[test]
fn test_select_in_place_keeps_multiset() {
    let mut data = random_data(257, 10.0, 99);
    let mut before = data.clone();
    let _ = select_kth(&mut data, 128).unwrap();
    before.sort_by(|a, b| a.partial_cmp(b).unwrap());
    data.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(before, data);
}

proptest! {
    #[test]
    fn prop_select_matches_sort(
        data in prop::collection::vec(-1e6f64..1e6, 1..200),
        pick in 0.0f64..1.0
    ) {
        let k = ((data.len() - 1) as f64 * pick) as usize;
        prop_assert_eq!(kth_smallest(&data, k).unwrap(), sorted_rank(&data, k));
    }

    #[test]
    fn prop_partition_regions(
        data in prop::collection::vec(0u8..8, 0..100),
        pivot in 0u8..8
    ) {
        let mut values: Vec<f64> = data.iter().map(|&x| x as f64).collect();
        let pivot = pivot as f64;
        let (lt, gt) = partition3(&mut values, pivot);
        prop_assert!(lt <= gt && gt <= values.len());
        prop_assert!(values[..lt].iter().all(|&x| x < pivot));
        prop_assert!(values[lt..gt].iter().all(|&x| x == pivot));
        prop_assert!(values[gt..].iter().all(|&x| x > pivot));
    }
}
