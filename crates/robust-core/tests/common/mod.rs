//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Array lengths around the small-range edge cases of the selection loops
pub fn edge_case_lengths() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 64, 100, 127]
}

/// Seeded uniform data in `[-scale, scale)`
pub fn random_data(len: usize, scale: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-scale..scale)).collect()
}

/// Seeded data drawn from a handful of distinct values
pub fn duplicate_heavy_data(len: usize, distinct: u32, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..distinct) as f64).collect()
}

/// Reference order statistic via a full sort
pub fn sorted_rank(data: &[f64], k: usize) -> f64 {
    let mut v = data.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v[k]
}
