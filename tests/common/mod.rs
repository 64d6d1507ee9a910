//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};
use tracing_subscriber::EnvFilter;

/// Route estimator spans to the test output, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Seeded standard normal sample
pub fn normal_sample(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Seeded exponential sample: right-skewed with its peak at zero
pub fn exponential_sample(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = Exp::new(1.0).unwrap();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Normal sample with a fraction of gross outliers appended
pub fn contaminated_sample(len: usize, outliers: usize, seed: u64) -> Vec<f64> {
    let mut sample = normal_sample(len, seed);
    sample.extend((0..outliers).map(|i| 1_000.0 + i as f64));
    sample
}
