//! Benchmarks for quickselect against a full sort

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use robust_core::selection::kth_smallest;

/// Generate seeded test data
fn generate_test_data(size: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..size).map(|_| rng.gen::<f64>() * 100.0).collect()
}

fn bench_median_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_selection");

    for &size in &[1_000usize, 10_000, 100_000] {
        let data = generate_test_data(size);

        group.bench_with_input(BenchmarkId::new("quickselect", size), &data, |b, data| {
            b.iter(|| black_box(kth_smallest(data, data.len() / 2)))
        });

        group.bench_with_input(BenchmarkId::new("full_sort", size), &data, |b, data| {
            b.iter(|| {
                let mut v = data.clone();
                v.sort_by(|a, b| a.partial_cmp(b).unwrap());
                black_box(v[v.len() / 2])
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_median_selection);
criterion_main!(benches);
