use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use subarray_sum::strategies::divide_conquer;
use subarray_sum::Strategy;

fn random_seq(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1000..=1000)).collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut group = c.benchmark_group("max_subarray_sum");

    for &len in &[100usize, 1_000, 10_000] {
        let seq = random_seq(&mut rng, len);
        for strategy in Strategy::ALL {
            // quadratic: skip the large input
            if strategy == Strategy::BruteForce && len > 1_000 {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &seq, |b, seq| {
                b.iter(|| strategy.max_subarray_sum(black_box(seq)))
            });
        }
    }
    group.finish();
}

fn bench_parallel_divide_conquer(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2025);
    let seq = random_seq(&mut rng, 1_000_000);

    let mut group = c.benchmark_group("divide_conquer_1m");
    group.sample_size(20);
    group.bench_function("sequential", |b| {
        b.iter(|| divide_conquer::max_subarray_sum(black_box(&seq)))
    });
    group.bench_function("rayon_join", |b| {
        b.iter(|| divide_conquer::max_subarray_sum_par(black_box(&seq)))
    });
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_parallel_divide_conquer);
criterion_main!(benches);
