use rand::{rngs::StdRng, Rng, SeedableRng};
use subarray_sum::strategies::divide_conquer::{self, PARALLEL_CUTOFF};
use subarray_sum::strategies::kadane;
use subarray_sum::{Strategy, SubarraySumEngine};

fn random_seq(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1000..=1000)).collect()
}

#[test]
fn parallel_divide_conquer_matches_kadane() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &len in &[1, 2, PARALLEL_CUTOFF, PARALLEL_CUTOFF + 1, 3 * PARALLEL_CUTOFF + 5, 50_000] {
        let seq = random_seq(&mut rng, len);
        assert_eq!(
            divide_conquer::max_subarray_sum_par(&seq),
            kadane::max_subarray_sum(&seq),
            "len={len}"
        );
    }
}

#[test]
fn parallel_batches_match_sequential() {
    let mut rng = StdRng::seed_from_u64(42);
    let cases: Vec<Vec<i64>> = (0..200)
        .map(|_| {
            let len = rng.gen_range(1..=300);
            random_seq(&mut rng, len)
        })
        .collect();

    let expected = SubarraySumEngine::new(Strategy::BruteForce).solve_batch(&cases);
    for strategy in Strategy::ALL {
        let sequential = SubarraySumEngine::new(strategy).solve_batch(&cases);
        let parallel = SubarraySumEngine::new(strategy)
            .with_parallel(true)
            .solve_batch(&cases);
        assert_eq!(sequential, expected, "{strategy} sequential");
        assert_eq!(parallel, expected, "{strategy} parallel");
    }
}

#[test]
fn large_magnitudes_without_overflow() {
    // |sum| stays below 2^63 for 10^5 elements of magnitude 10^9
    let mut rng = StdRng::seed_from_u64(7);
    let seq: Vec<i64> = (0..100_000)
        .map(|_| rng.gen_range(-1_000_000_000..=1_000_000_000))
        .collect();

    let expected = kadane::max_subarray_sum(&seq);
    for strategy in [Strategy::MonotonicStack, Strategy::DivideConquer] {
        for parallel in [false, true] {
            let engine = SubarraySumEngine::new(strategy).with_parallel(parallel);
            assert_eq!(engine.max_subarray_sum(&seq), expected, "{strategy}");
        }
    }
}
