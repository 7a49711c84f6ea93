use std::fmt;

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use crate::strategies::{brute_force, divide_conquer, kadane, monotonic_stack};

/// The interchangeable maximum subarray sum algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    BruteForce,
    #[default]
    Kadane,
    MonotonicStack,
    DivideConquer,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::BruteForce,
        Strategy::Kadane,
        Strategy::MonotonicStack,
        Strategy::DivideConquer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute_force",
            Strategy::Kadane => "kadane",
            Strategy::MonotonicStack => "monotonic_stack",
            Strategy::DivideConquer => "divide_conquer",
        }
    }

    /// # Panics
    ///
    /// Panics if `seq` is empty.
    pub fn max_subarray_sum(self, seq: &[i64]) -> i64 {
        match self {
            Strategy::BruteForce => brute_force::max_subarray_sum(seq),
            Strategy::Kadane => kadane::max_subarray_sum(seq),
            Strategy::MonotonicStack => monotonic_stack::max_subarray_sum(seq),
            Strategy::DivideConquer => divide_conquer::max_subarray_sum(seq),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one strategy over single sequences or batches of independent cases.
///
/// The engine holds no state between calls. With `parallel` set, batches
/// are spread over the rayon pool and divide and conquer splits its halves
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubarraySumEngine {
    strategy: Strategy,
    parallel: bool,
}

impl SubarraySumEngine {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// # Panics
    ///
    /// Panics if `seq` is empty.
    pub fn max_subarray_sum(&self, seq: &[i64]) -> i64 {
        match (self.strategy, self.parallel) {
            (Strategy::DivideConquer, true) => divide_conquer::max_subarray_sum_par(seq),
            (strategy, _) => strategy.max_subarray_sum(seq),
        }
    }

    /// One result per case, in input order.
    ///
    /// # Panics
    ///
    /// Panics if any case is empty.
    pub fn solve_batch(&self, cases: &[Vec<i64>]) -> Vec<i64> {
        debug!(
            "solving {} cases with {} (parallel: {})",
            cases.len(),
            self.strategy,
            self.parallel
        );

        if self.parallel {
            cases.par_iter().map(|seq| self.max_subarray_sum(seq)).collect()
        } else {
            cases.iter().map(|seq| self.max_subarray_sum(seq)).collect()
        }
    }
}

/// Strategies produced different answers for the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("strategies disagree: {}", describe(.results))]
pub struct Divergence {
    pub results: Vec<(Strategy, i64)>,
}

fn describe(results: &[(Strategy, i64)]) -> String {
    results
        .iter()
        .map(|(strategy, sum)| format!("{strategy}={sum}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run every strategy over `seq` and return the answer they agree on.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn cross_check(seq: &[i64]) -> Result<i64, Divergence> {
    let results: Vec<(Strategy, i64)> = Strategy::ALL
        .iter()
        .map(|&strategy| (strategy, strategy.max_subarray_sum(seq)))
        .collect();

    let agreed = results[0].1;
    if results.iter().all(|&(_, sum)| sum == agreed) {
        Ok(agreed)
    } else {
        Err(Divergence { results })
    }
}
