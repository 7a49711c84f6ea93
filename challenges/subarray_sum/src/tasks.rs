// Maximum subarray sum, multi-case format:
//
//   t
//   n          (per case)
//   a1 .. an   (per case)
//
// One answer per line, per case.
use log::{debug, error};
use rayon::prelude::*;

use crate::engine::{cross_check, Strategy, SubarraySumEngine};
use crate::strategies::{kadane, Span};
use crate::{Error, Result, RunOptions, Scanner, TaskGroup, Writer};

pub const GROUP: &str = "subarray";

pub fn tasks() -> TaskGroup {
    TaskGroup::new(GROUP)
        .add("brute_force", "max_subarray_sum", |input, out, options| {
            solve(input, out, options, Strategy::BruteForce)
        })
        .add("kadane", "max_subarray_sum", |input, out, options| {
            solve(input, out, options, Strategy::Kadane)
        })
        .add("monotonic_stack", "max_subarray_sum", |input, out, options| {
            solve(input, out, options, Strategy::MonotonicStack)
        })
        .add("divide_conquer", "max_subarray_sum", |input, out, options| {
            solve(input, out, options, Strategy::DivideConquer)
        })
        .add("cross_check", "max_subarray_sum", solve_cross_check)
        .add("kadane_span", "max_subarray_span", solve_span)
}

/// Read every case up front. Empty sequences are rejected here so the
/// strategies never see one.
pub fn read_cases(input: &mut Scanner) -> Result<Vec<Vec<i64>>> {
    let t: usize = input.parse()?;
    let mut cases = Vec::with_capacity(t);

    for case in 1..=t {
        let n: usize = input.parse()?;
        if n == 0 {
            return Err(Error::EmptySequence { case });
        }

        let seq: Vec<i64> = input.parse_vec()?;
        if seq.len() != n {
            return Err(Error::LengthMismatch {
                case,
                expected: n,
                actual: seq.len(),
            });
        }
        cases.push(seq);
    }

    debug!("read {} cases", cases.len());
    Ok(cases)
}

pub fn solve(
    input: &mut Scanner,
    out: &mut Writer,
    options: &RunOptions,
    strategy: Strategy,
) -> Result<()> {
    let cases = read_cases(input)?;
    let engine = SubarraySumEngine::new(strategy).with_parallel(options.parallel);

    for sum in engine.solve_batch(&cases) {
        out.println(sum);
    }
    Ok(())
}

// Every strategy on every case; the first disagreement (in input order)
// aborts the run.
fn solve_cross_check(input: &mut Scanner, out: &mut Writer, options: &RunOptions) -> Result<()> {
    let cases = read_cases(input)?;
    let results: Vec<_> = if options.parallel {
        cases.par_iter().map(|seq| cross_check(seq)).collect()
    } else {
        cases.iter().map(|seq| cross_check(seq)).collect()
    };

    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok(sum) => out.println(sum),
            Err(divergence) => {
                error!("case {}: {}", i + 1, divergence);
                return Err(divergence.into());
            }
        }
    }
    Ok(())
}

// `sum start end`, with 1-based inclusive bounds.
fn solve_span(input: &mut Scanner, out: &mut Writer, options: &RunOptions) -> Result<()> {
    let cases = read_cases(input)?;
    let spans: Vec<Span> = if options.parallel {
        cases.par_iter().map(|seq| kadane::max_subarray_span(seq)).collect()
    } else {
        cases.iter().map(|seq| kadane::max_subarray_span(seq)).collect()
    };

    for span in spans {
        out.println(format!("{} {} {}", span.sum, span.start + 1, span.end + 1));
    }
    Ok(())
}
