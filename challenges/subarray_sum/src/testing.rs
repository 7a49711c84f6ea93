//! Test utilities for running and verifying recorded cases.
//!
//! Cases live under `<data root>/<group>/<dataset>/` as numbered pairs
//! `N.in` and `N.out`, in the crate's input and output formats. The data
//! root defaults to `data`, relative to the working directory.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::{Result, Scanner, Writer};

pub const DATA_DIR: &str = "data";

/// How recorded cases are located and judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    pub data_root: PathBuf,
    /// A case that runs longer than this fails even with the right output.
    pub time_limit: Option<Duration>,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from(DATA_DIR),
            time_limit: None,
        }
    }
}

fn dataset_dir(data_root: &Path, group: &str, dataset: &str) -> PathBuf {
    data_root.join(group).join(dataset)
}

/// Discover all test case numbers for a dataset, sorted.
pub fn discover_tests(data_root: &Path, group: &str, dataset: &str) -> Vec<usize> {
    let mut test_numbers = Vec::new();
    if let Ok(entries) = fs::read_dir(dataset_dir(data_root, group, dataset)) {
        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let Some(num) = file_name
                .to_str()
                .and_then(|name| name.strip_suffix(".in"))
                .and_then(|stem| stem.parse::<usize>().ok())
            else {
                continue;
            };
            test_numbers.push(num);
        }
    }

    test_numbers.sort_unstable();
    test_numbers
}

/// Run a single test case and return (expected, actual, duration) output
pub fn run_test_case<F>(
    data_root: &Path,
    group: &str,
    dataset: &str,
    test_num: usize,
    solve_fn: F,
) -> std::result::Result<(String, String, Duration), String>
where
    F: FnOnce(&mut Scanner, &mut Writer) -> Result<()>,
{
    let test_dir = dataset_dir(data_root, group, dataset);
    let in_file = test_dir.join(format!("{}.in", test_num));
    let out_file = test_dir.join(format!("{}.out", test_num));

    let input = fs::read_to_string(&in_file)
        .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
    let expected = fs::read_to_string(&out_file)
        .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

    let mut scanner = Scanner::new(Cursor::new(input));
    let mut writer = Writer::new();

    let start = Instant::now();
    solve_fn(&mut scanner, &mut writer).map_err(|e| format!("Solve failed: {}", e))?;
    let duration = start.elapsed();

    let actual = writer
        .into_string()
        .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

    Ok((
        expected.trim().to_string(),
        actual.trim().to_string(),
        duration,
    ))
}

/// Verify all test cases for a dataset under [`DATA_DIR`], panicking on the
/// first mismatch.
pub fn verify_all_tests<F>(group: &str, dataset: &str, solve_fn: F)
where
    F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
{
    let data_root = Path::new(DATA_DIR);
    let test_cases = discover_tests(data_root, group, dataset);
    assert!(
        !test_cases.is_empty(),
        "No test cases found for {}/{}",
        group,
        dataset
    );

    for test_num in test_cases {
        match run_test_case(data_root, group, dataset, test_num, &solve_fn) {
            Ok((expected, actual, duration)) => {
                assert_eq!(
                    actual,
                    expected,
                    "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                    test_num,
                    duration.as_secs_f64(),
                    expected,
                    actual
                );
            }
            Err(e) => panic!("Test case {} error: {}", test_num, e),
        }
    }
}

/// Outcome of [`run_all_tests`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    /// Includes cases over the time limit.
    pub failed: usize,
    pub timed_out: usize,
    pub total: Duration,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.passed > 0
    }
}

/// Run all test cases and print results (for CLI usage)
pub fn run_all_tests<F>(
    options: &VerifyOptions,
    group: &str,
    dataset: &str,
    solve_fn: F,
) -> Summary
where
    F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
{
    let mut summary = Summary::default();

    let test_cases = discover_tests(&options.data_root, group, dataset);
    if test_cases.is_empty() {
        println!("No test cases found for {}/{}", group, dataset);
        return summary;
    }

    println!(
        "Running {} test cases for {}/{}...",
        test_cases.len(),
        group,
        dataset
    );

    for test_num in &test_cases {
        match run_test_case(&options.data_root, group, dataset, *test_num, &solve_fn) {
            Ok((expected, actual, duration)) => {
                summary.total += duration;
                let secs = duration.as_secs_f64();
                if options.time_limit.is_some_and(|limit| duration > limit) {
                    println!("✗ Test case {}: TIME LIMIT EXCEEDED ({:.2}s)", test_num, secs);
                    summary.timed_out += 1;
                    summary.failed += 1;
                } else if actual == expected {
                    println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                    summary.passed += 1;
                } else {
                    println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                    println!("  Expected: {}", expected);
                    println!("  Actual:   {}", actual);
                    summary.failed += 1;
                }
            }
            Err(e) => {
                println!("✗ Test case {}: ERROR - {}", test_num, e);
                summary.failed += 1;
            }
        }
    }

    println!(
        "\nResults: {} passed, {} failed ({} over the time limit)",
        summary.passed, summary.failed, summary.timed_out
    );
    println!("Total time: {:.2}s", summary.total.as_secs_f64());
    summary
}
