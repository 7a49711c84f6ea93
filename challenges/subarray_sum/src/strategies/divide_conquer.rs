// Divide and conquer over inclusive index ranges [lo, hi] of the caller's
// slice. The best subarray of a range lies entirely in the left half, entirely
// in the right half, or crosses the midpoint.

/// Ranges at or below this length are solved sequentially by
/// [`max_subarray_sum_par`].
pub const PARALLEL_CUTOFF: usize = 4096;

/// # Panics
///
/// Panics if `seq` is empty.
pub fn max_subarray_sum(seq: &[i64]) -> i64 {
    assert!(!seq.is_empty(), "max_subarray_sum requires a non-empty sequence");
    max_subarray_sum_range(seq, 0, seq.len() - 1)
}

/// Best subarray sum within `seq[lo..=hi]`.
///
/// Recursion depth is O(log n), total work O(n log n).
///
/// # Panics
///
/// Panics unless `lo <= hi < seq.len()`.
pub fn max_subarray_sum_range(seq: &[i64], lo: usize, hi: usize) -> i64 {
    assert!(
        lo <= hi && hi < seq.len(),
        "range [{lo}, {hi}] out of bounds for length {}",
        seq.len()
    );
    solve_range(seq, lo, hi)
}

fn solve_range(seq: &[i64], lo: usize, hi: usize) -> i64 {
    if lo == hi {
        return seq[lo];
    }

    let mid = lo + (hi - lo) / 2;
    let left = solve_range(seq, lo, mid);
    let right = solve_range(seq, mid + 1, hi);
    let crossing = crossing_sum(seq, lo, mid, hi);

    left.max(right).max(crossing)
}

/// Best sum of a subarray `seq[i..=j]` with `lo <= i <= mid < j <= hi`.
///
/// Best suffix ending exactly at `mid` (scanning left) plus best prefix
/// starting exactly at `mid + 1` (scanning right). Both halves are
/// non-empty, so each side contributes at least one element.
///
/// # Panics
///
/// Panics unless `lo <= mid < hi < seq.len()`.
pub fn max_crossing_sum(seq: &[i64], lo: usize, mid: usize, hi: usize) -> i64 {
    // with an empty side the sum would start from i64::MIN and overflow
    assert!(
        lo <= mid && mid < hi && hi < seq.len(),
        "crossing range [{lo}, {mid}, {hi}] out of bounds for length {}",
        seq.len()
    );
    crossing_sum(seq, lo, mid, hi)
}

fn crossing_sum(seq: &[i64], lo: usize, mid: usize, hi: usize) -> i64 {
    let mut sum = 0;
    let mut best_left = i64::MIN;
    for &x in seq[lo..=mid].iter().rev() {
        sum += x;
        best_left = best_left.max(sum);
    }

    sum = 0;
    let mut best_right = i64::MIN;
    for &x in &seq[mid + 1..=hi] {
        sum += x;
        best_right = best_right.max(sum);
    }

    best_left + best_right
}

/// [`max_subarray_sum`] with the two halves of large ranges solved on the
/// rayon pool.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn max_subarray_sum_par(seq: &[i64]) -> i64 {
    assert!(!seq.is_empty(), "max_subarray_sum_par requires a non-empty sequence");
    max_subarray_sum_range_par(seq, 0, seq.len() - 1)
}

fn max_subarray_sum_range_par(seq: &[i64], lo: usize, hi: usize) -> i64 {
    if hi - lo < PARALLEL_CUTOFF {
        return solve_range(seq, lo, hi);
    }

    let mid = lo + (hi - lo) / 2;
    let (left, right) = rayon::join(
        || max_subarray_sum_range_par(seq, lo, mid),
        || max_subarray_sum_range_par(seq, mid + 1, hi),
    );
    let crossing = crossing_sum(seq, lo, mid, hi);

    left.max(right).max(crossing)
}
