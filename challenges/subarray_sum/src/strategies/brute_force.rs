// Reference oracle: enumerate every (i, j) with i <= j.
//
// Too slow for real inputs, it exists so the faster strategies have
// something obviously correct to be compared against.

/// Maximum subarray sum by extending a running sum from every start index.
///
/// O(n²) time, O(1) extra space.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn max_subarray_sum(seq: &[i64]) -> i64 {
    assert!(!seq.is_empty(), "max_subarray_sum requires a non-empty sequence");

    let mut best = seq[0];
    for i in 0..seq.len() {
        let mut sum = 0;
        for &x in &seq[i..] {
            sum += x;
            best = best.max(sum);
        }
    }

    best
}

/// Maximum subarray sum by summing every range from scratch.
///
/// O(n³). Used to check the O(n²) oracle itself on small inputs.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn max_subarray_sum_cubic(seq: &[i64]) -> i64 {
    assert!(!seq.is_empty(), "max_subarray_sum_cubic requires a non-empty sequence");

    let n = seq.len();
    let mut best = i64::MIN;
    for i in 0..n {
        for j in i..n {
            best = best.max(seq[i..=j].iter().sum());
        }
    }

    best
}
