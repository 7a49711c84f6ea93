/// Kadane's linear scan.
///
/// `current` is the best sum of a subarray ending at the element being
/// visited: either the element alone, or the element appended to the best
/// run ending just before it.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn max_subarray_sum(seq: &[i64]) -> i64 {
    assert!(!seq.is_empty(), "max_subarray_sum requires a non-empty sequence");

    let mut current = seq[0];
    let mut best = seq[0];

    for &x in &seq[1..] {
        current = x.max(current + x);
        best = best.max(current);
    }

    best
}

/// An optimal subarray: inclusive bounds and its sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub sum: i64,
}

impl Span {
    // never zero: a span always covers at least one element
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Same scan as [`max_subarray_sum`], also tracking where the run starts.
///
/// The earliest-ending optimal subarray is reported; a run is extended
/// rather than restarted while its sum is non-negative.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn max_subarray_span(seq: &[i64]) -> Span {
    assert!(!seq.is_empty(), "max_subarray_span requires a non-empty sequence");

    let mut current = seq[0];
    let mut current_start = 0;
    let mut best = Span {
        start: 0,
        end: 0,
        sum: seq[0],
    };

    for (i, &x) in seq.iter().enumerate().skip(1) {
        if current < 0 {
            current = x;
            current_start = i;
        } else {
            current += x;
        }

        if current > best.sum {
            best = Span {
                start: current_start,
                end: i,
                sum: current,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), 6);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(max_subarray_sum(&[5]), 5);
        assert_eq!(max_subarray_sum(&[-5]), -5);
    }

    #[test]
    fn test_all_negative() {
        assert_eq!(max_subarray_sum(&[-3, -1, -4, -1, -5]), -1);
    }

    #[test]
    fn test_all_positive() {
        assert_eq!(max_subarray_sum(&[1, 2, 3, 4]), 10);
    }

    #[test]
    fn test_span_example() {
        // [4, -1, 2, 1]
        let span = max_subarray_span(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]);
        assert_eq!(span, Span { start: 3, end: 6, sum: 6 });
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_span_boundaries() {
        let test_cases = vec![
            (vec![9, -20, 1], Span { start: 0, end: 0, sum: 9 }),
            (vec![1, -20, 9], Span { start: 2, end: 2, sum: 9 }),
            (vec![-3, -1, -4], Span { start: 1, end: 1, sum: -1 }),
            (vec![1, 2, 3, 4], Span { start: 0, end: 3, sum: 10 }),
            // a zero-sum prefix is kept: the run is extended while non-negative
            (vec![2, -2, 3], Span { start: 0, end: 2, sum: 3 }),
        ];

        for (input, expected) in test_cases {
            assert_eq!(max_subarray_span(&input), expected, "Failed for input: {:?}", input);
        }
    }

    #[test]
    fn test_span_sum_matches_range() {
        let seq = [3, -4, 5, -1, 2, -8, 6, 1];
        let span = max_subarray_span(&seq);
        assert_eq!(span.sum, seq[span.start..=span.end].iter().sum::<i64>());
        assert_eq!(span.sum, max_subarray_sum(&seq));
    }
}
