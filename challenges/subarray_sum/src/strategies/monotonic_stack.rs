// Prefix sums with a monotonic stack.
//
// The best subarray ending at `i` is `prefix(i + 1) - min(prefix(0..=i))`
// where `prefix(k)` is the sum of the first `k` elements. The stack answers
// the `min` query: each entry stores a prefix value together with the
// smallest prefix seen at or before it. Entries with a prefix >= the
// incoming one are popped; their minima are folded into the new entry.
//
// Off-by-one hazard: the prefix pushed for element `i` is the sum of the
// elements strictly *before* `i`. Pushing the inclusive prefix instead
// counts `seq[i]` twice.

#[derive(Debug, Clone, Copy)]
struct Entry {
    prefix: i64,
    min_prefix: i64,
}

/// Stack of prefix sums, strictly increasing from bottom to top.
#[derive(Debug, Default)]
struct MinPrefixStack {
    entries: Vec<Entry>,
}

impl MinPrefixStack {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Push `prefix`, returning the smallest prefix pushed so far
    /// (including this one).
    fn push(&mut self, prefix: i64) -> i64 {
        let mut min_prefix = prefix;

        // dominated: can never be a smaller minimum than `prefix` for any later query
        while let Some(top) = self.entries.last().copied().filter(|top| top.prefix >= prefix) {
            min_prefix = min_prefix.min(top.min_prefix);
            self.entries.pop();
        }
        if let Some(top) = self.entries.last() {
            min_prefix = min_prefix.min(top.min_prefix);
        }

        self.entries.push(Entry { prefix, min_prefix });
        min_prefix
    }
}

/// Maximum subarray sum via running prefix sums and a monotonic stack of
/// prefix minima. Amortised O(1) per element.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn max_subarray_sum(seq: &[i64]) -> i64 {
    assert!(!seq.is_empty(), "max_subarray_sum requires a non-empty sequence");

    let mut stack = MinPrefixStack::with_capacity(seq.len());
    let mut prefix = 0;
    let mut best = i64::MIN;

    for &x in seq {
        let min_prefix = stack.push(prefix);
        best = best.max(prefix - min_prefix + x);
        prefix += x;
    }

    // at least one element is always selected
    let max_element = seq.iter().copied().fold(seq[0], i64::max);
    best.max(max_element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::brute_force;

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
        // a double-counted last element would give 14
        assert_eq!(max_subarray_sum(&[1, 2, 3, 4]), 10);
    }

    #[test]
    fn test_boundary_indices() {
        let test_cases = vec![
            (vec![9, -20, 1], 9),   // first element only
            (vec![1, -20, 9], 9),   // last element only
            (vec![1, 5], 6),        // whole array, two elements
            (vec![-1, 5], 5),       // starts at the last index
            (vec![5, -1], 5),       // ends at the first index
            (vec![0, 0, 0], 0),
            (vec![-2, 3, -2], 3),
            (vec![4, -5, 4, -5, 4], 4),
        ];

        for (input, expected) in test_cases {
            assert_eq!(max_subarray_sum(&input), expected, "Failed for input: {:?}", input);
            assert_eq!(brute_force::max_subarray_sum(&input), expected);
        }
    }

    #[test]
    fn test_stack_pops_dominated_entries() {
        let mut stack = MinPrefixStack::default();
        assert_eq!(stack.push(3), 3);
        assert_eq!(stack.push(5), 3);
        assert_eq!(stack.push(7), 3);
        assert_eq!(stack.entries.len(), 3);

        // 4 dominates 5 and 7, the minimum 3 survives underneath
        assert_eq!(stack.push(4), 3);
        assert_eq!(stack.entries.len(), 2);

        // equal prefix values are dominated as well
        assert_eq!(stack.push(4), 3);
        assert_eq!(stack.entries.len(), 2);

        assert_eq!(stack.push(-1), -1);
        assert_eq!(stack.entries.len(), 1);
    }

    #[test]
    fn test_stack_is_increasing_bottom_to_top() {
        let mut stack = MinPrefixStack::default();
        for prefix in [0, 4, 2, 9, 9, -3, 6, 1, 8] {
            stack.push(prefix);
            let strictly_increasing = stack
                .entries
                .windows(2)
                .all(|pair| pair[0].prefix < pair[1].prefix);
            assert!(strictly_increasing, "stack out of order: {:?}", stack.entries);
        }
    }
}
