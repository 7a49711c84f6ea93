// Maximum subarray sum strategies.
//
// Each module solves the same problem over a non-empty `&[i64]`; they must
// agree on every input. Kadane is the one to use, the others are kept as
// cross-checks.

pub mod brute_force;
pub mod divide_conquer;
pub mod kadane;
pub mod monotonic_stack;

pub use kadane::Span;
