//! Square a sorted sequence and keep the result sorted, in one pass.
//!
//! Squaring destroys sort order whenever negatives are present: `[-5, 1, 3]`
//! squares to `[25, 1, 9]`. Sorting afterward costs O(n log n), but the
//! input's order is worth more than that. Squares grow toward both ends of a
//! sorted sequence, so the largest square is always at one end or the other:
//!
//! ```text
//! [-10, -5, 0, 5, 10]
//!   ^lo            ^hi     compare 100 vs 100, fill output from the back
//! ```
//!
//! Two pointers converge from the ends, each step writing the larger square
//! into the next free slot from the back of the output. O(n) time, one
//! output allocation.

// ---------------------------------------------------------------------------
// sorted_squares
// ---------------------------------------------------------------------------

/// Square every element of an ascending-sorted sequence, returning the
/// squares in ascending order.
///
/// The input must already be sorted ascending; the output is unspecified
/// otherwise. The empty sequence maps to the empty sequence.
#[must_use]
pub fn sorted_squares(values: &[i64]) -> Vec<i64> {
    tracing::trace!("sorted_squares over {} element(s)", values.len());
    let mut out = vec![0_i64; values.len()];
    let mut lo = 0;
    let mut hi = values.len();
    for slot in (0..values.len()).rev() {
        let front = values[lo] * values[lo];
        let back = values[hi - 1] * values[hi - 1];
        if front > back {
            out[slot] = front;
            lo += 1;
        } else {
            out[slot] = back;
            hi -= 1;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
