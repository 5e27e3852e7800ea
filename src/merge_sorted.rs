//! Merge two sorted sequences, in place or into a fresh allocation.
//!
//! The in-place form follows the interview-platform calling convention: the
//! destination buffer is oversized, with only a leading prefix holding valid
//! sorted data and the tail reserved to receive the merge.
//!
//! ```text
//! first  = [1, 2, 3, _, _, _]   valid = 3
//! second = [2, 5, 6]
//!
//! merge_into(&mut first, 3, &second)
//!
//! first  = [1, 2, 2, 3, 5, 6]
//! ```
//!
//! The merge runs tail-to-head: writing from the back means a slot is never
//! written before its original occupant has been read, which is exactly what
//! a head-to-head merge into the same buffer would get wrong.
//!
//! [`merge`] is the allocating alternative for callers who prefer simple
//! ownership over the in-place contract: a plain head-to-head two-pointer
//! merge of two borrowed slices into a new `Vec`.

use crate::error::KataError;

// ---------------------------------------------------------------------------
// merge_into: in place, tail to head
// ---------------------------------------------------------------------------

/// Merge `second` into the reserved tail capacity of `first`, in place.
///
/// On entry, only `first[..valid]` holds meaningful data (ascending) and
/// `second` is entirely meaningful (ascending). On success, all of `first`
/// is the ascending multiset union of both inputs. Equal elements may come
/// from either source.
///
/// Runs in O(`first.len()`) time and O(1) extra space: one write index and
/// two read counts walking backward.
///
/// # Errors
///
/// Returns [`KataError::CapacityMismatch`] when
/// `valid + second.len() != first.len()`. Nothing is written before this
/// check passes.
pub fn merge_into(first: &mut [i64], valid: usize, second: &[i64]) -> Result<(), KataError> {
    tracing::trace!(
        "merge_into: {valid} valid + {} incoming into capacity {}",
        second.len(),
        first.len()
    );
    if valid > first.len() || first.len() - valid != second.len() {
        tracing::debug!(
            "rejecting merge_into: capacity {} != {valid} + {}",
            first.len(),
            second.len()
        );
        return Err(KataError::CapacityMismatch {
            valid,
            incoming: second.len(),
            capacity: first.len(),
        });
    }

    // `a` and `b` count the not-yet-merged elements of each source; the next
    // write lands at index a + b - 1. While both sources have elements, copy
    // the larger of the two tail elements backward.
    let mut a = valid;
    let mut b = second.len();
    while a > 0 && b > 0 {
        let write = a + b - 1;
        if first[a - 1] > second[b - 1] {
            first[write] = first[a - 1];
            a -= 1;
        } else {
            first[write] = second[b - 1];
            b -= 1;
        }
    }

    // If `second` still has elements, they are the smallest values overall
    // and slot directly into the prefix. (If `first` still has elements,
    // they are already in position.)
    first[..b].copy_from_slice(&second[..b]);
    Ok(())
}

// ---------------------------------------------------------------------------
// merge: allocating, head to head
// ---------------------------------------------------------------------------

/// Merge two ascending slices into a new ascending `Vec`.
///
/// Equal elements are taken from `left` first. Runs in
/// O(`left.len()` + `right.len()`) time with a single allocation.
#[must_use]
pub fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
