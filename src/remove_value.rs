//! Remove every instance of a value from a sequence, in place.
//!
//! The exercise's twist is the return contract: rather than shrinking the
//! sequence, the function rearranges it so every element *not* equal to the
//! target occupies a prefix, and returns that prefix's length `k`. Whatever
//! sits beyond `k` afterward is don't-care.
//!
//! The compaction swaps offenders to the back instead of shifting the whole
//! tail left on every hit:
//!
//! ```text
//! [0, 1, 2, 2, 3, 0, 4, 2]  target 2
//!  ^check                ^boundary
//! ```
//!
//! A match under `check` is swapped with the element under `boundary` and
//! the boundary retreats; the swapped-in element gets examined on the next
//! iteration. A non-match advances `check`. Each element is visited at most
//! twice, so the pass is O(n) with O(1) extra space — at the price of not
//! preserving the relative order of the kept elements.

// ---------------------------------------------------------------------------
// compact_remove
// ---------------------------------------------------------------------------

/// Rearrange `values` so elements not equal to `target` form a prefix;
/// return the prefix length.
///
/// The kept elements' relative order is not preserved. Elements at and
/// beyond the returned index are unspecified. Every input has a well-defined
/// result, including the empty sequence (`0`).
///
/// Re-running the compaction over the returned prefix with the same target
/// returns the same length: no target values remain among the first `k`.
#[must_use]
pub fn compact_remove(values: &mut [i64], target: i64) -> usize {
    tracing::trace!("compact_remove target {target} over {} element(s)", values.len());
    if values.is_empty() {
        return 0;
    }

    let mut check = 0;
    let mut boundary = values.len() - 1;
    while check < boundary {
        if values[check] == target {
            values.swap(check, boundary);
            boundary -= 1;
        } else {
            check += 1;
        }
    }

    // The pointers have met on the one element neither pass classified.
    if values[check] == target { check } else { check + 1 }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
