//! Find the two largest elements of a sequence.
//!
//! Two strategies with the same contract, kept side by side so the bench
//! suite can race them:
//!
//! - [`two_largest`] scans once, carrying the running champion and
//!   runner-up. O(n), no allocation.
//! - [`two_largest_by_sort`] copies, sorts, and reads the top two. O(n log n)
//!   plus a copy, but hard to get wrong.
//!
//! Both return the pair ordered largest-first and treat duplicates as
//! distinct occupants: `[10, 10, 3]` yields `[10, 10]`.

use crate::error::KataError;

// ---------------------------------------------------------------------------
// Single-pass strategy
// ---------------------------------------------------------------------------

/// Return the two largest elements, largest first, in a single pass.
///
/// # Errors
///
/// Returns [`KataError::TooFewElements`] when `values` has fewer than two
/// elements.
pub fn two_largest(values: &[i64]) -> Result<[i64; 2], KataError> {
    let [a, b, rest @ ..] = values else {
        tracing::debug!("rejecting two_largest over {} element(s)", values.len());
        return Err(KataError::TooFewElements {
            needed: 2,
            got: values.len(),
        });
    };

    let (mut first, mut second) = if a >= b { (*a, *b) } else { (*b, *a) };
    for &v in rest {
        if v > first {
            second = first;
            first = v;
        } else if v > second {
            second = v;
        }
    }
    Ok([first, second])
}

// ---------------------------------------------------------------------------
// Sort strategy
// ---------------------------------------------------------------------------

/// Return the two largest elements, largest first, by sorting a copy.
///
/// # Errors
///
/// Returns [`KataError::TooFewElements`] when `values` has fewer than two
/// elements.
pub fn two_largest_by_sort(values: &[i64]) -> Result<[i64; 2], KataError> {
    if values.len() < 2 {
        tracing::debug!("rejecting two_largest_by_sort over {} element(s)", values.len());
        return Err(KataError::TooFewElements {
            needed: 2,
            got: values.len(),
        });
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    Ok([sorted[sorted.len() - 1], sorted[sorted.len() - 2]])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
