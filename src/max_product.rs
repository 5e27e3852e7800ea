//! Largest product of three integers.
//!
//! Given a sequence of integers, find the maximum product obtainable by
//! multiplying any three of them (three distinct positions; order
//! irrelevant). Negatives, zeros, and duplicates are all fair game, which is
//! the whole point of the exercise: two large-magnitude negatives multiply
//! positive and may beat three positives.
//!
//! After sorting ascending, the answer is one of exactly two candidates:
//!
//! - the product of the three largest values, or
//! - the product of the two smallest values and the single largest value.
//!
//! [`largest_product`] generalizes to any subset size `k`: an optimal subset
//! is always some count of elements from the low end plus the rest from the
//! high end, so all `k + 1` such splits are scanned.
//!
//! Products are computed in `i64`. Callers keep values small enough that the
//! products fit; debug builds panic on overflow, release builds wrap.

use crate::error::KataError;

// ---------------------------------------------------------------------------
// max_product_of_three
// ---------------------------------------------------------------------------

/// Maximum product of any three elements of `values`.
///
/// Sorts a copy ascending and compares the only two viable candidates: the
/// three largest values, or the two smallest (most negative) values times
/// the largest. The input is not modified.
///
/// # Errors
///
/// Returns [`KataError::TooFewElements`] when `values` has fewer than three
/// elements. The check happens before any other work.
pub fn max_product_of_three(values: &[i64]) -> Result<i64, KataError> {
    tracing::trace!("max_product_of_three over {} element(s)", values.len());
    if values.len() < 3 {
        tracing::debug!(
            "rejecting max_product_of_three: {} element(s), need 3",
            values.len()
        );
        return Err(KataError::TooFewElements {
            needed: 3,
            got: values.len(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();

    let top_three = sorted[n - 3] * sorted[n - 2] * sorted[n - 1];
    let negatives_and_top = sorted[0] * sorted[1] * sorted[n - 1];
    Ok(top_three.max(negatives_and_top))
}

// ---------------------------------------------------------------------------
// largest_product: generalization to k factors
// ---------------------------------------------------------------------------

/// Maximum product of any `k` elements of `values`.
///
/// Sorts a copy ascending, then evaluates every split of `k` into a prefix
/// of the smallest values plus a suffix of the largest. On a sorted
/// sequence, some such split is always optimal. `k = 0` yields the empty
/// product, `1`. The input is not modified.
///
/// # Errors
///
/// Returns [`KataError::TooFewElements`] when `k > values.len()`.
pub fn largest_product(values: &[i64], k: usize) -> Result<i64, KataError> {
    if k > values.len() {
        tracing::debug!(
            "rejecting largest_product: {} element(s), need {k}",
            values.len()
        );
        return Err(KataError::TooFewElements {
            needed: k,
            got: values.len(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();

    // For every split, the low prefix and high suffix cannot overlap because
    // k <= n; at k == n they exactly partition the sequence.
    let mut best = i64::MIN;
    for low_count in 0..=k {
        let high_count = k - low_count;
        let low: i64 = sorted[..low_count].iter().product();
        let high: i64 = sorted[n - high_count..].iter().product();
        best = best.max(low * high);
    }
    Ok(best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
