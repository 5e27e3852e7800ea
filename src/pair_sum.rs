//! Find the pair in a sorted sequence whose sum lands closest to a target.
//!
//! Brute force checks all n·(n−1)/2 pairs. Sorted input admits the classic
//! converging walk instead: one pointer at each end, and every step discards
//! the element that can no longer participate in a better pair. A sum below
//! the target can only improve by advancing the low end; a sum above it only
//! by retreating the high end. O(n) once sorted.

use crate::error::KataError;

// ---------------------------------------------------------------------------
// closest_pair_sum
// ---------------------------------------------------------------------------

/// Return the pair of distinct positions whose values sum closest to
/// `target`, as `(low value, high value)`.
///
/// The input must be sorted ascending; the result is unspecified otherwise.
/// Among equally close pairs, the walk keeps the first one it encounters.
/// An exact hit short-circuits the walk.
///
/// # Errors
///
/// Returns [`KataError::TooFewElements`] when `values` has fewer than two
/// elements.
pub fn closest_pair_sum(values: &[i64], target: i64) -> Result<(i64, i64), KataError> {
    if values.len() < 2 {
        tracing::debug!("rejecting closest_pair_sum over {} element(s)", values.len());
        return Err(KataError::TooFewElements {
            needed: 2,
            got: values.len(),
        });
    }

    let mut lo = 0;
    let mut hi = values.len() - 1;
    let mut best = (values[lo], values[hi]);
    let mut best_distance = (target - (values[lo] + values[hi])).abs();
    while lo < hi {
        let sum = values[lo] + values[hi];
        let distance = (target - sum).abs();
        if distance < best_distance {
            best = (values[lo], values[hi]);
            best_distance = distance;
        }
        if sum == target {
            break;
        }
        if sum < target {
            lo += 1;
        } else {
            hi -= 1;
        }
    }
    Ok(best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::all, clippy::pedantic, clippy::nursery)]
mod tests {
    use super::*;

    // -- contract --

    #[test]
    fn closest_without_exact_hit() {
        assert_eq!(closest_pair_sum(&[-2, 3, 5, 7, 10, 12], 6), Ok((-2, 7)));
    }

    #[test]
    fn exact_hit_wins() {
        assert_eq!(closest_pair_sum(&[1, 2, 4, 8], 10), Ok((2, 8)));
    }

    #[test]
    fn two_elements_are_the_only_pair() {
        assert_eq!(closest_pair_sum(&[3, 9], 100), Ok((3, 9)));
    }

    #[test]
    fn negative_target() {
        assert_eq!(closest_pair_sum(&[-8, -3, 1, 6], -10), Ok((-8, -3)));
    }

    #[test]
    fn duplicate_values_can_pair() {
        assert_eq!(closest_pair_sum(&[4, 4, 30], 8), Ok((4, 4)));
    }

    // -- rejection --

    #[test]
    fn too_few_elements_is_rejected() {
        assert_eq!(
            closest_pair_sum(&[5], 5),
            Err(KataError::TooFewElements { needed: 2, got: 1 })
        );
        assert_eq!(
            closest_pair_sum(&[], 0),
            Err(KataError::TooFewElements { needed: 2, got: 0 })
        );
    }

    // -- reference comparison --

    #[test]
    fn matches_exhaustive_search() {
        let values = [-7, -2, 0, 3, 5, 9, 14];
        for target in -20..=20 {
            let (a, b) = closest_pair_sum(&values, target).unwrap();
            let best = values
                .iter()
                .enumerate()
                .flat_map(|(i, &x)| values[i + 1..].iter().map(move |&y| (x, y)))
                .map(|(x, y)| (target - (x + y)).abs())
                .min()
                .unwrap();
            assert_eq!(
                (target - (a + b)).abs(),
                best,
                "pair ({a}, {b}) is not closest to {target}"
            );
        }
    }
}
