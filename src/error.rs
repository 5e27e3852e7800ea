//! Error types for the kata collection.
//!
//! [`KataError`] is the single error type returned by every fallible exercise
//! in this crate. It uses rich enum variants so callers can match on specific
//! precondition failures (too few elements, capacity mismatch) without
//! parsing error messages.
//!
//! Every fallible operation validates its inputs before mutating anything:
//! a returned error guarantees the caller's sequences are untouched.

use thiserror::Error;

/// Errors returned by the exercises in this crate.
///
/// All variants describe precondition violations. None of the algorithms has
/// a mid-flight failure mode — each call either completes fully or is
/// rejected here before any work is done.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KataError {
    /// The input sequence is shorter than the operation requires.
    ///
    /// Returned by [`max_product_of_three`](crate::max_product::max_product_of_three)
    /// (`needed = 3`), [`largest_product`](crate::max_product::largest_product)
    /// (`needed = k`), and the pair-selection exercises (`needed = 2`).
    #[error("sequence has {got} element(s) but the operation needs {needed}")]
    TooFewElements {
        /// How many elements the operation requires.
        needed: usize,
        /// How many elements the caller supplied.
        got: usize,
    },

    /// The destination buffer's total capacity does not match the declared
    /// valid prefix plus the incoming sequence.
    ///
    /// Returned by [`merge_into`](crate::merge_sorted::merge_into) when
    /// `valid + incoming != capacity`.
    #[error(
        "destination of capacity {capacity} cannot hold {valid} valid plus {incoming} incoming element(s)"
    )]
    CapacityMismatch {
        /// Declared count of meaningful elements in the destination prefix.
        valid: usize,
        /// Length of the sequence being merged in.
        incoming: usize,
        /// Actual total length of the destination buffer.
        capacity: usize,
    },
}
