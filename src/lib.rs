//! Array-manipulation katas over integer slices.
//!
//! Each module holds one self-contained exercise. They share an element
//! type ([`i64`]), an error taxonomy ([`KataError`]), and a bias toward
//! in-place, allocation-free solutions:
//!
//! - [`max_product`] — largest product of three (or `k`) elements
//! - [`merge_sorted`] — merge a sorted sequence into another's spare tail
//! - [`remove_value`] — compact a sequence by discarding one value
//! - [`sorted_squares`] — square a sorted sequence, keeping it sorted
//! - [`two_largest`] — champion and runner-up, two strategies
//! - [`pair_sum`] — pair in a sorted sequence summing closest to a target
//!
//! Elements are plain `i64` and products are computed in `i64`; inputs
//! whose products exceed that range wrap in release builds and panic in
//! debug builds, like any other Rust arithmetic.

pub mod error;
pub mod max_product;
pub mod merge_sorted;
pub mod pair_sum;
pub mod remove_value;
pub mod sorted_squares;
pub mod two_largest;


pub use error::KataError;
pub use max_product::{largest_product, max_product_of_three};
pub use merge_sorted::{merge, merge_into};
pub use pair_sum::closest_pair_sum;
pub use remove_value::compact_remove;
pub use sorted_squares::sorted_squares;
pub use two_largest::{two_largest, two_largest_by_sort};
