//! Generic algorithms over xtofu value cells.
//!
//! This crate provides:
//! - [`compare`](mod@compare) - Three-way comparison and boolean helpers
//! - [`sort`](mod@sort) - In-place sorts and [`SortAlgorithm`] dispatch
//! - [`search`] - Linear and binary search
//! - [`functional`] - Transform, filter, reduce, accumulate, partition, for-each
//! - [`order`] - Reversal
//! - [`shuffle`](mod@shuffle) - Fisher–Yates with injected randomness
//! - [`Cursor`] - Bidirectional element position
//!
//! Every algorithm takes the array as a [`Value`](xtofu_foundation::Value)
//! cell and reports failures through [`xtofu_foundation::Error`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod cursor;
pub mod functional;
mod guard;
pub mod order;
pub mod search;
pub mod shuffle;
pub mod sort;

pub use compare::{compare, equal, greater, greater_equal, less, less_equal, not_equal};
pub use cursor::Cursor;
pub use functional::{accumulate, filter, for_each, partition, reduce, transform};
pub use order::{reverse, reverse_range};
pub use search::{
    search_binary, search_binary_first, search_binary_last, search_linear, search_linear_first,
    search_linear_last,
};
pub use shuffle::{shuffle, shuffle_range, shuffle_seeded};
pub use sort::{
    SortAlgorithm, sort, sort_insertion, sort_merge, sort_quick, sort_selection, sort_with,
};
