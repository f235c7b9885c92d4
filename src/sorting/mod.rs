//! Comparison sorts.
//!
//! - [`insertion_sort`]: in place, early-exit adjacent swaps, stable
//! - [`merge_sort`]: returns a new vector, stable
//! - [`quick_sort`]: in place, middle pivot, reports its comparison count
//! - [`hybrid_sort`]: merge sort with insertion-sorted leaves

mod hybrid;
mod insertion;
mod merge;
mod quick;

pub use hybrid::*;
pub use insertion::*;
pub use merge::{merge_sort, merge_sort_by};
pub use quick::*;
