//! Binary heap engine.
//!
//! This module maintains the heap invariant over plain mutable slices: sift-down,
//! bottom-up heap construction, verification and heap sort, all parameterized by a
//! [`HeapOrder`] and reporting through optional [`ComparisonStats`](crate::statistics::ComparisonStats)
//! and [`SwapObserver`] hooks. [`KeyedMinHeap`] is a priority queue on the same
//! principles, used by the shortest-path routines.

mod keyed;
mod observer;
mod order;
mod sift;

pub use keyed::*;
pub use observer::*;
pub use order::*;
pub use sift::*;
