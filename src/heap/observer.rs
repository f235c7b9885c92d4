use std::fmt::Debug;

use tracing::debug;

/// A swap performed while restoring the heap invariant.
///
/// `heap` is the whole backing sequence *after* the swap, so the value that
/// moved up now lives at `heap[parent]`.
#[derive(Debug)]
pub struct SwapEvent<'a, T> {
    pub parent: usize,
    pub child: usize,
    pub heap: &'a [T],
}

/// Receives swap events from [`sift_down`](crate::heap::sift_down).
///
/// Observers only watch; they have no way to influence the algorithm.
pub trait SwapObserver<T> {
    fn on_swap(&mut self, event: &SwapEvent<'_, T>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl<T> SwapObserver<T> for NoTrace {
    fn on_swap(&mut self, _event: &SwapEvent<'_, T>) {}
}

/// Logs each swap and the resulting array at `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<T: Debug> SwapObserver<T> for TracingObserver {
    fn on_swap(&mut self, event: &SwapEvent<'_, T>) {
        debug!(
            parent = event.parent,
            child = event.child,
            "swapping {:?}, {:?}",
            event.heap[event.child],
            event.heap[event.parent]
        );
        debug!("current array: {:?}", event.heap);
    }
}

/// Remembers the `(parent, child)` index pair of every swap, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwapLog {
    pub swaps: Vec<(usize, usize)>,
}

impl<T> SwapObserver<T> for SwapLog {
    fn on_swap(&mut self, event: &SwapEvent<'_, T>) {
        self.swaps.push((event.parent, event.child));
    }
}
