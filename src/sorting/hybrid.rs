use std::cmp::Ordering;

use crate::sorting::{insertion_sort_by, merge::merge_runs};

/// Merge sort that hands halves of at most `threshold` elements to insertion sort.
///
/// Same contract as [`merge_sort`](crate::sorting::merge_sort): a new sorted
/// vector, input untouched, stable. A threshold of 0 degenerates to plain
/// merge sort.
pub fn hybrid_sort<T: Ord + Clone>(seq: &[T], threshold: usize) -> Vec<T> {
    hybrid_sort_by(seq, threshold, &mut T::cmp)
}

pub fn hybrid_sort_by<T, F>(seq: &[T], threshold: usize, compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }
    let (left, right) = seq.split_at(seq.len() / 2);

    let (left, right) = if left.len() <= threshold {
        let mut left = left.to_vec();
        let mut right = right.to_vec();
        insertion_sort_by(&mut left, &mut *compare);
        insertion_sort_by(&mut right, &mut *compare);
        (left, right)
    } else {
        (
            hybrid_sort_by(left, threshold, compare),
            hybrid_sort_by(right, threshold, compare),
        )
    };

    merge_runs(left, right, compare)
}
