use std::cmp::Ordering;

/// Sorts `seq` in place by walking each element back with adjacent swaps.
///
/// The walk stops at the first pair already in order, so sorted runs cost a
/// single comparison per element. Equal elements are never swapped, which
/// keeps the sort stable. Returns the same slice for chaining.
pub fn insertion_sort<T: Ord>(seq: &mut [T]) -> &mut [T] {
    insertion_sort_by(seq, T::cmp)
}

/// [`insertion_sort`] with a caller-supplied comparator.
pub fn insertion_sort_by<T, F>(seq: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..seq.len() {
        for j in (1..=i).rev() {
            if compare(&seq[j], &seq[j - 1]) == Ordering::Less {
                seq.swap(j, j - 1);
            } else {
                break;
            }
        }
    }
    seq
}
