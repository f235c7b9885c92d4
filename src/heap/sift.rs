use crate::{
    heap::{HeapOrder, MaxOrder, MinOrder, NoTrace, SwapEvent, SwapObserver},
    statistics::ComparisonStats,
};

/// Restores the heap invariant at `index`, assuming both subtrees below it are heaps.
///
/// The node is swapped with its extremal child (per `order`) until no child
/// precedes it. Only the first `heap_size` slots take part; anything past
/// that is left alone.
///
/// # Comparison counting
/// When `stats` is given, every visited node records one comparison per
/// existing child plus one unconditional comparison for the swap decision.
/// A leaf therefore still costs one.
///
/// # Panics
/// - If `heap_size > seq.len()`.
/// - If `index >= heap_size`.
pub fn sift_down<T, O, Obs>(
    seq: &mut [T],
    heap_size: usize,
    index: usize,
    order: &O,
    mut stats: Option<&mut ComparisonStats>,
    observer: &mut Obs,
) where
    O: HeapOrder<T> + ?Sized,
    Obs: SwapObserver<T> + ?Sized,
{
    assert!(heap_size <= seq.len());
    assert!(
        index < heap_size,
        "sift-down index {index} outside heap of size {heap_size}"
    );

    let mut current = index;
    loop {
        let left = 2 * current + 1;
        let right = 2 * current + 2;
        let mut extremal = current;
        let mut comparisons = 1;

        if left < heap_size {
            if order.precedes(&seq[left], &seq[extremal]) {
                extremal = left;
            }
            comparisons += 1;
        }
        if right < heap_size {
            if order.precedes(&seq[right], &seq[extremal]) {
                extremal = right;
            }
            comparisons += 1;
        }

        if let Some(stats) = stats.as_deref_mut() {
            stats.bump_comparisons(comparisons);
        }

        if extremal == current {
            return;
        }

        seq.swap(current, extremal);
        if let Some(stats) = stats.as_deref_mut() {
            stats.bump_swaps();
        }
        observer.on_swap(&SwapEvent {
            parent: current,
            child: extremal,
            heap: seq,
        });
        current = extremal;
    }
}

/// Bottom-up heap construction over the whole sequence.
///
/// Sifts down every index from `len / 2` to `0`, so each subtree is already a
/// heap by the time its root is processed. An empty sequence is left as is.
pub fn build_heap<T, O, Obs>(
    seq: &mut [T],
    order: &O,
    mut stats: Option<&mut ComparisonStats>,
    observer: &mut Obs,
) where
    O: HeapOrder<T> + ?Sized,
    Obs: SwapObserver<T> + ?Sized,
{
    let heap_size = seq.len();
    if heap_size == 0 {
        return;
    }
    for i in (0..=heap_size / 2).rev() {
        sift_down(seq, heap_size, i, order, stats.as_deref_mut(), observer);
    }
}

/// Builds a min-heap in place and returns the number of comparisons it took.
pub fn build_min_heap<T: PartialOrd>(seq: &mut [T]) -> ComparisonStats {
    let mut stats = ComparisonStats::new();
    build_heap(seq, &MinOrder, Some(&mut stats), &mut NoTrace);
    stats
}

/// Builds a max-heap in place and returns the number of comparisons it took.
pub fn build_max_heap<T: PartialOrd>(seq: &mut [T]) -> ComparisonStats {
    let mut stats = ComparisonStats::new();
    build_heap(seq, &MaxOrder, Some(&mut stats), &mut NoTrace);
    stats
}

/// The keys `size, size - 1, ..., 1`, the worst case for a bottom-up min-heap
/// build. Sizes beyond `i64::MAX` saturate instead of wrapping.
pub fn descending_keys(size: usize) -> Vec<i64> {
    (1..=size)
        .rev()
        .map(|key| i64::try_from(key).unwrap_or(i64::MAX))
        .collect()
}

/// Checks that no child within `heap_size` precedes its parent.
pub fn is_heap<T, O>(seq: &[T], heap_size: usize, order: &O) -> bool
where
    O: HeapOrder<T> + ?Sized,
{
    let heap_size = heap_size.min(seq.len());
    (0..heap_size).all(|parent| {
        [2 * parent + 1, 2 * parent + 2]
            .into_iter()
            .filter(|&child| child < heap_size)
            .all(|child| !order.precedes(&seq[child], &seq[parent]))
    })
}

/// Sorts ascending in place by building a max-heap and repeatedly moving its
/// root behind a shrinking heap.
pub fn heap_sort<T: PartialOrd>(seq: &mut [T]) -> ComparisonStats {
    let mut stats = build_max_heap(seq);
    for end in (1..seq.len()).rev() {
        seq.swap(0, end);
        stats.bump_swaps();
        sift_down(seq, end, 0, &MaxOrder, Some(&mut stats), &mut NoTrace);
    }
    stats
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::heap::SwapLog;

    #[test]
    fn reverse_input_comparison_counts() {
        let expected = [1, 4, 5, 10, 12, 14, 16, 21, 26, 28];
        for (n, &count) in (1..=10).zip(expected.iter()) {
            let mut seq = descending_keys(n);
            let stats = build_min_heap(&mut seq);
            assert_eq!(stats.get_comparisons(), count, "size {n}");
            assert!(is_heap(&seq, seq.len(), &MinOrder));
        }
    }

    #[test]
    fn descending_keys_counts_down_to_one() {
        assert!(descending_keys(0).is_empty());
        assert_eq!(descending_keys(4), vec![4, 3, 2, 1]);
        let keys = descending_keys(100_000);
        assert_eq!(keys.len(), 100_000);
        assert_eq!(keys.first(), Some(&100_000));
        assert_eq!(keys.last(), Some(&1));
    }

    #[test]
    fn single_element_costs_one_comparison() {
        let mut seq = vec![1];
        let stats = build_min_heap(&mut seq);
        assert_eq!(stats.get_comparisons(), 1);
        assert_eq!(stats.get_swaps(), 0);
        assert_eq!(seq, vec![1]);
    }

    #[test]
    fn two_elements_swap_once() {
        let mut seq = vec![2, 1];
        let stats = build_min_heap(&mut seq);
        assert_eq!(seq, vec![1, 2]);
        assert_eq!(stats.get_comparisons(), 4);
        assert_eq!(stats.get_swaps(), 1);
    }

    #[test]
    fn reverse_ten_builds_expected_layout() {
        let mut seq = descending_keys(10);
        build_min_heap(&mut seq);
        assert_eq!(seq, vec![1, 2, 4, 3, 6, 5, 8, 10, 7, 9]);
    }

    #[test]
    fn empty_sequence_is_untouched() {
        let mut seq: Vec<i64> = vec![];
        let stats = build_min_heap(&mut seq);
        assert!(seq.is_empty());
        assert_eq!(stats.get_comparisons(), 0);
    }

    #[test]
    fn duplicates_follow_literal_count() {
        let mut seq = vec![5, 3, 8, 3, 9, 1, 5, 3, 2, 8];
        let stats = build_min_heap(&mut seq);
        assert_eq!(seq, vec![1, 2, 5, 3, 8, 8, 5, 3, 3, 9]);
        assert_eq!(stats.get_comparisons(), 24);
    }

    #[test]
    fn ties_do_not_promote_children() {
        let mut seq = vec![4, 4, 4];
        let mut log = SwapLog::default();
        build_heap(&mut seq, &MinOrder, None, &mut log);
        assert!(log.swaps.is_empty());
    }

    #[test]
    fn observer_sees_every_swap() {
        let mut seq = vec![3, 2, 1];
        let mut log = SwapLog::default();
        let mut stats = ComparisonStats::new();
        build_heap(&mut seq, &MinOrder, Some(&mut stats), &mut log);
        assert_eq!(seq, vec![1, 2, 3]);
        assert_eq!(log.swaps, vec![(0, 2)]);
        assert_eq!(log.swaps.len(), stats.get_swaps());
    }

    #[test]
    fn observer_does_not_change_outcome() {
        let mut rng = StdRng::seed_from_u64(11);
        let input: Vec<i32> = (0..64).map(|_| rng.random_range(-50..50)).collect();

        let mut quiet = input.clone();
        let mut quiet_stats = ComparisonStats::new();
        build_heap(&mut quiet, &MinOrder, Some(&mut quiet_stats), &mut NoTrace);

        let mut traced = input;
        let mut traced_stats = ComparisonStats::new();
        build_heap(&mut traced, &MinOrder, Some(&mut traced_stats), &mut SwapLog::default());

        assert_eq!(quiet, traced);
        assert_eq!(quiet_stats, traced_stats);
    }

    #[test]
    fn uncounted_build_matches_counted_build() {
        let mut counted = descending_keys(9);
        let mut uncounted = descending_keys(9);
        build_min_heap(&mut counted);
        build_heap(&mut uncounted, &MinOrder, None, &mut NoTrace);
        assert_eq!(counted, uncounted);
    }

    #[test]
    fn random_min_and_max_heaps_hold_invariant() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 0..100 {
            let input: Vec<i64> = (0..len).map(|_| rng.random_range(0..20)).collect();

            let mut min = input.clone();
            build_min_heap(&mut min);
            assert!(is_heap(&min, min.len(), &MinOrder));

            let mut max = input.clone();
            build_max_heap(&mut max);
            assert!(is_heap(&max, max.len(), &MaxOrder));

            let mut expected = input;
            expected.sort();
            min.sort();
            assert_eq!(min, expected);
        }
    }

    #[test]
    fn sift_down_respects_heap_size() {
        // the 0 past the logical end must not be pulled into the heap
        let mut seq = vec![5, 6, 7, 0];
        sift_down(&mut seq, 3, 0, &MinOrder, None, &mut NoTrace);
        assert_eq!(seq, vec![5, 6, 7, 0]);
    }

    #[test]
    fn sift_down_walks_the_full_path() {
        let mut seq = vec![9, 1, 2, 3, 4, 5, 6];
        let mut stats = ComparisonStats::new();
        sift_down(&mut seq, 7, 0, &MinOrder, Some(&mut stats), &mut NoTrace);
        assert_eq!(seq, vec![1, 3, 2, 9, 4, 5, 6]);
        // root and node 1 have two children each, node 3 is a leaf
        assert_eq!(stats.get_comparisons(), 3 + 3 + 1);
    }

    #[test]
    #[should_panic(expected = "outside heap")]
    fn sift_down_rejects_index_past_heap() {
        let mut seq = vec![1, 2, 3];
        sift_down(&mut seq, 2, 2, &MinOrder, None, &mut NoTrace);
    }

    #[test]
    fn is_heap_detects_violation() {
        assert!(is_heap(&[1, 2, 3], 3, &MinOrder));
        assert!(!is_heap(&[2, 1, 3], 3, &MinOrder));
        // the violation is past the logical heap end
        assert!(is_heap(&[1, 2, 3, 0], 3, &MinOrder));
    }

    #[test]
    fn heap_sort_sorts_ascending() {
        let mut seq = vec![5, 3, 8, 3, 9, 1, 5, 3, 2, 8];
        heap_sort(&mut seq);
        assert_eq!(seq, vec![1, 2, 3, 3, 3, 5, 5, 8, 8, 9]);

        let mut empty: Vec<u8> = vec![];
        heap_sort(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn heap_sort_matches_std_sort() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in [1, 2, 7, 33, 250] {
            let mut seq: Vec<i32> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();
            let mut expected = seq.clone();
            expected.sort();
            heap_sort(&mut seq);
            assert_eq!(seq, expected);
        }
    }
}
