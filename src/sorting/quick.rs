use crate::statistics::ComparisonStats;

/// Sorts `seq` in place with quicksort and returns the work it took.
///
/// Each partition takes the middle element as pivot, parks it at the end and
/// sweeps the rest Lomuto-style. Every element-versus-pivot check counts as
/// one comparison. Not stable.
pub fn quick_sort<T: Ord>(seq: &mut [T]) -> ComparisonStats {
    let mut stats = ComparisonStats::new();
    sort_range(seq, &mut stats);
    stats
}

/// Recurses into the smaller partition and loops on the larger one, so the
/// stack depth stays logarithmic even when every element is equal.
fn sort_range<T: Ord>(mut seq: &mut [T], stats: &mut ComparisonStats) {
    while seq.len() > 1 {
        let pivot = partition(seq, stats);
        let (left, right) = std::mem::take(&mut seq).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_range(left, stats);
            seq = right;
        } else {
            sort_range(right, stats);
            seq = left;
        }
    }
}

/// Returns the final index of the pivot; everything before it is strictly smaller.
fn partition<T: Ord>(seq: &mut [T], stats: &mut ComparisonStats) -> usize {
    let high = seq.len() - 1;
    seq.swap(high / 2, high);

    let mut store = 0;
    for j in 0..high {
        stats.bump_comparisons(1);
        if seq[j] < seq[high] {
            if store != j {
                seq.swap(store, j);
                stats.bump_swaps();
            }
            store += 1;
        }
    }
    seq.swap(store, high);
    store
}
