use std::cmp::Ordering;

/// Returns a sorted copy of `seq`, leaving the input untouched.
///
/// Splits at `len / 2` (the left half is never the larger one), sorts both
/// halves recursively and merges them. Ties are taken from the left half, so
/// equal elements keep their input order.
pub fn merge_sort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    merge_sort_by(seq, &mut T::cmp)
}

/// [`merge_sort`] with a caller-supplied comparator.
pub fn merge_sort_by<T, F>(seq: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return seq.to_vec();
    }
    let (left, right) = seq.split_at(seq.len() / 2);
    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);
    merge_runs(left, right, compare)
}

/// Merges two sorted runs into one, preferring `left` on ties.
pub(crate) fn merge_runs<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn sorts_sample_array() {
        let seq = vec![
            3, 12, 4, 21, 5, 21, 4, 12, 41, 24, 124, 54372, 0, 23462, 34, 23426, 34, 34623, 4,
            236236, 12,
        ];
        let sorted = merge_sort(&seq);
        assert_eq!(
            sorted,
            vec![
                0, 3, 4, 4, 4, 5, 12, 12, 12, 21, 21, 24, 34, 34, 41, 124, 23426, 23462, 34623,
                54372, 236236
            ]
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let seq = vec![5, 3, 8, 3, 9, 1];
        let before = seq.clone();
        let sorted = merge_sort(&seq);
        assert_eq!(seq, before);
        assert_eq!(sorted, vec![1, 3, 3, 5, 8, 9]);
    }

    #[test]
    fn empty_and_single() {
        let empty: Vec<u32> = vec![];
        assert!(merge_sort(&empty).is_empty());
        assert_eq!(merge_sort(&[42]), vec![42]);
    }

    #[test]
    fn already_sorted_is_unchanged() {
        let seq: Vec<i32> = (1..=10).collect();
        assert_eq!(merge_sort(&seq), seq);
    }

    #[test]
    fn stable_for_equal_keys() {
        let tagged = vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e'), (3, 'f')];
        let sorted = merge_sort_by(&tagged, &mut |a: &(i32, char), b: &(i32, char)| {
            a.0.cmp(&b.0)
        });
        assert_eq!(
            sorted,
            vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c'), (3, 'f')]
        );
    }

    #[test]
    fn merge_runs_prefers_left_on_ties() {
        let left = vec![(1, "left")];
        let right = vec![(1, "right")];
        let merged = merge_runs(left, right, &mut |a: &(i32, &str), b: &(i32, &str)| {
            a.0.cmp(&b.0)
        });
        assert_eq!(merged, vec![(1, "left"), (1, "right")]);
    }

    #[test]
    fn matches_std_sort_on_random_input() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 0..80 {
            let seq: Vec<i64> = (0..len).map(|_| rng.random_range(-30..30)).collect();
            let mut expected = seq.clone();
            expected.sort();
            assert_eq!(merge_sort(&seq), expected);
        }
    }
}
