use crate::statistics::ComparisonStats;

/// A binary min-heap of `(item, key)` pairs ordered by key, used as a
/// priority queue.
///
/// Every key comparison made while sifting is recorded in [`stats`](Self::stats):
/// one per parent check on the way up, one per existing child on the way down.
/// Entries are never updated in place; callers push a new entry when a key
/// improves and skip stale ones when they surface.
#[derive(Debug, Clone)]
pub struct KeyedMinHeap<I, K> {
    entries: Vec<(I, K)>,
    stats: ComparisonStats,
}

impl<I, K: Ord> KeyedMinHeap<I, K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        KeyedMinHeap {
            entries: Vec::with_capacity(capacity),
            stats: ComparisonStats::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> ComparisonStats {
        self.stats
    }

    pub fn push(&mut self, item: I, key: K) {
        self.entries.push((item, key));
        self.sift_up(self.entries.len() - 1);
    }

    /// The entry with the smallest key, if any.
    pub fn peek(&self) -> Option<(&I, &K)> {
        self.entries.first().map(|(item, key)| (item, key))
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop(&mut self) -> Option<(I, K)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        self.stats.bump_swaps();
        let top = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        top
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            self.stats.bump_comparisons(1);
            if self.entries[idx].1 < self.entries[parent].1 {
                self.entries.swap(idx, parent);
                self.stats.bump_swaps();
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len {
                self.stats.bump_comparisons(1);
                if self.entries[left].1 < self.entries[smallest].1 {
                    smallest = left;
                }
            }
            if right < len {
                self.stats.bump_comparisons(1);
                if self.entries[right].1 < self.entries[smallest].1 {
                    smallest = right;
                }
            }

            if smallest == idx {
                return;
            }
            self.entries.swap(idx, smallest);
            self.stats.bump_swaps();
            idx = smallest;
        }
    }
}

impl<I, K: Ord> Default for KeyedMinHeap<I, K> {
    fn default() -> Self {
        KeyedMinHeap::new()
    }
}
