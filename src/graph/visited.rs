use std::hash::Hash;

use hashbrown::HashSet;

/// Bookkeeping for nodes already explored by a traversal.
pub trait VisitorSet<K> {
    fn is_visited(&self, key: &K) -> bool;
    fn mark_visited(&mut self, key: K);
}

impl<K: Hash + Eq> VisitorSet<K> for HashSet<K> {
    fn is_visited(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn mark_visited(&mut self, key: K) {
        self.insert(key);
    }
}

/// Dense visited flags for graphs whose nodes are `0..n`.
impl VisitorSet<usize> for Vec<bool> {
    fn is_visited(&self, key: &usize) -> bool {
        self[*key]
    }

    fn mark_visited(&mut self, key: usize) {
        self[key] = true;
    }
}
