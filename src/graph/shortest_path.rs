use crate::{graph::VisitorSet, heap::KeyedMinHeap, statistics::ComparisonStats};

/// Single-source shortest path result.
///
/// `distances[v]` is `None` when `v` cannot be reached; `predecessors[v]` is the
/// node preceding `v` on a shortest path, `None` for the source and for
/// unreachable nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    pub source: usize,
    pub distances: Vec<Option<u64>>,
    pub predecessors: Vec<Option<usize>>,
    pub stats: ComparisonStats,
}

impl ShortestPaths {
    fn unreached(source: usize, n: usize) -> Self {
        let mut distances = vec![None; n];
        distances[source] = Some(0);
        ShortestPaths {
            source,
            distances,
            predecessors: vec![None; n],
            stats: ComparisonStats::new(),
        }
    }

    /// Nodes from the source to `target`, both included.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distances.get(target).copied().flatten()?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

fn key(distance: Option<u64>) -> u64 {
    distance.unwrap_or(u64::MAX)
}

/// Weighted graph stored as an `n x n` matrix; a weight of 0 means "no edge".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGraph {
    weights: Vec<Vec<u32>>,
}

impl DenseGraph {
    pub fn new(n: usize) -> Self {
        DenseGraph {
            weights: vec![vec![0; n]; n],
        }
    }

    /// # Panics
    /// If the matrix is not square.
    pub fn from_matrix(weights: Vec<Vec<u32>>) -> Self {
        let n = weights.len();
        assert!(
            weights.iter().all(|row| row.len() == n),
            "weight matrix must be square"
        );
        DenseGraph { weights }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, from: usize, to: usize) -> Option<u32> {
        match self.weights[from][to] {
            0 => None,
            w => Some(w),
        }
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: u32) {
        assert!(weight > 0, "edge weights must be positive");
        self.weights[from][to] = weight;
    }

    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: u32) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.weights
            .iter()
            .map(|row| row.iter().filter(|&&w| w != 0).count())
            .sum()
    }

    /// Dijkstra with an unsorted array as the priority queue.
    ///
    /// Comparisons counted: one per remaining entry (minus one) when extracting
    /// the cheapest node, one per matrix column inspected, one per edge to an
    /// unvisited node, and one per distance improvement.
    ///
    /// # Panics
    /// If `source` is not a node of the graph.
    pub fn dijkstra(&self, source: usize) -> ShortestPaths {
        let n = self.len();
        assert!(source < n, "source {source} outside graph of {n} nodes");

        let mut result = ShortestPaths::unreached(source, n);
        let mut visited = vec![false; n];
        let mut queue: Vec<usize> = (0..n).collect();

        while !queue.is_empty() {
            let mut cheapest = 0;
            for i in 1..queue.len() {
                result.stats.bump_comparisons(1);
                if key(result.distances[queue[i]]) < key(result.distances[queue[cheapest]]) {
                    cheapest = i;
                }
            }
            let u = queue.remove(cheapest);
            visited.mark_visited(u);

            let Some(du) = result.distances[u] else {
                continue;
            };
            for v in 0..n {
                result.stats.bump_comparisons(1);
                let w = self.weights[u][v];
                if w == 0 || visited.is_visited(&v) {
                    continue;
                }
                result.stats.bump_comparisons(1);
                let candidate = du + u64::from(w);
                if candidate < key(result.distances[v]) {
                    result.stats.bump_comparisons(1);
                    result.distances[v] = Some(candidate);
                    result.predecessors[v] = Some(u);
                }
            }
        }
        result
    }
}

/// Weighted graph stored as adjacency lists of `(target, weight)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparseGraph {
    adjacency: Vec<Vec<(usize, u32)>>,
}

impl SparseGraph {
    pub fn new(n: usize) -> Self {
        SparseGraph {
            adjacency: vec![Vec::new(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn neighbors(&self, node: usize) -> &[(usize, u32)] {
        &self.adjacency[node]
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency[from].iter().any(|&(target, _)| target == to)
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: u32) {
        assert!(to < self.len(), "edge target {to} outside graph");
        self.adjacency[from].push((to, weight));
    }

    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: u32) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Dijkstra with a [`KeyedMinHeap`] as the priority queue.
    ///
    /// Improved distances are pushed as new entries and stale entries are
    /// skipped when popped. Comparisons counted: every heap comparison, one per
    /// edge to an unvisited node, and one per distance improvement.
    ///
    /// # Panics
    /// If `source` is not a node of the graph.
    pub fn dijkstra(&self, source: usize) -> ShortestPaths {
        let n = self.len();
        assert!(source < n, "source {source} outside graph of {n} nodes");

        let mut result = ShortestPaths::unreached(source, n);
        let mut visited = vec![false; n];
        let mut queue = KeyedMinHeap::with_capacity(n);
        queue.push(source, 0u64);

        while let Some((u, du)) = queue.pop() {
            if visited.is_visited(&u) {
                continue;
            }
            visited.mark_visited(u);

            for &(v, w) in &self.adjacency[u] {
                if visited.is_visited(&v) {
                    continue;
                }
                result.stats.bump_comparisons(1);
                let candidate = du + u64::from(w);
                if candidate < key(result.distances[v]) {
                    result.stats.bump_comparisons(1);
                    result.distances[v] = Some(candidate);
                    result.predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }
        result.stats = result.stats.merge(&queue.stats());
        result
    }
}

impl From<&DenseGraph> for SparseGraph {
    fn from(dense: &DenseGraph) -> Self {
        let adjacency = dense
            .weights
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w != 0)
                    .map(|(target, &w)| (target, w))
                    .collect()
            })
            .collect();
        SparseGraph { adjacency }
    }
}
