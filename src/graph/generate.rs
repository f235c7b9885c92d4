use rand::Rng;

use crate::graph::{DenseGraph, SparseGraph};

const MAX_WEIGHT: u32 = 20;

/// How many edges to add on top of the spanning chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDensity {
    /// About `n / 2` extra edges.
    Sparse,
    /// About a quarter of all node pairs.
    Medium,
    /// Every pair of nodes.
    Dense,
}

impl EdgeDensity {
    /// Extra undirected edges requested for a graph of `n` nodes.
    pub fn extra_edges(self, n: usize) -> usize {
        let pairs = n * n.saturating_sub(1) / 2;
        match self {
            EdgeDensity::Sparse => n / 2,
            EdgeDensity::Medium => pairs / 2,
            EdgeDensity::Dense => pairs.saturating_sub(n.saturating_sub(1)),
        }
    }
}

fn random_weight<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(1..=MAX_WEIGHT)
}

/// Undirected random graph: a chain `0 - 1 - ... - (n-1)` plus up to `extra_edges`
/// random edges, never a self-loop or a repeated pair. Weights are in `1..=20`.
///
/// The request is capped at the number of pairs the chain leaves free.
pub fn random_dense_graph<R: Rng>(n: usize, extra_edges: usize, rng: &mut R) -> DenseGraph {
    let mut graph = DenseGraph::new(n);
    for i in 1..n {
        graph.add_undirected_edge(i - 1, i, random_weight(rng));
    }

    let free_pairs = EdgeDensity::Dense.extra_edges(n);
    for _ in 0..extra_edges.min(free_pairs) {
        let (a, b) = loop {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if a != b && graph.weight(a, b).is_none() {
                break (a, b);
            }
        };
        graph.add_undirected_edge(a, b, random_weight(rng));
    }
    graph
}

/// Directed random graph: a chain `0 -> 1 -> ... -> (n-1)` plus up to
/// `extra_edges` random directed edges without self-loops or repeats.
pub fn random_sparse_graph<R: Rng>(n: usize, extra_edges: usize, rng: &mut R) -> SparseGraph {
    let mut graph = SparseGraph::new(n);
    for i in 1..n {
        graph.add_edge(i - 1, i, random_weight(rng));
    }

    let free_arcs = (n * n.saturating_sub(1)).saturating_sub(n.saturating_sub(1));
    for _ in 0..extra_edges.min(free_arcs) {
        let (from, to) = loop {
            let from = rng.random_range(0..n);
            let to = rng.random_range(0..n);
            if from != to && !graph.has_edge(from, to) {
                break (from, to);
            }
        };
        graph.add_edge(from, to, random_weight(rng));
    }
    graph
}
