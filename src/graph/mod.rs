//! Graph routines.
//!
//! - [`AdjacencyMap`]: grid points linked by shared row or column, with
//!   depth-first reachability and connected components
//! - [`DenseGraph`] / [`SparseGraph`]: weighted graphs with Dijkstra over an
//!   array queue and a binary heap queue respectively
//! - random connected graph generators for benchmarking the two

mod adjacency;
mod generate;
mod point;
mod shortest_path;
mod visited;

pub use adjacency::*;
pub use generate::*;
pub use point::*;
pub use shortest_path::*;
pub use visited::*;
