pub mod fs;
pub mod graph;
pub mod heap;
pub mod sorting;
pub mod statistics;
