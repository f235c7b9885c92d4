//! Instrumentation and numeric summaries.
//!
//! This module provides the comparison/swap counters threaded through the heap,
//! sorting and shortest-path routines, and Pearson correlation over paired samples.

mod correlation;
mod stats;

pub use correlation::*;
pub use stats::*;
