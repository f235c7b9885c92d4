//! Loading sample inputs from disk or the command line.
//!
//! All inputs are JSON: integer arrays for the sorts, `[[row, col], ...]` for
//! grid points and `{"x": [...], "y": [...]}` for paired samples.

mod json_load;

pub use json_load::*;
