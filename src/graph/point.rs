use std::fmt;

use serde::Deserialize;

/// A grid position. Deserializes from a two-element array `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "[i64; 2]")]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    pub const fn new(row: i64, col: i64) -> Self {
        Point { row, col }
    }

    /// Two distinct points are neighbors when they share a row or a column.
    pub fn is_neighbor_of(&self, other: &Point) -> bool {
        self != other && (self.row == other.row || self.col == other.col)
    }
}

impl From<[i64; 2]> for Point {
    fn from([row, col]: [i64; 2]) -> Self {
        Point { row, col }
    }
}

impl From<(i64, i64)> for Point {
    fn from((row, col): (i64, i64)) -> Self {
        Point { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
