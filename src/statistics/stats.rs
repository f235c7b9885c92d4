/// Instrumentation counters for a single measured run.
///
/// A fresh value is created for every run, so counts never leak from one
/// invocation into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonStats {
    comparisons: usize,
    swaps: usize,
}

impl ComparisonStats {
    pub fn new() -> Self {
        ComparisonStats {
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Record into the statistics object that `amount` key comparisons were performed
    pub fn bump_comparisons(&mut self, amount: usize) {
        self.comparisons += amount
    }

    /// Record into the statistics object that two elements changed places
    pub fn bump_swaps(&mut self) {
        self.swaps += 1
    }

    pub fn get_comparisons(&self) -> usize {
        self.comparisons
    }

    pub fn get_swaps(&self) -> usize {
        self.swaps
    }

    /// Sums the counters of two runs, e.g. a priority queue and the algorithm driving it.
    pub fn merge(&self, other: &ComparisonStats) -> ComparisonStats {
        ComparisonStats {
            comparisons: self.comparisons + other.comparisons,
            swaps: self.swaps + other.swaps,
        }
    }
}

impl Default for ComparisonStats {
    fn default() -> Self {
        ComparisonStats::new()
    }
}
