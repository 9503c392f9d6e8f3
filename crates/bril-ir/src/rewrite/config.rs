//! Greedy driver configuration.

use crate::walk::Traversal;

/// Default cap on full scans before the driver gives up.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Settings for a greedy rewrite run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GreedyRewriteConfig {
    /// Maximum number of full scans. A scan that applies no rewrite ends the
    /// run, so a converging run needs one scan more than it has rewriting
    /// scans. Zero is treated as one.
    pub max_iterations: usize,
    /// Whether an operation is visited before or after its nested regions.
    pub traversal: Traversal,
}

impl GreedyRewriteConfig {
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            traversal: Traversal::default(),
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    pub(crate) fn iteration_cap(&self) -> usize {
        self.max_iterations.max(1)
    }
}

impl Default for GreedyRewriteConfig {
    fn default() -> Self {
        Self::new()
    }
}
