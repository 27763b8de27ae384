//! This module defines configuration options for building configuration graphs.
//!
//! The edge set of a configuration graph is a pure function of its vertices, so the options
//! only trade thread start-up overhead against throughput; they never change the result.

/// Configuration parameters for the configuration graph builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// The vertex count from which pairwise distances are computed on the rayon thread pool.
    ///
    /// Graphs with fewer vertices are built on the calling thread. `0` always builds in
    /// parallel and `usize::MAX` never does.
    pub parallel_threshold: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl GraphOptions {
    /// Options that keep all work on the calling thread.
    pub fn serial() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns `true` if a graph of `vertex_count` vertices is built on the rayon thread pool.
    pub fn is_parallel_for(&self, vertex_count: usize) -> bool {
        vertex_count >= self.parallel_threshold
    }
}
