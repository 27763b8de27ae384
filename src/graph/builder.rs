//! This module implements the `GraphBuilder` that connects enumerated configurations.
//!
//! Vertices are the configurations in enumeration order; an undirected edge joins two
//! configurations exactly one adsorbate event apart. Every unordered pair is compared. Large
//! graphs spread the comparisons over the rayon thread pool, each worker owning a disjoint set
//! of first vertices.

use super::options::GraphOptions;
use crate::types::Configuration;
use petgraph::graph::{NodeIndex, UnGraph};
use rayon::prelude::*;

/// The distance at which two configurations are connected.
pub const EDGE_DISTANCE: usize = 1;

/// An undirected graph over enumerated configurations.
///
/// Vertex `i` is the `i`-th configuration passed to the builder.
#[derive(Debug, Clone)]
pub struct ConfigurationGraph<C> {
    vertices: Vec<C>,
    graph: UnGraph<(), ()>,
}

impl<C> ConfigurationGraph<C> {
    /// Returns the number of configurations in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of configuration pairs one adsorbate event apart.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the configurations in vertex order, which is the order they were enumerated in.
    pub fn vertices(&self) -> &[C] {
        &self.vertices
    }

    /// Returns the configuration of vertex `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a vertex of the graph.
    pub fn vertex(&self, index: usize) -> &C {
        &self.vertices[index]
    }

    /// Consumes the graph and returns its configurations in vertex order.
    pub fn into_vertices(self) -> Vec<C> {
        self.vertices
    }

    /// Number of configurations one event away from vertex `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.graph.neighbors(NodeIndex::new(index)).count()
    }

    /// Degrees of all vertices in vertex order.
    pub fn degrees(&self) -> Vec<usize> {
        (0..self.vertex_count()).map(|i| self.degree(i)).collect()
    }

    /// Neighbours of vertex `index`, ascending.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let mut neighbors: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(index))
            .map(NodeIndex::index)
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// Returns `true` if vertices `a` and `b` are one adsorbate event apart.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .is_some()
    }

    /// All edges as `(lower, higher)` vertex pairs, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(a, b)| {
                let (a, b) = (a.index(), b.index());
                (a.min(b), a.max(b))
            })
            .collect();
        edges.sort_unstable();
        edges
    }
}

/// Builds configuration graphs.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    options: GraphOptions,
}

impl GraphBuilder {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the builder with custom options.
    ///
    /// # Examples
    ///
    /// ```
    /// use adsorb::{GraphBuilder, GraphOptions};
    ///
    /// let builder = GraphBuilder::new().with_options(GraphOptions::serial());
    /// assert_eq!(builder.options().parallel_threshold, usize::MAX);
    /// ```
    pub fn with_options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options the builder was configured with.
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Connects every unordered pair of configurations at distance exactly one.
    ///
    /// # Examples
    ///
    /// ```
    /// use adsorb::{GraphBuilder, Occupancy};
    ///
    /// let vertices = vec![
    ///     Occupancy::from_slots(vec![vec![0, 0]]),
    ///     Occupancy::from_slots(vec![vec![0, 1]]),
    ///     Occupancy::from_slots(vec![vec![1, 1]]),
    /// ];
    /// let graph = GraphBuilder::new().build(vertices);
    /// assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
    /// ```
    pub fn build<C>(&self, vertices: Vec<C>) -> ConfigurationGraph<C>
    where
        C: Configuration + Sync,
    {
        let n = vertices.len();
        let edges = if self.options.is_parallel_for(n) {
            parallel_edges(&vertices)
        } else {
            serial_edges(&vertices)
        };

        let mut graph = UnGraph::with_capacity(n, edges.len());
        for _ in 0..n {
            graph.add_node(());
        }
        for (a, b) in edges {
            graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }

        ConfigurationGraph { vertices, graph }
    }
}

fn edges_from<C: Configuration>(vertices: &[C], i: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    let first = &vertices[i];
    (i + 1..vertices.len())
        .filter(move |&j| first.distance(&vertices[j]) == EDGE_DISTANCE)
        .map(move |j| (i, j))
}

fn serial_edges<C: Configuration>(vertices: &[C]) -> Vec<(usize, usize)> {
    (0..vertices.len())
        .flat_map(|i| edges_from(vertices, i))
        .collect()
}

fn parallel_edges<C: Configuration + Sync>(vertices: &[C]) -> Vec<(usize, usize)> {
    (0..vertices.len())
        .into_par_iter()
        .flat_map_iter(|i| edges_from(vertices, i))
        .collect()
}
