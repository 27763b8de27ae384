//! This module implements the representative selector for configuration graphs.
//!
//! A configuration with many neighbours is one adsorbate event away from many others, which
//! makes it a good starting point for exploring the configuration space with expensive
//! calculations. The selector returns every vertex that reaches the maximum degree, keeping
//! ties in vertex order, together with that degree.

use super::builder::ConfigurationGraph;

/// The vertices of maximum degree in a configuration graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Indices of the selected vertices, ascending.
    pub vertices: Vec<usize>,
    /// The degree shared by every selected vertex.
    pub max_degree: usize,
}

impl Selection {
    /// Returns the number of selected vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if nothing was selected, which only happens for a graph without vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Selects every vertex whose degree equals the maximum degree of the graph.
///
/// Ties are kept: all maximal vertices are returned in vertex order. A graph without edges
/// selects all of its vertices with a maximum degree of zero; a graph without vertices selects
/// nothing.
pub fn select_representatives<C>(graph: &ConfigurationGraph<C>) -> Selection {
    let degrees = graph.degrees();
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let vertices = degrees
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree == max_degree)
        .map(|(index, _)| index)
        .collect();

    Selection {
        vertices,
        max_degree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::occupancy::{Occupancy, Odometer, SiteLayout};

    fn graph(points: Vec<usize>, bounds: Vec<u32>) -> ConfigurationGraph<Occupancy> {
        let layout = SiteLayout::new(points, bounds).unwrap();
        GraphBuilder::new().build(Odometer::new(&layout).iter().collect())
    }

    #[test]
    fn test_chain_selects_middle() {
        let selection = select_representatives(&graph(vec![2], vec![1]));
        assert_eq!(selection.vertices, vec![1]);
        assert_eq!(selection.max_degree, 2);
    }

    #[test]
    fn test_regular_graph_selects_everything() {
        let selection = select_representatives(&graph(vec![1, 1], vec![1, 1]));
        assert_eq!(selection.vertices, vec![0, 1, 2, 3]);
        assert_eq!(selection.max_degree, 2);
    }

    #[test]
    fn test_empty_graph_selects_nothing() {
        let empty: ConfigurationGraph<Occupancy> = GraphBuilder::new().build(Vec::new());
        let selection = select_representatives(&empty);
        assert!(selection.is_empty());
        assert_eq!(selection.max_degree, 0);
    }

    #[test]
    fn test_single_vertex_is_selected_with_degree_zero() {
        let selection = select_representatives(&graph(vec![3], vec![0]));
        assert_eq!(selection.vertices, vec![0]);
        assert_eq!(selection.max_degree, 0);
    }
}
