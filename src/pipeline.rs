//! End-to-end selection: enumerate, connect, select, label.
//!
//! Grid mode and site mode differ only in how the configurations are generated. Both hand
//! their configurations to the same graph builder and selector, and both express the chosen
//! configurations as per-site labels, a grid cell being a site with one slot.

use crate::error::AdsorbError;
use crate::graph::{ConfigurationGraph, GraphBuilder, select_representatives};
use crate::grid::{GridConfiguration, GridShape, enumerate_grid, enumerate_grid_coverages};
use crate::labels::SymbolTable;
use crate::occupancy::{Occupancy, Odometer, SiteLayout};
use crate::types::{Configuration, Placement, Representative};

/// The result of a full selection run.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    /// The layout the representatives are expressed in.
    pub layout: SiteLayout,
    /// The number of configurations that entered the graph.
    pub vertex_count: usize,
    /// The number of edges of the configuration graph.
    pub edge_count: usize,
    /// The degree shared by every representative.
    pub max_degree: usize,
    /// The representatives in enumeration order.
    pub representatives: Vec<Representative>,
}

impl SelectionOutcome {
    /// Returns the placements of the representatives in enumeration order.
    pub fn placements(&self) -> Vec<Placement> {
        self.representatives
            .iter()
            .map(|representative| representative.placement.clone())
            .collect()
    }
}

/// Selects representative placements of identical adsorbates on a grid.
///
/// With `count` set, only placements of exactly that many adsorbates are enumerated; without
/// it, every coverage from one adsorbate to a full grid is enumerated. Occupied cells are
/// labelled with `symbol`.
///
/// # Errors
///
/// Returns `AdsorbError::InvalidCount` if `count` exceeds the number of cells.
pub fn select_grid(
    shape: GridShape,
    count: Option<usize>,
    symbol: &str,
    builder: &GraphBuilder,
) -> Result<SelectionOutcome, AdsorbError> {
    let configurations = match count {
        Some(n) => enumerate_grid(shape, n)?,
        None => enumerate_grid_coverages(shape)?,
    };

    let table = SymbolTable::new([symbol]);
    let layout = shape.site_layout();
    finish(layout, builder.build(configurations), |config: &GridConfiguration| {
        table.placement(&config.to_occupancy())
    })
}

/// Selects representative occupancies of a site layout.
///
/// # Errors
///
/// Returns `AdsorbError::SymbolTableTooShort` if the layout allows species indices the table
/// has no symbol for, and `AdsorbError::EmptyEnumeration` if the layout yields no occupancy.
pub fn select_sites(
    layout: SiteLayout,
    table: &SymbolTable,
    builder: &GraphBuilder,
) -> Result<SelectionOutcome, AdsorbError> {
    table.check_layout(&layout)?;
    let occupancies: Vec<Occupancy> = Odometer::new(&layout).iter().collect();
    finish(layout, builder.build(occupancies), |occupancy| {
        table.placement(occupancy)
    })
}

/// Selects representative placements from per-slot site assignments.
///
/// `site_index` names the site of every slot, `possible_adsorbates` is the symbol table and
/// `adsorbate_index[i]` flags the species allowed at site `i` (see
/// `SiteLayout::from_site_index`). Uses a default `GraphBuilder`.
///
/// # Examples
///
/// ```
/// use adsorb::{Label, select_site_representatives};
///
/// let placements = select_site_representatives(&[0, 0], &["H"], &[vec![1]]).unwrap();
/// assert_eq!(placements.len(), 1);
/// assert_eq!(
///     placements[0].sites,
///     vec![vec![Label::Empty, Label::Adsorbate("H".to_string())]]
/// );
/// ```
pub fn select_site_representatives<S: AsRef<str>>(
    site_index: &[usize],
    possible_adsorbates: &[S],
    adsorbate_index: &[Vec<u32>],
) -> Result<Vec<Placement>, AdsorbError> {
    let layout = SiteLayout::from_site_index(site_index, adsorbate_index)?;
    let table = SymbolTable::new(possible_adsorbates.iter().map(|s| s.as_ref()));
    Ok(select_sites(layout, &table, &GraphBuilder::new())?.placements())
}

fn finish<C, F>(
    layout: SiteLayout,
    graph: ConfigurationGraph<C>,
    to_placement: F,
) -> Result<SelectionOutcome, AdsorbError>
where
    C: Configuration,
    F: Fn(&C) -> Result<Placement, AdsorbError>,
{
    if graph.vertex_count() == 0 {
        return Err(AdsorbError::EmptyEnumeration);
    }

    let selection = select_representatives(&graph);
    let representatives = selection
        .vertices
        .iter()
        .map(|&vertex| {
            Ok(Representative {
                vertex,
                degree: selection.max_degree,
                placement: to_placement(graph.vertex(vertex))?,
            })
        })
        .collect::<Result<Vec<_>, AdsorbError>>()?;

    Ok(SelectionOutcome {
        layout,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        max_degree: selection.max_degree,
        representatives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    #[test]
    fn test_select_grid_fixed_count_has_no_edges() {
        let shape = GridShape::new(2, 2).unwrap();
        let outcome = select_grid(shape, Some(2), "H", &GraphBuilder::new()).unwrap();
        assert_eq!(outcome.vertex_count, 2);
        assert_eq!(outcome.edge_count, 0);
        assert_eq!(outcome.representatives.len(), 2);
        assert_eq!(outcome.layout.points_per_site(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_select_grid_labels_cells() {
        let shape = GridShape::new(2, 2).unwrap();
        let outcome = select_grid(shape, Some(1), "O", &GraphBuilder::new()).unwrap();
        let placement = &outcome.representatives[0].placement;
        assert_eq!(placement.sites[0], vec![Label::Adsorbate("O".to_string())]);
        assert_eq!(placement.adsorbate_count(), 1);
    }

    #[test]
    fn test_select_grid_coverage_sweep_connects_neighbouring_coverages() {
        let shape = GridShape::new(2, 2).unwrap();
        let outcome = select_grid(shape, None, "H", &GraphBuilder::new()).unwrap();
        // 1: single, 2: adjacent + diagonal, 3: vacancy, 4: full.
        assert_eq!(outcome.vertex_count, 5);
        assert!(outcome.edge_count > 0);
        assert!(outcome.max_degree > 0);
    }

    #[test]
    fn test_select_sites_rejects_short_symbol_table() {
        let layout = SiteLayout::new(vec![1], vec![2]).unwrap();
        let result = select_sites(layout, &SymbolTable::new(["H"]), &GraphBuilder::new());
        assert!(matches!(
            result,
            Err(AdsorbError::SymbolTableTooShort { index: 2, available: 1 })
        ));
    }

    #[test]
    fn test_select_site_representatives_two_single_sites() {
        let placements = select_site_representatives(&[0, 1], &["H"], &[vec![1], vec![1]]).unwrap();
        assert_eq!(placements.len(), 4);
    }
}
