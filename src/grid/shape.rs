//! Grid geometry: the rectangular lattice of candidate sites and the placements on it.

use crate::error::AdsorbError;
use crate::occupancy::{Occupancy, SiteLayout};
use crate::types::Configuration;

/// The dimensions of a rectangular grid of candidate adsorption sites.
///
/// Cells are addressed in row-major order: the cell at `(row, col)` has flat index
/// `row * cols + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    /// Creates a grid shape, rejecting zero-sized dimensions.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::InvalidShape` if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, AdsorbError> {
        if rows == 0 || cols == 0 {
            return Err(AdsorbError::InvalidShape { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn flat(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the grid has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the `(row, col)` coordinate of a flat cell index.
    pub fn coordinate(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Returns the flat cell index of a `(row, col)` coordinate.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// The site layout that treats every cell as a site with one slot and one species.
    pub fn site_layout(&self) -> SiteLayout {
        let flat = self.flat();
        SiteLayout::from_parts_unchecked(vec![1; flat], vec![1; flat])
    }
}

/// A placement of identical adsorbates on a grid, one occupied/empty flag per cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridConfiguration {
    shape: GridShape,
    cells: Vec<bool>,
}

impl GridConfiguration {
    /// Builds a configuration with the given flat cell indices occupied.
    ///
    /// The indices may be given in any order, but each cell at most once.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::CellOutOfRange` if an index does not address a cell of the grid,
    /// and `AdsorbError::DuplicateCell` if an index is repeated.
    pub fn from_occupied(shape: GridShape, occupied: &[usize]) -> Result<Self, AdsorbError> {
        let flat = shape.flat();
        let mut cells = vec![false; flat];
        for &index in occupied {
            let Some(cell) = cells.get_mut(index) else {
                return Err(AdsorbError::CellOutOfRange { index, cells: flat });
            };
            if *cell {
                return Err(AdsorbError::DuplicateCell { index });
            }
            *cell = true;
        }
        Ok(Self { shape, cells })
    }

    pub(crate) fn from_cells(shape: GridShape, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), shape.flat());
        Self { shape, cells }
    }

    /// Returns the grid the configuration lives on.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// One flag per cell in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Returns `true` if the cell at `(row, col)` holds an adsorbate.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[self.shape.index(row, col)]
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// The `(row, col)` coordinates of the occupied cells in row-major order.
    pub fn occupied_coordinates(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(|(index, _)| self.shape.coordinate(index))
            .collect()
    }

    /// Converts the configuration into an occupancy over `GridShape::site_layout`.
    pub fn to_occupancy(&self) -> Occupancy {
        Occupancy::from_slots(
            self.cells
                .iter()
                .map(|&occupied| vec![u32::from(occupied)])
                .collect(),
        )
    }

    /// Renders the grid as rows of `1` (occupied) and `0` (empty).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.shape.cols())
            .map(|row| row.iter().map(|&occupied| u8::from(occupied)).collect())
            .collect()
    }
}

impl Configuration for GridConfiguration {
    fn distance(&self, other: &Self) -> usize {
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count()
    }
}
