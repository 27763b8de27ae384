//! Exhaustive generation of identical-adsorbate placements on a grid.
//!
//! Placements are produced from the `n`-combinations of flat cell indices in ascending
//! lexicographic order and reduced to one member per symmetry class. The first generated member
//! of each class is the one that is kept, so generation order is part of the observable result.

use super::shape::{GridConfiguration, GridShape};
use super::signature::{CanonicalSignature, canonicalize};
use crate::error::AdsorbError;
use std::collections::HashMap;

/// Iterator over the `k`-combinations of `0..n` in ascending lexicographic order.
///
/// Each item is a strictly increasing index vector. `k == 0` yields a single empty combination
/// and `k > n` yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

impl Combinations {
    /// Creates an iterator over the `k`-combinations of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            first: true,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };
        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Generates every placement of exactly `n` adsorbates on the grid, without deduplication.
///
/// # Errors
///
/// Returns `AdsorbError::InvalidCount` if `n` exceeds the number of cells.
pub fn raw_configurations(
    shape: GridShape,
    n: usize,
) -> Result<Vec<GridConfiguration>, AdsorbError> {
    let flat = shape.flat();
    validate_count(shape, n)?;

    Ok(Combinations::new(flat, n)
        .map(|positions| {
            let mut cells = vec![false; flat];
            for index in positions {
                cells[index] = true;
            }
            GridConfiguration::from_cells(shape, cells)
        })
        .collect())
}

/// Generates one placement of `n` identical adsorbates per symmetry class.
///
/// Counts of `0`, `1`, `flat - 1` and `flat` are answered by a fixed shortcut without any
/// enumeration: all cells empty, all cells occupied, only the first cell occupied, or every
/// cell except the first occupied. The shortcut always yields exactly one placement. For
/// `flat - 1` that is a single vacancy at cell 0 even on grids where vacancies at other cells
/// (an edge or the centre) are not congruent to it. Every other count runs the full
/// combination enumeration followed by symmetry deduplication.
///
/// # Errors
///
/// Returns `AdsorbError::InvalidCount` if `n` exceeds the number of cells.
///
/// # Examples
///
/// ```
/// use adsorb::{GridShape, enumerate_grid};
///
/// let shape = GridShape::new(2, 2).unwrap();
/// // Adjacent pair and diagonal pair.
/// assert_eq!(enumerate_grid(shape, 2).unwrap().len(), 2);
/// ```
pub fn enumerate_grid(shape: GridShape, n: usize) -> Result<Vec<GridConfiguration>, AdsorbError> {
    validate_count(shape, n)?;
    let flat = shape.flat();

    let trivial = if n == 0 {
        Some(vec![false; flat])
    } else if n == flat {
        Some(vec![true; flat])
    } else if n == 1 {
        let mut cells = vec![false; flat];
        cells[0] = true;
        Some(cells)
    } else if n == flat - 1 {
        let mut cells = vec![true; flat];
        cells[0] = false;
        Some(cells)
    } else {
        None
    };

    if let Some(cells) = trivial {
        return Ok(vec![GridConfiguration::from_cells(shape, cells)]);
    }

    Ok(deduplicate(raw_configurations(shape, n)?))
}

/// Generates the deduplicated placements for every coverage from one adsorbate up to a fully
/// covered grid, in ascending coverage order.
///
/// The clean surface is not part of the sweep.
pub fn enumerate_grid_coverages(shape: GridShape) -> Result<Vec<GridConfiguration>, AdsorbError> {
    let mut configurations = Vec::new();
    for n in 1..=shape.flat() {
        configurations.extend(enumerate_grid(shape, n)?);
    }
    Ok(configurations)
}

/// Keeps the first configuration of every symmetry class, preserving input order.
///
/// Kept signatures are grouped by their length profile, and each incoming signature is
/// transformed once into its eight images, which are then matched against the kept signatures
/// of the same profile only.
pub fn deduplicate(configurations: Vec<GridConfiguration>) -> Vec<GridConfiguration> {
    let mut kept_by_profile: HashMap<Vec<(u64, usize)>, Vec<CanonicalSignature>> = HashMap::new();
    let mut kept = Vec::new();

    for config in configurations {
        let signature = canonicalize(&config);
        let class = kept_by_profile.entry(signature.length_profile()).or_default();
        if !class.is_empty() {
            let images = signature.images();
            if class
                .iter()
                .any(|existing| images.iter().any(|image| existing.matches(image)))
            {
                continue;
            }
        }
        class.push(signature);
        kept.push(config);
    }
    kept
}

fn validate_count(shape: GridShape, n: usize) -> Result<(), AdsorbError> {
    let flat = shape.flat();
    if n > flat {
        return Err(AdsorbError::InvalidCount {
            count: n,
            cells: flat,
        });
    }
    Ok(())
}
