//! This module translates species indices into adsorbate symbols.
//!
//! Occupancies carry bare species indices. The caller's `SymbolTable` turns them into the
//! `Label`s of a `Placement`, with index `0` always standing for an empty slot.

use crate::error::AdsorbError;
use crate::occupancy::{Occupancy, SiteLayout};
use crate::types::{Label, Placement};

/// The caller's table of adsorbate symbols.
///
/// Species index `k > 0` maps to the symbol at position `k - 1`; index `0` is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<String>,
}

impl SymbolTable {
    /// Creates a table from adsorbate symbols ordered by species index, starting at species `1`.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the symbols ordered by species index.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the number of symbols, which is also the largest species index the table can label.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the table has no symbols, so it can only label empty slots.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the label for a species index.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::SymbolTableTooShort` if the index has no symbol.
    pub fn label(&self, index: u32) -> Result<Label, AdsorbError> {
        if index == 0 {
            return Ok(Label::Empty);
        }
        self.symbols
            .get(index as usize - 1)
            .map(|symbol| Label::Adsorbate(symbol.clone()))
            .ok_or(AdsorbError::SymbolTableTooShort {
                index,
                available: self.symbols.len(),
            })
    }

    /// Ensures every species index the layout can produce has a symbol.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::SymbolTableTooShort` naming the layout's largest species index.
    pub fn check_layout(&self, layout: &SiteLayout) -> Result<(), AdsorbError> {
        let index = layout.max_species_index();
        if index as usize > self.symbols.len() {
            return Err(AdsorbError::SymbolTableTooShort {
                index,
                available: self.symbols.len(),
            });
        }
        Ok(())
    }

    /// Converts an occupancy into per-site symbolic labels.
    pub fn placement(&self, occupancy: &Occupancy) -> Result<Placement, AdsorbError> {
        let sites = occupancy
            .sites()
            .iter()
            .map(|slots| slots.iter().map(|&index| self.label(index)).collect())
            .collect::<Result<Vec<Vec<Label>>, AdsorbError>>()?;
        Ok(Placement { sites })
    }
}
