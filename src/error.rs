use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `adsorb` library.
///
/// Every variant is raised at the entry of the component that detects it; nothing is
/// recovered internally and no partial result accompanies an error. It implements
/// `std::error::Error`, allowing it to be composed with other error types in application code.
#[derive(Error, Debug)]
pub enum AdsorbError {
    /// A grid dimension was zero. Both `rows` and `cols` must be at least one.
    #[error("Invalid grid shape {rows}x{cols}: both dimensions must be at least 1")]
    InvalidShape {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
    },

    /// The requested number of adsorbates does not fit on the grid.
    #[error("Cannot place {count} adsorbates on a grid with {cells} cells")]
    InvalidCount {
        /// The number of adsorbates requested.
        count: usize,
        /// The total number of cells available on the grid.
        cells: usize,
    },

    /// A cell index does not address a cell of the grid.
    #[error("Cell index {index} is outside a grid with {cells} cells")]
    CellOutOfRange {
        /// The offending flat cell index.
        index: usize,
        /// The total number of cells on the grid.
        cells: usize,
    },

    /// The same cell was listed more than once in a placement.
    #[error("Cell {index} is occupied more than once")]
    DuplicateCell {
        /// The repeated flat cell index.
        index: usize,
    },

    /// The site description is inconsistent, for example `points_per_site` and
    /// `adsorbate_per_site` have different lengths, or an occupancy does not match
    /// the layout it is used with.
    #[error("Invalid site specification: {0}")]
    InvalidSiteSpec(String),

    /// A species index used by the layout has no entry in the caller's symbol table.
    ///
    /// Species indices are 1-based, so index `k` requires at least `k` symbols.
    #[error("Species index {index} exceeds the symbol table ({available} symbols available)")]
    SymbolTableTooShort {
        /// The largest species index that needs a symbol.
        index: u32,
        /// The number of symbols the caller supplied.
        available: usize,
    },

    /// The enumeration produced no configurations at all.
    #[error("Enumeration produced no configurations")]
    EmptyEnumeration,

    /// An I/O error that occurred while attempting to read a job file.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The job file is not valid TOML or does not match the expected job layout.
    #[error("Failed to deserialize TOML job: {0}")]
    DeserializationError(#[from] toml::de::Error),
}
