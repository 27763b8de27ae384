//! This module provides adsorbate job descriptions and utilities for loading them from TOML files.
//!
//! A job names one of the two generation modes together with its inputs, plus optional site
//! coordinates used when the selected placements are turned into positioned adsorbates. The
//! `mode` key selects the variant:
//!
//! ```toml
//! mode = "sites"
//! site_index = [0, 0, 1]
//! possible_adsorbates = ["H", "O"]
//! adsorbate_index = [[1, 1], [1, 0]]
//! ```

use crate::error::AdsorbError;
use crate::graph::GraphBuilder;
use crate::grid::GridShape;
use crate::labels::SymbolTable;
use crate::occupancy::SiteLayout;
use crate::pipeline::{SelectionOutcome, select_grid, select_sites};
use serde::Deserialize;
use std::path::Path;

/// A grid-mode job: identical adsorbates on a `rows x cols` grid.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GridJob {
    pub rows: usize,
    pub cols: usize,
    /// The number of adsorbates to place. Absent means every coverage from one adsorbate up to
    /// a full grid.
    #[serde(default)]
    pub count: Option<usize>,
    /// The adsorbate symbol placed on occupied cells.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// One Cartesian position per cell, row-major.
    #[serde(default)]
    pub vacancies: Option<Vec<[f64; 3]>>,
}

/// A site-mode job: several species over sites with fixed capacities.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SitesJob {
    /// The site of every slot.
    pub site_index: Vec<usize>,
    /// Adsorbate symbols; species index `k` is `possible_adsorbates[k - 1]`.
    pub possible_adsorbates: Vec<String>,
    /// Per-site species flags; the species bound of a site is the sum of its flags.
    pub adsorbate_index: Vec<Vec<u32>>,
    /// One Cartesian position per site.
    #[serde(default)]
    pub vacancies: Option<Vec<[f64; 3]>>,
}

/// An adsorbate enumeration job.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AdsorbateJob {
    Grid(GridJob),
    Sites(SitesJob),
}

fn default_symbol() -> String {
    "H".to_string()
}

impl AdsorbateJob {
    /// Loads a job from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::IoError` if the file cannot be read, or
    /// `AdsorbError::DeserializationError` if its content is not a valid job.
    pub fn load_from_file(path: &Path) -> Result<Self, AdsorbError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| AdsorbError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses a job from a TOML string.
    ///
    /// # Examples
    ///
    /// ```
    /// use adsorb::AdsorbateJob;
    ///
    /// let job = AdsorbateJob::load_from_str(r#"
    /// mode = "grid"
    /// rows = 2
    /// cols = 2
    /// count = 2
    /// "#).unwrap();
    /// assert!(matches!(job, AdsorbateJob::Grid(_)));
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, AdsorbError> {
        toml::from_str(toml_str).map_err(AdsorbError::from)
    }

    /// Site coordinates supplied with the job, if any.
    pub fn vacancies(&self) -> Option<&[[f64; 3]]> {
        match self {
            AdsorbateJob::Grid(job) => job.vacancies.as_deref(),
            AdsorbateJob::Sites(job) => job.vacancies.as_deref(),
        }
    }

    /// A one-line human-readable summary of the job.
    pub fn describe(&self) -> String {
        match self {
            AdsorbateJob::Grid(job) => match job.count {
                Some(count) => format!(
                    "{} x {} grid, {} {} adsorbate(s)",
                    job.rows, job.cols, count, job.symbol
                ),
                None => format!(
                    "{} x {} grid, all {} coverages",
                    job.rows, job.cols, job.symbol
                ),
            },
            AdsorbateJob::Sites(job) => format!(
                "{} slot(s) on {} site(s), species [{}]",
                job.site_index.len(),
                job.adsorbate_index.len(),
                job.possible_adsorbates.join(", ")
            ),
        }
    }

    /// Runs the full enumeration and selection pipeline for this job.
    ///
    /// # Errors
    ///
    /// Propagates validation errors of the job's inputs.
    pub fn run(&self, builder: &GraphBuilder) -> Result<SelectionOutcome, AdsorbError> {
        match self {
            AdsorbateJob::Grid(job) => {
                let shape = GridShape::new(job.rows, job.cols)?;
                select_grid(shape, job.count, &job.symbol, builder)
            }
            AdsorbateJob::Sites(job) => {
                let layout = SiteLayout::from_site_index(&job.site_index, &job.adsorbate_index)?;
                let table = SymbolTable::new(job.possible_adsorbates.iter().cloned());
                select_sites(layout, &table, builder)
            }
        }
    }
}
