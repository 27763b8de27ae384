//! Enumeration and reduction of adsorbate configurations on surface sites.
//!
//! Two generators feed one selection stage:
//!
//! - **Grid mode** places `n` identical adsorbates on a rectangular grid and keeps one placement
//!   per class of rotations, reflections and translations ([`enumerate_grid`]).
//! - **Site mode** assigns species to the slots of sites with fixed capacities, stepping through
//!   every multiset-distinct occupancy with an [`Odometer`].
//!
//! The configurations are connected into a [`ConfigurationGraph`] wherever they are one
//! adsorbate event apart, and the configurations of maximum degree are returned as symbolic
//! [`Placement`]s for structure building.

pub mod error;
pub mod graph;
pub mod grid;
pub mod job;
pub mod labels;
pub mod occupancy;
pub mod pipeline;
pub mod types;

pub use error::AdsorbError;
pub use graph::{ConfigurationGraph, GraphBuilder, GraphOptions, Selection, select_representatives};
pub use grid::{
    CanonicalSignature, GridConfiguration, GridShape, Transform, canonicalize, enumerate_grid,
    enumerate_grid_coverages, is_equivalent,
};
pub use job::{AdsorbateJob, GridJob, SitesJob};
pub use labels::SymbolTable;
pub use occupancy::{Occupancy, OccupancyIter, Odometer, SiteLayout, SiteSpec};
pub use pipeline::{SelectionOutcome, select_grid, select_site_representatives, select_sites};
pub use types::{Configuration, Label, PlacedAdsorbate, Placement, Representative};
