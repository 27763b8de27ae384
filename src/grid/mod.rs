//! Single-species generation on a rectangular grid of candidate sites.
//!
//! Placements of `n` identical adsorbates are enumerated exhaustively and reduced to one
//! representative per class of rotations, reflections and translations, detected through
//! canonical signatures of the pairwise cell geometry.

/// Constants for the half-turn angle units used by signatures.
pub mod constants;

mod enumerate;
mod shape;
mod signature;

pub use enumerate::{
    Combinations, deduplicate, enumerate_grid, enumerate_grid_coverages, raw_configurations,
};
pub use shape::{GridConfiguration, GridShape};
pub use signature::{
    CanonicalSignature, SignatureBucket, Transform, canonicalize, equivalence_transform,
    is_equivalent,
};
