//! This module defines the core types shared by both generation modes of the adsorb library.
//!
//! It includes the `Configuration` trait that abstracts the "one adsorbate event" distance used
//! to connect configurations in the graph, the `Label` and `Placement` types that describe a
//! configuration symbolically for downstream structure building, and the `Representative`
//! struct returned by the selection pipeline.

use crate::error::AdsorbError;
use std::collections::BTreeMap;
use std::fmt;

/// A trait for configurations that can be compared slot by slot.
///
/// The configuration graph connects two configurations whose distance is exactly one, so any
/// enumerated configuration type only has to say how many slot-level changes separate it from
/// another configuration of the same layout.
pub trait Configuration {
    /// Returns the number of slot-level adsorbate changes separating `self` from `other`.
    ///
    /// Implementations must be symmetric and return zero for identical configurations.
    fn distance(&self, other: &Self) -> usize;
}

/// The symbolic content of one slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// The slot holds no adsorbate.
    Empty,
    /// The slot holds the adsorbate with the given symbol.
    Adsorbate(String),
}

impl Label {
    /// Returns the adsorbate symbol, or `None` for an empty slot.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Label::Empty => None,
            Label::Adsorbate(symbol) => Some(symbol),
        }
    }

    /// Returns `true` for an empty slot.
    pub fn is_empty(&self) -> bool {
        matches!(self, Label::Empty)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Empty => f.write_str("0"),
            Label::Adsorbate(symbol) => f.write_str(symbol),
        }
    }
}

/// A configuration expressed symbolically, one slot-label vector per site.
///
/// This is the hand-off format for structure-building code: for every site, the labels of its
/// slots in slot order. Slot order carries no physical meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Per-site slot labels.
    pub sites: Vec<Vec<Label>>,
}

/// An adsorbate atom positioned at the coordinate of the site it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedAdsorbate {
    /// The index of the site the adsorbate occupies.
    pub site: usize,
    /// The adsorbate symbol.
    pub symbol: String,
    /// The Cartesian position of the site.
    pub position: [f64; 3],
}

impl Placement {
    /// Counts every label in the placement, empty slots included.
    pub fn label_counts(&self) -> BTreeMap<Label, usize> {
        let mut counts = BTreeMap::new();
        for label in self.sites.iter().flatten() {
            *counts.entry(label.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the number of occupied slots.
    pub fn adsorbate_count(&self) -> usize {
        self.sites
            .iter()
            .flatten()
            .filter(|label| !label.is_empty())
            .count()
    }

    /// Positions every adsorbate of the placement at the coordinate of its site.
    ///
    /// One atom is produced per occupied slot, so a site holding two adsorbates yields two
    /// atoms at the same coordinate. Sites are visited in order, slots in slot order.
    ///
    /// # Errors
    ///
    /// Returns `AdsorbError::InvalidSiteSpec` if the number of coordinates differs from the
    /// number of sites.
    pub fn adsorbates_at(
        &self,
        coordinates: &[[f64; 3]],
    ) -> Result<Vec<PlacedAdsorbate>, AdsorbError> {
        if coordinates.len() != self.sites.len() {
            return Err(AdsorbError::InvalidSiteSpec(format!(
                "{} site coordinates given for {} sites",
                coordinates.len(),
                self.sites.len()
            )));
        }

        Ok(self
            .sites
            .iter()
            .zip(coordinates)
            .enumerate()
            .flat_map(|(site, (labels, &position))| {
                labels.iter().filter_map(move |label| {
                    label.symbol().map(|symbol| PlacedAdsorbate {
                        site,
                        symbol: symbol.to_string(),
                        position,
                    })
                })
            })
            .collect())
    }
}

/// A configuration chosen by the representative selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representative {
    /// The position of the configuration in enumeration order.
    pub vertex: usize,
    /// The degree of the configuration in the configuration graph.
    pub degree: usize,
    /// The symbolic form of the configuration.
    pub placement: Placement,
}
