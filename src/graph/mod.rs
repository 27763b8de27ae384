//! This module contains the configuration graph and the representative selector.
//!
//! Both generation modes feed their configurations into the same `GraphBuilder`, and the
//! vertices of maximum degree are handed on as the representative set.

mod builder;
mod options;
mod selector;

pub use builder::{ConfigurationGraph, EDGE_DISTANCE, GraphBuilder};
pub use options::GraphOptions;
pub use selector::{Selection, select_representatives};
