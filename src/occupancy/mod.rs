//! Multi-species generation over sites with fixed per-site capacities.
//!
//! A `SiteLayout` fixes how many slots each site has and which species indices may fill them,
//! an `Occupancy` assigns a species index (or `0`, empty) to every slot, and the `Odometer`
//! steps through every occupancy of a layout in a fixed, reproducible order.

mod layout;
mod odometer;
mod state;

pub use layout::{SiteLayout, SiteSpec};
pub use odometer::{OccupancyIter, Odometer};
pub use state::Occupancy;
