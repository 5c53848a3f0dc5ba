//! Spatial data structures for the Haunt belief tracker.
//!
//! An [`OccupancyGrid`] is the static maze handed over by the host: every
//! cell is a wall, free floor, or one of the two agent start markers.
//! [`GridTopology`] is derived from it once and is the only spatial value
//! the models see: the ordered set of walkable states plus their
//! 4-connected adjacency.
//!
//! Topologies are immutable after construction and are shared between the
//! transition and observation models by `Arc`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod occupancy;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use occupancy::{Occupancy, OccupancyGrid};
pub use topology::GridTopology;
