//! Core types and traits for the Haunt belief tracker.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid coordinate type, the evidence and step-outcome vocabulary
//! shared by the model and engine crates, and the [`PositionSource`]
//! seam through which a host reports where its agents are.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod outcome;
pub mod traits;

pub use id::{Cell, Neighbours, TickId};
pub use outcome::{Evidence, MassOutcome};
pub use traits::PositionSource;
