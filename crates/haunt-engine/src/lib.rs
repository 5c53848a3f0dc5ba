//! Tick-driven belief tracker for a hidden agent on a grid.
//!
//! Provides the top-level [`Tracker`] that owns the hidden Markov model
//! pieces from `haunt-model`, runs one filter step per tick, and exposes
//! the resulting belief, a smoothed copy for rendering, and per-step
//! metrics. [`BoundTracker`] pairs a tracker with the two position
//! sources it follows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bound;
pub mod cadence;
pub mod config;
pub mod feed;
pub mod metrics;
pub mod tracker;

pub use bound::BoundTracker;
pub use cadence::PredictCadence;
pub use config::{ConfigError, TrackerConfig};
pub use feed::{HeatBand, HeatCell, SmoothedBelief};
pub use metrics::StepMetrics;
pub use tracker::{StepError, StepReport, Tracker};
