//! Haunt: track a hidden agent on a grid from a short-sighted observer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Haunt sub-crates. For most users, adding `haunt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use haunt::prelude::*;
//!
//! let map = "#######\n#P....#\n#.##..#\n#....G#\n#######";
//! let grid = OccupancyGrid::parse(map).unwrap();
//! let config = TrackerConfig::default().with_observation_range(2);
//! let mut tracker = Tracker::new(&grid, config).unwrap();
//!
//! let observer = grid.observer_start().unwrap();
//! let ghost = grid.agent_start().unwrap();
//!
//! // Out of range: the belief stays uniform.
//! let report = tracker.step(0.1, &observer, &ghost).unwrap();
//! assert_eq!(report.evidence, Evidence::NoDetection);
//! assert_eq!(report.update, MassOutcome::ZeroMass);
//!
//! // In range: the ghost's cell becomes the best guess.
//! let report = tracker.step(0.1, &Cell::new(4, 3), &ghost).unwrap();
//! assert!(report.evidence.is_detection());
//! assert_eq!(tracker.belief().most_likely().map(|(c, _)| c), Some(ghost));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `haunt-core` | `Cell`, `TickId`, evidence, `PositionSource` |
//! | [`space`] | `haunt-space` | Occupancy grids and walkable topology |
//! | [`model`] | `haunt-model` | Transition, observation, emission, belief |
//! | [`engine`] | `haunt-engine` | The tracker, its config, feed and metrics |
//! | [`sim`] | `haunt-sim` | Playfield generator, ghost, scripted observer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`haunt-core`).
pub use haunt_core as types;

/// Occupancy grids and walkable topology (`haunt-space`).
pub use haunt_space as space;

/// The hidden Markov model pieces (`haunt-model`).
///
/// Use these directly to run the filter operators by hand instead of
/// through [`engine::Tracker`].
pub use haunt_model as model;

/// The tick-driven tracker (`haunt-engine`).
pub use haunt_engine as engine;

/// Reference collaborators for driving a tracker (`haunt-sim`).
pub use haunt_sim as sim;

/// Common imports for typical Haunt usage.
///
/// ```rust
/// use haunt::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use haunt_core::{Cell, Evidence, MassOutcome, PositionSource, TickId};

    // Space
    pub use haunt_space::{GridError, GridTopology, Occupancy, OccupancyGrid};

    // Model
    pub use haunt_model::{Belief, IsolatedCellPolicy};

    // Engine
    pub use haunt_engine::{
        BoundTracker, ConfigError, HeatBand, SmoothedBelief, StepError, StepMetrics, StepReport,
        Tracker, TrackerConfig,
    };
}
