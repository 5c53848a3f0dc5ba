//! Reference collaborators for the Haunt belief tracker.
//!
//! The tracker only consumes positions. This crate supplies a host to
//! drive it with: a seeded playfield generator, a ghost that wanders at
//! random, an observer that follows a script, and a handful of fixture
//! grids used across the workspace's tests and benchmarks.
//!
//! Every source of randomness is a [`ChaCha8Rng`](rand_chacha::ChaCha8Rng)
//! seeded explicitly, so a seed fully determines a run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;
pub mod ghost;
pub mod observer;
pub mod playfield;

pub use ghost::RandomWalker;
pub use observer::{Direction, ScriptedObserver};
pub use playfield::PlayfieldConfig;
