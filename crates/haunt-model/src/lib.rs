//! The hidden Markov model behind the Haunt belief tracker.
//!
//! Hidden states are the walkable cells of a [`GridTopology`]. The model
//! is split into four pieces, leaves first:
//!
//! - [`TransitionModel`]: where the hidden agent can move next, built once.
//! - [`ObservationModel`]: which cells the observer can currently see,
//!   recomputed every tick.
//! - [`EmissionModel`]: P(observed cell | hidden state) over the current
//!   visible cells, rebuilt every tick.
//! - [`Belief`]: the distribution over states, advanced by
//!   [`Belief::predict`] and [`Belief::update`].
//!
//! # Pipeline order (each tick)
//!
//! 1. [`ObservationModel::recompute`] from the observer's position
//! 2. [`EmissionModel::rebuild`] from the visible cells and the agent's position
//! 3. [`Belief::update`] with the tick's [`Evidence`](haunt_core::Evidence)
//! 4. [`Belief::predict`] whenever the predict cadence fires
//!
//! [`GridTopology`]: haunt_space::GridTopology

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod belief;
pub mod emission;
pub mod observation;
pub mod transition;

pub use belief::Belief;
pub use emission::EmissionModel;
pub use observation::ObservationModel;
pub use transition::{IsolatedCellPolicy, TransitionModel};
