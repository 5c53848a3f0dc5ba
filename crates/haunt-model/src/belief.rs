//! The belief state and its two operators.
//!
//! [`Belief`] holds one probability per state of a [`GridTopology`]. It
//! starts uniform and is replaced wholesale by every successful
//! [`predict`](Belief::predict) or [`update`](Belief::update). Both
//! operators normalize by the total candidate mass and refuse to commit a
//! candidate whose mass is zero or non-finite: the previous distribution
//! is kept bit-for-bit and the returned [`MassOutcome`] says why.

use std::sync::Arc;

use haunt_core::{Cell, Evidence, MassOutcome};
use haunt_space::GridTopology;

use crate::emission::EmissionModel;
use crate::transition::TransitionModel;

/// A probability distribution over the walkable cells of a grid.
#[derive(Clone, Debug)]
pub struct Belief {
    topology: Arc<GridTopology>,
    probs: Vec<f64>,
}

impl Belief {
    /// The uniform distribution `1 / |states|`.
    ///
    /// Empty if the topology has no states.
    pub fn uniform(topology: Arc<GridTopology>) -> Self {
        let n = topology.len();
        let p = if n == 0 { 0.0 } else { 1.0 / n as f64 };
        Self {
            topology,
            probs: vec![p; n],
        }
    }

    /// Build a belief from explicit per-state values, in canonical state
    /// order.
    ///
    /// Returns `None` if the length does not match the topology or any
    /// value is negative or NaN. The values are otherwise taken as-is;
    /// call [`normalize`](Self::normalize) if they are unnormalized weights.
    pub fn from_values(topology: Arc<GridTopology>, values: Vec<f64>) -> Option<Self> {
        if values.len() != topology.len() || !values.iter().all(|v| *v >= 0.0) {
            return None;
        }
        Some(Self {
            topology,
            probs: values,
        })
    }

    /// Reset to the uniform distribution.
    pub fn reset(&mut self) {
        let n = self.probs.len();
        if n > 0 {
            self.probs.fill(1.0 / n as f64);
        }
    }

    /// The topology this belief ranges over.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// `true` if there are no states.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Probabilities in canonical state order.
    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Probability of `cell`; 0 for walls and cells outside the grid.
    pub fn probability(&self, cell: Cell) -> f64 {
        self.topology
            .index_of(cell)
            .map_or(0.0, |i| self.probs[i])
    }

    /// `(cell, probability)` pairs in canonical state order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.topology.states().iter().copied().zip(self.probs.iter().copied())
    }

    /// Total mass, summed in canonical order.
    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// The most probable state. Ties go to the first state in canonical
    /// order; `None` on an empty topology.
    pub fn most_likely(&self) -> Option<(Cell, f64)> {
        self.iter()
            .fold(None, |best: Option<(Cell, f64)>, (c, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((c, p)),
            })
    }

    /// Shannon entropy in nats. Zero-probability states contribute nothing.
    pub fn entropy(&self) -> f64 {
        self.probs
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| -p * p.ln())
            .sum()
    }

    /// Rescale to total mass 1.
    ///
    /// Normalizing an already-normalized belief leaves it unchanged up to
    /// rounding. Zero or non-finite mass leaves it untouched.
    pub fn normalize(&mut self) -> MassOutcome {
        let candidate = self.probs.clone();
        self.commit(candidate)
    }

    /// Predict step: push the belief through `transition` and renormalize.
    ///
    /// `predicted[s] = Σ_p belief[p] · T[p][s]`.
    pub fn predict(&mut self, transition: &TransitionModel) -> MassOutcome {
        let candidate = transition.propagate(&self.probs);
        self.commit(candidate)
    }

    /// Update ("correction") step: weight each state by the emission
    /// probability of `evidence` and renormalize.
    ///
    /// `new[s] = belief[s] · emission[s][evidence]`, where a missing entry
    /// (including [`Evidence::NoDetection`]) counts as 0. When nothing is
    /// detected every weight is therefore 0 and the update is a guarded
    /// no-op.
    pub fn update(&mut self, emission: &EmissionModel, evidence: Evidence) -> MassOutcome {
        let candidate = self
            .probs
            .iter()
            .enumerate()
            .map(|(i, &p)| p * emission.probability_at(i, evidence))
            .collect();
        self.commit(candidate)
    }

    fn commit(&mut self, mut candidate: Vec<f64>) -> MassOutcome {
        if candidate.is_empty() {
            return MassOutcome::Empty;
        }
        let total: f64 = candidate.iter().sum();
        if !total.is_finite() {
            return MassOutcome::NonFinite { total };
        }
        if total == 0.0 {
            return MassOutcome::ZeroMass;
        }
        for p in &mut candidate {
            *p /= total;
        }
        self.probs = candidate;
        MassOutcome::Applied
    }
}
