//! Per-tick emission tables.
//!
//! The emission model answers "if the hidden agent were at state `s`, how
//! likely is it that the observer reports cell `o`?" for every state `s`
//! and every currently visible cell `o`. It is rebuilt wholesale each tick
//! because the visible set moves with the observer.
//!
//! The rule is gated on ground truth:
//!
//! - If the agent is currently detectable and `s` is its true cell, the row
//!   for `s` is certain: `1` at the agent's cell and `0` at every other
//!   visible cell.
//! - Every other row is uniform, `1 / |visible|` for each visible cell.
//!
//! This is not a coherent `P(observation | state)`. It mixes the agent's
//! true position with a sensor that cannot tell cells apart, and yields a
//! sharp spike on the agent's cell whenever it is seen.

use haunt_core::{Cell, Evidence};
use haunt_space::GridTopology;
use indexmap::IndexSet;

use crate::observation::ObservationModel;

/// Dense `states × visible` emission table for the current tick.
///
/// Row `i` belongs to the state at index `i` of the topology; column `j`
/// to the `j`-th visible cell. Cells outside the visible set, and the
/// [`Evidence::NoDetection`] sentinel, have probability 0 in every row.
#[derive(Clone, Debug, Default)]
pub struct EmissionModel {
    observations: IndexSet<Cell>,
    states: usize,
    table: Vec<f64>,
    agent_visible: bool,
}

impl EmissionModel {
    /// An empty model. Every lookup returns 0 until the first rebuild.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild every row for the current view and agent position.
    ///
    /// `observation` must already have been recomputed for this tick. The
    /// table allocation is reused across ticks.
    pub fn rebuild(&mut self, topology: &GridTopology, observation: &ObservationModel, agent: Cell) {
        self.observations.clear();
        self.observations
            .extend(observation.visible_cells().iter().copied());
        self.states = topology.len();
        self.agent_visible = observation.detect(agent).is_detection();

        let m = self.observations.len();
        self.table.clear();
        self.table.reserve(self.states * m);
        if m == 0 {
            return;
        }
        let uniform = 1.0 / m as f64;

        for &state in topology.states() {
            if self.agent_visible && state == agent {
                self.table
                    .extend(self.observations.iter().map(|&o| if o == agent { 1.0 } else { 0.0 }));
            } else {
                self.table.extend(std::iter::repeat_n(uniform, m));
            }
        }
    }

    /// The visible cells the current table is keyed on.
    pub fn observations(&self) -> &IndexSet<Cell> {
        &self.observations
    }

    /// Whether the agent was detectable when the table was built.
    pub fn agent_visible(&self) -> bool {
        self.agent_visible
    }

    /// Number of rows (one per state).
    pub fn state_count(&self) -> usize {
        self.states
    }

    /// `P(evidence | state at index)`; 0 for missing entries.
    pub fn probability_at(&self, state_index: usize, evidence: Evidence) -> f64 {
        let Evidence::Seen(cell) = evidence else {
            return 0.0;
        };
        let m = self.observations.len();
        match self.observations.get_index_of(&cell) {
            Some(j) if state_index < self.states => self.table[state_index * m + j],
            _ => 0.0,
        }
    }

    /// `P(observed | state)` looked up by cell; 0 for missing entries.
    pub fn probability(&self, topology: &GridTopology, state: Cell, observed: Cell) -> f64 {
        topology
            .index_of(state)
            .map_or(0.0, |i| self.probability_at(i, Evidence::Seen(observed)))
    }

    /// The row of the state at `index` as `(visible cell, probability)`.
    pub fn row_at(&self, state_index: usize) -> impl Iterator<Item = (Cell, f64)> + '_ {
        let m = self.observations.len();
        let row: &[f64] = if state_index < self.states && m > 0 {
            &self.table[state_index * m..(state_index + 1) * m]
        } else {
            &[]
        };
        self.observations.iter().copied().zip(row.iter().copied())
    }
}
