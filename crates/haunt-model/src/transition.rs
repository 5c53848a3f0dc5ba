//! Uniform random-walk transition model.
//!
//! Every tick of the model the hidden agent moves to one of its walkable
//! neighbours with equal probability and never stays put. Cells with no
//! walkable neighbour are handled by an explicit [`IsolatedCellPolicy`].

use std::sync::Arc;

use haunt_core::Cell;
use haunt_space::GridTopology;
use smallvec::SmallVec;

/// What to do with a walkable cell that has no walkable neighbour.
///
/// The uniform formula `1 / k` is undefined for `k = 0`, so a policy has
/// to be picked explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IsolatedCellPolicy {
    /// The agent stays where it is with probability 1. Mass on an
    /// isolated cell is preserved by every predict step.
    #[default]
    SelfLoop,
    /// The row is left empty. Mass on an isolated cell disappears on the
    /// next predict step and the rest of the belief is renormalized.
    Drop,
}

/// Sparse row: `(to_state_index, probability)` pairs.
type Row = SmallVec<[(usize, f64); 4]>;

/// `P(next state | current state)` over a fixed [`GridTopology`].
///
/// Rows are stored by state index in the topology's canonical order, with
/// entries in the neighbour order up/right/down/left.
#[derive(Clone, Debug)]
pub struct TransitionModel {
    topology: Arc<GridTopology>,
    rows: Vec<Row>,
    policy: IsolatedCellPolicy,
}

impl TransitionModel {
    /// Build the model from `topology`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use haunt_core::Cell;
    /// use haunt_model::{IsolatedCellPolicy, TransitionModel};
    /// use haunt_space::{GridTopology, OccupancyGrid};
    ///
    /// let grid = OccupancyGrid::parse("...").unwrap();
    /// let topo = Arc::new(GridTopology::from_occupancy(&grid));
    /// let t = TransitionModel::new(topo, IsolatedCellPolicy::SelfLoop);
    /// assert_eq!(t.probability(Cell::new(1, 0), Cell::new(0, 0)), 0.5);
    /// assert_eq!(t.probability(Cell::new(0, 0), Cell::new(1, 0)), 1.0);
    /// assert_eq!(t.probability(Cell::new(1, 0), Cell::new(1, 0)), 0.0);
    /// ```
    pub fn new(topology: Arc<GridTopology>, policy: IsolatedCellPolicy) -> Self {
        let rows = (0..topology.len())
            .map(|i| {
                let neighbours = topology.neighbours_at(i);
                if neighbours.is_empty() {
                    return match policy {
                        IsolatedCellPolicy::SelfLoop => smallvec::smallvec![(i, 1.0)],
                        IsolatedCellPolicy::Drop => Row::new(),
                    };
                }
                let p = 1.0 / neighbours.len() as f64;
                neighbours
                    .iter()
                    .filter_map(|n| topology.index_of(*n))
                    .map(|j| (j, p))
                    .collect()
            })
            .collect();

        for cell in topology.isolated() {
            tracing::warn!(%cell, ?policy, "walkable cell has no walkable neighbour");
        }

        Self {
            topology,
            rows,
            policy,
        }
    }

    /// The topology this model was built from.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// The isolated-cell policy in effect.
    pub fn policy(&self) -> IsolatedCellPolicy {
        self.policy
    }

    /// Outgoing transitions of the state at `index` as
    /// `(to_state_index, probability)` pairs.
    pub fn row_at(&self, index: usize) -> &[(usize, f64)] {
        self.rows.get(index).map(|r| r.as_slice()).unwrap_or(&[])
    }

    /// Outgoing transitions of `from` as `(to, probability)` pairs.
    ///
    /// Empty for cells that are not states.
    pub fn row(&self, from: Cell) -> impl Iterator<Item = (Cell, f64)> + '_ {
        let row = self
            .topology
            .index_of(from)
            .map(|i| self.row_at(i))
            .unwrap_or(&[]);
        row.iter().filter_map(move |&(j, p)| {
            self.topology.cell_at(j).map(|c| (c, p))
        })
    }

    /// `P(to | from)`. Zero for any pair without an entry.
    pub fn probability(&self, from: Cell, to: Cell) -> f64 {
        self.row(from)
            .find(|&(c, _)| c == to)
            .map_or(0.0, |(_, p)| p)
    }

    /// Sum of the outgoing probabilities of `from`.
    pub fn row_sum(&self, from: Cell) -> f64 {
        self.row(from).map(|(_, p)| p).sum()
    }

    /// Push `prior` (indexed by state) one step forward.
    ///
    /// Returns the unnormalized `predicted[s] = Σ_p prior[p] · T[p][s]`.
    /// Contributions to each target are accumulated in canonical order of
    /// the source state.
    pub fn propagate(&self, prior: &[f64]) -> Vec<f64> {
        let mut predicted = vec![0.0; self.rows.len()];
        for (row, &mass) in self.rows.iter().zip(prior) {
            for &(j, p) in row {
                predicted[j] += mass * p;
            }
        }
        predicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haunt_space::OccupancyGrid;
    use proptest::prelude::*;

    fn model(text: &str, policy: IsolatedCellPolicy) -> TransitionModel {
        let grid = OccupancyGrid::parse(text).unwrap();
        TransitionModel::new(Arc::new(GridTopology::from_occupancy(&grid)), policy)
    }

    #[test]
    fn interior_cell_spreads_evenly_over_four() {
        let t = model("...\n...\n...", IsolatedCellPolicy::SelfLoop);
        let row: Vec<(Cell, f64)> = t.row(Cell::new(1, 1)).collect();
        assert_eq!(
            row,
            vec![
                (Cell::new(1, 2), 0.25),
                (Cell::new(2, 1), 0.25),
                (Cell::new(1, 0), 0.25),
                (Cell::new(0, 1), 0.25),
            ]
        );
    }

    #[test]
    fn no_self_transition_for_connected_cells() {
        let t = model("....\n.##.\n....", IsolatedCellPolicy::SelfLoop);
        for &c in t.topology().states() {
            assert_eq!(t.probability(c, c), 0.0, "{c} has a self transition");
        }
    }

    #[test]
    fn isolated_cell_self_loops() {
        let t = model(".#..", IsolatedCellPolicy::SelfLoop);
        assert_eq!(t.probability(Cell::new(0, 0), Cell::new(0, 0)), 1.0);
        assert_eq!(t.row_sum(Cell::new(0, 0)), 1.0);
        assert_eq!(t.policy(), IsolatedCellPolicy::SelfLoop);
    }

    #[test]
    fn isolated_cell_dropped() {
        let t = model(".#..", IsolatedCellPolicy::Drop);
        assert_eq!(t.row(Cell::new(0, 0)).count(), 0);
        assert_eq!(t.row_sum(Cell::new(0, 0)), 0.0);
    }

    #[test]
    fn non_states_have_empty_rows() {
        let t = model(".#.", IsolatedCellPolicy::SelfLoop);
        assert_eq!(t.row(Cell::new(1, 0)).count(), 0);
        assert_eq!(t.row(Cell::new(-3, 8)).count(), 0);
        assert!(t.row_at(42).is_empty());
    }

    #[test]
    fn propagate_line_of_three() {
        let t = model("...", IsolatedCellPolicy::SelfLoop);
        let third = 1.0 / 3.0;
        let next = t.propagate(&[third, third, third]);
        assert!((next[0] - 1.0 / 6.0).abs() < 1e-12);
        assert!((next[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((next[2] - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn propagate_empty_topology() {
        let t = model("###", IsolatedCellPolicy::SelfLoop);
        assert!(t.propagate(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn rows_sum_to_one(
            w in 1u32..8,
            h in 1u32..8,
            walls in proptest::collection::vec(any::<bool>(), 64),
        ) {
            let mut grid = OccupancyGrid::open(w, h).unwrap();
            for y in 0..h {
                for x in 0..w {
                    if walls[(y * 8 + x) as usize] {
                        grid.set(Cell::new(x as i32, y as i32), haunt_space::Occupancy::Wall).unwrap();
                    }
                }
            }
            let topo = Arc::new(GridTopology::from_occupancy(&grid));
            let t = TransitionModel::new(topo.clone(), IsolatedCellPolicy::SelfLoop);
            for &c in topo.states() {
                prop_assert!((t.row_sum(c) - 1.0).abs() < 1e-6, "row {} sums to {}", c, t.row_sum(c));
            }
        }
    }
}
