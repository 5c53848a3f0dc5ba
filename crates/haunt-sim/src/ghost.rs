//! A ghost that wanders the walkable cells at random.

use std::sync::Arc;

use haunt_core::{Cell, PositionSource};
use haunt_space::GridTopology;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random walk between adjacent walkable cells at constant speed.
///
/// The ghost always heads for one neighbouring waypoint, picked uniformly
/// among the walkable 4-neighbours of the cell it last reached. Its
/// reported [`position`](PositionSource::position) only changes when it
/// arrives, so a tracker sees it hop from cell to cell.
#[derive(Clone, Debug)]
pub struct RandomWalker {
    topology: Arc<GridTopology>,
    rng: ChaCha8Rng,
    speed: f64,
    cell: Cell,
    target: Option<Cell>,
    progress: f64,
}

impl RandomWalker {
    /// Start at `start`, moving `speed` cells per second.
    pub fn new(topology: Arc<GridTopology>, start: Cell, speed: f64, seed: u64) -> Self {
        let mut walker = Self {
            topology,
            rng: ChaCha8Rng::seed_from_u64(seed),
            speed,
            cell: start,
            target: None,
            progress: 0.0,
        };
        walker.target = walker.pick_next();
        walker
    }

    /// Move for `dt` seconds.
    ///
    /// Returns the last waypoint reached during the interval, if any. A
    /// ghost with no walkable neighbour stays where it is.
    pub fn advance(&mut self, dt: f64) -> Option<Cell> {
        let mut travel = self.speed * dt;
        if !travel.is_finite() {
            return None;
        }
        let mut reached = None;
        while travel > 0.0 {
            let Some(target) = self.target else {
                break;
            };
            let remaining = 1.0 - self.progress;
            if travel < remaining {
                self.progress += travel;
                break;
            }
            travel -= remaining;
            self.cell = target;
            self.progress = 0.0;
            reached = Some(target);
            self.target = self.pick_next();
        }
        reached
    }

    /// The waypoint currently headed for.
    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    /// Fraction of the way from the current cell to the target.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Cells per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    fn pick_next(&mut self) -> Option<Cell> {
        let options = self.topology.neighbours(self.cell);
        if options.is_empty() {
            tracing::warn!(cell = %self.cell, "ghost has no waypoint to move to");
            return None;
        }
        Some(options[self.rng.random_range(0..options.len())])
    }
}

impl PositionSource for RandomWalker {
    fn position(&self) -> Cell {
        self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haunt_space::OccupancyGrid;

    fn topo(text: &str) -> Arc<GridTopology> {
        Arc::new(GridTopology::from_occupancy(&OccupancyGrid::parse(text).unwrap()))
    }

    #[test]
    fn position_changes_only_on_arrival() {
        let t = topo(".....");
        let mut g = RandomWalker::new(t, Cell::new(2, 0), 2.0, 3);
        assert_eq!(g.advance(0.25), None);
        assert_eq!(g.position(), Cell::new(2, 0));
        assert_eq!(g.progress(), 0.5);

        let next = g.advance(0.25);
        assert!(matches!(next, Some(c) if c == Cell::new(1, 0) || c == Cell::new(3, 0)));
        assert_eq!(Some(g.position()), next);
    }

    #[test]
    fn every_hop_is_to_a_neighbour() {
        let t = topo("....\n.#..\n....");
        let mut g = RandomWalker::new(t.clone(), Cell::new(0, 0), 1.0, 11);
        let mut prev = g.position();
        for _ in 0..200 {
            if let Some(c) = g.advance(1.0) {
                assert!(t.neighbours(prev).contains(&c), "{prev} -> {c}");
                prev = c;
            }
        }
    }

    #[test]
    fn isolated_ghost_stays_put() {
        let t = topo(".#.");
        let mut g = RandomWalker::new(t, Cell::new(0, 0), 5.0, 0);
        assert_eq!(g.target(), None);
        assert_eq!(g.advance(10.0), None);
        assert_eq!(g.position(), Cell::new(0, 0));
    }

    #[test]
    fn non_finite_dt_is_ignored() {
        let t = topo("...");
        let mut g = RandomWalker::new(t, Cell::new(1, 0), 1.0, 0);
        assert_eq!(g.advance(f64::INFINITY), None);
        assert_eq!(g.advance(f64::NAN), None);
        assert_eq!(g.progress(), 0.0);
    }

    #[test]
    fn same_seed_same_walk() {
        let t = topo(".....\n.....\n.....");
        let walk = |seed| {
            let mut g = RandomWalker::new(t.clone(), Cell::new(2, 1), 3.0, seed);
            (0..50).filter_map(|_| g.advance(0.2)).collect::<Vec<_>>()
        };
        assert_eq!(walk(9), walk(9));
    }
}
