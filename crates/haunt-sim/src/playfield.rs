//! Seeded random playfields.

use haunt_core::Cell;
use haunt_space::{GridError, Occupancy, OccupancyGrid};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Shape of a generated playfield.
///
/// The outer ring is always wall. Inside it the observer start, the agent
/// start and then between `min_walls` and `max_walls` (inclusive) extra
/// walls are dropped on distinct random cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayfieldConfig {
    /// Grid width, border included. Default: 25.
    pub width: u32,
    /// Grid height, border included. Default: 16.
    pub height: u32,
    /// Fewest interior walls. Default: 10.
    pub min_walls: u32,
    /// Most interior walls. Default: 30.
    pub max_walls: u32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 16,
            min_walls: 10,
            max_walls: 30,
        }
    }
}

impl PlayfieldConfig {
    /// Generate a playfield from `seed`.
    ///
    /// Placement stops early once the interior is full, so tiny grids
    /// may lack a start marker or some of the walls. The same config and
    /// seed always produce the same grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use haunt_sim::PlayfieldConfig;
    ///
    /// let grid = PlayfieldConfig::default().generate(7).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (25, 16));
    /// assert!(grid.observer_start().is_some());
    /// assert!(grid.agent_start().is_some());
    /// ```
    pub fn generate(&self, seed: u64) -> Result<OccupancyGrid, GridError> {
        let mut grid = OccupancyGrid::open(self.width, self.height)?;
        let mut available = Vec::new();
        let (w, h) = (self.width as i32, self.height as i32);
        for y in 0..h {
            for x in 0..w {
                let cell = Cell::new(x, y);
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    grid.set(cell, Occupancy::Wall)?;
                } else {
                    available.push(cell);
                }
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        place(&mut grid, &mut available, &mut rng, Occupancy::ObserverStart)?;
        place(&mut grid, &mut available, &mut rng, Occupancy::AgentStart)?;

        let lo = self.min_walls.min(self.max_walls);
        let hi = self.min_walls.max(self.max_walls);
        let walls = rng.random_range(lo..=hi);
        for _ in 0..walls {
            if !place(&mut grid, &mut available, &mut rng, Occupancy::Wall)? {
                break;
            }
        }

        tracing::debug!(
            seed,
            width = self.width,
            height = self.height,
            walls,
            free = grid.walkable_count(),
            "playfield generated"
        );
        Ok(grid)
    }
}

/// Take a random cell out of `available` and mark it. Returns `false` if
/// nothing was left.
fn place(
    grid: &mut OccupancyGrid,
    available: &mut Vec<Cell>,
    rng: &mut ChaCha8Rng,
    occupancy: Occupancy,
) -> Result<bool, GridError> {
    if available.is_empty() {
        return Ok(false);
    }
    let cell = available.remove(rng.random_range(0..available.len()));
    grid.set(cell, occupancy)?;
    Ok(true)
}
