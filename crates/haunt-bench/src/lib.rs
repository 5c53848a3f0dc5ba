//! Benchmark profiles for the Haunt belief tracker.
//!
//! - [`reference_profile`]: the default 25x16 generated playfield
//! - [`stress_profile`]: a 128x128 open room with a wide sensing radius

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use haunt_core::Cell;
use haunt_engine::TrackerConfig;
use haunt_sim::PlayfieldConfig;
use haunt_space::{GridError, OccupancyGrid};

/// A grid, a tracker configuration and the two agents' starting cells.
#[derive(Clone, Debug)]
pub struct Profile {
    /// The playfield.
    pub grid: OccupancyGrid,
    /// Tracker parameters.
    pub config: TrackerConfig,
    /// Where the observer stands.
    pub observer: Cell,
    /// Where the hidden agent stands.
    pub agent: Cell,
}

/// The default generated playfield with the default tracker config.
pub fn reference_profile(seed: u64) -> Result<Profile, GridError> {
    let grid = PlayfieldConfig::default().generate(seed)?;
    let observer = grid.observer_start().unwrap_or(Cell::new(1, 1));
    let agent = grid.agent_start().unwrap_or(Cell::new(2, 1));
    Ok(Profile {
        grid,
        config: TrackerConfig::default(),
        observer,
        agent,
    })
}

/// 128x128 open room (16K states), observer in the middle with range 20
/// so that roughly 840 cells are visible each tick.
pub fn stress_profile() -> Result<Profile, GridError> {
    Ok(Profile {
        grid: OccupancyGrid::open(128, 128)?,
        config: TrackerConfig::default().with_observation_range(20),
        observer: Cell::new(64, 64),
        agent: Cell::new(70, 60),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_build() {
        let r = reference_profile(3).unwrap();
        assert_eq!((r.grid.width(), r.grid.height()), (25, 16));
        assert_ne!(r.observer, r.agent);

        let s = stress_profile().unwrap();
        assert_eq!(s.grid.walkable_count(), 128 * 128);
        assert!(s.observer.manhattan(s.agent) <= s.config.observation_range);
    }
}
