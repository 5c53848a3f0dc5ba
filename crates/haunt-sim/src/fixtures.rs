//! Fixture grids shared by tests and benchmarks.
//!
//! The maps are fixed ASCII art; the tests below check that each one
//! parses.

use haunt_space::{GridError, OccupancyGrid};

/// An all-free `width × height` room.
pub fn open_room(width: u32, height: u32) -> Result<OccupancyGrid, GridError> {
    OccupancyGrid::open(width, height)
}

/// Three walkable cells in a row with a wall at `(3, 0)` for an observer
/// that should see nothing.
pub fn walled_line_of_three() -> Result<OccupancyGrid, GridError> {
    OccupancyGrid::parse("...#")
}

/// A bordered maze with start markers and a few dead ends.
pub fn small_maze() -> Result<OccupancyGrid, GridError> {
    OccupancyGrid::parse(
        "
        #########
        #P..#...#
        #.#.#.#.#
        #.#...#G#
        #########
        ",
    )
}

/// A room whose left half is cut off from the right by a wall, with one
/// isolated pocket cell at `(1, 1)`.
pub fn split_room_with_pocket() -> Result<OccupancyGrid, GridError> {
    OccupancyGrid::parse(
        "
        #######
        #.#...#
        ###...#
        #######
        ",
    )
}

/// Every cell a wall.
pub fn solid() -> Result<OccupancyGrid, GridError> {
    OccupancyGrid::parse(
        "
        ###
        ###
        ",
    )
}
