//! An observer driven by a fixed script of moves.

use std::fmt;

use haunt_core::{Cell, PositionSource};
use haunt_space::OccupancyGrid;

/// One grid step. `Up` is `+y`, matching the neighbour order used by the
/// topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, +1)`
    Up,
    /// `(+1, 0)`
    Right,
    /// `(0, -1)`
    Down,
    /// `(-1, 0)`
    Left,
}

impl Direction {
    /// All four directions in neighbour order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The coordinate offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Right => (1, 0),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(s)
    }
}

/// An observer that replays a looping list of moves, one per call to
/// [`advance`](Self::advance).
///
/// Moves into walls or off the grid are refused and the observer stays
/// put for that step.
#[derive(Clone, Debug)]
pub struct ScriptedObserver {
    grid: OccupancyGrid,
    cell: Cell,
    script: Vec<Direction>,
    cursor: usize,
}

impl ScriptedObserver {
    /// Stand at `start` with an empty script.
    pub fn new(grid: OccupancyGrid, start: Cell) -> Self {
        Self {
            grid,
            cell: start,
            script: Vec::new(),
            cursor: 0,
        }
    }

    /// Stand on the grid's observer start marker, if it has one.
    pub fn at_start(grid: OccupancyGrid) -> Option<Self> {
        let start = grid.observer_start()?;
        Some(Self::new(grid, start))
    }

    /// Replace the script and rewind it.
    pub fn with_script(mut self, script: impl IntoIterator<Item = Direction>) -> Self {
        self.script = script.into_iter().collect();
        self.cursor = 0;
        self
    }

    /// `true` if a step in `dir` lands on a walkable in-bounds cell.
    pub fn can_move(&self, dir: Direction) -> bool {
        let (dx, dy) = dir.delta();
        self.grid.is_walkable(self.cell.offset(dx, dy))
    }

    /// Step in `dir` if allowed. Returns whether the observer moved.
    pub fn try_move(&mut self, dir: Direction) -> bool {
        if !self.can_move(dir) {
            tracing::trace!(cell = %self.cell, %dir, "observer move refused");
            return false;
        }
        let (dx, dy) = dir.delta();
        self.cell = self.cell.offset(dx, dy);
        true
    }

    /// Play the next scripted move, wrapping at the end of the script.
    ///
    /// Returns `None` if the script is empty, otherwise whether the move
    /// was made.
    pub fn advance(&mut self) -> Option<bool> {
        let dir = *self.script.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.script.len();
        Some(self.try_move(dir))
    }

    /// The grid the observer walks on.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }
}

impl PositionSource for ScriptedObserver {
    fn position(&self) -> Cell {
        self.cell
    }
}
