//! Grid coordinates and the tick counter.

use smallvec::SmallVec;
use std::fmt;

/// An integer grid coordinate.
///
/// Identity is the coordinate pair; there is no separate id. `y` grows
/// with the row index of the occupancy grid, so `(x, y)` addresses
/// `map[y][x]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Cell {
    /// The four unit moves, in neighbour enumeration order:
    /// up `(0, 1)`, right `(1, 0)`, down `(0, -1)`, left `(-1, 0)`.
    pub const MOVES: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use haunt_core::Cell;
    ///
    /// assert_eq!(Cell::new(0, 0).manhattan(Cell::new(3, -4)), 7);
    /// ```
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// The cell displaced by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// The four orthogonal neighbours in [`MOVES`](Self::MOVES) order,
    /// without any bounds or wall filtering.
    pub fn adjacent(self) -> [Cell; 4] {
        Self::MOVES.map(|(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Neighbour list of a cell.
///
/// A 4-connected grid never has more than four neighbours, so this never
/// spills to the heap.
pub type Neighbours = SmallVec<[Cell; 4]>;

/// Monotonically increasing tick counter.
///
/// Incremented each time the tracker advances one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn adjacent_follows_move_order() {
        let c = Cell::new(2, 2);
        assert_eq!(
            c.adjacent(),
            [
                Cell::new(2, 3),
                Cell::new(3, 2),
                Cell::new(2, 1),
                Cell::new(1, 2)
            ]
        );
    }

    #[test]
    fn display_is_pair() {
        assert_eq!(Cell::new(-1, 4).to_string(), "(-1, 4)");
        assert_eq!(TickId(9).to_string(), "9");
    }

    #[test]
    fn from_tuple() {
        let c: Cell = (3, 7).into();
        assert_eq!(c, Cell::new(3, 7));
    }

    proptest! {
        #[test]
        fn manhattan_is_metric(
            ax in -50i32..50, ay in -50i32..50,
            bx in -50i32..50, by in -50i32..50,
            cx in -50i32..50, cy in -50i32..50,
        ) {
            let a = Cell::new(ax, ay);
            let b = Cell::new(bx, by);
            let c = Cell::new(cx, cy);
            prop_assert_eq!(a.manhattan(a), 0);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert!(a.manhattan(c) <= a.manhattan(b) + b.manhattan(c));
        }

        #[test]
        fn adjacent_cells_are_one_step_away(x in -50i32..50, y in -50i32..50) {
            let c = Cell::new(x, y);
            for n in c.adjacent() {
                prop_assert_eq!(c.manhattan(n), 1);
            }
        }
    }
}
