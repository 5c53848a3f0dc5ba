//! Walkable-cell topology derived from an occupancy grid.

use crate::occupancy::OccupancyGrid;
use haunt_core::{Cell, Neighbours};
use indexmap::IndexSet;

/// The static state space of the tracker: every walkable cell of an
/// [`OccupancyGrid`] and its 4-connected walkable neighbours.
///
/// States are kept in row-major scan order (`y` outer, `x` inner). That
/// order is the canonical iteration order for every distribution built
/// on top of the topology, so belief mass is always summed in the same
/// sequence and results are bit-reproducible.
///
/// A grid made entirely of walls produces an empty topology. Every query
/// on it is well defined and returns nothing.
///
/// # Examples
///
/// ```
/// use haunt_core::Cell;
/// use haunt_space::{GridTopology, OccupancyGrid};
///
/// let grid = OccupancyGrid::parse("####\n#..#\n####").unwrap();
/// let topo = GridTopology::from_occupancy(&grid);
/// assert_eq!(topo.len(), 2);
/// assert_eq!(topo.neighbours(Cell::new(1, 1)), &[Cell::new(2, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct GridTopology {
    width: u32,
    height: u32,
    states: IndexSet<Cell>,
    /// Parallel to `states`: neighbours of `states[i]`.
    adjacency: Vec<Neighbours>,
}

impl GridTopology {
    /// Scan `grid` once and build the topology.
    pub fn from_occupancy(grid: &OccupancyGrid) -> Self {
        let states: IndexSet<Cell> = grid
            .iter()
            .filter(|(_, o)| o.is_walkable())
            .map(|(c, _)| c)
            .collect();
        let adjacency = states
            .iter()
            .map(|cell| {
                cell.adjacent()
                    .into_iter()
                    .filter(|n| states.contains(n))
                    .collect()
            })
            .collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            states,
            adjacency,
        }
    }

    /// Width of the source grid.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the source grid.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Walkable cells in canonical order.
    pub fn states(&self) -> &IndexSet<Cell> {
        &self.states
    }

    /// Number of walkable cells.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` if the grid has no walkable cell.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// `true` if `cell` is a walkable state.
    pub fn contains(&self, cell: Cell) -> bool {
        self.states.contains(&cell)
    }

    /// Position of `cell` in the canonical order.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.states.get_index_of(&cell)
    }

    /// The state at `index` in the canonical order.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        self.states.get_index(index).copied()
    }

    /// Walkable neighbours of `cell` in up/right/down/left order.
    ///
    /// Returns an empty slice for walls and out-of-grid cells.
    pub fn neighbours(&self, cell: Cell) -> &[Cell] {
        self.index_of(cell)
            .map(|i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
    }

    /// Walkable neighbours of the state at `index`.
    pub fn neighbours_at(&self, index: usize) -> &[Cell] {
        self.adjacency
            .get(index)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    /// Number of walkable neighbours of `cell`.
    pub fn degree(&self, cell: Cell) -> usize {
        self.neighbours(cell).len()
    }

    /// States with no walkable neighbour.
    pub fn isolated(&self) -> impl Iterator<Item = Cell> + '_ {
        self.states
            .iter()
            .zip(&self.adjacency)
            .filter(|(_, n)| n.is_empty())
            .map(|(c, _)| *c)
    }

    /// States within manhattan distance `range` of `center`, in canonical
    /// order. `center` itself need not be walkable.
    pub fn within_range(&self, center: Cell, range: u32) -> impl Iterator<Item = Cell> + '_ {
        self.states
            .iter()
            .copied()
            .filter(move |c| c.manhattan(center) <= range)
    }
}
