//! Static occupancy grids produced by the maze collaborator.

use crate::error::GridError;
use haunt_core::Cell;
use std::fmt;

/// Contents of a single grid cell.
///
/// The numeric codes are the wire format used by maze generators:
/// `0` free, `1` wall, `2` observer start, `3` agent start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Occupancy {
    /// Walkable floor.
    #[default]
    Free = 0,
    /// Impassable wall.
    Wall = 1,
    /// Walkable floor where the observer starts.
    ObserverStart = 2,
    /// Walkable floor where the hidden agent starts.
    AgentStart = 3,
}

impl Occupancy {
    /// Decode a numeric occupancy code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Free),
            1 => Some(Self::Wall),
            2 => Some(Self::ObserverStart),
            3 => Some(Self::AgentStart),
            _ => None,
        }
    }

    /// The numeric occupancy code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode an ASCII map symbol: `.` free, `#` wall, `P` observer, `G` agent.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Free),
            '#' => Some(Self::Wall),
            'P' => Some(Self::ObserverStart),
            'G' => Some(Self::AgentStart),
            _ => None,
        }
    }

    /// The ASCII map symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::ObserverStart => 'P',
            Self::AgentStart => 'G',
        }
    }

    /// Everything except walls can be walked on.
    pub fn is_walkable(self) -> bool {
        self != Self::Wall
    }
}

/// A `width × height` grid of [`Occupancy`] values, stored row-major.
///
/// Cell `(x, y)` is column `x` of row `y`. Construction rejects empty
/// grids; a grid made entirely of walls is valid and yields an empty
/// topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<Occupancy>,
}

impl OccupancyGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn filled(width: u32, height: u32, fill: Occupancy) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![fill; width as usize * height as usize],
        })
    }

    /// Create an all-free grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use haunt_space::{Occupancy, OccupancyGrid};
    /// use haunt_core::Cell;
    ///
    /// let grid = OccupancyGrid::open(5, 5).unwrap();
    /// assert_eq!(grid.get(Cell::new(4, 4)), Some(Occupancy::Free));
    /// assert_eq!(grid.get(Cell::new(5, 0)), None);
    /// ```
    pub fn open(width: u32, height: u32) -> Result<Self, GridError> {
        Self::filled(width, height, Occupancy::Free)
    }

    /// Build a grid from rows of numeric occupancy codes (`map[y][x]`).
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let occupancy = Occupancy::from_code(code).ok_or(GridError::UnknownCode {
                    code,
                    cell: Cell::new(x as i32, y as i32),
                })?;
                cells.push(occupancy);
            }
        }
        Self::from_cells(width, rows.len(), cells)
    }

    /// Parse an ASCII map.
    ///
    /// Each non-blank line is one row; surrounding whitespace on a line is
    /// ignored so maps can be indented inside raw string literals.
    ///
    /// ```
    /// use haunt_space::OccupancyGrid;
    /// use haunt_core::Cell;
    ///
    /// let grid = OccupancyGrid::parse("#####\n#P.G#\n#####").unwrap();
    /// assert_eq!(grid.width(), 5);
    /// assert_eq!(grid.observer_start(), Some(Cell::new(1, 1)));
    /// assert_eq!(grid.agent_start(), Some(Cell::new(3, 1)));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let occupancy =
                    Occupancy::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                        symbol,
                        cell: Cell::new(x as i32, y as i32),
                    })?;
                cells.push(occupancy);
            }
        }
        Self::from_cells(width, rows.len(), cells)
    }

    fn from_cells(width: usize, height: usize, cells: Vec<Occupancy>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let width = Self::checked_dim("width", width)?;
        let height = Self::checked_dim("height", height)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn checked_dim(name: &'static str, value: usize) -> Result<u32, GridError> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX_DIM)
            .ok_or(GridError::DimensionTooLarge {
                name,
                value: u32::try_from(value).unwrap_or(u32::MAX),
                max: Self::MAX_DIM,
            })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if `cell` lies inside the grid.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Contents of `cell`, or `None` outside the grid.
    pub fn get(&self, cell: Cell) -> Option<Occupancy> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Overwrite the contents of `cell`.
    pub fn set(&mut self, cell: Cell, occupancy: Occupancy) -> Result<(), GridError> {
        let i = self.index(cell).ok_or(GridError::CellOutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        })?;
        self.cells[i] = occupancy;
        Ok(())
    }

    /// `true` if `cell` is inside the grid and not a wall.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(Occupancy::is_walkable)
    }

    /// All cells in row-major order (`y` outer, `x` inner) with their contents.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Occupancy)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &o)| (Cell::new((i % width) as i32, (i / width) as i32), o))
    }

    /// First cell in row-major order holding `occupancy`.
    pub fn find(&self, occupancy: Occupancy) -> Option<Cell> {
        self.iter().find(|&(_, o)| o == occupancy).map(|(c, _)| c)
    }

    /// Where the observer starts, if the grid marks it.
    pub fn observer_start(&self) -> Option<Cell> {
        self.find(Occupancy::ObserverStart)
    }

    /// Where the hidden agent starts, if the grid marks it.
    pub fn agent_start(&self) -> Option<Cell> {
        self.find(Occupancy::AgentStart)
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|o| o.is_walkable()).count()
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for o in row {
                write!(f, "{}", o.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
