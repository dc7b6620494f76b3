//! Fixed 10×10 grid geometry: cells and neighbour lookup.
//!
//! Nothing here knows about ships or target boards; callers decide which
//! neighbours matter through the predicate they pass to [`neighbors`].

use alloc::vec::Vec;
use core::fmt;

use crate::common::EngineError;
use crate::config::BOARD_SIZE;

const N: u8 = BOARD_SIZE;

/// One square of the grid. Always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Checked constructor. Fails with `OutOfBounds` unless `0 <= x, y < 10`.
    pub fn new(x: usize, y: usize) -> Result<Self, EngineError> {
        if x >= N as usize || y >= N as usize {
            return Err(EngineError::OutOfBounds { x, y });
        }
        Ok(Cell {
            x: x as u8,
            y: y as u8,
        })
    }

    pub fn x(self) -> usize {
        self.x as usize
    }

    pub fn y(self) -> usize {
        self.y as usize
    }

    /// Dense row-major index in `0..100`.
    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * N as usize + self.x as usize
    }

    /// Inverse of [`Cell::index`]. `None` for indices past the grid.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= N as usize * N as usize {
            return None;
        }
        Some(Cell {
            x: (idx % N as usize) as u8,
            y: (idx / N as usize) as u8,
        })
    }

    /// Every cell of the grid in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..N as usize * N as usize).filter_map(Cell::from_index)
    }

    /// The cell `(x + dx, y + dy)`, if it is still on the grid.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if x < 0 || y < 0 || x >= N as i16 || y >= N as i16 {
            None
        } else {
            Some(Cell {
                x: x as u8,
                y: y as u8,
            })
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<(u8, u8)> for Cell {
    type Error = EngineError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Cell::new(x as usize, y as usize)
    }
}

impl From<Cell> for (u8, u8) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

/// Which neighbours [`neighbors`] considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// Left, right, up, down.
    Orthogonal,
    /// The four orthogonal neighbours followed by the four diagonal ones.
    WithDiagonals,
}

static ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
static DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

impl Neighborhood {
    fn offsets(self) -> impl Iterator<Item = (i8, i8)> {
        let diagonal: &'static [(i8, i8)] = match self {
            Neighborhood::Orthogonal => &[],
            Neighborhood::WithDiagonals => &DIAGONAL,
        };
        ORTHOGONAL.iter().chain(diagonal.iter()).copied()
    }
}

/// In-bounds neighbours of `origin` that satisfy `include`.
///
/// Order is fixed: left, right, up, down, then up-left, up-right,
/// down-right, down-left when diagonals are requested.
pub fn neighbors<F>(origin: Cell, mode: Neighborhood, mut include: F) -> Vec<Cell>
where
    F: FnMut(Cell) -> bool,
{
    mode.offsets()
        .filter_map(|(dx, dy)| origin.offset(dx, dy))
        .filter(|&cell| include(cell))
        .collect()
}
