//! Ships: immutable sets of occupied cells.

use core::fmt;

use crate::bitboard::{CellSet, Cells};
use crate::common::EngineError;
use crate::grid::Cell;

/// Direction a straight ship extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Towards growing `x`.
    Horizontal,
    /// Towards growing `y`.
    Vertical,
}

/// A placed ship. Never empty, never changes after construction.
///
/// Two ships are equal when they cover exactly the same cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "CellSet", into = "CellSet"))]
pub struct Ship {
    cells: CellSet,
}

impl Ship {
    /// Ship covering `cells`. Duplicates collapse; an empty input fails
    /// with `EmptyShip`.
    pub fn new<I>(cells: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = Cell>,
    {
        Self::from_cells(cells.into_iter().collect())
    }

    pub fn from_cells(cells: CellSet) -> Result<Self, EngineError> {
        if cells.is_empty() {
            return Err(EngineError::EmptyShip);
        }
        Ok(Ship { cells })
    }

    /// Straight ship of `length` cells starting at `origin`.
    pub fn line(
        origin: Cell,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, EngineError> {
        let mut cells = CellSet::new();
        for i in 0..length {
            let (x, y) = match orientation {
                Orientation::Horizontal => (origin.x() + i, origin.y()),
                Orientation::Vertical => (origin.x(), origin.y() + i),
            };
            cells.insert(Cell::new(x, y)?);
        }
        Self::from_cells(cells)
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn cells(&self) -> Cells {
        self.cells.iter()
    }

    /// The covered cells as a set.
    pub fn mask(&self) -> CellSet {
        self.cells
    }
}

impl TryFrom<CellSet> for Ship {
    type Error = EngineError;

    fn try_from(cells: CellSet) -> Result<Self, Self::Error> {
        Ship::from_cells(cells)
    }
}

impl From<Ship> for CellSet {
    fn from(ship: Ship) -> Self {
        ship.cells
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.cells.iter()).finish()
    }
}
