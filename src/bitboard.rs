//! A set of grid cells packed into a single `u128`.
//!
//! One bit per cell, indexed by [`Cell::index`]. Ships, hits, misses and
//! availability masks are all `CellSet`s, so set equality, unions and
//! membership tests are single integer operations and the type stays
//! `Copy` and allocation free.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};

use crate::config::BOARD_SIZE;
use crate::grid::Cell;

const BOARD_BITS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
const MASK: u128 = (1u128 << BOARD_BITS) - 1;

/// Fixed-size set of cells on the 10×10 grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(from = "u128", into = "u128"))]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = CellSet { bits: 0 };

    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Every cell of the grid.
    #[inline]
    pub const fn full() -> Self {
        CellSet { bits: MASK }
    }

    #[inline]
    fn bit(cell: Cell) -> u128 {
        1u128 << cell.index()
    }

    /// Number of cells in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.bits & Self::bit(cell) != 0
    }

    /// Adds `cell`. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        let fresh = !self.contains(cell);
        self.bits |= Self::bit(cell);
        fresh
    }

    /// Removes `cell`. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, cell: Cell) -> bool {
        let present = self.contains(cell);
        self.bits &= !Self::bit(cell);
        present
    }

    #[inline]
    pub fn is_disjoint(&self, other: &CellSet) -> bool {
        self.bits & other.bits == 0
    }

    #[inline]
    pub fn is_subset(&self, other: &CellSet) -> bool {
        self.bits & !other.bits == 0
    }

    /// Consumes the set and returns the raw bits.
    #[inline]
    pub fn into_raw(self) -> u128 {
        self.bits
    }

    /// Builds a set from raw bits, dropping anything past the last cell.
    #[inline]
    pub fn from_raw(raw: u128) -> Self {
        CellSet { bits: raw & MASK }
    }

    /// Iterator over the cells in index order.
    #[inline]
    pub fn iter(&self) -> Cells {
        Cells { bits: self.bits }
    }
}

impl From<u128> for CellSet {
    fn from(raw: u128) -> Self {
        CellSet::from_raw(raw)
    }
}

impl From<CellSet> for u128 {
    fn from(set: CellSet) -> Self {
        set.into_raw()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`], lowest index first.
#[derive(Clone, Copy, Debug)]
pub struct Cells {
    bits: u128,
}

impl Iterator for Cells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Cell::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells {}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Set difference.
impl Sub for CellSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & !rhs.bits,
        }
    }
}

/// Complement within the grid.
impl Not for CellSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl BitAndAssign for CellSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOrAssign for CellSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet ({} cells):", self.len())?;
        fmt::Display::fmt(self, f)
    }
}

/// Grid picture with `y` growing downwards.
impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::all() {
            let bit = if self.contains(cell) { '■' } else { '□' };
            write!(f, "{}", bit)?;
            if cell.x() + 1 < BOARD_SIZE as usize {
                write!(f, " ")?;
            } else if cell.y() + 1 < BOARD_SIZE as usize {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
