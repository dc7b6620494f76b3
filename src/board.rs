//! What a player knows about the opponent's grid.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::bitboard::CellSet;
use crate::grid::{neighbors, Cell, Neighborhood};
use crate::ship::Ship;

/// Knowledge about a single opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKnowledge {
    /// Never shot and not inferred.
    Unknown,
    /// Known to be water.
    Miss,
    /// Known to hold a ship that is not sunk yet.
    Hit,
    /// Part of a ship that has been sunk.
    Sunk,
}

/// Shots one player has taken at the other, and what they revealed.
///
/// `hits` only holds cells of ships that are still afloat: once a ship is
/// confirmed sunk its cells move to `sunk_ships`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetBoard {
    hits: CellSet,
    misses: CellSet,
    sunk_ships: Vec<Ship>,
}

impl TargetBoard {
    /// An empty board: nothing shot yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hits not yet attributed to a sunk ship.
    pub fn hits(&self) -> CellSet {
        self.hits
    }

    /// Cells known to be empty, shot or inferred.
    pub fn misses(&self) -> CellSet {
        self.misses
    }

    pub fn sunk_ships(&self) -> &[Ship] {
        &self.sunk_ships
    }

    /// Union of all cells of sunk ships.
    pub fn sunk_cells(&self) -> CellSet {
        self.sunk_ships
            .iter()
            .fold(CellSet::new(), |acc, ship| acc | ship.mask())
    }

    /// Cells about which nothing is known yet.
    pub fn unknown_cells(&self) -> CellSet {
        !(self.hits | self.misses | self.sunk_cells())
    }

    pub fn knowledge(&self, cell: Cell) -> CellKnowledge {
        if self.hits.contains(cell) {
            CellKnowledge::Hit
        } else if self.misses.contains(cell) {
            CellKnowledge::Miss
        } else if self.sunk_ships.iter().any(|s| s.contains(cell)) {
            CellKnowledge::Sunk
        } else {
            CellKnowledge::Unknown
        }
    }

    pub(crate) fn record_miss(&mut self, cell: Cell) {
        self.misses.insert(cell);
    }

    pub(crate) fn record_hit(&mut self, cell: Cell) {
        self.hits.insert(cell);
    }

    /// Breadth-first flood fill from `origin` over recorded hits, following
    /// orthogonal neighbours only: diagonal hits never belong to the same
    /// ship.
    pub fn ship_from_hits(&self, origin: Cell) -> CellSet {
        let mut ship = CellSet::new();
        let mut queue = VecDeque::from([origin]);
        while let Some(next) = queue.pop_front() {
            if !ship.insert(next) {
                continue;
            }
            let hits = self.hits;
            queue.extend(neighbors(next, Neighborhood::Orthogonal, |c| {
                hits.contains(c) && !ship.contains(c)
            }));
        }
        ship
    }

    /// Records `ship` as sunk.
    ///
    /// Every neighbour of the ship, diagonals included, that is not a
    /// pending hit becomes a miss, since ships never touch. The ship's own
    /// cells then leave `hits`.
    pub(crate) fn mark_sunk(&mut self, ship: Ship) {
        self.sunk_ships.push(ship);
        let hits = self.hits;
        for cell in ship.cells() {
            let ring = neighbors(cell, Neighborhood::WithDiagonals, |c| !hits.contains(c));
            self.misses.extend(ring);
        }
        self.hits = self.hits - ship.mask();
    }
}
