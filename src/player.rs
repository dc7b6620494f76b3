//! A contestant: identity, own fleet and knowledge of the opponent's grid.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::Rng;

use crate::bitboard::CellSet;
use crate::board::TargetBoard;
use crate::common::EngineError;
use crate::config::{ship_length, BOARD_SIZE, NUM_SHIPS};
use crate::grid::{neighbors, Cell, Neighborhood};
use crate::ship::Ship;

/// Unique player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Fresh random id. Never zero.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        PlayerId(rng.random_range(1..=u64::MAX))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability grid indexed `[x][y]`.
pub type Availability = [[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// One side of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    name: String,
    ships: Vec<Ship>,
    target: TargetBoard,
}

impl Player {
    /// New player with a fresh id from the thread RNG, no ships and an
    /// empty target board.
    #[cfg(feature = "std")]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rng(name, &mut rand::rng())
    }

    /// Like [`Player::new`] but drawing the id from `rng`.
    pub fn with_rng<R: Rng>(name: impl Into<String>, rng: &mut R) -> Self {
        Self::with_id(PlayerId::random(rng), name)
    }

    pub fn with_id(id: PlayerId, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            ships: Vec::new(),
            target: TargetBoard::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Own ships, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// What this player knows about the opponent.
    pub fn target(&self) -> &TargetBoard {
        &self.target
    }

    /// Same player and fleet with an empty target board.
    pub(crate) fn with_fresh_target(&self) -> Self {
        Player {
            target: TargetBoard::new(),
            ..self.clone()
        }
    }

    pub(crate) fn target_mut(&mut self) -> &mut TargetBoard {
        &mut self.target
    }

    /// All five ships are placed.
    pub fn fleet_complete(&self) -> bool {
        self.ships.len() == NUM_SHIPS
    }

    /// Length required for the next ship: 5, then 4, 4, 3, 3.
    pub fn next_ship_length(&self) -> Result<usize, EngineError> {
        ship_length(self.ships.len()).ok_or(EngineError::FleetFull)
    }

    /// Cells occupied by any own ship.
    pub fn occupied(&self) -> CellSet {
        self.ships
            .iter()
            .fold(CellSet::new(), |acc, ship| acc | ship.mask())
    }

    /// Cells that neither hold nor touch (diagonals included) an own ship.
    pub fn available_mask(&self) -> CellSet {
        let mut blocked = CellSet::new();
        for cell in self.occupied() {
            blocked.insert(cell);
            blocked.extend(neighbors(cell, Neighborhood::WithDiagonals, |_| true));
        }
        !blocked
    }

    /// [`Player::available_mask`] as a grid of booleans indexed `[x][y]`.
    pub fn available_cells(&self) -> Availability {
        let mask = self.available_mask();
        let mut grid = [[false; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for cell in mask {
            grid[cell.x()][cell.y()] = true;
        }
        grid
    }

    /// Adds the next ship of the fleet.
    ///
    /// Fails with `FleetFull` once five ships are placed, `WrongLength` when
    /// the ship does not match [`Player::next_ship_length`], and
    /// `CellUnavailable` when it overlaps or touches a ship already placed.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), EngineError> {
        let expected = self.next_ship_length()?;
        if ship.len() != expected {
            return Err(EngineError::WrongLength {
                expected,
                actual: ship.len(),
            });
        }
        if let Some(cell) = (ship.mask() - self.available_mask()).iter().next() {
            return Err(EngineError::CellUnavailable { cell });
        }
        debug!("player {} placed ship {:?}", self.id, ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Whether a shot at `cell` would land on one of this player's ships.
    pub fn is_hit(&self, cell: Cell) -> bool {
        self.ships.iter().any(|ship| ship.contains(cell))
    }

    /// The own ship covering exactly `cells`, if there is one.
    pub fn ship_matching(&self, cells: CellSet) -> Option<Ship> {
        self.ships.iter().copied().find(|ship| ship.mask() == cells)
    }
}
