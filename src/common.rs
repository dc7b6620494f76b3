//! Common types for the rules engine: engine errors and shot outcomes.

use thiserror::Error;

use crate::game::GameId;
use crate::grid::Cell;
use crate::player::PlayerId;

/// Errors returned by placement and shooting operations.
///
/// Every operation that returns one of these leaves the entity it was
/// called on untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Proposed ship does not have the length required for the next slot.
    #[error("cannot add ship: expected length {expected}, was {actual}")]
    WrongLength { expected: usize, actual: usize },
    /// All five ships have already been placed.
    #[error("fleet is full, cannot add another ship")]
    FleetFull,
    /// Proposed ship overlaps or touches an existing ship.
    #[error("cannot add ship: cell {cell} is not available")]
    CellUnavailable { cell: Cell },
    /// Shot attempted before both fleets were complete.
    #[error("shot attempted before both fleets are complete")]
    GameNotStarted,
    /// Shot attempted after the game already has a winner.
    #[error("shot attempted, but the game already has a winner")]
    GameFinished,
    /// Shot attempted by the player who does not hold the turn.
    #[error("player {player} tried to shoot, but it's not their turn")]
    OutOfTurn { player: PlayerId },
    /// Player id is not part of this game.
    #[error("player {player} is not in game {game}")]
    UnknownPlayer { player: PlayerId, game: GameId },
    /// Coordinates lie outside the grid.
    #[error("coordinates ({x}, {y}) are out of bounds")]
    OutOfBounds { x: usize, y: usize },
    /// Ship built from an empty set of cells.
    #[error("a ship needs at least one cell")]
    EmptyShip,
    /// Random placement could not find room for a ship.
    #[error("unable to place a ship of length {length}")]
    UnableToPlace { length: usize },
}

/// Result of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    /// The shot landed on an opponent ship.
    pub hit: bool,
    /// The shot completed a ship.
    pub sank: bool,
    /// The sunk ship was the last one afloat.
    pub won: bool,
}

impl ShotOutcome {
    pub const MISS: Self = Self::new(false, false, false);
    pub const HIT: Self = Self::new(true, false, false);
    pub const SINK: Self = Self::new(true, true, false);
    pub const WIN: Self = Self::new(true, true, true);

    pub const fn new(hit: bool, sank: bool, won: bool) -> Self {
        Self { hit, sank, won }
    }
}
