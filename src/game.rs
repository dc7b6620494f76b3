//! Two-player match: turn enforcement, shot resolution and win detection.

use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::common::{EngineError, ShotOutcome};
use crate::config::NUM_SHIPS;
use crate::grid::Cell;
use crate::player::{Player, PlayerId};
use crate::ship::Ship;

/// Unique game identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct GameId(pub u64);

impl GameId {
    /// Fresh random id. Never zero.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        GameId(rng.random_range(1..=u64::MAX))
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle stage, derived from fleet sizes and the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// At least one fleet is incomplete.
    Setup,
    /// Both fleets are complete and nobody has won.
    InProgress,
    /// A winner is set.
    Finished,
}

/// A match between players A and B.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    id: GameId,
    player_a: Player,
    player_b: Player,
    turn: PlayerId,
    winner: Option<PlayerId>,
}

impl Game {
    /// New game with a fresh id from the thread RNG. `starting` holds the
    /// first turn.
    #[cfg(feature = "std")]
    pub fn new(player_a: Player, player_b: Player, starting: PlayerId) -> Self {
        Self::with_rng(player_a, player_b, starting, &mut rand::rng())
    }

    /// Like [`Game::new`] but drawing the id from `rng`.
    pub fn with_rng<R: Rng>(
        player_a: Player,
        player_b: Player,
        starting: PlayerId,
        rng: &mut R,
    ) -> Self {
        Self::with_id(GameId::random(rng), player_a, player_b, starting)
    }

    /// Game with a caller-chosen id.
    ///
    /// `starting` should be the id of `player_a` or `player_b`. Nothing
    /// checks it here; a stranger's id makes every `shoot` fail, either with
    /// `OutOfTurn` or, for the stranger itself, with `UnknownPlayer`.
    pub fn with_id(id: GameId, player_a: Player, player_b: Player, starting: PlayerId) -> Self {
        Game {
            id,
            player_a,
            player_b,
            turn: starting,
            winner: None,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn player_a(&self) -> &Player {
        &self.player_a
    }

    pub fn player_b(&self) -> &Player {
        &self.player_b
    }

    /// Id of the player allowed to shoot next.
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Finished
        } else if self.player_a.fleet_complete() && self.player_b.fleet_complete() {
            Phase::InProgress
        } else {
            Phase::Setup
        }
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.player_a.id() == player_id || self.player_b.id() == player_id
    }

    fn unknown(&self, player: PlayerId) -> EngineError {
        EngineError::UnknownPlayer {
            player,
            game: self.id,
        }
    }

    pub fn player(&self, player_id: PlayerId) -> Result<&Player, EngineError> {
        if self.player_a.id() == player_id {
            Ok(&self.player_a)
        } else if self.player_b.id() == player_id {
            Ok(&self.player_b)
        } else {
            Err(self.unknown(player_id))
        }
    }

    fn player_mut(&mut self, player_id: PlayerId) -> Result<&mut Player, EngineError> {
        if self.player_a.id() == player_id {
            Ok(&mut self.player_a)
        } else if self.player_b.id() == player_id {
            Ok(&mut self.player_b)
        } else {
            Err(self.unknown(player_id))
        }
    }

    /// The other side of `player_id`.
    pub fn opponent(&self, player_id: PlayerId) -> Result<&Player, EngineError> {
        if self.player_a.id() == player_id {
            Ok(&self.player_b)
        } else if self.player_b.id() == player_id {
            Ok(&self.player_a)
        } else {
            Err(self.unknown(player_id))
        }
    }

    /// Replaces the side whose id matches `player`.
    pub fn replace_player(&mut self, player: Player) -> Result<(), EngineError> {
        let id = player.id();
        *self.player_mut(id)? = player;
        Ok(())
    }

    /// Length of the next ship `player_id` has to place.
    pub fn next_ship_length(&self, player_id: PlayerId) -> Result<usize, EngineError> {
        self.player(player_id)?.next_ship_length()
    }

    /// Places the next ship of `player_id`'s fleet.
    pub fn add_ship(&mut self, player_id: PlayerId, ship: Ship) -> Result<(), EngineError> {
        self.player_mut(player_id)?.add_ship(ship)
    }

    /// Fires `player_id`'s shot at `cell` on the opponent's grid.
    ///
    /// Checked in order: both fleets complete (`GameNotStarted`), no winner
    /// yet (`GameFinished`), `player_id` holds the turn (`OutOfTurn`),
    /// `player_id` plays in this game (`UnknownPlayer`). An accepted shot
    /// always passes the turn to the opponent, whatever it hits.
    pub fn shoot(&mut self, player_id: PlayerId, cell: Cell) -> Result<ShotOutcome, EngineError> {
        if !self.player_a.fleet_complete() || !self.player_b.fleet_complete() {
            return Err(EngineError::GameNotStarted);
        }
        if self.winner.is_some() {
            return Err(EngineError::GameFinished);
        }
        if self.turn != player_id {
            return Err(EngineError::OutOfTurn { player: player_id });
        }

        let (shooter, opponent) = if player_id == self.player_a.id() {
            self.turn = self.player_b.id();
            (&mut self.player_a, &self.player_b)
        } else if player_id == self.player_b.id() {
            self.turn = self.player_a.id();
            (&mut self.player_b, &self.player_a)
        } else {
            return Err(self.unknown(player_id));
        };

        let outcome = resolve_shot(shooter, opponent, cell);
        debug!(
            "game {}: player {} shot at {} -> {:?}",
            self.id, player_id, cell, outcome
        );
        if outcome.won {
            info!("game {}: player {} won", self.id, player_id);
            self.winner = Some(player_id);
        }
        Ok(outcome)
    }
}

fn resolve_shot(shooter: &mut Player, opponent: &Player, cell: Cell) -> ShotOutcome {
    let target = shooter.target_mut();
    if !opponent.is_hit(cell) {
        target.record_miss(cell);
        return ShotOutcome::MISS;
    }
    // Already sunk: nothing left to learn.
    if target.sunk_cells().contains(cell) {
        return ShotOutcome::HIT;
    }
    target.record_hit(cell);

    let candidate = target.ship_from_hits(cell);
    let Some(ship) = opponent.ship_matching(candidate) else {
        return ShotOutcome::HIT;
    };
    target.mark_sunk(ship);
    info!(
        "player {} sank a ship of length {} ({}/{})",
        shooter.id(),
        ship.len(),
        shooter.target().sunk_ships().len(),
        NUM_SHIPS
    );

    if shooter.target().sunk_ships().len() == NUM_SHIPS {
        ShotOutcome::WIN
    } else {
        ShotOutcome::SINK
    }
}
