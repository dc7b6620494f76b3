#![cfg(feature = "std")]

//! In-memory registry of waiting players and running games.
//!
//! The engine never holds state between calls; this module owns the
//! canonical copy of every player and game and hands out clones. All
//! tables sit behind one read-write lock, so each mutation is atomic with
//! respect to every other registry call.

use std::collections::HashMap;

use log::{info, warn};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::common::EngineError;
use crate::game::{Game, GameId};
use crate::player::{Player, PlayerId};

/// Errors returned by registry lookups and updates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no player with id {0}")]
    PlayerNotFound(PlayerId),
    #[error("no game with id {0}")]
    GameNotFound(GameId),
    /// The player index points at a game that does not contain the player.
    #[error("player {player} is indexed to game {game}, but that game does not contain them")]
    Inconsistent { player: PlayerId, game: GameId },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Storage the surrounding service needs to drive games.
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Creates a player and parks them until someone joins.
    async fn start_game(&self, name: String) -> Player;

    /// Snapshot of everyone waiting for an opponent.
    async fn waiting_players(&self) -> Vec<Player>;

    /// The player and, unless they are still waiting, their game.
    async fn player_and_game(
        &self,
        player_id: PlayerId,
    ) -> Result<(Player, Option<Game>), RegistryError>;

    /// Replaces a waiting player, or the matching side of their game.
    async fn update_player(&self, player: Player) -> Result<(), RegistryError>;

    /// Creates a player called `name` and starts a game against the waiting
    /// player `opponent_id`, who becomes player A and shoots first.
    async fn join_game(&self, name: String, opponent_id: PlayerId) -> Result<Game, RegistryError>;

    /// Replaces a known game.
    async fn update_game(&self, game: Game) -> Result<(), RegistryError>;
}

#[derive(Debug, Default)]
struct Tables {
    games: HashMap<GameId, Game>,
    game_by_player: HashMap<PlayerId, GameId>,
    waiting: HashMap<PlayerId, Player>,
}

impl Tables {
    fn game_of(&self, player_id: PlayerId) -> Result<Option<GameId>, RegistryError> {
        match self.game_by_player.get(&player_id) {
            Some(&game_id) if self.games.contains_key(&game_id) => Ok(Some(game_id)),
            Some(&game_id) => Err(RegistryError::GameNotFound(game_id)),
            None => Ok(None),
        }
    }
}

/// [`Registry`] backed by hash maps behind a single `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    tables: RwLock<Tables>,
}

impl InMemoryRegistry {
    /// Empty registry, created once on service start.
    pub fn init() -> Self {
        info!("registry initialised");
        Self::default()
    }

    /// Runs `f` on the canonical game of `player_id` under the write lock.
    ///
    /// Snapshot and write-back happen atomically. `f` must leave the game
    /// untouched when it fails, which every engine operation does.
    pub async fn apply_to_game<T, F>(&self, player_id: PlayerId, f: F) -> Result<T, RegistryError>
    where
        F: FnOnce(&mut Game) -> Result<T, EngineError> + Send,
    {
        let mut tables = self.tables.write().await;
        let game_id = tables
            .game_of(player_id)?
            .ok_or(RegistryError::PlayerNotFound(player_id))?;
        let game = tables
            .games
            .get_mut(&game_id)
            .ok_or(RegistryError::GameNotFound(game_id))?;
        Ok(f(game)?)
    }

    /// Number of running games.
    pub async fn game_count(&self) -> usize {
        self.tables.read().await.games.len()
    }
}

#[async_trait::async_trait]
impl Registry for InMemoryRegistry {
    async fn start_game(&self, name: String) -> Player {
        let player = Player::new(name);
        let mut tables = self.tables.write().await;
        info!("player {} ({}) is waiting", player.id(), player.name());
        tables.waiting.insert(player.id(), player.clone());
        player
    }

    async fn waiting_players(&self) -> Vec<Player> {
        let tables = self.tables.read().await;
        tables
            .waiting
            .values()
            .map(Player::with_fresh_target)
            .collect()
    }

    async fn player_and_game(
        &self,
        player_id: PlayerId,
    ) -> Result<(Player, Option<Game>), RegistryError> {
        let tables = self.tables.read().await;
        if let Some(player) = tables.waiting.get(&player_id) {
            return Ok((player.clone(), None));
        }
        let Some(game_id) = tables.game_of(player_id)? else {
            warn!("lookup of unknown player {}", player_id);
            return Err(RegistryError::PlayerNotFound(player_id));
        };
        let game = &tables.games[&game_id];
        let player = game
            .player(player_id)
            .map_err(|_| RegistryError::Inconsistent {
                player: player_id,
                game: game_id,
            })?;
        Ok((player.clone(), Some(game.clone())))
    }

    async fn update_player(&self, player: Player) -> Result<(), RegistryError> {
        let mut tables = self.tables.write().await;
        if let Some(slot) = tables.waiting.get_mut(&player.id()) {
            *slot = player;
            return Ok(());
        }
        let player_id = player.id();
        let Some(game_id) = tables.game_of(player_id)? else {
            warn!("update of unknown player {}", player_id);
            return Err(RegistryError::PlayerNotFound(player_id));
        };
        let game = tables
            .games
            .get_mut(&game_id)
            .ok_or(RegistryError::GameNotFound(game_id))?;
        game.replace_player(player)
            .map_err(|_| RegistryError::Inconsistent {
                player: player_id,
                game: game_id,
            })
    }

    async fn join_game(&self, name: String, opponent_id: PlayerId) -> Result<Game, RegistryError> {
        let mut tables = self.tables.write().await;
        let player_a = tables
            .waiting
            .remove(&opponent_id)
            .ok_or(RegistryError::PlayerNotFound(opponent_id))?;
        let player_b = Player::new(name);
        let game = Game::new(player_a, player_b, opponent_id);

        let game_id = game.id();
        tables.game_by_player.insert(game.player_a().id(), game_id);
        tables.game_by_player.insert(game.player_b().id(), game_id);
        tables.games.insert(game_id, game.clone());
        info!(
            "game {} started: {} vs {}",
            game_id,
            game.player_a().name(),
            game.player_b().name()
        );
        Ok(game)
    }

    async fn update_game(&self, game: Game) -> Result<(), RegistryError> {
        let mut tables = self.tables.write().await;
        match tables.games.get_mut(&game.id()) {
            Some(slot) => {
                *slot = game;
                Ok(())
            }
            None => Err(RegistryError::GameNotFound(game.id())),
        }
    }
}
