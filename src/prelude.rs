//! Commonly used types and utilities for ease of import.

pub use crate::{
    Cell, CellSet, EngineError, Game, GameId, Orientation, Phase, Player, PlayerId, Ship,
    ShotOutcome, TargetBoard,
};

#[cfg(feature = "std")]
pub use crate::store::{InMemoryRegistry, Registry, RegistryError};
