#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod grid;
mod placement;
mod player;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod sim;
#[cfg(feature = "std")]
pub mod store;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use bitboard::{CellSet, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use placement::*;
pub use player::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use store::{InMemoryRegistry, Registry, RegistryError};
