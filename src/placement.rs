//! Random fleet placement and random target selection.
//!
//! Used by the simulation driver and by tests that need complete, legal
//! fleets without spelling out every coordinate.

use alloc::vec::Vec;

use rand::Rng;

use crate::board::TargetBoard;
use crate::common::EngineError;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::Cell;
use crate::player::Player;
use crate::ship::{Orientation, Ship};

/// Returns a random straight ship of the length `player` must place next,
/// lying entirely on available cells.
///
/// Tries `MAX_PLACEMENT_ATTEMPTS` random positions first, then picks among
/// every legal position. `UnableToPlace` means no legal position exists.
pub fn random_ship<R: Rng>(rng: &mut R, player: &Player) -> Result<Ship, EngineError> {
    let length = player.next_ship_length()?;
    let available = player.available_mask();
    let span = BOARD_SIZE as usize - length;
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (span, BOARD_SIZE as usize - 1),
            Orientation::Vertical => (BOARD_SIZE as usize - 1, span),
        };
        let origin = Cell::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y))?;
        let ship = Ship::line(origin, orientation, length)?;
        if ship.mask().is_subset(&available) {
            return Ok(ship);
        }
    }
    let candidates: Vec<Ship> = [Orientation::Horizontal, Orientation::Vertical]
        .into_iter()
        .flat_map(|orientation| {
            Cell::all().filter_map(move |origin| Ship::line(origin, orientation, length).ok())
        })
        .filter(|ship| ship.mask().is_subset(&available))
        .collect();
    if candidates.is_empty() {
        return Err(EngineError::UnableToPlace { length });
    }
    Ok(candidates[rng.random_range(0..candidates.len())])
}

/// Places random ships until `player`'s fleet is complete.
pub fn place_fleet<R: Rng>(rng: &mut R, player: &mut Player) -> Result<(), EngineError> {
    while !player.fleet_complete() {
        let ship = random_ship(rng, player)?;
        player.add_ship(ship)?;
    }
    Ok(())
}

/// A uniformly random cell that `target` knows nothing about yet.
pub fn random_target<R: Rng>(rng: &mut R, target: &TargetBoard) -> Option<Cell> {
    let unknown = target.unknown_cells();
    if unknown.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..unknown.len());
    unknown.iter().nth(pick)
}
