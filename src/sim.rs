#![cfg(feature = "std")]

//! Seeded random-vs-random matches driven through a registry.

use anyhow::{anyhow, Context};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::ShotOutcome;
use crate::game::Phase;
use crate::placement::{place_fleet, random_target};
use crate::player::PlayerId;
use crate::store::{InMemoryRegistry, Registry};

/// Upper bound on shots in one match: each side has 100 cells to shoot at.
const MAX_SHOTS: usize = 200;

/// Which side of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// Summary of a finished simulated match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SimReport {
    pub seed: u64,
    pub winner: Side,
    pub winner_name: String,
    /// Accepted shots by both sides.
    pub shots: usize,
    pub sunk_by_a: usize,
    pub sunk_by_b: usize,
}

/// Plays one match between `name_a` and `name_b`.
///
/// `name_a` waits, `name_b` joins, both fleets are placed at random and
/// the players take turns firing at random unexplored cells until one of
/// them wins. Every shot goes through [`InMemoryRegistry::apply_to_game`].
pub async fn simulate(
    registry: &InMemoryRegistry,
    seed: u64,
    name_a: &str,
    name_b: &str,
) -> anyhow::Result<SimReport> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let waiting = registry.start_game(name_a.to_string()).await;
    let game = registry.join_game(name_b.to_string(), waiting.id()).await?;
    let (a_id, b_id) = (game.player_a().id(), game.player_b().id());

    for id in [a_id, b_id] {
        let (mut player, _) = registry.player_and_game(id).await?;
        place_fleet(&mut rng, &mut player).context("placing fleet")?;
        registry.update_player(player).await?;
    }

    let mut shots = 0;
    loop {
        if shots >= MAX_SHOTS {
            return Err(anyhow!("no winner after {} shots", MAX_SHOTS));
        }
        let fired = registry
            .apply_to_game(a_id, |game| {
                let shooter = game.turn();
                let cell = random_target(&mut rng, game.player(shooter)?.target());
                match cell {
                    Some(cell) => game.shoot(shooter, cell).map(|o| Some((shooter, cell, o))),
                    None => Ok(None),
                }
            })
            .await?;
        let (shooter, cell, outcome): (PlayerId, _, ShotOutcome) =
            fired.ok_or_else(|| anyhow!("shooter ran out of targets"))?;
        shots += 1;
        debug!("shot {}: {} -> {} {:?}", shots, shooter, cell, outcome);
        if outcome.won {
            break;
        }
    }

    let (_, game) = registry.player_and_game(a_id).await?;
    let game = game.ok_or_else(|| anyhow!("player {} lost their game", a_id))?;
    if game.phase() != Phase::Finished {
        return Err(anyhow!("game {} ended without a winner", game.id()));
    }
    let winner_id = game
        .winner()
        .ok_or_else(|| anyhow!("game {} has no winner", game.id()))?;
    let winner = if winner_id == a_id { Side::A } else { Side::B };
    let winner_name = game.player(winner_id)?.name().to_string();

    Ok(SimReport {
        seed,
        winner,
        winner_name,
        shots,
        sunk_by_a: game.player(a_id)?.target().sunk_ships().len(),
        sunk_by_b: game.player(b_id)?.target().sunk_ships().len(),
    })
}
