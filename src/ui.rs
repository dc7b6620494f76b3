#![cfg(feature = "std")]

//! Plain-text rendering of grids for the CLI.
//!
//! Columns are `x` (letters A–J), rows are `y` (numbers 1–10).

use std::fmt::Write;

use crate::board::{CellKnowledge, TargetBoard};
use crate::config::BOARD_SIZE;
use crate::grid::Cell;
use crate::player::{Availability, Player};

fn render_grid<F>(glyph: F) -> String
where
    F: Fn(Cell) -> char,
{
    let mut out = String::new();
    out.push_str("    ╔═══════════════════════╗\n");
    out.push_str("    ║  ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + x) as char);
    }
    out.push_str(" ║\n");
    out.push_str("    ╠═══════════════════════╣\n");
    for y in 0..BOARD_SIZE as usize {
        let _ = write!(out, "    ║ {:2}", y + 1);
        for x in 0..BOARD_SIZE as usize {
            let ch = Cell::new(x, y).map(&glyph).unwrap_or('?');
            let _ = write!(out, " {}", ch);
        }
        out.push_str(" ║\n");
    }
    out.push_str("    ╚═══════════════════════╝\n");
    out
}

/// A player's own grid with their ships and the water around them.
pub fn render_fleet(player: &Player) -> String {
    let occupied = player.occupied();
    let mut out = render_grid(|cell| if occupied.contains(cell) { 'S' } else { '.' });
    out.push_str("    Legend: S=Ship  .=Water\n");
    for (i, ship) in player.ships().iter().enumerate() {
        let _ = writeln!(out, "      Ship {} (length {})", i + 1, ship.len());
    }
    out
}

/// What a player knows about the opponent.
pub fn render_target(target: &TargetBoard) -> String {
    let mut out = render_grid(|cell| match target.knowledge(cell) {
        CellKnowledge::Hit => 'X',
        CellKnowledge::Sunk => '#',
        CellKnowledge::Miss => 'o',
        CellKnowledge::Unknown => '.',
    });
    out.push_str("    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown\n");
    out
}

/// Where the next ship may go.
pub fn render_availability(grid: &Availability) -> String {
    let mut out = render_grid(|cell| if grid[cell.x()][cell.y()] { '+' } else { '.' });
    out.push_str("    Legend: +=Available  .=Blocked\n");
    out
}
