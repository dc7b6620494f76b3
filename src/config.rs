/// Width and height of the square grid.
pub const BOARD_SIZE: u8 = 10;
/// Number of ships in a complete fleet.
pub const NUM_SHIPS: usize = 5;
/// Required ship lengths, in placement order.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 4, 3, 3];

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 4 + 3 + 3;

/// How many random positions `random_ship` tries before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Length of the ship that must be placed after `placed` ships are already
/// on the board. Returns `None` once the fleet is complete.
pub const fn ship_length(placed: usize) -> Option<usize> {
    if placed < NUM_SHIPS {
        Some(FLEET_LENGTHS[placed])
    } else {
        None
    }
}
