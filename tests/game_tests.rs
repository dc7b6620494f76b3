use battleshipper::{
    Cell, CellSet, EngineError, Game, GameId, Orientation, Phase, Player, PlayerId, Ship,
    ShotOutcome,
};

fn cell(x: usize, y: usize) -> Cell {
    Cell::new(x, y).unwrap()
}

/// Ship `i` of the standard test fleet: column `2 * i`, starting at the top.
fn column_ship(i: usize, length: usize) -> Ship {
    Ship::line(cell(2 * i, 0), Orientation::Vertical, length).unwrap()
}

fn fill(game: &mut Game, player: PlayerId) {
    for i in 0..5 {
        let length = game.next_ship_length(player).unwrap();
        game.add_ship(player, column_ship(i, length)).unwrap();
    }
}

fn initialize() -> (PlayerId, PlayerId, Game) {
    let a = Player::with_id(PlayerId(1), "Anomander");
    let b = Player::with_id(PlayerId(2), "Whiskeyjack");
    let game = Game::with_id(GameId(7), a, b, PlayerId(1));
    (PlayerId(1), PlayerId(2), game)
}

fn initialize_and_start() -> (PlayerId, PlayerId, Game) {
    let (a, b, mut game) = initialize();
    fill(&mut game, a);
    fill(&mut game, b);
    (a, b, game)
}

fn set(cells: &[(usize, usize)]) -> CellSet {
    cells.iter().map(|&(x, y)| cell(x, y)).collect()
}

#[test]
fn fresh_players_and_games_get_ids() {
    let a = Player::new("Anomander");
    let b = Player::new("Whiskeyjack");
    assert_ne!(a.id(), PlayerId(0));
    assert_ne!(a.id(), b.id());
    let starting = a.id();
    let game = Game::new(a, b, starting);
    assert_ne!(game.id(), GameId(0));
    assert_eq!(game.turn(), starting);
    assert_eq!(game.winner(), None);
    assert_eq!(game.phase(), Phase::Setup);
}

#[test]
fn next_ship_length_follows_fleet_then_fails() {
    let (a, _, mut game) = initialize();
    let mut lengths = Vec::new();
    for i in 0..5 {
        let length = game.next_ship_length(a).unwrap();
        lengths.push(length);
        game.add_ship(a, column_ship(i, length)).unwrap();
    }
    assert_eq!(lengths, vec![5, 4, 4, 3, 3]);
    assert_eq!(game.next_ship_length(a), Err(EngineError::FleetFull));
    assert_eq!(
        game.player(a).unwrap().clone().add_ship(column_ship(0, 3)),
        Err(EngineError::FleetFull)
    );
}

#[test]
fn next_ship_length_for_stranger_fails() {
    let (_, _, game) = initialize();
    assert_eq!(
        game.next_ship_length(PlayerId(99)),
        Err(EngineError::UnknownPlayer {
            player: PlayerId(99),
            game: GameId(7)
        })
    );
}

#[test]
fn add_ship_rejects_wrong_length() {
    let mut player = Player::with_id(PlayerId(1), "p");
    let err = player.add_ship(column_ship(0, 4)).unwrap_err();
    assert_eq!(
        err,
        EngineError::WrongLength {
            expected: 5,
            actual: 4
        }
    );
    assert!(player.ships().is_empty());
}

#[test]
fn add_ship_rejects_overlap_and_touching() {
    let mut player = Player::with_id(PlayerId(1), "p");
    player
        .add_ship(Ship::line(cell(3, 3), Orientation::Horizontal, 5).unwrap())
        .unwrap();
    let before = player.clone();

    // overlapping
    let overlap = Ship::line(cell(5, 1), Orientation::Vertical, 4).unwrap();
    assert_eq!(
        player.add_ship(overlap),
        Err(EngineError::CellUnavailable { cell: cell(5, 2) })
    );
    // orthogonally adjacent
    let side = Ship::line(cell(3, 4), Orientation::Horizontal, 4).unwrap();
    assert!(matches!(
        player.add_ship(side),
        Err(EngineError::CellUnavailable { .. })
    ));
    // touching only at a corner
    let corner = Ship::line(cell(8, 4), Orientation::Vertical, 4).unwrap();
    assert_eq!(
        player.add_ship(corner),
        Err(EngineError::CellUnavailable { cell: cell(8, 4) })
    );
    assert_eq!(player, before);

    let clear = Ship::line(cell(3, 5), Orientation::Horizontal, 4).unwrap();
    player.add_ship(clear).unwrap();
    assert_eq!(player.ships().len(), 2);
}

#[test]
fn available_cells_exclude_ship_and_ring() {
    let mut player = Player::with_id(PlayerId(1), "p");
    assert!(player.available_cells().iter().flatten().all(|&free| free));
    player.add_ship(column_ship(0, 5)).unwrap();
    let grid = player.available_cells();
    for x in 0..10 {
        for y in 0..10 {
            let blocked = x <= 1 && y <= 5;
            assert_eq!(grid[x][y], !blocked, "cell ({}, {})", x, y);
        }
    }
    assert_eq!(player.available_mask().len(), 100 - 12);
}

#[test]
fn shoot_before_start_fails() {
    let (a, b, mut game) = initialize();
    assert_eq!(game.shoot(a, cell(0, 0)), Err(EngineError::GameNotStarted));
    fill(&mut game, a);
    assert_eq!(game.shoot(a, cell(0, 0)), Err(EngineError::GameNotStarted));
    assert_eq!(game.shoot(b, cell(5, 5)), Err(EngineError::GameNotStarted));
    assert_eq!(game.phase(), Phase::Setup);
    fill(&mut game, b);
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn shoot_out_of_turn_changes_nothing() {
    let (_, b, mut game) = initialize_and_start();
    let before = game.clone();
    assert_eq!(
        game.shoot(b, cell(0, 0)),
        Err(EngineError::OutOfTurn { player: b })
    );
    assert_eq!(game, before);
}

#[test]
fn shot_in_wrong_game_fails() {
    let (_, _, mut game) = initialize_and_start();
    let stranger = PlayerId(42);
    assert_eq!(
        game.shoot(stranger, cell(0, 0)),
        Err(EngineError::OutOfTurn { player: stranger })
    );

    // A corrupt turn marker pointing at a stranger passes the turn check.
    let a = game.player_a().clone();
    let b = game.player_b().clone();
    let mut odd = Game::with_id(GameId(8), a, b, stranger);
    let before = odd.clone();
    assert_eq!(
        odd.shoot(stranger, cell(0, 0)),
        Err(EngineError::UnknownPlayer {
            player: stranger,
            game: GameId(8)
        })
    );
    assert_eq!(odd, before);
}

#[test]
fn shoot_and_miss() {
    let (a, b, mut game) = initialize_and_start();
    let opponent_before = game.player_b().clone();
    assert_eq!(game.shoot(a, cell(9, 9)), Ok(ShotOutcome::MISS));

    let target = game.player(a).unwrap().target();
    assert_eq!(target.misses(), set(&[(9, 9)]));
    assert!(target.hits().is_empty());
    assert!(target.sunk_ships().is_empty());
    assert_eq!(game.player_b(), &opponent_before);
    assert_eq!(game.turn(), b);
}

#[test]
fn shoot_and_hit() {
    let (a, _, mut game) = initialize_and_start();
    assert_eq!(game.shoot(a, cell(0, 0)), Ok(ShotOutcome::HIT));
    let target = game.player(a).unwrap().target();
    assert_eq!(target.hits(), set(&[(0, 0)]));
    assert!(target.misses().is_empty());
}

#[test]
fn turn_alternates_between_both_players() {
    let (a, b, mut game) = initialize_and_start();
    game.shoot(a, cell(9, 9)).unwrap();
    assert_eq!(game.turn(), b);
    game.shoot(b, cell(9, 9)).unwrap();
    assert_eq!(game.turn(), a);
    game.shoot(a, cell(0, 0)).unwrap();
    assert_eq!(game.turn(), b);
    game.shoot(b, cell(0, 0)).unwrap();
    assert_eq!(game.turn(), a);
}

#[test]
fn shoot_and_sink_rings_the_ship() {
    let (a, b, mut game) = initialize_and_start();
    for y in 0..4 {
        assert_eq!(game.shoot(a, cell(0, y)), Ok(ShotOutcome::HIT));
        game.shoot(b, cell(9, y)).unwrap();
    }
    let outcome = game.shoot(a, cell(0, 4)).unwrap();
    assert_eq!(outcome, ShotOutcome::SINK);

    let target = game.player(a).unwrap().target();
    assert!(target.hits().is_empty());
    assert_eq!(target.sunk_ships(), &[column_ship(0, 5)]);
    assert_eq!(
        target.misses(),
        set(&[(1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (0, 5)])
    );
    assert_eq!(game.winner(), None);
}

#[test]
fn shooting_a_sunk_ship_again_learns_nothing() {
    let (a, b, mut game) = initialize_and_start();
    for y in 0..5 {
        game.shoot(a, cell(0, y)).unwrap();
        game.shoot(b, cell(9, y)).unwrap();
    }
    let known = game.player(a).unwrap().target().clone();
    assert_eq!(game.shoot(a, cell(0, 2)), Ok(ShotOutcome::HIT));
    assert_eq!(game.player(a).unwrap().target(), &known);
    assert_eq!(game.turn(), b);
}

#[test]
fn sinking_the_fifth_ship_wins() {
    let (a, b, mut game) = initialize_and_start();
    let fleet: Vec<Ship> = game.player_b().ships().to_vec();
    let mut b_shots = (0..10).cycle().map(|y| cell(9, y));
    let mut last = ShotOutcome::MISS;
    for ship in &fleet {
        for c in ship.cells() {
            assert_eq!(game.phase(), Phase::InProgress);
            last = game.shoot(a, c).unwrap();
            if !last.won {
                game.shoot(b, b_shots.next().unwrap()).unwrap();
            }
        }
    }
    assert_eq!(last, ShotOutcome::WIN);
    assert_eq!(game.winner(), Some(a));
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.player(a).unwrap().target().sunk_ships().len(), 5);

    let before = game.clone();
    assert_eq!(game.shoot(b, cell(0, 0)), Err(EngineError::GameFinished));
    assert_eq!(game.shoot(a, cell(0, 0)), Err(EngineError::GameFinished));
    assert_eq!(game, before);
}

#[test]
fn longest_ship_sunk_last_wins() {
    let (a, b, mut game) = initialize_and_start();
    let fleet: Vec<Ship> = game.player_b().ships().to_vec();
    let mut b_shots = (0..10).cycle().map(|y| cell(9, y));
    for ship in &fleet[1..] {
        for c in ship.cells() {
            let outcome = game.shoot(a, c).unwrap();
            assert!(outcome.hit && !outcome.won);
            game.shoot(b, b_shots.next().unwrap()).unwrap();
        }
    }
    assert_eq!(game.player(a).unwrap().target().sunk_ships().len(), 4);
    assert_eq!(game.winner(), None);

    for y in 0..4 {
        assert_eq!(game.shoot(a, cell(0, y)), Ok(ShotOutcome::HIT));
        game.shoot(b, b_shots.next().unwrap()).unwrap();
    }
    assert_eq!(game.shoot(a, cell(0, 4)), Ok(ShotOutcome::WIN));
    assert_eq!(game.winner(), Some(a));
    let target = game.player(a).unwrap().target();
    assert!(target.hits().is_empty());
    assert_eq!(target.sunk_ships().last(), Some(&column_ship(0, 5)));
    assert_eq!(game.shoot(b, cell(9, 9)), Err(EngineError::GameFinished));
}

#[test]
fn replace_player_swaps_the_matching_side() {
    let (a, b, mut game) = initialize();
    let mut updated = game.player(b).unwrap().clone();
    updated.add_ship(column_ship(0, 5)).unwrap();
    game.replace_player(updated.clone()).unwrap();
    assert_eq!(game.player(b).unwrap(), &updated);
    assert!(game.player(a).unwrap().ships().is_empty());

    let stranger = Player::with_id(PlayerId(99), "stranger");
    let before = game.clone();
    assert!(matches!(
        game.replace_player(stranger),
        Err(EngineError::UnknownPlayer { .. })
    ));
    assert_eq!(game, before);
}

#[test]
fn add_ship_routes_to_the_right_player() {
    let (a, b, mut game) = initialize();
    game.add_ship(b, column_ship(0, 5)).unwrap();
    assert!(game.player(a).unwrap().ships().is_empty());
    assert_eq!(game.player(b).unwrap().ships().len(), 1);
    assert_eq!(game.next_ship_length(b), Ok(4));
    assert!(matches!(
        game.add_ship(PlayerId(99), column_ship(0, 5)),
        Err(EngineError::UnknownPlayer { .. })
    ));
    assert_eq!(game.opponent(a).unwrap().id(), b);
    assert_eq!(game.opponent(b).unwrap().id(), a);
}

#[test]
fn ship_constructors_validate_cells() {
    assert_eq!(Ship::new(Vec::new()), Err(EngineError::EmptyShip));
    assert_eq!(
        Ship::line(cell(8, 0), Orientation::Horizontal, 3),
        Err(EngineError::OutOfBounds { x: 10, y: 0 })
    );
    let dup = Ship::new([cell(1, 1), cell(1, 1), cell(1, 2)]).unwrap();
    assert_eq!(dup.len(), 2);
    assert_eq!(
        dup,
        Ship::line(cell(1, 1), Orientation::Vertical, 2).unwrap()
    );
}
