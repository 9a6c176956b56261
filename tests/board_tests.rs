//! Board placement, movement and displacement scenarios.

use proptest::prelude::*;

use gridclash::{
    create_minion, BoardError, Game, GameConfig, Position, TeamColor, UnitId,
};

fn game() -> Game {
    Game::new(GameConfig::new())
}

#[test]
fn test_place_then_query() {
    let mut game = game();
    let pos = Position::new(3, 4);
    let id = game
        .place_unit(create_minion(TeamColor::Red), pos)
        .unwrap();

    assert_eq!(game.unit_at(pos), Some(id));
    assert_eq!(game.unit(id).pos, pos);
}

#[test]
fn test_place_out_of_bounds_rejected() {
    let mut game = game();
    let err = game
        .place_unit(create_minion(TeamColor::Red), Position::new(8, 0))
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds);
}

#[test]
fn test_place_on_occupied_rejected() {
    let mut game = game();
    let pos = Position::new(2, 2);
    game.place_unit(create_minion(TeamColor::Red), pos).unwrap();
    let err = game
        .place_unit(create_minion(TeamColor::Blue), pos)
        .unwrap_err();
    assert_eq!(err, BoardError::Occupied);
}

#[test]
fn test_move_adjacency_rules() {
    let mut game = game();
    let id = game
        .place_unit(create_minion(TeamColor::Red), Position::new(4, 4))
        .unwrap();

    // Diagonal neighbors count as adjacent.
    game.move_unit(id, Position::new(5, 5)).unwrap();
    assert_eq!(game.unit(id).pos, Position::new(5, 5));

    let err = game.move_unit(id, Position::new(7, 5)).unwrap_err();
    assert_eq!(err, BoardError::NotAdjacent);
}

#[test]
fn test_move_onto_occupied_rejected() {
    let mut game = game();
    let a = game
        .place_unit(create_minion(TeamColor::Red), Position::new(0, 0))
        .unwrap();
    game.place_unit(create_minion(TeamColor::Blue), Position::new(0, 1))
        .unwrap();

    let err = game.move_unit(a, Position::new(0, 1)).unwrap_err();
    assert_eq!(err, BoardError::Occupied);
    assert_eq!(game.unit(a).pos, Position::new(0, 0));
}

#[test]
fn test_dead_units_keep_their_square() {
    let mut game = game();
    let red = game
        .place_unit(create_minion(TeamColor::Red), Position::new(0, 0))
        .unwrap();
    let blue = game
        .place_unit(create_minion(TeamColor::Blue), Position::new(0, 1))
        .unwrap();

    game.deal_damage(red, blue, 500.0, gridclash::DamageKind::True);
    assert!(!game.unit(blue).alive);
    assert_eq!(game.unit_at(Position::new(0, 1)), Some(blue));

    let err = game.move_unit(blue, Position::new(0, 2)).unwrap_err();
    assert_eq!(err, BoardError::DeadUnit);
}

#[test]
fn test_displace_prefers_square_behind() {
    let mut game = game();
    // Blue advances toward increasing y, so behind is y - 1.
    let id = game
        .place_unit(create_minion(TeamColor::Blue), Position::new(3, 3))
        .unwrap();
    let landed = game.displace(id);
    assert_eq!(landed, Position::new(3, 2));
    assert_eq!(game.unit_at(Position::new(3, 3)), None);
}

#[test]
fn test_displace_falls_back_to_nearest_empty() {
    let mut game = game();
    // Block the square behind the red minion (for Red, behind is y + 1).
    let id = game
        .place_unit(create_minion(TeamColor::Red), Position::new(0, 0))
        .unwrap();
    game.place_unit(create_minion(TeamColor::Blue), Position::new(0, 1))
        .unwrap();

    let landed = game.displace(id);
    // Nearest empty at Manhattan distance 1, row-major tie-break.
    assert_eq!(landed, Position::new(1, 0));
}

proptest! {
    /// After any in-bounds placement sequence, the slot array and every
    /// unit's cached position agree.
    #[test]
    fn prop_occupancy_consistent(
        coords in proptest::collection::hash_set((0..8i32, 0..8i32), 1..20)
    ) {
        let mut game = Game::new(GameConfig::new());
        let mut placed: Vec<(UnitId, Position)> = Vec::new();
        for (i, (x, y)) in coords.into_iter().enumerate() {
            let team = if i % 2 == 0 { TeamColor::Red } else { TeamColor::Blue };
            let pos = Position::new(x, y);
            let id = game.place_unit(create_minion(team), pos).unwrap();
            placed.push((id, pos));
        }
        for (id, pos) in placed {
            prop_assert_eq!(game.unit_at(pos), Some(id));
            prop_assert_eq!(game.unit(id).pos, pos);
            prop_assert!(game.unit(id).linked);
        }
    }

    /// Moving a unit around never desynchronizes slots and cached
    /// positions, and always vacates the previous square.
    #[test]
    fn prop_moves_keep_board_consistent(steps in proptest::collection::vec(0..4usize, 1..30)) {
        let mut game = Game::new(GameConfig::new());
        let id = game
            .place_unit(create_minion(TeamColor::Red), Position::new(4, 4))
            .unwrap();
        for step in steps {
            let from = game.unit(id).pos;
            let to = match step {
                0 => from.offset(1, 0),
                1 => from.offset(-1, 0),
                2 => from.offset(0, 1),
                _ => from.offset(0, -1),
            };
            if !to.in_bounds(8) {
                continue;
            }
            game.move_unit(id, to).unwrap();
            prop_assert_eq!(game.unit_at(from), None);
            prop_assert_eq!(game.unit_at(to), Some(id));
            prop_assert_eq!(game.unit(id).pos, to);
        }
    }
}
