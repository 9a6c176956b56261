//! Turn engine: alternation, action points, status lifecycle, channels.

use gridclash::{
    create_champion, create_minion, AbilitySlot, AbilityTarget, BoardError,
    ChampionKind, Game, GameConfig, Position, StatusEffect, StatusKind, TeamColor,
    UnitId,
};

fn game() -> Game {
    Game::new(GameConfig::new().with_seed(3))
}

fn place_champion(game: &mut Game, kind: ChampionKind, team: TeamColor, x: i32, y: i32) -> UnitId {
    game.place_unit(create_champion(kind, team), Position::new(x, y))
        .unwrap()
}

#[test]
fn test_turn_alternates_red_blue() {
    let mut game = game();
    assert_eq!(game.turn(), TeamColor::Red);
    game.end_turn();
    assert_eq!(game.turn(), TeamColor::Blue);
    game.end_turn();
    assert_eq!(game.turn(), TeamColor::Red);
    game.end_turn();
    assert_eq!(game.turn(), TeamColor::Blue);
}

#[test]
fn test_action_points_refresh_on_turn_start() {
    let mut game = game();
    assert_eq!(game.team(TeamColor::Red).action_points, 2);

    assert!(game.team_mut(TeamColor::Red).spend_action_point());
    assert!(game.team_mut(TeamColor::Red).spend_action_point());
    assert!(!game.team_mut(TeamColor::Red).spend_action_point());

    game.end_turn();
    assert_eq!(game.team(TeamColor::Blue).action_points, 2);
    game.end_turn();
    assert_eq!(game.team(TeamColor::Red).action_points, 2);
}

#[test]
fn test_status_expires_after_exact_duration() {
    let mut game = game();
    let red = game
        .place_unit(create_minion(TeamColor::Red), Position::new(0, 0))
        .unwrap();
    let blue = game
        .place_unit(create_minion(TeamColor::Blue), Position::new(0, 1))
        .unwrap();

    game.apply_status(red, StatusEffect::new(StatusKind::Rooted, blue).with_duration(2));
    assert!(!game.unit(red).can_move());

    game.end_turn();
    assert!(game.unit(red).has_status(StatusKind::Rooted));
    assert!(!game.unit(red).can_move());

    game.end_turn();
    assert!(!game.unit(red).has_status(StatusKind::Rooted));
    assert!(game.unit(red).can_move());
    assert_eq!(game.unit(red).immobilizing_stacks, 0);
}

#[test]
fn test_indefinite_status_survives_sweeps() {
    let mut game = game();
    let red = game
        .place_unit(create_minion(TeamColor::Red), Position::new(0, 0))
        .unwrap();
    let blue = game
        .place_unit(create_minion(TeamColor::Blue), Position::new(0, 1))
        .unwrap();

    game.apply_status(red, StatusEffect::new(StatusKind::Suppressed, blue));
    for _ in 0..10 {
        game.end_turn();
    }
    assert!(game.unit(red).has_status(StatusKind::Suppressed));
}

#[test]
fn test_gravelock_channel_completes_and_releases() {
    let mut game = game();
    let morwen = place_champion(&mut game, ChampionKind::Morwen, TeamColor::Red, 0, 0);
    let kael = place_champion(&mut game, ChampionKind::Kael, TeamColor::Blue, 0, 2);

    game.cast_ability(morwen, AbilitySlot::R, AbilityTarget::Unit(kael))
        .unwrap();
    assert!(game.unit(morwen).is_channeling());
    assert!(!game.unit(kael).can_move());
    assert!(!game.unit(kael).can_cast());

    // Victim cannot act on its own turn.
    game.end_turn();
    let err = game.move_unit(kael, Position::new(0, 3)).unwrap_err();
    assert_eq!(err, BoardError::Immobilized);

    // Channel runs out at the end of the victim's turn.
    game.end_turn();
    assert!(!game.unit(morwen).is_channeling());
    assert!(game.unit(kael).can_move());
    assert!(!game.unit(kael).has_status(StatusKind::Suppressed));
}

#[test]
fn test_cc_on_channeler_releases_suppression_early() {
    let mut game = game();
    let morwen = place_champion(&mut game, ChampionKind::Morwen, TeamColor::Red, 0, 0);
    let kael = place_champion(&mut game, ChampionKind::Kael, TeamColor::Blue, 0, 2);

    game.cast_ability(morwen, AbilitySlot::R, AbilityTarget::Unit(kael))
        .unwrap();
    assert!(!game.unit(kael).can_move());

    game.apply_status(morwen, StatusEffect::new(StatusKind::Stunned, kael).with_duration(2));
    assert!(!game.unit(morwen).is_channeling());
    assert!(game.unit(kael).can_move());
    assert!(!game.unit(kael).has_status(StatusKind::Suppressed));
}

#[test]
fn test_moving_interrupts_the_channel() {
    let mut game = game();
    let morwen = place_champion(&mut game, ChampionKind::Morwen, TeamColor::Red, 0, 0);
    let kael = place_champion(&mut game, ChampionKind::Kael, TeamColor::Blue, 0, 2);

    game.cast_ability(morwen, AbilitySlot::R, AbilityTarget::Unit(kael))
        .unwrap();
    game.move_unit(morwen, Position::new(1, 0)).unwrap();

    assert!(!game.unit(morwen).is_channeling());
    assert!(game.unit(kael).can_move());
}

#[test]
fn test_casting_interrupts_the_channel() {
    let mut game = game();
    let morwen = place_champion(&mut game, ChampionKind::Morwen, TeamColor::Red, 0, 0);
    let kael = place_champion(&mut game, ChampionKind::Kael, TeamColor::Blue, 0, 2);

    game.cast_ability(morwen, AbilitySlot::R, AbilityTarget::Unit(kael))
        .unwrap();
    assert!(!game.unit(kael).can_move());

    // A new cast cuts the channel before resolving.
    game.cast_ability(morwen, AbilitySlot::E, AbilityTarget::Unit(kael))
        .unwrap();
    assert!(!game.unit(morwen).is_channeling());
    assert!(game.unit(kael).can_move());
    assert!(game.unit(kael).has_status(StatusKind::VoidInfection));
}
