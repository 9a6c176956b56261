//! The cast-validation pipeline: every gate, and the promise that a
//! rejected cast mutates nothing.

use gridclash::{
    create_champion, create_minion, AbilitySlot, AbilityTarget, CastError,
    ChampionKind, Game, GameConfig, Position, StatusEffect, StatusKind, TeamColor,
    UnitId,
};

fn game() -> Game {
    Game::new(GameConfig::new().with_seed(7))
}

fn place_champion(game: &mut Game, kind: ChampionKind, team: TeamColor, x: i32, y: i32) -> UnitId {
    game.place_unit(create_champion(kind, team), Position::new(x, y))
        .unwrap()
}

/// Observable state that a failed cast must leave untouched.
fn snapshot(game: &Game, ids: &[UnitId]) -> Vec<(f64, Position, usize, bool)> {
    ids.iter()
        .map(|&id| {
            let u = game.unit(id);
            (u.hp, u.pos, u.statuses.len(), u.is_channeling())
        })
        .collect()
}

#[test]
fn test_empty_slot_rejected() {
    let mut game = game();
    let vessa = place_champion(&mut game, ChampionKind::Vessa, TeamColor::Red, 0, 0);
    let err = game
        .cast_ability(vessa, AbilitySlot::W, AbilityTarget::NoTarget)
        .unwrap_err();
    assert_eq!(err, CastError::NoSuchAbility);
}

#[test]
fn test_passive_slot_not_castable() {
    let mut game = game();
    let kael = place_champion(&mut game, ChampionKind::Kael, TeamColor::Red, 0, 0);
    let err = game
        .cast_ability(kael, AbilitySlot::Passive, AbilityTarget::NoTarget)
        .unwrap_err();
    assert_eq!(err, CastError::NotCastable);
}

#[test]
fn test_minions_cannot_cast() {
    let mut game = game();
    let minion = game
        .place_unit(create_minion(TeamColor::Red), Position::new(0, 0))
        .unwrap();
    let err = game
        .cast_ability(minion, AbilitySlot::Q, AbilityTarget::NoTarget)
        .unwrap_err();
    assert_eq!(err, CastError::NoSuchAbility);
}

#[test]
fn test_disabled_ability_rejected() {
    let mut game = game();
    let vessa = place_champion(&mut game, ChampionKind::Vessa, TeamColor::Red, 0, 0);
    if let Some(champion) = game.board.unit_mut(vessa).champion.as_mut() {
        if let Some(ability) = champion.ability_mut(AbilitySlot::Q) {
            ability.casting_enabled = false;
        }
    }
    let err = game
        .cast_ability(
            vessa,
            AbilitySlot::Q,
            AbilityTarget::Location(Position::new(0, 1)),
        )
        .unwrap_err();
    assert_eq!(err, CastError::CastingDisabled);
}

#[test]
fn test_wrong_target_type_rejected() {
    let mut game = game();
    let vessa = place_champion(&mut game, ChampionKind::Vessa, TeamColor::Red, 0, 0);
    let morwen = place_champion(&mut game, ChampionKind::Morwen, TeamColor::Blue, 0, 1);

    // Sandstrike Grenade is location-targeted.
    let err = game
        .cast_ability(vessa, AbilitySlot::Q, AbilityTarget::Unit(morwen))
        .unwrap_err();
    assert_eq!(err, CastError::WrongTargetType);
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = game();
    let vessa = place_champion(&mut game, ChampionKind::Vessa, TeamColor::Red, 0, 0);
    // Grenade range is 2 (Manhattan); (2, 1) is distance 3.
    let err = game
        .cast_ability(
            vessa,
            AbilitySlot::Q,
            AbilityTarget::Location(Position::new(2, 1)),
        )
        .unwrap_err();
    assert_eq!(err, CastError::OutOfRange);
}

#[test]
fn test_out_of_bounds_location_rejected() {
    let mut game = game();
    let vessa = place_champion(&mut game, ChampionKind::Vessa, TeamColor::Red, 7, 7);
    let err = game
        .cast_ability(
            vessa,
            AbilitySlot::Q,
            AbilityTarget::Location(Position::new(8, 7)),
        )
        .unwrap_err();
    assert!(matches!(err, CastError::InvalidLocation(_)));
}

#[test]
fn test_mask_rejects_ally_target() {
    let mut game = game();
    let morwen = place_champion(&mut game, ChampionKind::Morwen, TeamColor::Red, 0, 0);
    let ally = place_champion(&mut game, ChampionKind::Kael, TeamColor::Red, 0, 1);

    let err = game
        .cast_ability(morwen, AbilitySlot::E, AbilityTarget::Unit(ally))
        .unwrap_err();
    assert_eq!(err, CastError::TargetNotAllowed);
}

#[test]
fn test_dead_target_rejected() {
    let mut game = game();
    let morwen = place_champion(&mut game, ChampionKind::Morwen, TeamColor::Red, 0, 0);
    let victim = game
        .place_unit(create_minion(TeamColor::Blue), Position::new(0, 1))
        .unwrap();
    game.deal_damage(morwen, victim, 500.0, gridclash::DamageKind::True);

    let err = game
        .cast_ability(morwen, AbilitySlot::E, AbilityTarget::Unit(victim))
        .unwrap_err();
    assert!(matches!(err, CastError::InvalidTarget(_)));
}

#[test]
fn test_cardinal_filter_rejects_diagonal() {
    let mut game = game();
    let sylra = place_champion(&mut game, ChampionKind::Sylra, TeamColor::Red, 0, 0);
    let diag = place_champion(&mut game, ChampionKind::Kael, TeamColor::Blue, 1, 1);

    let err = game
        .cast_ability(sylra, AbilitySlot::Q, AbilityTarget::Unit(diag))
        .unwrap_err();
    assert!(matches!(err, CastError::InvalidTarget(_)));
}

#[test]
fn test_silenced_caster_rejected() {
    let mut game = game();
    let vessa = place_champion(&mut game, ChampionKind::Vessa, TeamColor::Red, 0, 0);
    game.apply_status(vessa, StatusEffect::new(StatusKind::Stunned, vessa));

    let err = game
        .cast_ability(
            vessa,
            AbilitySlot::Q,
            AbilityTarget::Location(Position::new(0, 1)),
        )
        .unwrap_err();
    assert_eq!(err, CastError::Silenced);
}

#[test]
fn test_immobilized_caster_rejected_when_mobility_required() {
    let mut game = game();
    let vessa = place_champion(&mut game, ChampionKind::Vessa, TeamColor::Red, 0, 0);
    // Rooted immobilizes without silencing; Rewind needs mobility.
    game.apply_status(vessa, StatusEffect::new(StatusKind::Rooted, vessa));

    let err = game
        .cast_ability(vessa, AbilitySlot::R, AbilityTarget::NoTarget)
        .unwrap_err();
    assert_eq!(err, CastError::Immobilized);

    // The grenade has no mobility requirement and still works while rooted.
    game.cast_ability(
        vessa,
        AbilitySlot::Q,
        AbilityTarget::Location(Position::new(0, 1)),
    )
    .unwrap();
}

#[test]
fn test_failed_cast_mutates_nothing() {
    let mut game = game();
    let vessa = place_champion(&mut game, ChampionKind::Vessa, TeamColor::Red, 0, 0);
    let kael = place_champion(&mut game, ChampionKind::Kael, TeamColor::Blue, 0, 3);
    let minion = game
        .place_unit(create_minion(TeamColor::Blue), Position::new(3, 3))
        .unwrap();
    let ids = [vessa, kael, minion];

    let before = snapshot(&game, &ids);
    let effects_before = game.board.all_effect_ids();

    let attempts = [
        (vessa, AbilitySlot::W, AbilityTarget::NoTarget),
        (vessa, AbilitySlot::Q, AbilityTarget::Unit(kael)),
        (vessa, AbilitySlot::Q, AbilityTarget::Location(Position::new(5, 5))),
        (vessa, AbilitySlot::Q, AbilityTarget::Location(Position::new(-1, 0))),
        (kael, AbilitySlot::Q, AbilityTarget::Location(Position::new(1, 2))),
        (kael, AbilitySlot::E, AbilityTarget::Location(Position::new(3, 3))),
    ];
    for (caster, slot, target) in attempts {
        assert!(game.cast_ability(caster, slot, target).is_err());
    }

    assert_eq!(snapshot(&game, &ids), before);
    assert_eq!(game.board.all_effect_ids(), effects_before);
}
