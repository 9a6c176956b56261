//! Vessa, the Hourglass Thief.
//!
//! A skirmisher built around her move history. Her shadow marker always
//! shows where Rewind will land; the grenade punishes anyone standing on
//! its path home.

use tracing::trace;

use crate::abilities::{
    Ability, AbilityKind, AbilityMetric, AbilityMetricKind, AbilitySlot,
    AbilityState, EffectMask, RangeMetric, TargetKind,
};
use crate::core::{EffectId, Position, TeamColor, UnitId};
use crate::damage::DamageKind;
use crate::effects::{BoardEffect, EffectKind, EffectState, Hitbox};
use crate::game::Game;
use crate::units::{ChampionData, ChampionKind, Unit, UnitAttributes, UnitKind};

use super::super::metric_value;

/// Number of past positions Rewind remembers; the oldest is the landing
/// square.
const HISTORY_WINDOW: usize = 5;

const Q_LINES: &[&str] = &["Catch!", "Lost something?"];
const R_LINES: &[&str] = &["Let's try that again.", "I know how this ends."];

pub fn create(team: TeamColor) -> Unit {
    let abilities = vec![
        Ability::new(
            AbilitySlot::Q,
            AbilityKind::SandstrikeGrenade,
            "Sandstrike Grenade",
            "Lob a time grenade at a nearby square, damaging the unit \
             there. Next turn the grenade flies back, damaging everything \
             it passes through.",
        )
        .with_target(TargetKind::Location)
        .with_range(2, RangeMetric::Manhattan)
        .with_mask(EffectMask::enemies())
        .with_metric(
            AbilityMetricKind::Damage,
            AbilityMetric::base(70.0).with_ap_scaling(0.8),
        )
        .with_metric(
            AbilityMetricKind::SecondaryDamage,
            AbilityMetric::base(40.0).with_ap_scaling(0.4),
        )
        .with_voice_lines(Q_LINES),
        Ability::new(
            AbilitySlot::R,
            AbilityKind::Rewind,
            "Rewind",
            "Snap back to where you stood four turns ago, shoving aside \
             whoever is standing there, damaging enemies on the four \
             adjacent squares and mending your own wounds.",
        )
        .with_target(TargetKind::SelfCast)
        .with_mask(EffectMask::self_only())
        .requires_mobility()
        .with_metric(
            AbilityMetricKind::Damage,
            AbilityMetric::base(150.0).with_ap_scaling(1.0),
        )
        .with_metric(
            AbilityMetricKind::Healing,
            AbilityMetric::base(100.0).with_ap_scaling(0.6),
        )
        .with_state(AbilityState::RewindHistory {
            positions: Vec::new(),
            shadow: None,
        })
        .with_voice_lines(R_LINES),
    ];

    Unit::new(
        "Vessa",
        UnitKind::Champion,
        team,
        UnitAttributes::melee(650.0, 30.0, 30.0, 55.0),
    )
    .with_champion(ChampionData::new(
        ChampionKind::Vessa,
        "the Hourglass Thief",
        "Time waits for me.",
        &["hourglass", "thief"],
        abilities,
    ))
}

/// Seed the move history and spawn the shadow marker when Vessa lands on
/// the board.
pub(crate) fn on_placed(game: &mut Game, id: UnitId) {
    let (pos, team) = {
        let unit = game.board.unit(id);
        (unit.pos, unit.team)
    };
    let shadow =
        game.spawn_effect(BoardEffect::new(EffectKind::HourglassShadow, pos, team, id));
    if let Some(ability) = game.ability_mut(id, AbilitySlot::R) {
        ability.state = AbilityState::RewindHistory {
            positions: vec![pos],
            shadow: Some(shadow),
        };
    }
}

/// Record the current square at each of Vessa's turn ends and keep the
/// shadow on the landing square.
pub(crate) fn on_turn_end(game: &mut Game, id: UnitId) {
    let pos = game.board.unit(id).pos;
    let (anchor, shadow) = {
        let Some(ability) = game.ability_mut(id, AbilitySlot::R) else {
            return;
        };
        let AbilityState::RewindHistory { positions, shadow } = &mut ability.state
        else {
            return;
        };
        positions.push(pos);
        if positions.len() > HISTORY_WINDOW {
            positions.remove(0);
        }
        (positions[0], *shadow)
    };
    if let Some(shadow) = shadow {
        game.move_effect(shadow, anchor);
    }
}

pub(crate) fn cast_sandstrike(game: &mut Game, caster: UnitId, at: Position) {
    let primary =
        metric_value(game, caster, AbilitySlot::Q, AbilityMetricKind::Damage, None);
    let secondary = metric_value(
        game,
        caster,
        AbilitySlot::Q,
        AbilityMetricKind::SecondaryDamage,
        None,
    );
    let (origin, team) = {
        let unit = game.board.unit(caster);
        (unit.pos, unit.team)
    };
    let grenade = BoardEffect::new(EffectKind::SandGrenade, at, team, caster)
        .with_hitbox(Hitbox::square(1))
        .with_state(EffectState::Grenade {
            origin,
            returning: false,
            primary_damage: primary,
            secondary_damage: secondary,
        });
    // Landing collision runs before this returns.
    game.spawn_effect(grenade);
}

pub(crate) fn cast_rewind(game: &mut Game, caster: UnitId) {
    let damage =
        metric_value(game, caster, AbilitySlot::R, AbilityMetricKind::Damage, None);
    let healing =
        metric_value(game, caster, AbilitySlot::R, AbilityMetricKind::Healing, None);

    let (land, shadow) = {
        let Some(ability) = game.ability(caster, AbilitySlot::R) else {
            return;
        };
        let AbilityState::RewindHistory { positions, shadow } = &ability.state else {
            return;
        };
        match positions.first() {
            Some(&land) => (land, *shadow),
            None => return,
        }
    };

    if let Some(occupant) = game.board.unit_at(land) {
        if occupant != caster {
            game.displace(occupant);
        }
    }
    game.board.move_unit(caster, land);
    trace!(unit = %caster, %land, "rewound");

    // The landing burst clips the four orthogonal neighbors, not the
    // diagonals.
    let caster_team = game.board.unit(caster).team;
    for square in land.directly_adjacent(game.board.size()) {
        let Some(hit) = game.board.unit_at(square) else {
            continue;
        };
        let (alive, enemy) = {
            let u = game.board.unit(hit);
            (u.alive, u.team != caster_team)
        };
        if alive && enemy {
            game.deal_damage(caster, hit, damage, DamageKind::Magic);
        }
    }
    game.heal(caster, healing);

    // History restarts from the landing square.
    if let Some(ability) = game.ability_mut(caster, AbilitySlot::R) {
        if let AbilityState::RewindHistory { positions, .. } = &mut ability.state {
            positions.clear();
            positions.push(land);
        }
    }
    if let Some(shadow) = shadow {
        game.move_effect(shadow, land);
    }
}

/// Grenade collision: primary damage on landing, secondary on the march
/// home. Only enemies of the grenade's team are hit.
pub(crate) fn on_grenade_collision(game: &mut Game, effect: EffectId, unit: UnitId) {
    let (team, owner, damage) = {
        let Some(effect) = game.board.effect(effect) else {
            return;
        };
        let EffectState::Grenade {
            returning,
            primary_damage,
            secondary_damage,
            ..
        } = effect.state
        else {
            return;
        };
        let damage = if returning {
            secondary_damage
        } else {
            primary_damage
        };
        (effect.team, effect.owner, damage)
    };
    let (alive, unit_team) = {
        let u = game.board.unit(unit);
        (u.alive, u.team)
    };
    if alive && unit_team != team {
        game.deal_damage(owner, unit, damage, DamageKind::Magic);
    }
}

/// March the grenade back to its origin square, colliding on every step,
/// then remove it.
pub(crate) fn on_grenade_return(game: &mut Game, effect: EffectId) {
    let (origin, mut pos) = {
        let Some(e) = game.board.effect_mut(effect) else {
            return;
        };
        let EffectState::Grenade {
            origin, returning, ..
        } = &mut e.state
        else {
            return;
        };
        *returning = true;
        (*origin, e.pos)
    };
    while pos != origin {
        pos = pos.offset((origin.x - pos.x).signum(), (origin.y - pos.y).signum());
        game.move_effect(effect, pos);
    }
    game.remove_effect(effect);
}
