//! Kael, the Stormblade.
//!
//! A crit-stacking duelist. His poise doubles crit from items and turns
//! the excess into raw attack damage (see `Unit::attack_damage_total`);
//! his kit layers storm charges into knock-ups and dashes in and out of
//! spirit form.

use crate::abilities::{
    Ability, AbilityKind, AbilityMetric, AbilityMetricKind, AbilitySlot,
    AbilityState, AbilityTarget, CastError, EffectMask, RangeMetric, TargetKind,
};
use crate::core::{Position, TeamColor, UnitId};
use crate::damage::DamageKind;
use crate::game::{DamageListener, Game};
use crate::status::{StatusEffect, StatusKind};
use crate::units::{ChampionData, ChampionKind, Unit, UnitAttributes, UnitKind};

use super::super::metric_value;

/// Storm charges needed to detonate into a knock-up.
const CHARGES_TO_DETONATE: u32 = 2;
/// Fraction of recorded damage repeated as true damage.
const SPIRIT_REPEAT_RATIO: f64 = 0.25;

const Q_LINES: &[&str] = &["Cut once.", "The storm follows."];
const E_LINES: &[&str] = &["Between breaths."];

pub fn create(team: TeamColor) -> Unit {
    let abilities = vec![
        Ability::new(
            AbilitySlot::Passive,
            AbilityKind::StormbladePoise,
            "Stormblade Poise",
            "Kael's critical strike chance from items is doubled; any \
             excess over 100% becomes attack damage.",
        ),
        Ability::new(
            AbilitySlot::Q,
            AbilityKind::TempestEdge,
            "Tempest Edge",
            "Strike a square on a cardinal line. An enemy hit takes \
             physical damage and gains a storm charge; at two charges the \
             storm erupts, knocking the target and the unit behind it \
             airborne.",
        )
        .with_target(TargetKind::Location)
        .with_range(3, RangeMetric::Manhattan)
        .with_mask(EffectMask::enemies())
        .with_metric(
            AbilityMetricKind::Damage,
            AbilityMetric::base(50.0).with_ad_scaling(1.0),
        )
        .with_voice_lines(Q_LINES),
        Ability::new(
            AbilitySlot::E,
            AbilityKind::SpiritStep,
            "Spirit Step",
            "Dash to an empty adjacent square and slip into spirit form. \
             The dash cannot be recast while untethered; when the form \
             fades, a quarter of the damage Kael dealt strikes those \
             targets again as true damage.",
        )
        .with_target(TargetKind::Location)
        .with_range(1, RangeMetric::Square)
        .requires_mobility()
        .with_metric(AbilityMetricKind::EffectDuration, AbilityMetric::base(4.0))
        .with_state(AbilityState::SpiritLedger {
            listener: None,
            recorded: Vec::new(),
        })
        .with_voice_lines(E_LINES),
    ];

    Unit::new(
        "Kael",
        UnitKind::Champion,
        team,
        UnitAttributes::melee(600.0, 28.0, 28.0, 62.0),
    )
    .with_champion(ChampionData::new(
        ChampionKind::Kael,
        "the Stormblade",
        "Two cuts, one breath.",
        &["storm", "stormblade"],
        abilities,
    ))
}

pub(crate) fn validate_tempest_edge(
    game: &Game,
    caster: UnitId,
    target: AbilityTarget,
) -> Result<(), CastError> {
    let AbilityTarget::Location(at) = target else {
        return Ok(());
    };
    let from = game.board.unit(caster).pos;
    if at == from {
        return Err(CastError::InvalidLocation("cannot strike your own square"));
    }
    if at.x != from.x && at.y != from.y {
        return Err(CastError::InvalidLocation(
            "strike must land on a cardinal line",
        ));
    }
    Ok(())
}

pub(crate) fn validate_spirit_step(
    game: &Game,
    caster: UnitId,
    target: AbilityTarget,
) -> Result<(), CastError> {
    let AbilityTarget::Location(at) = target else {
        return Ok(());
    };
    if at == game.board.unit(caster).pos {
        return Err(CastError::InvalidLocation("already standing there"));
    }
    if game.board.unit_at(at).is_some() {
        return Err(CastError::InvalidLocation("destination is occupied"));
    }
    Ok(())
}

pub(crate) fn cast_tempest_edge(game: &mut Game, caster: UnitId, at: Position) {
    let (from, team) = {
        let unit = game.board.unit(caster);
        (unit.pos, unit.team)
    };
    let Some(hit) = game.board.unit_at(at) else {
        return;
    };
    let (alive, ally) = {
        let u = game.board.unit(hit);
        (u.alive, u.team == team)
    };
    if !alive || ally {
        return;
    }

    let damage =
        metric_value(game, caster, AbilitySlot::Q, AbilityMetricKind::Damage, None);
    game.deal_damage(caster, hit, damage, DamageKind::Physical);

    let existing = {
        let unit = game.board.unit_mut(hit);
        unit.status_mut(StatusKind::StormCharge).map(|charge| {
            charge.stacks += 1;
            charge.time_left = Some(4);
            charge.stacks
        })
    };
    let charges = match existing {
        Some(stacks) => stacks,
        None => {
            let mut charge =
                StatusEffect::new(StatusKind::StormCharge, caster).with_duration(4);
            charge.stacks = 1;
            game.apply_status(hit, charge);
            1
        }
    };

    if charges >= CHARGES_TO_DETONATE {
        game.remove_status(hit, StatusKind::StormCharge);
        game.apply_status(
            hit,
            StatusEffect::new(StatusKind::Airborne, caster).with_duration(2),
        );
        // The eruption carries through to the square behind the target.
        let dir = ((at.x - from.x).signum(), (at.y - from.y).signum());
        let behind = at.offset(dir.0, dir.1);
        if let Some(bystander) = game.board.unit_at(behind) {
            if game.board.unit(bystander).alive {
                game.apply_status(
                    bystander,
                    StatusEffect::new(StatusKind::Airborne, caster).with_duration(2),
                );
            }
        }
    }
}

pub(crate) fn cast_spirit_step(game: &mut Game, caster: UnitId, to: Position) {
    game.board.move_unit(caster, to);

    let duration = metric_value(
        game,
        caster,
        AbilitySlot::E,
        AbilityMetricKind::EffectDuration,
        None,
    ) as u32;
    game.apply_status(
        caster,
        StatusEffect::new(StatusKind::SpiritForm, caster).with_duration(duration),
    );

    let listener = game.events.add_listener(DamageListener::RecordDealtBy {
        attacker: caster,
        slot: AbilitySlot::E,
    });
    if let Some(ability) = game.ability_mut(caster, AbilitySlot::E) {
        // The dash seals itself until the form ends; the rest of the kit
        // stays castable.
        ability.casting_enabled = false;
        if let AbilityState::SpiritLedger {
            listener: slot,
            recorded,
        } = &mut ability.state
        {
            *slot = Some(listener);
            recorded.clear();
        }
    }
}

/// Spirit form faded: unseal the dash, stop recording, then repeat a
/// quarter of everything dealt as true damage. The listener comes off the
/// bus first so the repeats are not themselves recorded.
pub(crate) fn on_spirit_form_end(game: &mut Game, holder: UnitId) {
    let (listener, recorded) = {
        let Some(ability) = game.ability_mut(holder, AbilitySlot::E) else {
            return;
        };
        ability.casting_enabled = true;
        let AbilityState::SpiritLedger { listener, recorded } = &mut ability.state
        else {
            return;
        };
        (listener.take(), std::mem::take(recorded))
    };
    if let Some(listener) = listener {
        game.events.remove_listener(listener);
    }
    for (victim, dealt) in recorded {
        if game.board.unit(victim).alive {
            game.deal_damage(
                holder,
                victim,
                dealt * SPIRIT_REPEAT_RATIO,
                DamageKind::True,
            );
        }
    }
}
