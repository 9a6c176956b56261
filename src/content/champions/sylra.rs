//! Sylra, the Last Lantern.
//!
//! A ranged support whose light cuts both ways: the same ray that burns
//! enemies mends allies.

use crate::abilities::{
    Ability, AbilityKind, AbilityMetric, AbilityMetricKind, AbilitySlot,
    AbilityTarget, CastError, EffectMask, RangeMetric, TargetKind,
};
use crate::core::{TeamColor, UnitId};
use crate::damage::DamageKind;
use crate::game::Game;
use crate::units::{ChampionData, ChampionKind, Unit, UnitAttributes, UnitKind};

use super::super::metric_value;

/// How far the ray reaches past the caster.
const RAY_LENGTH: i32 = 3;

const Q_LINES: &[&str] = &["Hold the light.", "Darkness folds."];

pub fn create(team: TeamColor) -> Unit {
    let abilities = vec![Ability::new(
        AbilitySlot::Q,
        AbilityKind::PiercingLight,
        "Piercing Light",
        "Fire a lance of light through a unit on a cardinal line, \
         damaging every enemy and healing every ally along three squares.",
    )
    .with_target(TargetKind::Unit)
    .with_range(RAY_LENGTH, RangeMetric::Manhattan)
    .with_mask(EffectMask::all_units())
    .with_metric(
        AbilityMetricKind::Damage,
        AbilityMetric::base(60.0).with_ad_scaling(0.8),
    )
    .with_metric(
        AbilityMetricKind::Healing,
        AbilityMetric::base(40.0).with_ap_scaling(0.4),
    )
    .with_voice_lines(Q_LINES)];

    Unit::new(
        "Sylra",
        UnitKind::Champion,
        team,
        UnitAttributes::ranged(550.0, 25.0, 25.0, 60.0, 4),
    )
    .with_champion(ChampionData::new(
        ChampionKind::Sylra,
        "the Last Lantern",
        "One lantern against the dark.",
        &["lantern"],
        abilities,
    ))
}

/// The target must sit on a cardinal line from the caster.
pub(crate) fn validate_piercing_light(
    game: &Game,
    caster: UnitId,
    target: AbilityTarget,
) -> Result<(), CastError> {
    let AbilityTarget::Unit(id) = target else {
        return Ok(());
    };
    let from = game.board.unit(caster).pos;
    let to = game.board.unit(id).pos;
    if from.x != to.x && from.y != to.y {
        return Err(CastError::InvalidTarget("target must be on a cardinal line"));
    }
    Ok(())
}

pub(crate) fn cast_piercing_light(game: &mut Game, caster: UnitId, target: UnitId) {
    let damage = metric_value(
        game,
        caster,
        AbilitySlot::Q,
        AbilityMetricKind::Damage,
        Some(target),
    );
    let healing = metric_value(
        game,
        caster,
        AbilitySlot::Q,
        AbilityMetricKind::Healing,
        None,
    );
    let (from, team) = {
        let unit = game.board.unit(caster);
        (unit.pos, unit.team)
    };
    let to = game.board.unit(target).pos;
    let dir = ((to.x - from.x).signum(), (to.y - from.y).signum());

    for step in 1..=RAY_LENGTH {
        let pos = from.offset(dir.0 * step, dir.1 * step);
        if !pos.in_bounds(game.board.size()) {
            break;
        }
        let Some(hit) = game.board.unit_at(pos) else {
            continue;
        };
        let (alive, ally) = {
            let u = game.board.unit(hit);
            (u.alive, u.team == team)
        };
        if !alive {
            continue;
        }
        if ally {
            game.heal(hit, healing);
        } else {
            game.deal_damage(caster, hit, damage, DamageKind::Physical);
        }
    }
}
