//! Behavior dispatch.
//!
//! The framework layers (`game`, `board`, `status`, `effects`) carry no
//! champion knowledge; every kind-specific behavior funnels through the
//! functions here, matching on the relevant tag.

use crate::abilities::{AbilityKind, AbilitySlot, AbilityState, AbilityTarget, CastError};
use crate::core::{EffectId, UnitId};
use crate::effects::EffectKind;
use crate::game::Game;
use crate::status::{StatusEffect, StatusKind};
use crate::units::{ChampionKind, Channel};

use super::champions::{kael, morwen, sylra, vessa};

/// Ability-specific validation, run after the shared gates (target shape,
/// range, mask) and before caster-state checks. Read-only.
pub(crate) fn validate_cast(
    game: &Game,
    caster: UnitId,
    kind: AbilityKind,
    target: AbilityTarget,
) -> Result<(), CastError> {
    if let AbilityTarget::Unit(id) = target {
        if !game.board.unit(id).alive {
            return Err(CastError::InvalidTarget("target is dead"));
        }
    }
    match kind {
        AbilityKind::PiercingLight => sylra::validate_piercing_light(game, caster, target),
        AbilityKind::TempestEdge => kael::validate_tempest_edge(game, caster, target),
        AbilityKind::SpiritStep => kael::validate_spirit_step(game, caster, target),
        AbilityKind::SandstrikeGrenade
        | AbilityKind::Rewind
        | AbilityKind::HollowSeed
        | AbilityKind::Gravelock
        | AbilityKind::StormbladePoise => Ok(()),
    }
}

/// Run a fully validated cast.
pub(crate) fn resolve_cast(
    game: &mut Game,
    caster: UnitId,
    kind: AbilityKind,
    target: AbilityTarget,
) {
    match (kind, target) {
        (AbilityKind::SandstrikeGrenade, AbilityTarget::Location(at)) => {
            vessa::cast_sandstrike(game, caster, at);
        }
        (AbilityKind::Rewind, AbilityTarget::NoTarget) => {
            vessa::cast_rewind(game, caster);
        }
        (AbilityKind::PiercingLight, AbilityTarget::Unit(id)) => {
            sylra::cast_piercing_light(game, caster, id);
        }
        (AbilityKind::TempestEdge, AbilityTarget::Location(at)) => {
            kael::cast_tempest_edge(game, caster, at);
        }
        (AbilityKind::SpiritStep, AbilityTarget::Location(at)) => {
            kael::cast_spirit_step(game, caster, at);
        }
        (AbilityKind::HollowSeed, AbilityTarget::Unit(id)) => {
            morwen::cast_hollow_seed(game, caster, id);
        }
        (AbilityKind::Gravelock, AbilityTarget::Unit(id)) => {
            morwen::cast_gravelock(game, caster, id);
        }
        _ => {}
    }
}

/// A unit just landed on the board.
pub(crate) fn on_unit_placed(game: &mut Game, id: UnitId) {
    let kind = game.board.unit(id).champion.as_ref().map(|c| c.kind);
    if kind == Some(ChampionKind::Vessa) {
        vessa::on_placed(game, id);
    }
}

/// A status effect timed out (after CC release, before the next unit's
/// sweep).
pub(crate) fn on_status_expired(game: &mut Game, holder: UnitId, effect: StatusEffect) {
    if effect.kind == StatusKind::SpiritForm {
        kael::on_spirit_form_end(game, holder);
    }
}

pub(crate) fn on_channel_complete(game: &mut Game, unit: UnitId, channel: Channel) {
    morwen::release_gravelock(game, unit, channel);
}

pub(crate) fn on_channel_interrupted(game: &mut Game, unit: UnitId, channel: Channel) {
    morwen::release_gravelock(game, unit, channel);
}

/// End-of-turn hook for units whose team's turn just ended.
pub(crate) fn on_active_turn_end(game: &mut Game, id: UnitId) {
    let kind = game.board.unit(id).champion.as_ref().map(|c| c.kind);
    if kind == Some(ChampionKind::Vessa) {
        vessa::on_turn_end(game, id);
    }
}

/// A battlefield effect was just registered, before its placement
/// collisions run.
pub(crate) fn on_effect_placed(game: &mut Game, id: EffectId) {
    let kind = match game.board.effect(id) {
        Some(effect) => effect.kind,
        None => return,
    };
    match kind {
        // Nothing in the current roster reacts to its own placement; the
        // grenade's landing damage comes from the collision pass.
        EffectKind::HourglassShadow | EffectKind::SandGrenade => {}
    }
}

/// A battlefield effect is about to come off the board.
pub(crate) fn on_effect_removed(game: &mut Game, id: EffectId) {
    let kind = match game.board.effect(id) {
        Some(effect) => effect.kind,
        None => return,
    };
    match kind {
        EffectKind::HourglassShadow | EffectKind::SandGrenade => {}
    }
}

/// End-of-turn hook for battlefield effects. `active` means the effect's
/// team is the one whose turn ended.
pub(crate) fn on_effect_turn_end(game: &mut Game, id: EffectId, active: bool) {
    let kind = match game.board.effect(id) {
        Some(effect) => effect.kind,
        None => return,
    };
    if kind == EffectKind::SandGrenade && !active {
        vessa::on_grenade_return(game, id);
    }
}

/// A unit intersects an effect's hitbox (at placement or after a step).
pub(crate) fn on_effect_collision(game: &mut Game, effect: EffectId, unit: UnitId) {
    let kind = match game.board.effect(effect) {
        Some(e) => e.kind,
        None => return,
    };
    if kind == EffectKind::SandGrenade {
        vessa::on_grenade_collision(game, effect, unit);
    }
}

/// Push one recorded damage instance into a spirit-step ledger.
pub(crate) fn record_spirit_damage(
    game: &mut Game,
    attacker: UnitId,
    slot: AbilitySlot,
    target: UnitId,
    amount: f64,
) {
    if let Some(ability) = game.ability_mut(attacker, slot) {
        if let AbilityState::SpiritLedger { recorded, .. } = &mut ability.state {
            recorded.push((target, amount));
        }
    }
}
