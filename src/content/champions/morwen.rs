//! Morwen, the Hollow Prophet.
//!
//! A ranged caster who trades burst for inevitability: a seed that eats
//! at its host turn after turn, and a channel that takes one enemy out of
//! the fight for as long as she can hold it.

use crate::abilities::{
    Ability, AbilityKind, AbilityMetric, AbilityMetricKind, AbilitySlot,
    EffectMask, RangeMetric, TargetKind,
};
use crate::core::{TeamColor, UnitId};
use crate::game::Game;
use crate::status::{StatusEffect, StatusKind};
use crate::units::{
    Channel, ChannelKind, ChampionData, ChampionKind, Unit, UnitAttributes, UnitKind,
};

use super::super::metric_value;

/// Sweeps the infection lasts; it ticks on each of the host's turn ends.
const INFECTION_SWEEPS: u32 = 6;

const E_LINES: &[&str] = &["It takes root.", "Rot, quietly."];
const R_LINES: &[&str] = &["Be still.", "The hollow claims you."];

pub fn create(team: TeamColor) -> Unit {
    let abilities = vec![
        Ability::new(
            AbilitySlot::E,
            AbilityKind::HollowSeed,
            "Hollow Seed",
            "Infect an enemy. At the end of each of its turns for three \
             turns, the seed deals magic damage.",
        )
        .with_target(TargetKind::Unit)
        .with_range(3, RangeMetric::Manhattan)
        .with_mask(EffectMask::enemies())
        .with_metric(
            AbilityMetricKind::Damage,
            AbilityMetric::base(30.0).with_ap_scaling(0.45),
        )
        .with_voice_lines(E_LINES),
        Ability::new(
            AbilitySlot::R,
            AbilityKind::Gravelock,
            "Gravelock",
            "Channel for two turns, suppressing an enemy. The lock \
             releases early if the channel is interrupted.",
        )
        .with_target(TargetKind::Unit)
        .with_range(2, RangeMetric::Manhattan)
        .with_mask(EffectMask::enemies())
        .with_metric(AbilityMetricKind::EffectDuration, AbilityMetric::base(2.0))
        .with_voice_lines(R_LINES),
    ];

    Unit::new(
        "Morwen",
        UnitKind::Champion,
        team,
        UnitAttributes::ranged(525.0, 22.0, 30.0, 50.0, 3),
    )
    .with_champion(ChampionData::new(
        ChampionKind::Morwen,
        "the Hollow Prophet",
        "Everything empties eventually.",
        &["prophet", "hollow"],
        abilities,
    ))
}

pub(crate) fn cast_hollow_seed(game: &mut Game, caster: UnitId, target: UnitId) {
    let magnitude = metric_value(
        game,
        caster,
        AbilitySlot::E,
        AbilityMetricKind::Damage,
        Some(target),
    );
    // Re-seeding refreshes the existing infection instead of stacking.
    let refreshed = {
        let unit = game.board.unit_mut(target);
        match unit.status_mut(StatusKind::VoidInfection) {
            Some(infection) => {
                infection.time_left = Some(INFECTION_SWEEPS);
                infection.magnitude = magnitude;
                infection.source = caster;
                true
            }
            None => false,
        }
    };
    if !refreshed {
        game.apply_status(
            target,
            StatusEffect::new(StatusKind::VoidInfection, caster)
                .with_duration(INFECTION_SWEEPS)
                .with_magnitude(magnitude),
        );
    }
}

pub(crate) fn cast_gravelock(game: &mut Game, caster: UnitId, target: UnitId) {
    let duration = metric_value(
        game,
        caster,
        AbilitySlot::R,
        AbilityMetricKind::EffectDuration,
        None,
    ) as u32;
    game.apply_status(target, StatusEffect::new(StatusKind::Suppressed, caster));
    game.begin_channel(caster, ChannelKind::Gravelock { target }, duration);
}

/// The channel ended, cleanly or not: lift this channeler's suppression.
pub(crate) fn release_gravelock(game: &mut Game, channeler: UnitId, channel: Channel) {
    let ChannelKind::Gravelock { target } = channel.kind;
    let _ = game
        .board
        .unit_mut(target)
        .remove_status_from(StatusKind::Suppressed, channeler);
}
