//! Ability metrics.
//!
//! A metric is a named scalar on an ability (damage, healing, duration)
//! computed from a flat base plus stat scalings. Keeping them in a table
//! rather than hard-coded numbers lets tooltips and tests read the same
//! values the resolver uses.

use serde::{Deserialize, Serialize};

/// What a metric measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityMetricKind {
    Damage,
    SecondaryDamage,
    Healing,
    Shielding,
    EffectDuration,
}

/// Base value plus stat scalings.
///
/// Computed as `base + ad*AD + ap*AP + chp*casterMaxHP + thp*targetMaxHP`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilityMetric {
    pub base: f64,
    pub ad_scaling: f64,
    pub ap_scaling: f64,
    pub caster_max_hp_scaling: f64,
    pub target_max_hp_scaling: f64,
}

impl AbilityMetric {
    /// A flat metric with no scalings.
    #[must_use]
    pub const fn base(base: f64) -> Self {
        Self {
            base,
            ad_scaling: 0.0,
            ap_scaling: 0.0,
            caster_max_hp_scaling: 0.0,
            target_max_hp_scaling: 0.0,
        }
    }

    /// Add attack-damage scaling (builder pattern).
    #[must_use]
    pub const fn with_ad_scaling(mut self, ratio: f64) -> Self {
        self.ad_scaling = ratio;
        self
    }

    /// Add ability-power scaling (builder pattern).
    #[must_use]
    pub const fn with_ap_scaling(mut self, ratio: f64) -> Self {
        self.ap_scaling = ratio;
        self
    }

    /// Add caster max-HP scaling (builder pattern).
    #[must_use]
    pub const fn with_caster_max_hp_scaling(mut self, ratio: f64) -> Self {
        self.caster_max_hp_scaling = ratio;
        self
    }

    /// Add target max-HP scaling (builder pattern).
    #[must_use]
    pub const fn with_target_max_hp_scaling(mut self, ratio: f64) -> Self {
        self.target_max_hp_scaling = ratio;
        self
    }

    /// Evaluate against the caster's stats. `target_max_hp` is zero when
    /// there is no target.
    #[must_use]
    pub fn compute(
        &self,
        attack_damage: f64,
        ability_power: f64,
        caster_max_hp: f64,
        target_max_hp: f64,
    ) -> f64 {
        self.base
            + self.ad_scaling * attack_damage
            + self.ap_scaling * ability_power
            + self.caster_max_hp_scaling * caster_max_hp
            + self.target_max_hp_scaling * target_max_hp
    }
}
