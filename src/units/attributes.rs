//! Base unit attributes.

use serde::{Deserialize, Serialize};

/// Immutable base stats a unit is created with. Computed totals add item
/// bonuses on top; see `Unit`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitAttributes {
    pub max_hp: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub attack_damage: f64,
    pub ability_power: f64,
    pub attack_range: i32,
    pub ranged: bool,
}

impl UnitAttributes {
    #[must_use]
    pub const fn melee(
        max_hp: f64,
        armor: f64,
        magic_resist: f64,
        attack_damage: f64,
    ) -> Self {
        Self {
            max_hp,
            armor,
            magic_resist,
            attack_damage,
            ability_power: 0.0,
            attack_range: 1,
            ranged: false,
        }
    }

    #[must_use]
    pub const fn ranged(
        max_hp: f64,
        armor: f64,
        magic_resist: f64,
        attack_damage: f64,
        attack_range: i32,
    ) -> Self {
        Self {
            max_hp,
            armor,
            magic_resist,
            attack_damage,
            ability_power: 0.0,
            attack_range,
            ranged: true,
        }
    }

    /// Set base ability power (builder pattern).
    #[must_use]
    pub const fn with_ability_power(mut self, ability_power: f64) -> Self {
        self.ability_power = ability_power;
        self
    }
}
