//! Damage types and mitigation math.
//!
//! Three damage flavors with distinct mitigation paths:
//! - **Physical** is reduced by armor, after the attacker's lethality is
//!   subtracted from it.
//! - **Magic** is reduced by magic resistance.
//! - **True** ignores mitigation entirely.
//!
//! Mitigation follows the standard diminishing-returns curve: a resistance
//! of `r >= 0` multiplies damage by `100 / (100 + r)`, while negative
//! resistance amplifies it by `2 - 100 / (100 - r)`.

use serde::{Deserialize, Serialize};

/// Flavor of a damage instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    Physical,
    Magic,
    True,
}

impl std::fmt::Display for DamageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DamageKind::Physical => "Physical",
            DamageKind::Magic => "Magic",
            DamageKind::True => "True",
        };
        write!(f, "{name}")
    }
}

/// Multiplier applied to raw damage for a given resistance value.
///
/// Zero resistance passes damage through unchanged; the multiplier never
/// reaches zero for finite resistance and never exceeds 2 for negative
/// resistance.
#[must_use]
pub fn mitigation_multiplier(resistance: f64) -> f64 {
    if resistance >= 0.0 {
        100.0 / (100.0 + resistance)
    } else {
        2.0 - 100.0 / (100.0 - resistance)
    }
}

/// Post-mitigation damage for a raw amount against effective resistance.
///
/// For physical damage the caller passes `armor - lethality` as the
/// effective resistance; lethality can push it negative and amplify.
#[must_use]
pub fn mitigate(raw: f64, resistance: f64) -> f64 {
    raw * mitigation_multiplier(resistance)
}
