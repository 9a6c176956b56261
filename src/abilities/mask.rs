//! Effect masks.
//!
//! A mask declares which units an ability may target or affect, as flags
//! over the ally/enemy and champion/minion axes plus an explicit self flag.
//! The same mask type gates both direct unit targets and area effects.

use serde::{Deserialize, Serialize};

/// Which units an ability can affect, relative to its caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectMask {
    pub ally_champions: bool,
    pub ally_minions: bool,
    pub enemy_champions: bool,
    pub enemy_minions: bool,
    pub includes_self: bool,
}

impl EffectMask {
    /// Affects nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            ally_champions: false,
            ally_minions: false,
            enemy_champions: false,
            enemy_minions: false,
            includes_self: false,
        }
    }

    /// Affects enemy champions and minions.
    #[must_use]
    pub const fn enemies() -> Self {
        Self {
            enemy_champions: true,
            enemy_minions: true,
            ..Self::none()
        }
    }

    /// Affects allied champions and minions, excluding the caster.
    #[must_use]
    pub const fn allies() -> Self {
        Self {
            ally_champions: true,
            ally_minions: true,
            ..Self::none()
        }
    }

    /// Affects every unit except the caster.
    #[must_use]
    pub const fn all_units() -> Self {
        Self {
            ally_champions: true,
            ally_minions: true,
            enemy_champions: true,
            enemy_minions: true,
            includes_self: false,
        }
    }

    /// Affects only the caster.
    #[must_use]
    pub const fn self_only() -> Self {
        Self {
            includes_self: true,
            ..Self::none()
        }
    }

    /// Additionally allow the caster (builder pattern).
    #[must_use]
    pub const fn allow_self(mut self) -> Self {
        self.includes_self = true;
        self
    }

    /// Whether a unit with the given relation to the caster passes.
    #[must_use]
    pub fn allows(&self, is_self: bool, is_ally: bool, is_champion: bool) -> bool {
        if is_self {
            return self.includes_self;
        }
        match (is_ally, is_champion) {
            (true, true) => self.ally_champions,
            (true, false) => self.ally_minions,
            (false, true) => self.enemy_champions,
            (false, false) => self.enemy_minions,
        }
    }
}
