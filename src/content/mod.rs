//! Game content: the champion roster, minions, and ability behavior.
//!
//! The engine below this module is content-agnostic; everything champion
//! specific (kits, hooks, per-kind effect behavior) lives here and is
//! reached through the `resolver` dispatch functions.

pub mod champions;
mod resolver;

use rustc_hash::FxHashMap;

use crate::abilities::{AbilityMetricKind, AbilitySlot};
use crate::core::{TeamColor, UnitId};
use crate::game::Game;
use crate::units::{ChampionKind, Unit, UnitAttributes, UnitKind};

pub(crate) use resolver::{
    on_active_turn_end, on_channel_complete, on_channel_interrupted,
    on_effect_collision, on_effect_placed, on_effect_removed,
    on_effect_turn_end, on_status_expired, on_unit_placed,
    record_spirit_damage, resolve_cast, validate_cast,
};

/// Evaluate one of an ability's metrics against the caster's current
/// stats (and the target's max HP, when there is a target).
#[must_use]
pub fn metric_value(
    game: &Game,
    caster: UnitId,
    slot: AbilitySlot,
    kind: AbilityMetricKind,
    target: Option<UnitId>,
) -> f64 {
    let Some(metric) = game.ability(caster, slot).and_then(|a| a.metric(kind)) else {
        return 0.0;
    };
    let caster = game.unit(caster);
    let target_max_hp = target.map_or(0.0, |t| game.unit(t).max_hp_total());
    metric.compute(
        caster.attack_damage_total(),
        caster.ability_power_total(),
        caster.max_hp_total(),
        target_max_hp,
    )
}

/// Build a champion for a team.
#[must_use]
pub fn create_champion(kind: ChampionKind, team: TeamColor) -> Unit {
    match kind {
        ChampionKind::Vessa => champions::vessa::create(team),
        ChampionKind::Sylra => champions::sylra::create(team),
        ChampionKind::Kael => champions::kael::create(team),
        ChampionKind::Morwen => champions::morwen::create(team),
    }
}

/// Build a basic minion.
#[must_use]
pub fn create_minion(team: TeamColor) -> Unit {
    Unit::new(
        "Minion",
        UnitKind::Minion,
        team,
        UnitAttributes::melee(100.0, 0.0, 0.0, 30.0),
    )
}

/// Name and nickname lookup over the roster. An explicit value, built
/// once by the host; there is no global registry.
#[derive(Clone, Debug, Default)]
pub struct ChampionRegistry {
    by_name: FxHashMap<String, ChampionKind>,
}

impl ChampionRegistry {
    /// Registry over the full standard roster.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::default();
        for kind in [
            ChampionKind::Vessa,
            ChampionKind::Sylra,
            ChampionKind::Kael,
            ChampionKind::Morwen,
        ] {
            registry.register(kind);
        }
        registry
    }

    fn register(&mut self, kind: ChampionKind) {
        // Build a throwaway instance to read its names.
        let unit = create_champion(kind, TeamColor::Neutral);
        self.by_name.insert(unit.name.to_lowercase(), kind);
        if let Some(champion) = &unit.champion {
            for nickname in champion.nicknames {
                self.by_name.insert(nickname.to_lowercase(), kind);
            }
        }
    }

    /// Case-insensitive lookup by name or nickname.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ChampionKind> {
        self.by_name.get(&name.to_lowercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = ChampionRegistry::standard();
        assert_eq!(registry.lookup("Vessa"), Some(ChampionKind::Vessa));
        assert_eq!(registry.lookup("HOURGLASS"), Some(ChampionKind::Vessa));
        assert_eq!(registry.lookup("stormblade"), Some(ChampionKind::Kael));
        assert_eq!(registry.lookup("prophet"), Some(ChampionKind::Morwen));
        assert_eq!(registry.lookup("nobody"), None);
    }

    #[test]
    fn test_minion_stats() {
        let minion = create_minion(TeamColor::Blue);
        assert_eq!(minion.kind, UnitKind::Minion);
        assert_eq!(minion.attributes.max_hp, 100.0);
        assert_eq!(minion.attributes.attack_damage, 30.0);
        assert!(!minion.attributes.ranged);
    }

    #[test]
    fn test_every_champion_builds() {
        for kind in [
            ChampionKind::Vessa,
            ChampionKind::Sylra,
            ChampionKind::Kael,
            ChampionKind::Morwen,
        ] {
            let unit = create_champion(kind, TeamColor::Red);
            assert_eq!(unit.kind, UnitKind::Champion);
            let champion = unit.champion.as_ref().unwrap();
            assert_eq!(champion.kind, kind);
            assert!(champion.abilities().count() > 0);
        }
    }
}
