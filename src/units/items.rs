//! Item catalog.
//!
//! Items are identified by a tag; their stats live in a static catalog so
//! a unit only carries `ItemId`s. All bonuses are additive.

use serde::{Deserialize, Serialize};

/// Additive stat bonuses granted by an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatBonuses {
    pub ability_power: f64,
    pub attack_damage: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub max_hp: f64,
    pub lethality: f64,
    pub crit_chance: f64,
    pub omnivamp: f64,
}

/// Every purchasable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemId {
    HonedBlade,
    AmplifyingCrystal,
    Warplate,
    NullMantle,
    TitanGirdle,
    Fangpiercer,
    Stormraker,
    Bloodthorn,
}

/// Static description of one item.
#[derive(Clone, Copy, Debug)]
pub struct ItemSpec {
    pub name: &'static str,
    pub bonuses: StatBonuses,
    pub cost: u32,
}

impl ItemId {
    /// Catalog entry for this item.
    #[must_use]
    pub const fn spec(self) -> ItemSpec {
        const NONE: StatBonuses = StatBonuses {
            ability_power: 0.0,
            attack_damage: 0.0,
            armor: 0.0,
            magic_resist: 0.0,
            max_hp: 0.0,
            lethality: 0.0,
            crit_chance: 0.0,
            omnivamp: 0.0,
        };
        match self {
            ItemId::HonedBlade => ItemSpec {
                name: "Honed Blade",
                bonuses: StatBonuses {
                    attack_damage: 10.0,
                    ..NONE
                },
                cost: 350,
            },
            ItemId::AmplifyingCrystal => ItemSpec {
                name: "Amplifying Crystal",
                bonuses: StatBonuses {
                    ability_power: 20.0,
                    ..NONE
                },
                cost: 435,
            },
            ItemId::Warplate => ItemSpec {
                name: "Warplate",
                bonuses: StatBonuses {
                    armor: 40.0,
                    ..NONE
                },
                cost: 800,
            },
            ItemId::NullMantle => ItemSpec {
                name: "Null Mantle",
                bonuses: StatBonuses {
                    magic_resist: 40.0,
                    ..NONE
                },
                cost: 800,
            },
            ItemId::TitanGirdle => ItemSpec {
                name: "Titan Girdle",
                bonuses: StatBonuses {
                    max_hp: 350.0,
                    ..NONE
                },
                cost: 900,
            },
            ItemId::Fangpiercer => ItemSpec {
                name: "Fangpiercer",
                bonuses: StatBonuses {
                    attack_damage: 20.0,
                    lethality: 10.0,
                    ..NONE
                },
                cost: 1000,
            },
            ItemId::Stormraker => ItemSpec {
                name: "Stormraker",
                bonuses: StatBonuses {
                    attack_damage: 15.0,
                    crit_chance: 0.25,
                    ..NONE
                },
                cost: 1100,
            },
            ItemId::Bloodthorn => ItemSpec {
                name: "Bloodthorn",
                bonuses: StatBonuses {
                    attack_damage: 25.0,
                    omnivamp: 0.1,
                    ..NONE
                },
                cost: 1300,
            },
        }
    }
}
