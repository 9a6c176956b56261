//! The unit type.

use smallvec::SmallVec;

use crate::core::{Position, TeamColor, UnitId};
use crate::status::{StatusEffect, StatusKind};

use super::attributes::UnitAttributes;
use super::champion::{ChampionData, ChampionKind};
use super::channel::Channel;
use super::items::{ItemId, StatBonuses};

/// Champion or minion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Champion,
    Minion,
}

/// A unit on (or headed for) the board.
///
/// Owned by the board's unit arena; everything else refers to it by
/// `UnitId`. Dead units keep their id, position and slot.
#[derive(Clone, Debug)]
pub struct Unit {
    /// Assigned by the board on placement.
    pub id: UnitId,
    pub name: String,
    pub kind: UnitKind,
    pub team: TeamColor,
    pub attributes: UnitAttributes,
    pub hp: f64,
    pub alive: bool,
    /// Cached board position; meaningful only while linked.
    pub pos: Position,
    /// Whether the unit has been placed on a board.
    pub linked: bool,
    pub items: Vec<ItemId>,
    pub statuses: SmallVec<[StatusEffect; 4]>,
    pub channel: Option<Channel>,
    /// Count of active immobilizing CC sources.
    pub immobilizing_stacks: u32,
    /// Count of active silencing CC sources.
    pub silencing_stacks: u32,
    pub champion: Option<ChampionData>,
}

impl Unit {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: UnitKind,
        team: TeamColor,
        attributes: UnitAttributes,
    ) -> Self {
        Self {
            id: UnitId(u32::MAX),
            name: name.into(),
            kind,
            team,
            attributes,
            hp: attributes.max_hp,
            alive: true,
            pos: Position::new(0, 0),
            linked: false,
            items: Vec::new(),
            statuses: SmallVec::new(),
            channel: None,
            immobilizing_stacks: 0,
            silencing_stacks: 0,
            champion: None,
        }
    }

    /// Attach champion data (builder pattern).
    #[must_use]
    pub fn with_champion(mut self, champion: ChampionData) -> Self {
        self.champion = Some(champion);
        self
    }

    /// Equip items (builder pattern). HP is topped up to the new maximum.
    #[must_use]
    pub fn with_items(mut self, items: Vec<ItemId>) -> Self {
        self.items = items;
        self.hp = self.max_hp_total();
        self
    }

    fn item_bonuses(&self) -> StatBonuses {
        let mut total = StatBonuses::default();
        for item in &self.items {
            let b = item.spec().bonuses;
            total.ability_power += b.ability_power;
            total.attack_damage += b.attack_damage;
            total.armor += b.armor;
            total.magic_resist += b.magic_resist;
            total.max_hp += b.max_hp;
            total.lethality += b.lethality;
            total.crit_chance += b.crit_chance;
            total.omnivamp += b.omnivamp;
        }
        total
    }

    fn champion_kind(&self) -> Option<ChampionKind> {
        self.champion.as_ref().map(|c| c.kind)
    }

    // Computed stat totals.

    #[must_use]
    pub fn max_hp_total(&self) -> f64 {
        self.attributes.max_hp + self.item_bonuses().max_hp
    }

    #[must_use]
    pub fn armor_total(&self) -> f64 {
        self.attributes.armor + self.item_bonuses().armor
    }

    #[must_use]
    pub fn magic_resist_total(&self) -> f64 {
        self.attributes.magic_resist + self.item_bonuses().magic_resist
    }

    /// Crit chance, capped at 100%. Kael doubles crit from items; the
    /// excess over the cap feeds `attack_damage_total` instead.
    #[must_use]
    pub fn crit_chance_total(&self) -> f64 {
        self.raw_crit_chance().min(1.0)
    }

    fn raw_crit_chance(&self) -> f64 {
        let crit = self.item_bonuses().crit_chance;
        match self.champion_kind() {
            Some(ChampionKind::Kael) => crit * 2.0,
            _ => crit,
        }
    }

    /// Attack damage. For Kael, crit above the 100% cap converts into
    /// 40 attack damage per 100% of excess.
    #[must_use]
    pub fn attack_damage_total(&self) -> f64 {
        let base = self.attributes.attack_damage + self.item_bonuses().attack_damage;
        let excess_crit = (self.raw_crit_chance() - 1.0).max(0.0);
        base + excess_crit * 40.0
    }

    #[must_use]
    pub fn ability_power_total(&self) -> f64 {
        self.attributes.ability_power + self.item_bonuses().ability_power
    }

    #[must_use]
    pub fn lethality(&self) -> f64 {
        self.item_bonuses().lethality
    }

    #[must_use]
    pub fn omnivamp(&self) -> f64 {
        self.item_bonuses().omnivamp
    }

    // State predicates.

    #[must_use]
    pub fn can_move(&self) -> bool {
        self.alive && self.immobilizing_stacks == 0
    }

    #[must_use]
    pub fn can_cast(&self) -> bool {
        self.alive && self.silencing_stacks == 0
    }

    #[must_use]
    pub fn is_channeling(&self) -> bool {
        self.channel.is_some()
    }

    // Status management. Hook dispatch belongs to `Game`; these methods
    // only keep the list and the CC counters consistent.

    #[must_use]
    pub fn status(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.statuses.iter().find(|s| s.kind == kind)
    }

    pub fn status_mut(&mut self, kind: StatusKind) -> Option<&mut StatusEffect> {
        self.statuses.iter_mut().find(|s| s.kind == kind)
    }

    #[must_use]
    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.status(kind).is_some()
    }

    /// Attach a status effect. Returns true if the unit gained a crowd
    /// control stack (the caller interrupts any channel in that case).
    pub fn push_status(&mut self, effect: StatusEffect) -> bool {
        let gained_cc = effect.kind.immobilizes() || effect.kind.silences();
        if effect.kind.immobilizes() {
            self.immobilizing_stacks += 1;
        }
        if effect.kind.silences() {
            self.silencing_stacks += 1;
        }
        self.statuses.push(effect);
        gained_cc
    }

    /// Remove the first status of a kind, releasing its CC stacks.
    pub fn remove_status(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        let idx = self.statuses.iter().position(|s| s.kind == kind)?;
        let effect = self.statuses.remove(idx);
        self.release_cc(&effect);
        Some(effect)
    }

    /// Remove the first status of a kind applied by a specific unit.
    pub fn remove_status_from(
        &mut self,
        kind: StatusKind,
        source: UnitId,
    ) -> Option<StatusEffect> {
        let idx = self
            .statuses
            .iter()
            .position(|s| s.kind == kind && s.source == source)?;
        let effect = self.statuses.remove(idx);
        self.release_cc(&effect);
        Some(effect)
    }

    /// Remove every status whose duration has run out, releasing CC
    /// stacks. The caller fires the expiry hooks on the returned effects.
    pub fn take_expired(&mut self) -> Vec<StatusEffect> {
        let mut expired = Vec::new();
        self.statuses.retain(|s| {
            if s.is_expired() {
                expired.push(s.clone());
                false
            } else {
                true
            }
        });
        for effect in &expired {
            self.release_cc(effect);
        }
        expired
    }

    fn release_cc(&mut self, effect: &StatusEffect) {
        if effect.kind.immobilizes() {
            self.immobilizing_stacks -= 1;
        }
        if effect.kind.silences() {
            self.silencing_stacks -= 1;
        }
    }

    /// Strongest healing reduction among held statuses.
    #[must_use]
    pub fn healing_reduction(&self) -> f64 {
        self.statuses
            .iter()
            .map(|s| s.kind.healing_reduction())
            .fold(0.0, f64::max)
    }

    // HP.

    /// Subtract post-mitigation damage. Returns true if this instance
    /// killed the unit.
    pub fn apply_damage(&mut self, amount: f64) -> bool {
        if !self.alive {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0.0 {
            self.hp = 0.0;
            self.alive = false;
            return true;
        }
        false
    }

    /// Heal, applying the unit's healing reduction and clamping to max HP.
    /// Dead units cannot be healed.
    pub fn apply_heal(&mut self, amount: f64) {
        if !self.alive {
            return;
        }
        let effective = amount * (1.0 - self.healing_reduction());
        self.hp = (self.hp + effective).min(self.max_hp_total());
    }

    /// Whether this unit is an ally of `other_team` (same playable color).
    #[must_use]
    pub fn is_ally_of(&self, other_team: TeamColor) -> bool {
        self.team == other_team
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.team, self.id)
    }
}
