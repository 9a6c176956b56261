//! The turn engine.
//!
//! `Game` is the root object: it owns the board, the teams, the event
//! bus and the RNG, and exposes the mutating surface external layers
//! drive (place, move, cast, end turn) plus the read surface they render
//! from. All validation that returns errors lives here; the board below
//! panics on violated invariants instead.

pub mod events;

use tracing::{debug, trace};

use crate::abilities::{
    Ability, AbilitySlot, AbilityTarget, CastError, EffectMask, RangeMetric,
};
use crate::board::{Board, BoardError};
use crate::content;
use crate::core::{EffectId, GameConfig, GameRng, Position, Team, TeamColor, UnitId};
use crate::damage::{mitigate, DamageKind};
use crate::effects::BoardEffect;
use crate::status::{StatusEffect, StatusKind};
use crate::units::{Channel, ChannelKind, Unit, UnitKind};

pub use events::{DamageEvent, DamageListener, EventBus};

/// One match in progress.
#[derive(Debug)]
pub struct Game {
    pub config: GameConfig,
    pub board: Board,
    teams: [Team; 3],
    turn: TeamColor,
    pub events: EventBus,
    pub rng: GameRng,
}

const fn team_index(color: TeamColor) -> usize {
    match color {
        TeamColor::Neutral => 0,
        TeamColor::Red => 1,
        TeamColor::Blue => 2,
    }
}

impl Game {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.board_size);
        let rng = GameRng::new(config.rng_seed);
        let ap = config.action_points_per_turn;
        Self {
            config,
            board,
            teams: [
                Team::new(TeamColor::Neutral, 0),
                Team::new(TeamColor::Red, ap),
                Team::new(TeamColor::Blue, ap),
            ],
            turn: TeamColor::Red,
            events: EventBus::new(),
            rng,
        }
    }

    /// Team whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> TeamColor {
        self.turn
    }

    #[must_use]
    pub fn team(&self, color: TeamColor) -> &Team {
        &self.teams[team_index(color)]
    }

    pub fn team_mut(&mut self, color: TeamColor) -> &mut Team {
        &mut self.teams[team_index(color)]
    }

    // Placement and movement.

    /// Put a new unit on the board.
    pub fn place_unit(&mut self, unit: Unit, pos: Position) -> Result<UnitId, BoardError> {
        if !pos.in_bounds(self.board.size()) {
            return Err(BoardError::OutOfBounds);
        }
        if self.board.unit_at(pos).is_some() {
            return Err(BoardError::Occupied);
        }
        let id = self.board.place_unit(unit, pos);
        debug!(unit = %id, %pos, "unit placed");
        content::on_unit_placed(self, id);
        Ok(id)
    }

    /// Walk a unit to an adjacent empty square.
    pub fn move_unit(&mut self, id: UnitId, to: Position) -> Result<(), BoardError> {
        {
            let unit = self.board.unit(id);
            if !unit.alive {
                return Err(BoardError::DeadUnit);
            }
            if !unit.can_move() {
                return Err(BoardError::Immobilized);
            }
            if !to.in_bounds(self.board.size()) {
                return Err(BoardError::OutOfBounds);
            }
            if !unit.pos.within_square(to, 1) {
                return Err(BoardError::NotAdjacent);
            }
        }
        if self.board.unit_at(to).is_some() {
            return Err(BoardError::Occupied);
        }
        self.interrupt_channel(id);
        self.board.move_unit(id, to);
        Ok(())
    }

    /// Forcibly shove a unit off its square (behind it, or the nearest
    /// empty square). Forced movement interrupts channels too.
    pub fn displace(&mut self, id: UnitId) -> Position {
        self.interrupt_channel(id);
        let to = self.board.displace(id);
        debug!(unit = %id, %to, "unit displaced");
        to
    }

    // Damage and healing.

    /// Resolve one damage instance from `source` to `target`.
    ///
    /// Physical damage is mitigated by the target's armor minus the
    /// source's lethality, magic by magic resistance, true damage not at
    /// all. The damage event is broadcast before HP changes. Panics on
    /// friendly fire: content code must never damage an ally.
    pub fn deal_damage(
        &mut self,
        source: UnitId,
        target: UnitId,
        amount: f64,
        kind: DamageKind,
    ) {
        let (source_team, lethality, omnivamp) = {
            let s = self.board.unit(source);
            (s.team, s.lethality(), s.omnivamp())
        };
        let resistance = {
            let t = self.board.unit(target);
            assert!(
                t.team != source_team,
                "friendly fire: {source} damaging {target}"
            );
            match kind {
                DamageKind::Physical => t.armor_total() - lethality,
                DamageKind::Magic => t.magic_resist_total(),
                DamageKind::True => 0.0,
            }
        };
        let post = mitigate(amount, resistance);

        self.broadcast_damage(DamageEvent {
            source,
            target,
            pre_mitigation: amount,
            post_mitigation: post,
            kind,
        });

        let died = self.board.unit_mut(target).apply_damage(post);
        debug!(
            %source, %target, %kind,
            raw = amount, dealt = post,
            "damage resolved"
        );
        if died {
            debug!(unit = %target, "unit died");
        }
        if omnivamp > 0.0 {
            self.heal(source, post * omnivamp);
        }
    }

    fn broadcast_damage(&mut self, event: DamageEvent) {
        for (listener_id, listener) in self.events.snapshot() {
            if !self.events.contains(listener_id) {
                continue;
            }
            match listener {
                DamageListener::RecordDealtBy { attacker, slot } => {
                    if event.source == attacker && event.target != attacker {
                        content::record_spirit_damage(
                            self,
                            attacker,
                            slot,
                            event.target,
                            event.post_mitigation,
                        );
                    }
                }
            }
        }
    }

    /// Heal a unit, honoring its healing reduction and max HP.
    pub fn heal(&mut self, target: UnitId, amount: f64) {
        self.board.unit_mut(target).apply_heal(amount);
        trace!(unit = %target, amount, "heal applied");
    }

    /// Damage every mask-allowed unit within the Chebyshev square around
    /// `origin`.
    pub fn apply_aoe_damage(
        &mut self,
        source: UnitId,
        origin: Position,
        radius: i32,
        mask: EffectMask,
        amount: f64,
        kind: DamageKind,
    ) {
        let source_team = self.board.unit(source).team;
        for id in self.board.units_within_square(origin, radius) {
            let (alive, is_ally, is_champion) = {
                let u = self.board.unit(id);
                (u.alive, u.team == source_team, u.kind == UnitKind::Champion)
            };
            if alive && mask.allows(id == source, is_ally, is_champion) {
                self.deal_damage(source, id, amount, kind);
            }
        }
    }

    // Statuses and channels.

    /// Attach a status effect to a unit. Gaining a crowd-control stack
    /// interrupts a running channel.
    pub fn apply_status(&mut self, target: UnitId, effect: StatusEffect) {
        debug!(unit = %target, status = %effect.kind, "status applied");
        let gained_cc = self.board.unit_mut(target).push_status(effect);
        if gained_cc {
            self.interrupt_channel(target);
        }
    }

    /// Remove the first status of a kind from a unit, without firing its
    /// expiry hook.
    pub fn remove_status(&mut self, target: UnitId, kind: StatusKind) -> Option<StatusEffect> {
        let removed = self.board.unit_mut(target).remove_status(kind);
        if removed.is_some() {
            debug!(unit = %target, status = %kind, "status removed");
        }
        removed
    }

    /// Start a channel on a unit, interrupting any previous one.
    pub fn begin_channel(&mut self, id: UnitId, kind: ChannelKind, duration: u32) {
        self.interrupt_channel(id);
        self.board.unit_mut(id).channel = Some(Channel::new(kind, duration));
        debug!(unit = %id, "channel started");
    }

    /// Cut a channel short, firing its interrupt hook. No-op when the
    /// unit is not channeling.
    pub fn interrupt_channel(&mut self, id: UnitId) {
        if let Some(channel) = self.board.unit_mut(id).channel.take() {
            debug!(unit = %id, "channel interrupted");
            content::on_channel_interrupted(self, id, channel);
        }
    }

    // Battlefield effects.

    /// Register an effect, fire its placement hook, then collision-test
    /// every unit its hitbox covers before returning.
    pub fn spawn_effect(&mut self, effect: BoardEffect) -> EffectId {
        let id = self.board.add_effect(effect);
        debug!(effect = %id, "effect spawned");
        content::on_effect_placed(self, id);
        self.run_effect_collisions(id);
        id
    }

    /// Move an effect one position, re-running collision against every
    /// unit its hitbox now covers.
    pub fn move_effect(&mut self, id: EffectId, to: Position) {
        if let Some(effect) = self.board.effect_mut(id) {
            effect.pos = to;
        }
        self.run_effect_collisions(id);
    }

    /// Take an effect off the board, firing its removal hook while it is
    /// still readable.
    pub fn remove_effect(&mut self, id: EffectId) {
        content::on_effect_removed(self, id);
        debug!(effect = %id, "effect removed");
        self.board.remove_effect(id);
    }

    fn run_effect_collisions(&mut self, id: EffectId) {
        for unit in self.board.units_in_hitbox(id) {
            content::on_effect_collision(self, id, unit);
        }
    }

    // Casting.

    /// Validate and resolve an ability cast.
    ///
    /// The gates run in a fixed order and any failure returns before a
    /// single field of game state has changed. On success the caster's
    /// channel is interrupted, the ability's behavior resolves, and the
    /// voice line is rolled.
    pub fn cast_ability(
        &mut self,
        caster: UnitId,
        slot: AbilitySlot,
        target: AbilityTarget,
    ) -> Result<(), CastError> {
        let (
            kind,
            target_kind,
            max_range,
            range_metric,
            mask,
            requires_mobility,
            casting_enabled,
            voice_lines,
            caster_pos,
            caster_team,
            caster_can_cast,
            caster_can_move,
        ) = {
            let unit = self.board.unit(caster);
            let champion = unit.champion.as_ref().ok_or(CastError::NoSuchAbility)?;
            let ability = champion.ability(slot).ok_or(CastError::NoSuchAbility)?;
            if slot == AbilitySlot::Passive {
                return Err(CastError::NotCastable);
            }
            (
                ability.kind,
                ability.target_kind,
                ability.max_range,
                ability.range_metric,
                ability.mask,
                ability.requires_mobility,
                ability.casting_enabled,
                ability.voice_lines,
                unit.pos,
                unit.team,
                unit.can_cast(),
                unit.can_move(),
            )
        };

        if !casting_enabled {
            return Err(CastError::CastingDisabled);
        }
        if !target.matches(target_kind) {
            return Err(CastError::WrongTargetType);
        }

        let target_pos = match target {
            AbilityTarget::Unit(id) => {
                let u = self.board.unit(id);
                if !u.linked {
                    return Err(CastError::InvalidTarget("unit is not on the board"));
                }
                Some(u.pos)
            }
            AbilityTarget::Location(pos) => {
                if !pos.in_bounds(self.board.size()) {
                    return Err(CastError::InvalidLocation("out of bounds"));
                }
                Some(pos)
            }
            AbilityTarget::NoTarget => None,
        };

        if let (Some(range), Some(tp)) = (max_range, target_pos) {
            let in_range = match range_metric {
                RangeMetric::Manhattan => caster_pos.manhattan(tp) <= range,
                RangeMetric::Square => caster_pos.within_square(tp, range),
            };
            if !in_range {
                return Err(CastError::OutOfRange);
            }
        }

        if let AbilityTarget::Unit(id) = target {
            let (is_ally, is_champion) = {
                let u = self.board.unit(id);
                (u.team == caster_team, u.kind == UnitKind::Champion)
            };
            if !mask.allows(id == caster, is_ally, is_champion) {
                return Err(CastError::TargetNotAllowed);
            }
        }

        content::validate_cast(self, caster, kind, target)?;

        if !caster_can_cast {
            return Err(CastError::Silenced);
        }
        if requires_mobility && !caster_can_move {
            return Err(CastError::Immobilized);
        }

        self.interrupt_channel(caster);
        debug!(unit = %caster, %slot, "cast resolved");
        content::resolve_cast(self, caster, kind, target);

        let chance = if slot.is_ultimate() {
            self.config.ultimate_voice_line_chance
        } else {
            self.config.voice_line_chance
        };
        if !voice_lines.is_empty() && self.rng.gen_bool(chance) {
            let line = voice_lines[self.rng.gen_range(0..voice_lines.len())];
            if let Some(champion) = self.board.unit_mut(caster).champion.as_mut() {
                champion.voice_line = Some(line);
            }
        }

        Ok(())
    }

    // Turn engine.

    /// End the current team's turn.
    ///
    /// Sweeps every unit (status hooks, duration ticks, expiry, channel
    /// tick, champion turn hooks), then every battlefield effect, then
    /// flips the turn and refreshes the incoming team's action points.
    pub fn end_turn(&mut self) {
        let ending = self.turn;
        debug!(team = %ending, "turn ending");

        for id in self.board.all_unit_ids() {
            let active = self.board.unit(id).team == ending;

            let mut dot_ticks: Vec<(UnitId, f64)> = Vec::new();
            {
                let unit = self.board.unit_mut(id);
                for status in unit.statuses.iter_mut() {
                    if active && status.kind == StatusKind::VoidInfection {
                        dot_ticks.push((status.source, status.magnitude));
                    }
                    status.tick_duration();
                }
            }
            for (source, magnitude) in dot_ticks {
                if self.board.unit(id).alive {
                    self.deal_damage(source, id, magnitude, DamageKind::Magic);
                }
            }

            for expired in self.board.unit_mut(id).take_expired() {
                debug!(unit = %id, status = %expired.kind, "status expired");
                content::on_status_expired(self, id, expired);
            }

            let completed = {
                let unit = self.board.unit_mut(id);
                let done = match unit.channel.as_mut() {
                    Some(channel) => channel.tick(),
                    None => false,
                };
                if done {
                    unit.channel.take()
                } else {
                    None
                }
            };
            if let Some(channel) = completed {
                debug!(unit = %id, "channel completed");
                content::on_channel_complete(self, id, channel);
            }

            if active {
                content::on_active_turn_end(self, id);
            }
        }

        for effect_id in self.board.all_effect_ids() {
            let Some(effect) = self.board.effect(effect_id) else {
                continue;
            };
            let active = effect.team == ending;
            content::on_effect_turn_end(self, effect_id, active);
        }

        self.turn = ending.opposing();
        let per_turn = self.config.action_points_per_turn;
        self.team_mut(self.turn).refresh_action_points(per_turn);
        debug!(team = %self.turn, "turn started");
    }

    // Read surface.

    #[must_use]
    pub fn unit(&self, id: UnitId) -> &Unit {
        self.board.unit(id)
    }

    #[must_use]
    pub fn unit_at(&self, pos: Position) -> Option<UnitId> {
        self.board.unit_at(pos)
    }

    #[must_use]
    pub fn ability(&self, unit: UnitId, slot: AbilitySlot) -> Option<&Ability> {
        self.board
            .unit(unit)
            .champion
            .as_ref()
            .and_then(|c| c.ability(slot))
    }

    pub(crate) fn ability_mut(
        &mut self,
        unit: UnitId,
        slot: AbilitySlot,
    ) -> Option<&mut Ability> {
        self.board
            .unit_mut(unit)
            .champion
            .as_mut()
            .and_then(|c| c.ability_mut(slot))
    }

    /// Line spoken on the unit's last successful cast, if any.
    #[must_use]
    pub fn voice_line(&self, unit: UnitId) -> Option<&'static str> {
        self.board
            .unit(unit)
            .champion
            .as_ref()
            .and_then(|c| c.voice_line)
    }
}
