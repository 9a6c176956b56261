//! The authoritative grid.
//!
//! The board owns every unit (arena, indexed by `UnitId`) and every
//! battlefield effect, plus a row-major slot array mapping squares to
//! unit ids. Operations here are mechanical: they keep slots, arena and
//! cached positions consistent and panic on internal invariant
//! violations. Validation (bounds, occupancy, adjacency, mobility) and
//! hook dispatch happen one level up, in `Game`.

use thiserror::Error;
use tracing::trace;

use crate::core::{EffectId, Position, UnitId};
use crate::effects::BoardEffect;
use crate::units::Unit;

/// Why a placement or move command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position is out of bounds")]
    OutOfBounds,

    #[error("position is occupied")]
    Occupied,

    #[error("destination is not adjacent")]
    NotAdjacent,

    #[error("unit cannot move")]
    Immobilized,

    #[error("unit is dead")]
    DeadUnit,
}

/// Square grid with a unit arena and an effect registry.
#[derive(Clone, Debug)]
pub struct Board {
    size: i32,
    slots: Vec<Option<UnitId>>,
    units: Vec<Unit>,
    effects: Vec<BoardEffect>,
    next_effect_id: u32,
}

impl Board {
    #[must_use]
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            slots: vec![None; (size * size) as usize],
            units: Vec::new(),
            effects: Vec::new(),
            next_effect_id: 0,
        }
    }

    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.in_bounds(self.size));
        (pos.y * self.size + pos.x) as usize
    }

    // Units.

    /// Move a unit into the arena and link it to a square.
    ///
    /// Panics if the square is occupied or out of bounds, or if the unit
    /// is already linked. Callers validate first.
    pub fn place_unit(&mut self, mut unit: Unit, pos: Position) -> UnitId {
        assert!(pos.in_bounds(self.size), "placement out of bounds");
        assert!(!unit.linked, "unit is already linked to a board");
        let idx = self.index(pos);
        assert!(self.slots[idx].is_none(), "placement on an occupied square");

        let id = UnitId(self.units.len() as u32);
        unit.id = id;
        unit.pos = pos;
        unit.linked = true;
        self.slots[idx] = Some(id);
        self.units.push(unit);
        trace!(%id, %pos, "unit linked");
        id
    }

    /// Unlink the unit occupying a square, returning its id. The unit
    /// stays in the arena and keeps its cached position.
    pub fn pop_unit(&mut self, pos: Position) -> Option<UnitId> {
        let idx = self.index(pos);
        self.slots[idx].take()
    }

    /// Relink a unit to a new square, atomically.
    ///
    /// Panics if the unit is not linked to this board. Does not check
    /// adjacency or occupancy; callers pre-validate.
    pub fn move_unit(&mut self, id: UnitId, to: Position) {
        let from = {
            let unit = self.unit(id);
            assert!(unit.linked, "moving a unit that is not on the board");
            unit.pos
        };
        let popped = self.pop_unit(from);
        debug_assert_eq!(popped, Some(id));
        let idx = self.index(to);
        self.slots[idx] = Some(id);
        self.unit_mut(id).pos = to;
        trace!(%id, %from, %to, "unit moved");
    }

    /// Unit id on a square. Lenient: out-of-bounds returns `None`.
    #[must_use]
    pub fn unit_at(&self, pos: Position) -> Option<UnitId> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        self.slots[self.index(pos)]
    }

    #[must_use]
    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.raw() as usize]
    }

    pub fn unit_mut(&mut self, id: UnitId) -> &mut Unit {
        &mut self.units[id.raw() as usize]
    }

    #[must_use]
    pub fn all_unit_ids(&self) -> Vec<UnitId> {
        self.units.iter().map(|u| u.id).collect()
    }

    /// Push a unit to the square directly behind it, or failing that the
    /// nearest empty square.
    ///
    /// "Behind" is opposite the unit's team's forward direction. The
    /// fallback scans squares row-major, keeps unoccupied ones, and
    /// stable-sorts by Manhattan distance, so ties resolve in row-major
    /// order. Panics if the board has no empty square.
    pub fn displace(&mut self, id: UnitId) -> Position {
        let (from, team) = {
            let unit = self.unit(id);
            (unit.pos, unit.team)
        };
        let behind = from.offset(0, -team.forward_dy());
        if behind.in_bounds(self.size) && self.unit_at(behind).is_none() {
            self.move_unit(id, behind);
            return behind;
        }

        let mut candidates: Vec<Position> = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                let pos = Position::new(x, y);
                if self.unit_at(pos).is_none() {
                    candidates.push(pos);
                }
            }
        }
        candidates.sort_by_key(|pos| pos.manhattan(from));
        let to = *candidates
            .first()
            .unwrap_or_else(|| panic!("displacement with a full board"));
        self.move_unit(id, to);
        to
    }

    /// Unit ids within the Chebyshev square of the given radius, in
    /// arena order.
    #[must_use]
    pub fn units_within_square(&self, center: Position, radius: i32) -> Vec<UnitId> {
        self.units
            .iter()
            .filter(|u| u.linked && u.pos.within_square(center, radius))
            .map(|u| u.id)
            .collect()
    }

    // Effects.

    /// Register an effect. Collision dispatch happens in `Game`.
    pub fn add_effect(&mut self, mut effect: BoardEffect) -> EffectId {
        let id = EffectId(self.next_effect_id);
        self.next_effect_id += 1;
        effect.id = id;
        self.effects.push(effect);
        id
    }

    /// Drop an effect from the registry. Removing a missing id is a no-op.
    pub fn remove_effect(&mut self, id: EffectId) {
        self.effects.retain(|e| e.id != id);
    }

    #[must_use]
    pub fn effect(&self, id: EffectId) -> Option<&BoardEffect> {
        self.effects.iter().find(|e| e.id == id)
    }

    pub fn effect_mut(&mut self, id: EffectId) -> Option<&mut BoardEffect> {
        self.effects.iter_mut().find(|e| e.id == id)
    }

    #[must_use]
    pub fn all_effect_ids(&self) -> Vec<EffectId> {
        self.effects.iter().map(|e| e.id).collect()
    }

    /// Unit ids currently intersecting an effect's hitbox.
    #[must_use]
    pub fn units_in_hitbox(&self, effect_id: EffectId) -> Vec<UnitId> {
        let Some(effect) = self.effect(effect_id) else {
            return Vec::new();
        };
        self.units
            .iter()
            .filter(|u| u.linked && effect.collides_with(u.pos))
            .map(|u| u.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TeamColor;
    use crate::units::{UnitAttributes, UnitKind};

    fn grunt(team: TeamColor) -> Unit {
        Unit::new(
            "Grunt",
            UnitKind::Minion,
            team,
            UnitAttributes::melee(100.0, 0.0, 0.0, 30.0),
        )
    }

    #[test]
    fn test_place_and_query() {
        let mut board = Board::new(8);
        let pos = Position::new(3, 4);
        let id = board.place_unit(grunt(TeamColor::Red), pos);

        assert_eq!(board.unit_at(pos), Some(id));
        assert_eq!(board.unit(id).pos, pos);
        assert!(board.unit(id).linked);
    }

    #[test]
    fn test_unit_at_lenient_out_of_bounds() {
        let board = Board::new(8);
        assert_eq!(board.unit_at(Position::new(-1, 0)), None);
        assert_eq!(board.unit_at(Position::new(8, 8)), None);
    }

    #[test]
    #[should_panic]
    fn test_double_placement_panics() {
        let mut board = Board::new(8);
        let pos = Position::new(0, 0);
        board.place_unit(grunt(TeamColor::Red), pos);
        board.place_unit(grunt(TeamColor::Blue), pos);
    }

    #[test]
    fn test_move_clears_old_slot() {
        let mut board = Board::new(8);
        let from = Position::new(1, 1);
        let to = Position::new(2, 1);
        let id = board.place_unit(grunt(TeamColor::Red), from);

        board.move_unit(id, to);
        assert_eq!(board.unit_at(from), None);
        assert_eq!(board.unit_at(to), Some(id));
        assert_eq!(board.unit(id).pos, to);
    }

    #[test]
    fn test_displace_behind_fast_path() {
        let mut board = Board::new(8);
        // Red advances toward decreasing y, so behind is y + 1.
        let id = board.place_unit(grunt(TeamColor::Red), Position::new(4, 4));
        let landed = board.displace(id);
        assert_eq!(landed, Position::new(4, 5));
    }

    #[test]
    fn test_displace_fallback_nearest_row_major() {
        let mut board = Board::new(3);
        // Blue at the bottom edge: behind (y - 1) is out of bounds.
        let id = board.place_unit(grunt(TeamColor::Blue), Position::new(1, 0));
        let landed = board.displace(id);
        // Nearest empties are at Manhattan distance 1; row-major picks (0,0).
        assert_eq!(landed, Position::new(0, 0));
    }

    #[test]
    fn test_units_within_square() {
        let mut board = Board::new(8);
        let a = board.place_unit(grunt(TeamColor::Red), Position::new(2, 2));
        let b = board.place_unit(grunt(TeamColor::Blue), Position::new(3, 3));
        let _far = board.place_unit(grunt(TeamColor::Blue), Position::new(7, 7));

        let hits = board.units_within_square(Position::new(2, 2), 1);
        assert_eq!(hits, vec![a, b]);
    }
}
