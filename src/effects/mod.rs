//! Battlefield effects.
//!
//! Effects are non-unit entities on the board: markers, projectiles,
//! zones. They may carry a hitbox; the board collision-tests a hitboxed
//! effect against every unit when it is placed and again after each step
//! it moves. Behavior (collision, turn hooks) is dispatched in the
//! content resolver, keyed on `EffectKind`.

use serde::{Deserialize, Serialize};

use crate::core::{EffectId, Position, TeamColor, UnitId};

/// Axis-aligned collision box centered on the effect's position.
///
/// Dimensions must be odd so the center square is well defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: i32,
    pub height: i32,
}

impl Hitbox {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0 && width % 2 == 1 && height % 2 == 1,
            "hitbox dimensions must be positive and odd"
        );
        Self { width, height }
    }

    /// Square hitbox with the given odd side length.
    #[must_use]
    pub fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    /// Whether `probe` falls inside the box centered at `center`.
    #[must_use]
    pub fn contains(&self, center: Position, probe: Position) -> bool {
        let dx = (probe.x - center.x).abs();
        let dy = (probe.y - center.y).abs();
        dx <= self.width / 2 && dy <= self.height / 2
    }
}

/// Every battlefield effect in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Vessa's shadow marking where Rewind will land. No hitbox.
    HourglassShadow,
    /// Vessa's grenade: damages on landing, then marches home the next
    /// turn, damaging everything it passes through.
    SandGrenade,
}

/// Per-kind effect state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EffectState {
    #[default]
    None,
    Grenade {
        /// Square the grenade returns to.
        origin: Position,
        /// Set once the return march has begun.
        returning: bool,
        /// Damage on landing collision.
        primary_damage: f64,
        /// Damage per collision during the return march.
        secondary_damage: f64,
    },
}

/// One effect instance, owned by the board's effect registry.
#[derive(Clone, Debug)]
pub struct BoardEffect {
    pub id: EffectId,
    pub kind: EffectKind,
    pub pos: Position,
    pub team: TeamColor,
    /// Unit credited with the effect's damage.
    pub owner: UnitId,
    pub hitbox: Option<Hitbox>,
    pub state: EffectState,
}

impl BoardEffect {
    #[must_use]
    pub fn new(
        kind: EffectKind,
        pos: Position,
        team: TeamColor,
        owner: UnitId,
    ) -> Self {
        Self {
            id: EffectId(u32::MAX),
            kind,
            pos,
            team,
            owner,
            hitbox: None,
            state: EffectState::None,
        }
    }

    /// Attach a hitbox (builder pattern).
    #[must_use]
    pub fn with_hitbox(mut self, hitbox: Hitbox) -> Self {
        self.hitbox = Some(hitbox);
        self
    }

    /// Set per-kind state (builder pattern).
    #[must_use]
    pub fn with_state(mut self, state: EffectState) -> Self {
        self.state = state;
        self
    }

    /// Whether a unit at `probe` collides with this effect.
    #[must_use]
    pub fn collides_with(&self, probe: Position) -> bool {
        match self.hitbox {
            Some(hb) => hb.contains(self.pos, probe),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_contains() {
        let hb = Hitbox::square(3);
        let center = Position::new(4, 4);
        assert!(hb.contains(center, center));
        assert!(hb.contains(center, Position::new(5, 3)));
        assert!(!hb.contains(center, Position::new(6, 4)));
    }

    #[test]
    fn test_single_square_hitbox() {
        let hb = Hitbox::square(1);
        let center = Position::new(2, 2);
        assert!(hb.contains(center, center));
        assert!(!hb.contains(center, Position::new(2, 3)));
    }

    #[test]
    #[should_panic]
    fn test_even_dimensions_rejected() {
        let _ = Hitbox::new(2, 3);
    }

    #[test]
    fn test_no_hitbox_never_collides() {
        let marker = BoardEffect::new(
            EffectKind::HourglassShadow,
            Position::new(1, 1),
            TeamColor::Red,
            UnitId(0),
        );
        assert!(!marker.collides_with(Position::new(1, 1)));
    }
}
