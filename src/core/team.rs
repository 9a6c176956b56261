//! Teams and team colors.
//!
//! Two playable sides (Red, Blue) plus a Neutral affiliation for
//! unaligned units and effects. Neutral is never a turn state.

use serde::{Deserialize, Serialize};

/// Side affiliation of a unit, effect, or turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    Neutral,
    Red,
    Blue,
}

impl TeamColor {
    /// The opposing playable color. Neutral maps to itself.
    #[must_use]
    pub const fn opposing(self) -> Self {
        match self {
            TeamColor::Red => TeamColor::Blue,
            TeamColor::Blue => TeamColor::Red,
            TeamColor::Neutral => TeamColor::Neutral,
        }
    }

    /// Whether this color can hold the turn.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, TeamColor::Red | TeamColor::Blue)
    }

    /// The y-direction this team advances in: Red moves toward decreasing
    /// y, Blue toward increasing y. Neutral has no forward direction.
    #[must_use]
    pub const fn forward_dy(self) -> i32 {
        match self {
            TeamColor::Red => -1,
            TeamColor::Blue => 1,
            TeamColor::Neutral => 0,
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TeamColor::Neutral => "Neutral",
            TeamColor::Red => "Red",
            TeamColor::Blue => "Blue",
        };
        write!(f, "{name}")
    }
}

/// Per-side turn economy.
///
/// The engine only stores the counter; spending and gating belong to the
/// command layer. `Game::end_turn` refreshes the counter of the team whose
/// turn begins.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    pub color: TeamColor,
    pub action_points: u32,
}

impl Team {
    /// Create a team with a full action-point allotment.
    #[must_use]
    pub fn new(color: TeamColor, action_points: u32) -> Self {
        Self {
            color,
            action_points,
        }
    }

    /// Reset the action-point counter for a fresh turn.
    pub fn refresh_action_points(&mut self, per_turn: u32) {
        self.action_points = per_turn;
    }

    /// Spend one action point. Returns false if none remain.
    pub fn spend_action_point(&mut self) -> bool {
        if self.action_points == 0 {
            return false;
        }
        self.action_points -= 1;
        true
    }
}
