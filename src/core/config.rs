//! Engine configuration.
//!
//! A `GameConfig` value is constructed once at startup and owned by the
//! `Game`; there is no ambient global state. Hosts that load configuration
//! from a file deserialize straight into this struct.

use serde::{Deserialize, Serialize};

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length. Positions are valid iff `0 <= x, y < board_size`.
    pub board_size: i32,

    /// Action points each team receives when its turn begins.
    pub action_points_per_turn: u32,

    /// Probability a successful ultimate (R) cast triggers a voice line.
    pub ultimate_voice_line_chance: f64,

    /// Probability a successful non-ultimate cast triggers a voice line.
    pub voice_line_chance: f64,

    /// Seed for the match RNG. Matches with the same seed and the same
    /// command sequence replay identically.
    pub rng_seed: u64,
}

impl GameConfig {
    /// Standard 8x8 match configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board_size: 8,
            action_points_per_turn: 2,
            ultimate_voice_line_chance: 1.0,
            voice_line_chance: 0.6,
            rng_seed: 0,
        }
    }

    /// Set the board size (builder pattern).
    #[must_use]
    pub fn with_board_size(mut self, size: i32) -> Self {
        assert!(size > 0, "board size must be positive");
        self.board_size = size;
        self
    }

    /// Set the per-turn action-point allotment (builder pattern).
    #[must_use]
    pub fn with_action_points(mut self, points: u32) -> Self {
        self.action_points_per_turn = points;
        self
    }

    /// Set the RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
