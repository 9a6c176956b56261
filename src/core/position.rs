//! Board coordinates and distance metrics.
//!
//! Two distinct metrics are used by different rules and are **not**
//! interchangeable:
//!
//! - `manhattan`: `|dx| + |dy|`, the default metric for ability ranges.
//! - `within_square`: `max(|dx|, |dy|) <= radius`, the "Chebyshev square"
//!   test used for area abilities and move adjacency.

use serde::{Deserialize, Serialize};

/// An integer coordinate on the board.
///
/// Valid iff `0 <= x, y < board_size`. Pure value type; the board it refers
/// to is implied by context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position at the given coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta. The result may be out of bounds.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check bounds against a board of the given size.
    #[must_use]
    pub const fn in_bounds(self, board_size: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < board_size && self.y < board_size
    }

    /// Manhattan distance: `|dx| + |dy|`.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev-square test: true iff `other` lies within the square of
    /// the given radius centered on `self` ("within N squares in every
    /// direction").
    #[must_use]
    pub const fn within_square(self, other: Self, radius: i32) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let max = if dx > dy { dx } else { dy };
        max <= radius
    }

    /// The four orthogonally adjacent squares, filtered to the board.
    pub fn directly_adjacent(self, board_size: i32) -> Vec<Position> {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
        .into_iter()
        .filter(|p| p.in_bounds(board_size))
        .collect()
    }

    /// Chess-style notation (`A1` is the origin). Column letter, 1-based row.
    ///
    /// Only defined for in-bounds positions on boards up to 16 wide.
    #[must_use]
    pub fn notation(self) -> String {
        const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOP";
        match LETTERS.get(self.x as usize) {
            Some(&c) if self.y >= 0 => format!("{}{}", c as char, self.y + 1),
            _ => format!("({}, {})", self.x, self.y),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}
