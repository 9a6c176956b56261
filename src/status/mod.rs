//! Status effects.
//!
//! A status effect is a tagged instance attached to a unit: a kind, the
//! unit that applied it, an optional duration in turn-end sweeps, and
//! per-instance state (stacks, magnitude). The `Game` runs the lifecycle;
//! this module only defines the data model.
//!
//! ## Lifecycle
//!
//! - On apply, crowd-control kinds add immobilizing and/or silencing
//!   stacks to the holder; gaining a stack interrupts a running channel.
//! - Every `Game::end_turn`, each effect ticks once and its duration
//!   counter decrements.
//! - Effects whose counter reaches zero fire their expiry hook and are
//!   removed after the sweep, in a single filter pass.

use serde::{Deserialize, Serialize};

use crate::core::UnitId;

/// Presentation category of a status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    Buff,
    Debuff,
    /// Bookkeeping effects that should not appear in unit summaries.
    Hidden,
}

/// Every status effect the engine knows about.
///
/// Common crowd control lives alongside champion-specific kinds; behavior
/// that needs game access (expiry hooks, per-turn ticks) is dispatched in
/// the content resolver, keyed on this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// Cannot move. Can still cast.
    Rooted,
    /// Cannot move or cast.
    Stunned,
    /// Cannot move or cast; tied to a channel on the source unit.
    Suppressed,
    /// Knocked into the air: cannot move or cast.
    Airborne,
    /// Healing received is reduced.
    GrievousWounds,
    /// Stacking storm mark; detonates into Airborne at two stacks.
    StormCharge,
    /// Dash afterstate: the dash that caused it is sealed, damage dealt
    /// is recorded and partially repeated when the form ends.
    SpiritForm,
    /// Damage over time, ticking at each of the holder's turn ends.
    VoidInfection,
}

impl StatusKind {
    #[must_use]
    pub const fn category(self) -> StatusCategory {
        match self {
            StatusKind::Rooted
            | StatusKind::Stunned
            | StatusKind::Suppressed
            | StatusKind::Airborne
            | StatusKind::GrievousWounds
            | StatusKind::VoidInfection => StatusCategory::Debuff,
            StatusKind::SpiritForm => StatusCategory::Buff,
            StatusKind::StormCharge => StatusCategory::Hidden,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatusKind::Rooted => "Rooted",
            StatusKind::Stunned => "Stunned",
            StatusKind::Suppressed => "Suppressed",
            StatusKind::Airborne => "Airborne",
            StatusKind::GrievousWounds => "Grievous Wounds",
            StatusKind::StormCharge => "Storm Charge",
            StatusKind::SpiritForm => "Spirit Form",
            StatusKind::VoidInfection => "Void Infection",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            StatusKind::Rooted => "This unit cannot move.",
            StatusKind::Stunned => "This unit cannot move or use abilities.",
            StatusKind::Suppressed => {
                "This unit is locked down and cannot move or use abilities."
            }
            StatusKind::Airborne => {
                "This unit is airborne and cannot move or use abilities."
            }
            StatusKind::GrievousWounds => "Healing received is halved.",
            StatusKind::StormCharge => "Marked by the storm.",
            StatusKind::SpiritForm => {
                "Untethered: the dash cannot be recast; a portion of damage \
                 dealt will strike again as true damage."
            }
            StatusKind::VoidInfection => {
                "Infected: takes magic damage at the end of each of its turns."
            }
        }
    }

    /// Whether applying this kind adds an immobilizing stack.
    #[must_use]
    pub const fn immobilizes(self) -> bool {
        matches!(
            self,
            StatusKind::Rooted
                | StatusKind::Stunned
                | StatusKind::Suppressed
                | StatusKind::Airborne
        )
    }

    /// Whether applying this kind adds a silencing stack.
    #[must_use]
    pub const fn silences(self) -> bool {
        matches!(
            self,
            StatusKind::Stunned | StatusKind::Suppressed | StatusKind::Airborne
        )
    }

    /// Healing-reduction fraction while this effect is held.
    #[must_use]
    pub const fn healing_reduction(self) -> f64 {
        match self {
            StatusKind::GrievousWounds => 0.5,
            _ => 0.0,
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One status effect held by a unit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Unit that applied the effect.
    pub source: UnitId,
    /// Remaining turn-end sweeps. `None` never expires on its own.
    pub time_left: Option<u32>,
    /// Stack counter, owned by ability logic (storm charges).
    pub stacks: u32,
    /// Per-instance scalar, owned by ability logic (infection tick damage).
    pub magnitude: f64,
}

impl StatusEffect {
    /// Create an indefinite effect with no stacks or magnitude.
    #[must_use]
    pub fn new(kind: StatusKind, source: UnitId) -> Self {
        Self {
            kind,
            source,
            time_left: None,
            stacks: 0,
            magnitude: 0.0,
        }
    }

    /// Set a finite duration in turn-end sweeps (builder pattern).
    #[must_use]
    pub fn with_duration(mut self, turns: u32) -> Self {
        self.time_left = Some(turns);
        self
    }

    /// Set the per-instance magnitude (builder pattern).
    #[must_use]
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Decrement the duration counter, if finite.
    pub fn tick_duration(&mut self) {
        if let Some(t) = self.time_left.as_mut() {
            *t = t.saturating_sub(1);
        }
    }

    /// Whether the effect has run out and should expire this sweep.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.time_left == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cc_stacks() {
        assert!(StatusKind::Rooted.immobilizes());
        assert!(!StatusKind::Rooted.silences());
        assert!(StatusKind::Stunned.immobilizes());
        assert!(StatusKind::Stunned.silences());
        assert!(!StatusKind::SpiritForm.immobilizes());
        // Spirit form seals only its own dash slot, not the whole kit.
        assert!(!StatusKind::SpiritForm.silences());
        assert!(!StatusKind::GrievousWounds.immobilizes());
    }

    #[test]
    fn test_duration_countdown() {
        let mut effect =
            StatusEffect::new(StatusKind::Rooted, UnitId(0)).with_duration(2);
        assert!(!effect.is_expired());
        effect.tick_duration();
        assert!(!effect.is_expired());
        effect.tick_duration();
        assert!(effect.is_expired());
    }

    #[test]
    fn test_indefinite_never_expires() {
        let mut effect = StatusEffect::new(StatusKind::SpiritForm, UnitId(0));
        for _ in 0..100 {
            effect.tick_duration();
        }
        assert!(!effect.is_expired());
    }

    #[test]
    fn test_grievous_reduction() {
        assert_eq!(StatusKind::GrievousWounds.healing_reduction(), 0.5);
        assert_eq!(StatusKind::Rooted.healing_reduction(), 0.0);
    }
}
