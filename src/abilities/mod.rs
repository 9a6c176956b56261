//! Ability data model.
//!
//! An `Ability` is pure data: slot, targeting rules, range, effect mask,
//! metric table, voice lines, and a small per-ability state payload. The
//! behavior behind each ability lives in the content resolver, keyed on
//! `AbilityKind`; `Game::cast_ability` runs the shared validation pipeline
//! before dispatching there.

pub mod cast;
pub mod mask;
pub mod metric;
pub mod target;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EffectId, ListenerId, Position, UnitId};

pub use cast::CastError;
pub use mask::EffectMask;
pub use metric::{AbilityMetric, AbilityMetricKind};
pub use target::AbilityTarget;

/// Ability slot on a champion. `R` is ultimate-tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilitySlot {
    Q,
    W,
    E,
    R,
    Passive,
}

impl AbilitySlot {
    #[must_use]
    pub const fn is_ultimate(self) -> bool {
        matches!(self, AbilitySlot::R)
    }
}

impl std::fmt::Display for AbilitySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AbilitySlot::Q => "Q",
            AbilitySlot::W => "W",
            AbilitySlot::E => "E",
            AbilitySlot::R => "R",
            AbilitySlot::Passive => "Passive",
        };
        write!(f, "{name}")
    }
}

/// What shape of target an ability accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// No target at all.
    None,
    /// Implicitly targets the caster.
    SelfCast,
    /// Targets a unit on the board.
    Unit,
    /// Targets a board square.
    Location,
}

/// Distance metric used for an ability's range check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeMetric {
    /// `|dx| + |dy|`.
    Manhattan,
    /// `max(|dx|, |dy|)`: a square around the caster.
    Square,
}

/// Every concrete ability in the game.
///
/// Behavior is dispatched on this tag in the content resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    SandstrikeGrenade,
    Rewind,
    PiercingLight,
    StormbladePoise,
    TempestEdge,
    SpiritStep,
    HollowSeed,
    Gravelock,
}

/// Per-ability mutable state.
///
/// Most abilities are stateless; the variants here back the few that track
/// something between casts.
#[derive(Clone, Debug, Default)]
pub enum AbilityState {
    #[default]
    None,
    /// Rolling window of past positions plus the shadow marker handle.
    RewindHistory {
        positions: Vec<Position>,
        shadow: Option<EffectId>,
    },
    /// Damage recorded while in spirit form, repeated when the form ends.
    SpiritLedger {
        listener: Option<ListenerId>,
        recorded: Vec<(UnitId, f64)>,
    },
}

/// One ability on a champion's kit.
#[derive(Clone, Debug)]
pub struct Ability {
    pub slot: AbilitySlot,
    pub kind: AbilityKind,
    pub name: &'static str,
    pub description: &'static str,
    pub target_kind: TargetKind,
    /// `None` means unlimited range.
    pub max_range: Option<i32>,
    pub range_metric: RangeMetric,
    pub mask: EffectMask,
    /// Reject the cast while the caster is immobilized.
    pub requires_mobility: bool,
    /// Toggled off by ongoing effects that lock the kit.
    pub casting_enabled: bool,
    metrics: SmallVec<[(AbilityMetricKind, AbilityMetric); 4]>,
    pub voice_lines: &'static [&'static str],
    pub state: AbilityState,
}

impl Ability {
    #[must_use]
    pub fn new(
        slot: AbilitySlot,
        kind: AbilityKind,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            slot,
            kind,
            name,
            description,
            target_kind: TargetKind::None,
            max_range: None,
            range_metric: RangeMetric::Manhattan,
            mask: EffectMask::none(),
            requires_mobility: false,
            casting_enabled: true,
            metrics: SmallVec::new(),
            voice_lines: &[],
            state: AbilityState::None,
        }
    }

    /// Set the target kind (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target_kind: TargetKind) -> Self {
        self.target_kind = target_kind;
        self
    }

    /// Set the maximum cast range (builder pattern).
    #[must_use]
    pub fn with_range(mut self, range: i32, metric: RangeMetric) -> Self {
        self.max_range = Some(range);
        self.range_metric = metric;
        self
    }

    /// Set the effect mask (builder pattern).
    #[must_use]
    pub fn with_mask(mut self, mask: EffectMask) -> Self {
        self.mask = mask;
        self
    }

    /// Require the caster to be mobile (builder pattern).
    #[must_use]
    pub fn requires_mobility(mut self) -> Self {
        self.requires_mobility = true;
        self
    }

    /// Add a metric to the table (builder pattern).
    #[must_use]
    pub fn with_metric(
        mut self,
        kind: AbilityMetricKind,
        metric: AbilityMetric,
    ) -> Self {
        self.metrics.push((kind, metric));
        self
    }

    /// Set the voice-line pool (builder pattern).
    #[must_use]
    pub fn with_voice_lines(mut self, lines: &'static [&'static str]) -> Self {
        self.voice_lines = lines;
        self
    }

    /// Set the initial per-ability state (builder pattern).
    #[must_use]
    pub fn with_state(mut self, state: AbilityState) -> Self {
        self.state = state;
        self
    }

    /// Look up a metric by kind.
    #[must_use]
    pub fn metric(&self, kind: AbilityMetricKind) -> Option<&AbilityMetric> {
        self.metrics
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, m)| m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ability = Ability::new(
            AbilitySlot::Q,
            AbilityKind::SandstrikeGrenade,
            "Sandstrike Grenade",
            "Lob a grenade.",
        )
        .with_target(TargetKind::Location)
        .with_range(2, RangeMetric::Manhattan)
        .with_metric(
            AbilityMetricKind::Damage,
            AbilityMetric::base(60.0).with_ap_scaling(0.7),
        );

        assert_eq!(ability.target_kind, TargetKind::Location);
        assert_eq!(ability.max_range, Some(2));
        assert!(ability.casting_enabled);
        assert!(ability.metric(AbilityMetricKind::Damage).is_some());
        assert!(ability.metric(AbilityMetricKind::Healing).is_none());
    }

    #[test]
    fn test_ultimate_slot() {
        assert!(AbilitySlot::R.is_ultimate());
        assert!(!AbilitySlot::Q.is_ultimate());
    }
}
