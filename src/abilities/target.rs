//! Cast targets.

use serde::{Deserialize, Serialize};

use crate::core::{Position, UnitId};

use super::TargetKind;

/// The target supplied with a cast. Exactly one variant, matched against
/// the ability's declared `TargetKind` before anything else is checked.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AbilityTarget {
    NoTarget,
    Unit(UnitId),
    Location(Position),
}

impl AbilityTarget {
    /// Whether this target variant satisfies the ability's target kind.
    /// Self-cast abilities take `NoTarget`.
    #[must_use]
    pub fn matches(&self, kind: TargetKind) -> bool {
        matches!(
            (kind, self),
            (TargetKind::None, AbilityTarget::NoTarget)
                | (TargetKind::SelfCast, AbilityTarget::NoTarget)
                | (TargetKind::Unit, AbilityTarget::Unit(_))
                | (TargetKind::Location, AbilityTarget::Location(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_matching() {
        assert!(AbilityTarget::NoTarget.matches(TargetKind::None));
        assert!(AbilityTarget::NoTarget.matches(TargetKind::SelfCast));
        assert!(AbilityTarget::Unit(UnitId(1)).matches(TargetKind::Unit));
        assert!(AbilityTarget::Location(Position::new(2, 3))
            .matches(TargetKind::Location));

        assert!(!AbilityTarget::Unit(UnitId(1)).matches(TargetKind::Location));
        assert!(!AbilityTarget::NoTarget.matches(TargetKind::Unit));
    }
}
