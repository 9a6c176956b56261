//! Champion identity and kit storage.

use smallvec::SmallVec;

use crate::abilities::{Ability, AbilitySlot};

/// Every champion in the roster. Ability behavior and stat quirks are
/// dispatched on this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChampionKind {
    Vessa,
    Sylra,
    Kael,
    Morwen,
}

/// Champion-only data carried by a `Unit`.
#[derive(Clone, Debug)]
pub struct ChampionData {
    pub kind: ChampionKind,
    pub title: &'static str,
    pub quote: &'static str,
    /// Alternate names accepted by the registry lookup.
    pub nicknames: &'static [&'static str],
    abilities: SmallVec<[Ability; 5]>,
    /// Line spoken on the last successful cast, if the roll hit.
    /// Presentation reads it; the engine overwrites it on cast.
    pub voice_line: Option<&'static str>,
}

impl ChampionData {
    #[must_use]
    pub fn new(
        kind: ChampionKind,
        title: &'static str,
        quote: &'static str,
        nicknames: &'static [&'static str],
        abilities: Vec<Ability>,
    ) -> Self {
        Self {
            kind,
            title,
            quote,
            nicknames,
            abilities: SmallVec::from_vec(abilities),
            voice_line: None,
        }
    }

    /// The ability on a slot, if the kit has one there.
    #[must_use]
    pub fn ability(&self, slot: AbilitySlot) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.slot == slot)
    }

    pub fn ability_mut(&mut self, slot: AbilitySlot) -> Option<&mut Ability> {
        self.abilities.iter_mut().find(|a| a.slot == slot)
    }

    /// All abilities in the kit, in slot order as constructed.
    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }
}
