//! Damage events.
//!
//! A small explicit bus: listeners are tagged reactions registered by
//! ability logic, not closures. `Game::deal_damage` broadcasts over a
//! snapshot of the listener list before HP changes, so a listener may
//! deregister itself (or others) mid-broadcast.

use crate::abilities::AbilitySlot;
use crate::core::{ListenerId, UnitId};
use crate::damage::DamageKind;

/// One damage instance, published before it is applied.
#[derive(Clone, Copy, Debug)]
pub struct DamageEvent {
    pub source: UnitId,
    pub target: UnitId,
    /// Amount before mitigation.
    pub pre_mitigation: f64,
    /// Amount actually subtracted from the target's HP.
    pub post_mitigation: f64,
    pub kind: DamageKind,
}

/// What a listener does when a damage event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageListener {
    /// Record damage dealt by `attacker` into the ledger of the ability
    /// on `slot` (spirit-form repeat).
    RecordDealtBy {
        attacker: UnitId,
        slot: AbilitySlot,
    },
}

/// Listener registry for damage events.
#[derive(Clone, Debug, Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, DamageListener)>,
    next_id: u64,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its handle.
    pub fn add_listener(&mut self, listener: DamageListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Deregister by handle. Returns false if the handle was not found.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }

    /// Copy of the current listener list, for broadcast iteration.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(ListenerId, DamageListener)> {
        self.listeners.clone()
    }
}
