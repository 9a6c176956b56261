//! Channeled casts.
//!
//! A channel occupies a unit across turns. It ticks once per turn-end
//! sweep and completes when its counter reaches zero; it is force
//! interrupted when the unit gains an immobilizing or silencing stack,
//! moves, or begins another channel. The completion and interrupt hooks
//! live in the content resolver, keyed on `ChannelKind`.

use serde::{Deserialize, Serialize};

use crate::core::UnitId;

/// What a unit is channeling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Suppression lock on a target, released when the channel ends.
    Gravelock { target: UnitId },
}

/// An in-progress channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub kind: ChannelKind,
    pub duration: u32,
    pub time_remaining: u32,
}

impl Channel {
    #[must_use]
    pub fn new(kind: ChannelKind, duration: u32) -> Self {
        Self {
            kind,
            duration,
            time_remaining: duration,
        }
    }

    /// Tick one sweep off the channel. Returns true when it completes.
    pub fn tick(&mut self) -> bool {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining == 0
    }
}
