//! # gridclash
//!
//! A deterministic, turn-based tactical combat engine on a square grid.
//!
//! ## Design Principles
//!
//! 1. **Validate, Then Mutate**: Every command (placement, movement,
//!    casting) runs its full gate sequence before touching state. A
//!    rejected command has changed nothing.
//!
//! 2. **Content Behind a Seam**: The framework (board, turn engine,
//!    statuses, effects) carries no champion knowledge. Champion kits,
//!    hooks, and per-kind behavior live in `content` and are reached
//!    through tagged dispatch.
//!
//! 3. **Deterministic Replay**: The only randomness is cosmetic (voice
//!    lines) and flows through a seeded RNG, so a match replays
//!    identically from its seed and command sequence.
//!
//! ## Architecture
//!
//! - **Arena Ownership**: The board owns every unit and effect; the rest
//!   of the engine holds copyable ids. Dead units keep their square.
//!
//! - **Panic On Invariants, Error On Commands**: Bad external input gets
//!   a typed error (`CastError`, `BoardError`); an ally damaging an ally
//!   or a placement onto an occupied square panics, because only engine
//!   bugs can get there.
//!
//! ## Modules
//!
//! - `core`: Positions, teams, ids, configuration, RNG
//! - `damage`: Damage types and mitigation math
//! - `status`: Status-effect kinds and lifecycle state
//! - `units`: Units, attributes, items, channels, champion data
//! - `abilities`: Ability data model and the cast-validation pipeline
//! - `effects`: Battlefield effects with hitboxes
//! - `board`: The authoritative grid
//! - `game`: The turn engine and event bus
//! - `content`: The champion roster and ability behavior

pub mod abilities;
pub mod board;
pub mod content;
pub mod core;
pub mod damage;
pub mod effects;
pub mod game;
pub mod status;
pub mod units;

// Re-export commonly used types
pub use crate::core::{
    EffectId, GameConfig, GameRng, ListenerId, Position, Team, TeamColor, UnitId,
};

pub use crate::abilities::{
    Ability, AbilityKind, AbilityMetric, AbilityMetricKind, AbilitySlot,
    AbilityTarget, CastError, EffectMask, RangeMetric, TargetKind,
};

pub use crate::board::{Board, BoardError};
pub use crate::damage::{mitigate, mitigation_multiplier, DamageKind};
pub use crate::effects::{BoardEffect, EffectKind, Hitbox};
pub use crate::game::{DamageEvent, DamageListener, EventBus, Game};
pub use crate::status::{StatusCategory, StatusEffect, StatusKind};
pub use crate::units::{
    ChampionData, ChampionKind, Channel, ChannelKind, ItemId, StatBonuses, Unit,
    UnitAttributes, UnitKind,
};

pub use crate::content::{create_champion, create_minion, ChampionRegistry};
