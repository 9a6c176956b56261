//! Core value types: positions, ids, teams, configuration, RNG.
//!
//! Everything here is a leaf with no dependencies on the rest of the engine.

pub mod config;
pub mod ids;
pub mod position;
pub mod rng;
pub mod team;

pub use config::GameConfig;
pub use ids::{EffectId, ListenerId, UnitId};
pub use position::Position;
pub use rng::GameRng;
pub use team::{Team, TeamColor};
