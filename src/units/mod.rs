//! Units: champions and minions.
//!
//! A unit couples immutable base attributes with mutable combat state
//! (HP, statuses, channel, CC counters) and, for champions, a kit of
//! abilities. Stat totals are computed on demand from base plus items.

pub mod attributes;
pub mod champion;
pub mod channel;
pub mod items;
pub mod unit;

pub use attributes::UnitAttributes;
pub use champion::{ChampionData, ChampionKind};
pub use channel::{Channel, ChannelKind};
pub use items::{ItemId, ItemSpec, StatBonuses};
pub use unit::{Unit, UnitKind};
