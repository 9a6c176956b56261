//! Cast failure reasons.
//!
//! Every rejection the validation pipeline can produce, in gate order.
//! A cast that returns any of these has mutated nothing.

use thiserror::Error;

/// Why a cast was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("no ability on that slot")]
    NoSuchAbility,

    #[error("that slot cannot be cast")]
    NotCastable,

    #[error("this ability is currently disabled")]
    CastingDisabled,

    #[error("wrong target type for this ability")]
    WrongTargetType,

    #[error("target is out of range")]
    OutOfRange,

    #[error("this ability cannot affect that unit")]
    TargetNotAllowed,

    #[error("invalid target: {0}")]
    InvalidTarget(&'static str),

    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),

    #[error("caster is silenced")]
    Silenced,

    #[error("caster is immobilized")]
    Immobilized,
}
