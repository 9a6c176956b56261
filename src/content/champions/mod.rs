//! The champion roster.

pub mod kael;
pub mod morwen;
pub mod sylra;
pub mod vessa;
