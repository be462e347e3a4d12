//! Agent AI for FuryFront.
//!
//! Implements the per-tick tactical decision function and the
//! behavior-driven threshold profiles behind it.

pub mod decision;
pub mod profiles;

pub use furyfront_core as core;
