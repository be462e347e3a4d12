//! Combat simulation engine for FuryFront.
//!
//! Owns the hecs agent world and the player combat state machine, runs
//! systems at a fixed tick rate, and produces CombatSnapshots for the
//! host. Completely headless, enabling deterministic testing.

pub mod arsenal;
pub mod defense;
pub mod engine;
pub mod player;
pub mod systems;
pub mod world_setup;

pub use engine::CombatEngine;
pub use furyfront_core as core;

#[cfg(test)]
mod tests;
