//! ECS systems that operate on the agent world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! in the engine.

pub mod assault;
pub mod decision;
pub mod perception;
pub mod snapshot;
