//! ECS components for hecs agent entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{AiBehavior, AiTask};

/// Marks an entity as an AI-controlled agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Agent;

/// Static identity of an agent, fixed at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentInfo {
    /// Monotonically increasing roster number; drives stable update and
    /// snapshot ordering.
    pub agent_number: u32,
    /// External identifier supplied at spawn.
    pub id: String,
    /// Display name for presentation collaborators.
    pub display_name: String,
    /// Temperament; never changes after spawn.
    pub behavior: AiBehavior,
}

/// Per-tick sensory inputs to the decision function.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Perception {
    /// Distance to the player in meters (>= 0), derived from positions
    /// each tick before decisions run.
    pub distance_to_player: f32,
    /// Estimated danger posed by the player (>= 0), written by the host.
    pub threat_level: f32,
}

/// The agent's current tactical decision.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AgentMind {
    /// Recomputed fully on every decision tick.
    pub current_task: AiTask,
}
