//! Combat snapshot — the complete visible state produced each tick.
//!
//! Snapshots carry exact field values only; collaborators never recompute
//! derived state. Everything here is serde-serializable so a persistence
//! collaborator can store and restore a session verbatim.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::SimTime;

/// Complete state of the combat session after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub player: PlayerView,
    /// Equipped weapon with effective (base + upgrades) stats, if any.
    pub weapon: Option<WeaponView>,
    /// All registered agents, sorted by agent number.
    pub agents: Vec<AgentView>,
    /// Events that occurred during this tick.
    pub events: Vec<CombatEvent>,
}

/// Player combat and defense state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub state: CombatState,
    pub fire_mode: FireMode,
    pub ammo_in_clip: u32,
    pub reserve_ammo: u32,
    pub health: i32,
    pub max_health: i32,
    pub armor: i32,
    pub max_armor: i32,
    pub alive: bool,
}

/// Equipped weapon with aggregated stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub id: String,
    pub name: String,
    pub class: WeaponClass,
    pub damage: i32,
    pub fire_rate: f32,
    pub clip_size: u32,
    pub upgrade_count: usize,
}

/// One roster agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub agent_number: u32,
    pub id: String,
    pub display_name: String,
    pub behavior: AiBehavior,
    pub current_task: AiTask,
    pub distance_to_player: f32,
    pub threat_level: f32,
}
