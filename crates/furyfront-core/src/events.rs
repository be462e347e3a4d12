//! Events emitted by the engine for HUD and presentation collaborators.
//!
//! Events are collected during a tick and drained into the snapshot, so
//! transient facts (a reload, a landed hit) can be observed without
//! polling for a state that no longer exists.

use serde::{Deserialize, Serialize};

use crate::enums::{AiTask, DamageType};

/// Per-tick event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// The session transitioned to Active.
    SessionStarted,
    /// A shot left the barrel.
    ShotFired { remaining_in_clip: u32 },
    /// A reload began; `needed` rounds were missing from the clip.
    ReloadStarted { needed: u32 },
    /// A reload finished within the same operation.
    ReloadCompleted { transferred: u32 },
    /// The player took damage through the defense pipeline.
    PlayerDamaged {
        damage_type: DamageType,
        raw_amount: i32,
        armor_absorbed: i32,
        health_lost: i32,
    },
    /// Player health reached 0.
    PlayerDown,
    /// A weapon was equipped from the arsenal.
    WeaponEquipped { weapon_id: String },
    /// An upgrade was installed on the equipped weapon.
    UpgradeInstalled { upgrade_id: String, weapon_id: String },
    /// An agent's decision changed this tick.
    AgentTaskChanged { agent_number: u32, task: AiTask },
    /// An attacking agent landed a shot on the player.
    AgentShotLanded { agent_number: u32, damage: i32 },
    /// A queued command was illegal for the current state and was dropped
    /// without mutation.
    CommandRejected { reason: String },
}
