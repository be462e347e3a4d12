//! Player commands sent from the input collaborator to the engine.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! that is illegal for the current state leaves state untouched and
//! surfaces as a `CommandRejected` event.

use serde::{Deserialize, Serialize};

use crate::enums::FireMode;
use crate::weapons::WeaponUpgrade;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Combat state machine ---
    /// Enter combat. Valid from any state while alive.
    Engage,
    /// Move behind cover. Only valid while engaged.
    TakeCover,
    /// Fire one shot from the equipped weapon.
    Fire,
    /// Reload the clip from reserve ammunition.
    Reload,
    /// Select a firing cadence.
    SetFireMode { mode: FireMode },

    // --- Loadout ---
    /// Equip a weapon from the arsenal.
    EquipWeapon { weapon_id: String },
    /// Install an upgrade on the currently equipped weapon.
    InstallUpgrade { upgrade: WeaponUpgrade },

    // --- Session control ---
    /// Start the combat session.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
