//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Source of incoming damage, selecting the health-portion multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    #[default]
    Bullet,
    Explosion,
    Melee,
    Environmental,
}

/// Selected firing cadence. Stored on the player but not gated by
/// current logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireMode {
    #[default]
    Single,
    Burst,
    Auto,
}

/// Player combat state.
///
/// Reloading is deliberately not a variant: a reload completes within a
/// single operation and is surfaced as `ReloadStarted`/`ReloadCompleted`
/// events rather than a polled state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatState {
    /// Out of combat. Firing is rejected in this state.
    #[default]
    Idle,
    /// In an active firefight.
    Engaged,
    /// Behind cover, still in the fight.
    InCover,
}

/// Static AI temperament. Selects which branch of the decision table an
/// agent evaluates each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiBehavior {
    #[default]
    Passive,
    Defensive,
    Aggressive,
}

/// Tactical task an agent is currently executing. Recomputed fully on
/// every decision tick — no memory across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiTask {
    #[default]
    Idle,
    Patrol,
    AttackPlayer,
    TakeCover,
    Retreat,
}

/// Weapon classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    #[default]
    AssaultRifle,
    SniperRifle,
    Shotgun,
    Pistol,
    SubmachineGun,
}

/// Upgrade rarity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeRarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Combat session lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Session created but not started; systems do not run.
    #[default]
    Setup,
    /// Simulation ticking.
    Active,
    /// Paused; commands still queue, systems do not run.
    Paused,
}

/// Mission lifecycle state (campaign).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

/// Status of a single objective within a mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Failed,
}
