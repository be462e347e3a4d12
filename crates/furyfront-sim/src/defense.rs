//! Player defense — health, armor, and the damage-absorption model.
//!
//! One configurable pipeline: `DamagePolicy` capability flags select
//! armor-first absorption and damage-type multipliers at construction.
//! Armor absorption always consumes the raw, unmultiplied amount; the
//! multiplier applies to the health portion only.

use serde::{Deserialize, Serialize};

use furyfront_core::constants::*;
use furyfront_core::enums::DamageType;
use furyfront_core::error::{ensure_non_negative, CombatError};

/// Capability flags for the damage pipeline, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamagePolicy {
    /// Armor absorbs incoming damage before health is touched.
    pub absorb_armor_first: bool,
    /// Apply the per-type multiplier to the health portion.
    pub type_multipliers: bool,
}

impl Default for DamagePolicy {
    fn default() -> Self {
        Self {
            absorb_armor_first: true,
            type_multipliers: true,
        }
    }
}

impl DamagePolicy {
    /// Plain health subtraction with no armor and no multipliers.
    pub fn plain() -> Self {
        Self {
            absorb_armor_first: false,
            type_multipliers: false,
        }
    }
}

/// What a single damage application did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    pub armor_absorbed: i32,
    pub health_lost: i32,
}

/// Health and armor pools with clamped mutation.
///
/// Health never goes negative; alive means health > 0. Mutation happens
/// only through `apply_damage`, `heal`, `restore_armor`, and `kill`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseState {
    health: i32,
    armor: i32,
    max_health: i32,
    max_armor: i32,
    policy: DamagePolicy,
}

/// Multiplier applied to the health portion of incoming damage.
pub fn damage_multiplier(damage_type: DamageType) -> f32 {
    match damage_type {
        DamageType::Bullet => BULLET_DAMAGE_MULT,
        DamageType::Explosion => EXPLOSION_DAMAGE_MULT,
        DamageType::Melee => MELEE_DAMAGE_MULT,
        DamageType::Environmental => ENVIRONMENTAL_DAMAGE_MULT,
    }
}

impl DefenseState {
    /// Create a defense state at full health and armor.
    pub fn new(max_health: i32, max_armor: i32, policy: DamagePolicy) -> Self {
        Self {
            health: max_health,
            armor: max_armor,
            max_health,
            max_armor,
            policy,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn armor(&self) -> i32 {
        self.armor
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn max_armor(&self) -> i32 {
        self.max_armor
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage through the configured pipeline.
    ///
    /// No-op when already dead. Rejects negative amounts before any
    /// mutation.
    pub fn apply_damage(
        &mut self,
        amount: i32,
        damage_type: DamageType,
    ) -> Result<DamageOutcome, CombatError> {
        ensure_non_negative(amount, "damage amount")?;

        if !self.is_alive() {
            return Ok(DamageOutcome::default());
        }

        let mut remaining = amount;
        let mut armor_absorbed = 0;

        if self.policy.absorb_armor_first && self.armor > 0 {
            armor_absorbed = self.armor.min(remaining);
            self.armor -= armor_absorbed;
            remaining -= armor_absorbed;
        }

        let mut health_lost = 0;
        if remaining > 0 {
            let scaled = if self.policy.type_multipliers {
                (remaining as f32 * damage_multiplier(damage_type)) as i32
            } else {
                remaining
            };
            health_lost = scaled.min(self.health);
            self.health -= health_lost;
        }

        Ok(DamageOutcome {
            armor_absorbed,
            health_lost,
        })
    }

    /// Restore health, clamped to the maximum. No-op when dead.
    pub fn heal(&mut self, amount: i32) -> Result<(), CombatError> {
        ensure_non_negative(amount, "heal amount")?;

        if !self.is_alive() {
            return Ok(());
        }

        self.health = (self.health + amount).min(self.max_health);
        Ok(())
    }

    /// Restore armor, clamped to the maximum. No-op when dead.
    pub fn restore_armor(&mut self, amount: i32) -> Result<(), CombatError> {
        ensure_non_negative(amount, "armor restore amount")?;

        if !self.is_alive() {
            return Ok(());
        }

        self.armor = (self.armor + amount).min(self.max_armor);
        Ok(())
    }

    /// Force health to 0, bypassing the alive check. Idempotent.
    pub fn kill(&mut self) {
        self.health = 0;
    }
}
