//! Player combat state machine.
//!
//! Orchestrates fire/reload/damage around the defense state and the
//! equipped loadout. Every operation validates before mutating, so a
//! failed call leaves the player exactly as before. Reloading completes
//! within the operation that started it and is observable only through
//! the `ReloadStarted`/`ReloadCompleted` events.

use serde::{Deserialize, Serialize};

use furyfront_core::constants::*;
use furyfront_core::enums::{CombatState, DamageType, FireMode};
use furyfront_core::error::{ensure_identifier, CombatError};
use furyfront_core::events::CombatEvent;
use furyfront_core::weapons::{Loadout, Weapon, WeaponUpgrade};

use crate::defense::{DamageOutcome, DamagePolicy, DefenseState};

/// The player's combat session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCombat {
    state: CombatState,
    fire_mode: FireMode,
    ammo_in_clip: u32,
    reserve_ammo: u32,
    defense: DefenseState,
    loadout: Option<Loadout>,
}

impl PlayerCombat {
    /// Create a player at full defense with a full default clip and no
    /// weapon equipped.
    pub fn new(policy: DamagePolicy) -> Self {
        Self {
            state: CombatState::Idle,
            fire_mode: FireMode::default(),
            ammo_in_clip: DEFAULT_CLIP_CAPACITY,
            reserve_ammo: DEFAULT_RESERVE_AMMO,
            defense: DefenseState::new(PLAYER_MAX_HEALTH, PLAYER_MAX_ARMOR, policy),
            loadout: None,
        }
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn fire_mode(&self) -> FireMode {
        self.fire_mode
    }

    pub fn ammo_in_clip(&self) -> u32 {
        self.ammo_in_clip
    }

    pub fn reserve_ammo(&self) -> u32 {
        self.reserve_ammo
    }

    pub fn defense(&self) -> &DefenseState {
        &self.defense
    }

    pub fn loadout(&self) -> Option<&Loadout> {
        self.loadout.as_ref()
    }

    /// Effective clip capacity; falls back to the default magazine when
    /// no weapon is equipped.
    pub fn clip_capacity(&self) -> u32 {
        self.loadout
            .as_ref()
            .map(Loadout::effective_clip_size)
            .unwrap_or(DEFAULT_CLIP_CAPACITY)
    }

    /// Enter combat. Valid from any state while alive.
    pub fn engage(&mut self) -> Result<(), CombatError> {
        if !self.defense.is_alive() {
            return Err(CombatError::PlayerDown);
        }
        self.state = CombatState::Engaged;
        Ok(())
    }

    /// Move behind cover. Only valid while engaged.
    pub fn take_cover(&mut self) -> Result<(), CombatError> {
        if self.state != CombatState::Engaged {
            return Err(CombatError::NotEngaged);
        }
        self.state = CombatState::InCover;
        Ok(())
    }

    /// Fire one shot. Auto-reloads when the clip empties and reserve
    /// ammunition remains.
    pub fn fire(&mut self, events: &mut Vec<CombatEvent>) -> Result<(), CombatError> {
        if self.state == CombatState::Idle {
            return Err(CombatError::NotInCombat);
        }
        if self.ammo_in_clip == 0 {
            return Err(CombatError::ClipEmpty);
        }

        self.ammo_in_clip -= 1;
        events.push(CombatEvent::ShotFired {
            remaining_in_clip: self.ammo_in_clip,
        });

        if self.ammo_in_clip == 0 && self.reserve_ammo > 0 {
            self.reload(events)?;
        }
        Ok(())
    }

    /// Transfer rounds from reserve into the clip. Ends engaged.
    pub fn reload(&mut self, events: &mut Vec<CombatEvent>) -> Result<(), CombatError> {
        if self.reserve_ammo == 0 {
            return Err(CombatError::ReserveEmpty);
        }

        let needed = self.clip_capacity().saturating_sub(self.ammo_in_clip);
        let transferred = needed.min(self.reserve_ammo);

        events.push(CombatEvent::ReloadStarted { needed });
        self.ammo_in_clip += transferred;
        self.reserve_ammo -= transferred;
        self.state = CombatState::Engaged;
        events.push(CombatEvent::ReloadCompleted { transferred });
        Ok(())
    }

    /// Apply damage through the configured defense pipeline.
    pub fn apply_damage(
        &mut self,
        amount: i32,
        damage_type: DamageType,
        events: &mut Vec<CombatEvent>,
    ) -> Result<DamageOutcome, CombatError> {
        let was_alive = self.defense.is_alive();
        let outcome = self.defense.apply_damage(amount, damage_type)?;

        if was_alive {
            events.push(CombatEvent::PlayerDamaged {
                damage_type,
                raw_amount: amount,
                armor_absorbed: outcome.armor_absorbed,
                health_lost: outcome.health_lost,
            });
            if !self.defense.is_alive() {
                events.push(CombatEvent::PlayerDown);
            }
        }
        Ok(outcome)
    }

    /// Restore health. No-op when dead.
    pub fn heal(&mut self, amount: i32) -> Result<(), CombatError> {
        self.defense.heal(amount)
    }

    /// Restore armor. No-op when dead.
    pub fn restore_armor(&mut self, amount: i32) -> Result<(), CombatError> {
        self.defense.restore_armor(amount)
    }

    /// Force health to 0. Idempotent; emits `PlayerDown` only on the
    /// alive-to-dead transition.
    pub fn kill(&mut self, events: &mut Vec<CombatEvent>) {
        if self.defense.is_alive() {
            self.defense.kill();
            events.push(CombatEvent::PlayerDown);
        }
    }

    /// Set ammunition counters directly (for scenario tests).
    #[cfg(test)]
    pub fn set_ammo(&mut self, ammo_in_clip: u32, reserve_ammo: u32) {
        self.ammo_in_clip = ammo_in_clip;
        self.reserve_ammo = reserve_ammo;
    }

    /// Select a firing cadence. Stored; not gated by current logic.
    pub fn set_fire_mode(&mut self, mode: FireMode) {
        self.fire_mode = mode;
    }

    /// Equip a weapon. The new loadout starts with a fresh clip at
    /// effective capacity; reserve ammunition is untouched.
    pub fn equip(&mut self, weapon: Weapon, events: &mut Vec<CombatEvent>) {
        let weapon_id = weapon.id.clone();
        let loadout = Loadout::new(weapon);
        self.ammo_in_clip = loadout.effective_clip_size();
        self.loadout = Some(loadout);
        events.push(CombatEvent::WeaponEquipped { weapon_id });
    }

    /// Install an upgrade on the equipped weapon.
    pub fn install_upgrade(
        &mut self,
        upgrade: WeaponUpgrade,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), CombatError> {
        ensure_identifier(&upgrade.id, "upgrade")?;
        let loadout = self.loadout.as_mut().ok_or(CombatError::NoWeaponEquipped)?;

        events.push(CombatEvent::UpgradeInstalled {
            upgrade_id: upgrade.id.clone(),
            weapon_id: loadout.weapon.id.clone(),
        });
        loadout.install(upgrade);
        Ok(())
    }
}
