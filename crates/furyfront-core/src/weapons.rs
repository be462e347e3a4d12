//! Weapon and upgrade definitions.
//!
//! A `Weapon` is an immutable base description; upgrades never mutate it.
//! Effective stats are computed on demand by `Loadout` from the base plus
//! the ordered upgrade list.

use serde::{Deserialize, Serialize};

use crate::enums::{UpgradeRarity, WeaponClass};

/// Immutable weapon description as registered in the arsenal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Unique arsenal identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub class: WeaponClass,
    /// Base damage per shot.
    pub damage: i32,
    /// Base rate of fire (rounds per second).
    pub fire_rate: f32,
    /// Base clip capacity.
    pub clip_size: i32,
}

/// An upgrade applied to the currently equipped weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponUpgrade {
    pub id: String,
    pub title: String,
    pub rarity: UpgradeRarity,
    /// Additive damage bonus (may be negative for trade-off mods).
    pub damage_bonus: i32,
    /// Additive clip capacity bonus.
    pub clip_size_bonus: i32,
    /// Additive rate-of-fire bonus.
    pub fire_rate_bonus: f32,
}

/// An equipped weapon: immutable base plus the ordered upgrade list.
///
/// Aggregation is pure — the base `Weapon` is cloned out of the arsenal
/// and never written to, so upgrades on one loadout can never leak into
/// another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    pub weapon: Weapon,
    pub upgrades: Vec<WeaponUpgrade>,
}

impl Loadout {
    pub fn new(weapon: Weapon) -> Self {
        Self {
            weapon,
            upgrades: Vec::new(),
        }
    }

    /// Install an upgrade at the end of the list.
    pub fn install(&mut self, upgrade: WeaponUpgrade) {
        self.upgrades.push(upgrade);
    }

    /// Effective damage: base plus bonuses, floored at 0.
    pub fn effective_damage(&self) -> i32 {
        let total = self.weapon.damage + self.upgrades.iter().map(|u| u.damage_bonus).sum::<i32>();
        total.max(0)
    }

    /// Effective clip capacity: base plus bonuses, floored at 1.
    pub fn effective_clip_size(&self) -> u32 {
        let total =
            self.weapon.clip_size + self.upgrades.iter().map(|u| u.clip_size_bonus).sum::<i32>();
        total.max(1) as u32
    }

    /// Effective rate of fire: base plus bonuses, floored at 0.
    pub fn effective_fire_rate(&self) -> f32 {
        let total =
            self.weapon.fire_rate + self.upgrades.iter().map(|u| u.fire_rate_bonus).sum::<f32>();
        total.max(0.0)
    }
}
