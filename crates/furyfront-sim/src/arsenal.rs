//! Weapon arsenal — the string-keyed weapon registry.
//!
//! Populated once at construction, read-only afterward. Equipping always
//! clones the definition out, so the registry itself is never mutated by
//! loadouts.

use std::collections::HashMap;

use furyfront_core::enums::WeaponClass;
use furyfront_core::error::{ensure_identifier, CombatError};
use furyfront_core::weapons::Weapon;

/// Read-only weapon registry.
#[derive(Debug, Clone)]
pub struct Arsenal {
    weapons: HashMap<String, Weapon>,
}

impl Default for Arsenal {
    fn default() -> Self {
        Self::with_weapons(default_loadout_table())
    }
}

impl Arsenal {
    /// Build an arsenal from a fixed weapon table.
    pub fn with_weapons(weapons: Vec<Weapon>) -> Self {
        Self {
            weapons: weapons.into_iter().map(|w| (w.id.clone(), w)).collect(),
        }
    }

    /// Look up a weapon definition by id.
    pub fn get(&self, id: &str) -> Result<&Weapon, CombatError> {
        ensure_identifier(id, "weapon")?;
        self.weapons
            .get(id)
            .ok_or_else(|| CombatError::WeaponNotFound { id: id.to_string() })
    }

    /// Registered weapon ids, sorted for stable iteration.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.weapons.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

/// The default three-weapon arsenal.
fn default_loadout_table() -> Vec<Weapon> {
    vec![
        Weapon {
            id: "rifle_ak".into(),
            name: "AK assault rifle".into(),
            class: WeaponClass::AssaultRifle,
            damage: 30,
            fire_rate: 9.0,
            clip_size: 30,
        },
        Weapon {
            id: "pistol_std".into(),
            name: "Service pistol".into(),
            class: WeaponClass::Pistol,
            damage: 20,
            fire_rate: 4.0,
            clip_size: 15,
        },
        Weapon {
            id: "shotgun_pump".into(),
            name: "Pump shotgun".into(),
            class: WeaponClass::Shotgun,
            damage: 80,
            fire_rate: 1.0,
            clip_size: 8,
        },
    ]
}
