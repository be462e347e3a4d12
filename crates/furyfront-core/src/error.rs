//! Combat error types.
//!
//! Every error is detected before any mutation: a failed call leaves the
//! state exactly as it was. Variants are specific; `kind()` classifies
//! them into the three categories callers dispatch on.

use serde::{Deserialize, Serialize};

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Bad input: negative amounts, blank identifiers.
    Validation,
    /// Operation is illegal in the current state.
    InvalidState,
    /// Registry lookup failed.
    NotFound,
}

/// Errors produced by combat-state mutations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombatError {
    /// A quantity that must be non-negative was negative.
    #[error("{context} cannot be negative (was {amount})")]
    NegativeAmount { context: &'static str, amount: f64 },

    /// An identifier that must be non-blank was empty or whitespace.
    #[error("{context} identifier cannot be blank")]
    BlankIdentifier { context: &'static str },

    /// The player cannot engage while dead.
    #[error("player cannot engage while down")]
    PlayerDown,

    /// Cover only makes sense from an active firefight.
    #[error("taking cover requires an active engagement")]
    NotEngaged,

    /// Firing is unavailable outside a combat encounter.
    #[error("cannot fire while out of combat")]
    NotInCombat,

    /// The clip is empty; a reload is required before firing.
    #[error("clip is empty, reload required")]
    ClipEmpty,

    /// No reserve ammunition left to reload from.
    #[error("no reserve ammunition for reload")]
    ReserveEmpty,

    /// Upgrades require an equipped weapon.
    #[error("no weapon equipped")]
    NoWeaponEquipped,

    /// Weapon id is absent from the arsenal.
    #[error("weapon {id:?} not found in arsenal")]
    WeaponNotFound { id: String },

    /// Agent number is not registered in the roster.
    #[error("agent {agent_number} not found in roster")]
    AgentNotFound { agent_number: u32 },
}

/// Reject a blank identifier before any mutation happens.
pub fn ensure_identifier(id: &str, context: &'static str) -> Result<(), CombatError> {
    if id.trim().is_empty() {
        return Err(CombatError::BlankIdentifier { context });
    }
    Ok(())
}

/// Reject a negative amount before any mutation happens.
pub fn ensure_non_negative(amount: i32, context: &'static str) -> Result<(), CombatError> {
    if amount < 0 {
        return Err(CombatError::NegativeAmount {
            context,
            amount: f64::from(amount),
        });
    }
    Ok(())
}

impl CombatError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeAmount { .. } | Self::BlankIdentifier { .. } => ErrorKind::Validation,
            Self::PlayerDown
            | Self::NotEngaged
            | Self::NotInCombat
            | Self::ClipEmpty
            | Self::ReserveEmpty
            | Self::NoWeaponEquipped => ErrorKind::InvalidState,
            Self::WeaponNotFound { .. } | Self::AgentNotFound { .. } => ErrorKind::NotFound,
        }
    }
}
