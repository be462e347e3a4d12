//! Behavior-specific decision profiles.
//!
//! Consolidates per-behavior thresholds for the decision function. A rule
//! field set to `None` means that behavior never evaluates the rule.

use furyfront_core::constants::*;
use furyfront_core::enums::{AiBehavior, AiTask};

/// Threshold table for one behavior.
pub struct BehaviorProfile {
    /// Take cover when the player is inside this range (m) and threat
    /// exceeds `cover_threat`.
    pub cover_range: Option<f32>,
    /// Threat level required for the cover rule.
    pub cover_threat: f32,
    /// Attack when the player is inside this range (m).
    pub attack_range: Option<f32>,
    /// Retreat when the player is closer than this (m).
    pub retreat_range: Option<f32>,
    /// Retreat when threat exceeds this level.
    pub retreat_threat: Option<f32>,
    /// Task when no rule fires.
    pub fallback: AiTask,
}

/// Get the decision profile for a given behavior.
pub fn get_profile(behavior: AiBehavior) -> BehaviorProfile {
    match behavior {
        AiBehavior::Passive => BehaviorProfile {
            cover_range: None,
            cover_threat: 0.0,
            attack_range: None,
            retreat_range: Some(PASSIVE_RETREAT_RANGE),
            retreat_threat: None,
            fallback: AiTask::Idle,
        },
        AiBehavior::Defensive => BehaviorProfile {
            cover_range: Some(DEFENSIVE_COVER_RANGE),
            cover_threat: DEFENSIVE_COVER_THREAT,
            attack_range: None,
            retreat_range: None,
            retreat_threat: Some(DEFENSIVE_RETREAT_THREAT),
            fallback: AiTask::Patrol,
        },
        AiBehavior::Aggressive => BehaviorProfile {
            cover_range: None,
            cover_threat: 0.0,
            attack_range: Some(AGGRESSIVE_ATTACK_RANGE),
            retreat_range: None,
            retreat_threat: None,
            fallback: AiTask::Patrol,
        },
    }
}
