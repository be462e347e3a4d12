//! Tactical decision function.
//!
//! A pure function mapping behavior, distance, and threat to a task.
//! No ECS dependency — operates on plain data, recomputed fully each
//! tick with no memory of previous decisions.

use furyfront_core::constants::THREAT_PATROL_FLOOR;
use furyfront_core::enums::{AiBehavior, AiTask};

use crate::profiles::get_profile;

/// Input to the decision function for a single agent.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext {
    pub behavior: AiBehavior,
    /// Distance to the player in meters (>= 0).
    pub distance_to_player: f32,
    /// Threat level estimate (>= 0).
    pub threat_level: f32,
}

/// Evaluate the decision table for one agent.
///
/// Rule order within a behavior matters: defensive agents prefer cover
/// over retreating when both would fire.
pub fn decide(ctx: &DecisionContext) -> AiTask {
    // Global rule: a harmless player means every agent patrols.
    if ctx.threat_level <= THREAT_PATROL_FLOOR {
        return AiTask::Patrol;
    }

    let profile = get_profile(ctx.behavior);

    if let Some(cover_range) = profile.cover_range {
        if ctx.distance_to_player < cover_range && ctx.threat_level > profile.cover_threat {
            return AiTask::TakeCover;
        }
    }

    if let Some(attack_range) = profile.attack_range {
        if ctx.distance_to_player < attack_range {
            return AiTask::AttackPlayer;
        }
    }

    if let Some(retreat_range) = profile.retreat_range {
        if ctx.distance_to_player < retreat_range {
            return AiTask::Retreat;
        }
    }

    if let Some(retreat_threat) = profile.retreat_threat {
        if ctx.threat_level > retreat_threat {
            return AiTask::Retreat;
        }
    }

    profile.fallback
}
