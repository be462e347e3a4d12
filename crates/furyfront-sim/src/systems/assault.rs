//! Assault system — attacking agents shoot at the player.
//!
//! Each agent whose current task is `AttackPlayer` rolls a per-tick hit
//! chance on the engine RNG. Landed shots go through the player's
//! defense pipeline as bullet damage.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use furyfront_core::components::{AgentInfo, AgentMind};
use furyfront_core::constants::{AGENT_HIT_RATE_PER_SEC, AGENT_SHOT_DAMAGE, DT};
use furyfront_core::enums::{AiTask, DamageType};
use furyfront_core::events::CombatEvent;

use crate::player::PlayerCombat;

/// Roll hit chances for all attacking agents and apply landed shots.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &mut PlayerCombat,
    events: &mut Vec<CombatEvent>,
) {
    if !player.defense().is_alive() {
        return;
    }

    // Stable roll order: shooters sorted by agent number.
    let mut shooters: Vec<u32> = Vec::new();
    {
        let mut query = world.query::<(&AgentInfo, &AgentMind)>();
        for (_entity, (info, mind)) in query.iter() {
            if mind.current_task == AiTask::AttackPlayer {
                shooters.push(info.agent_number);
            }
        }
    }
    shooters.sort_unstable();

    let hit_chance = (AGENT_HIT_RATE_PER_SEC * DT).min(1.0);

    for agent_number in shooters {
        if !rng.gen_bool(hit_chance) {
            continue;
        }

        events.push(CombatEvent::AgentShotLanded {
            agent_number,
            damage: AGENT_SHOT_DAMAGE,
        });
        if let Err(error) = player.apply_damage(AGENT_SHOT_DAMAGE, DamageType::Bullet, events) {
            // Unreachable for a non-negative constant amount.
            tracing::warn!(%error, agent_number, "agent shot could not be applied");
        }

        if !player.defense().is_alive() {
            break;
        }
    }
}
