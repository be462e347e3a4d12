//! Decision system — recomputes every agent's task each tick.
//!
//! Calls the pure decision function from furyfront-combat-ai and writes
//! the result back. Agents are visited in registration order so a replay
//! with the same inputs produces the same event stream; the decisions
//! themselves are independent of each other.

use hecs::World;

use furyfront_core::components::{Agent, AgentInfo, AgentMind, Perception};
use furyfront_core::enums::{AiBehavior, AiTask};
use furyfront_core::events::CombatEvent;

use furyfront_combat_ai::decision::{decide, DecisionContext};

/// Run the decision system: evaluate the table for each agent, emit
/// `AgentTaskChanged` when a decision differs from the previous tick.
pub fn run(world: &mut World, events: &mut Vec<CombatEvent>) {
    // Collect into a buffer to avoid borrow issues with hecs, then sort
    // by agent number for stable ordering.
    let mut agents: Vec<(hecs::Entity, u32, AiBehavior, f32, f32, AiTask)> = Vec::new();
    {
        let mut query = world.query::<(&Agent, &AgentInfo, &Perception, &AgentMind)>();
        for (entity, (_agent, info, perception, mind)) in query.iter() {
            agents.push((
                entity,
                info.agent_number,
                info.behavior,
                perception.distance_to_player,
                perception.threat_level,
                mind.current_task,
            ));
        }
    }
    agents.sort_by_key(|&(_, agent_number, ..)| agent_number);

    for (entity, agent_number, behavior, distance, threat, previous_task) in agents {
        let task = decide(&DecisionContext {
            behavior,
            distance_to_player: distance,
            threat_level: threat,
        });

        if let Ok(mut mind) = world.get::<&mut AgentMind>(entity) {
            mind.current_task = task;
        }

        if task != previous_task {
            events.push(CombatEvent::AgentTaskChanged { agent_number, task });
        }
    }
}
