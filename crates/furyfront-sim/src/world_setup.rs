//! Agent spawn factories for setting up the combat world.
//!
//! Creates agent entities with the full component bundle, and spawns
//! whole encounters from a squad plan.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use furyfront_core::components::{Agent, AgentInfo, AgentMind, Perception};
use furyfront_core::enums::AiBehavior;
use furyfront_core::types::Position;

/// Spawn one agent with the full component bundle.
pub fn spawn_agent(
    world: &mut World,
    agent_number: u32,
    id: &str,
    display_name: &str,
    behavior: AiBehavior,
    position: Position,
) -> hecs::Entity {
    world.spawn((
        Agent,
        AgentInfo {
            agent_number,
            id: id.to_string(),
            display_name: display_name.to_string(),
            behavior,
        },
        position,
        Perception::default(),
        AgentMind::default(),
    ))
}

/// One squad in an encounter plan: how many agents of one temperament.
#[derive(Debug, Clone)]
pub struct SquadEntry {
    pub behavior: AiBehavior,
    pub count: u32,
}

/// A complete encounter: squads plus the ring they spawn on.
#[derive(Debug, Clone)]
pub struct EncounterPlan {
    pub squads: Vec<SquadEntry>,
    /// Outer spawn radius around the player (m). Agents spawn between
    /// half this radius and the full radius.
    pub spawn_radius: f32,
}

impl EncounterPlan {
    /// Default mixed skirmish: two shooters, a sentry, and a bystander.
    pub fn skirmish() -> Self {
        Self {
            squads: vec![
                SquadEntry {
                    behavior: AiBehavior::Aggressive,
                    count: 2,
                },
                SquadEntry {
                    behavior: AiBehavior::Defensive,
                    count: 1,
                },
                SquadEntry {
                    behavior: AiBehavior::Passive,
                    count: 1,
                },
            ],
            spawn_radius: 30.0,
        }
    }

    /// Total number of agents across all squads.
    pub fn total_agents(&self) -> u32 {
        self.squads.iter().map(|s| s.count).sum()
    }
}

/// Spawn all squads of a plan on a ring around `center`.
/// Returns the assigned agent numbers in spawn order.
pub fn spawn_encounter(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_agent_number: &mut u32,
    plan: &EncounterPlan,
    center: Position,
) -> Vec<u32> {
    let mut spawned = Vec::with_capacity(plan.total_agents() as usize);

    for squad in &plan.squads {
        for _ in 0..squad.count {
            let bearing = rng.gen_range(0.0..std::f32::consts::TAU);
            let range = rng.gen_range(plan.spawn_radius * 0.5..plan.spawn_radius);
            let position = Position::new(
                center.0.x + range * bearing.sin(),
                center.0.y + range * bearing.cos(),
                center.0.z,
            );

            let agent_number = *next_agent_number;
            *next_agent_number += 1;

            let id = format!("agent-{agent_number}");
            let display_name = format!("{} {agent_number}", codename(squad.behavior));
            spawn_agent(world, agent_number, &id, &display_name, squad.behavior, position);
            spawned.push(agent_number);
        }
    }

    spawned
}

fn codename(behavior: AiBehavior) -> &'static str {
    match behavior {
        AiBehavior::Passive => "Bystander",
        AiBehavior::Defensive => "Sentry",
        AiBehavior::Aggressive => "Assaulter",
    }
}
