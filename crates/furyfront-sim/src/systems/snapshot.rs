//! Snapshot system: queries the agent world and builds a complete
//! CombatSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use furyfront_core::components::{AgentInfo, AgentMind, Perception};
use furyfront_core::enums::SessionPhase;
use furyfront_core::events::CombatEvent;
use furyfront_core::state::{AgentView, CombatSnapshot, PlayerView, WeaponView};
use furyfront_core::types::SimTime;

use crate::player::PlayerCombat;

/// Build a complete CombatSnapshot from the current state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    player: &PlayerCombat,
    events: Vec<CombatEvent>,
) -> CombatSnapshot {
    CombatSnapshot {
        time: *time,
        phase,
        player: build_player(player),
        weapon: build_weapon(player),
        agents: build_agents(world),
        events,
    }
}

fn build_player(player: &PlayerCombat) -> PlayerView {
    let defense = player.defense();
    PlayerView {
        state: player.state(),
        fire_mode: player.fire_mode(),
        ammo_in_clip: player.ammo_in_clip(),
        reserve_ammo: player.reserve_ammo(),
        health: defense.health(),
        max_health: defense.max_health(),
        armor: defense.armor(),
        max_armor: defense.max_armor(),
        alive: defense.is_alive(),
    }
}

/// Effective (base + upgrades) stats of the equipped weapon.
fn build_weapon(player: &PlayerCombat) -> Option<WeaponView> {
    player.loadout().map(|loadout| WeaponView {
        id: loadout.weapon.id.clone(),
        name: loadout.weapon.name.clone(),
        class: loadout.weapon.class,
        damage: loadout.effective_damage(),
        fire_rate: loadout.effective_fire_rate(),
        clip_size: loadout.effective_clip_size(),
        upgrade_count: loadout.upgrades.len(),
    })
}

/// Build AgentView list, sorted by agent number.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&AgentInfo, &Perception, &AgentMind)>()
        .iter()
        .map(|(_, (info, perception, mind))| AgentView {
            agent_number: info.agent_number,
            id: info.id.clone(),
            display_name: info.display_name.clone(),
            behavior: info.behavior,
            current_task: mind.current_task,
            distance_to_player: perception.distance_to_player,
            threat_level: perception.threat_level,
        })
        .collect();

    agents.sort_by_key(|a| a.agent_number);
    agents
}
