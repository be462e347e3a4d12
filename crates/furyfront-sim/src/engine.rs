//! Combat engine — the core of the simulation.
//!
//! `CombatEngine` owns the hecs agent world and the player state machine,
//! processes queued player commands, runs all systems, and produces
//! `CombatSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use furyfront_core::commands::PlayerCommand;
use furyfront_core::components::{AgentInfo, Perception};
use furyfront_core::enums::{AiBehavior, SessionPhase};
use furyfront_core::error::{ensure_identifier, CombatError};
use furyfront_core::events::CombatEvent;
use furyfront_core::state::CombatSnapshot;
use furyfront_core::types::{Position, SimTime};

use crate::arsenal::Arsenal;
use crate::defense::DamagePolicy;
use crate::player::PlayerCombat;
use crate::systems;
use crate::world_setup::{self, EncounterPlan};

/// Configuration for starting a new combat session.
pub struct CombatConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Damage pipeline capabilities for the player's defense.
    pub damage_policy: DamagePolicy,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            damage_policy: DamagePolicy::default(),
        }
    }
}

/// The combat engine. Owns the agent world and all session state.
pub struct CombatEngine {
    world: World,
    player: PlayerCombat,
    player_position: Position,
    arsenal: Arsenal,
    time: SimTime,
    phase: SessionPhase,
    rng: ChaCha8Rng,
    next_agent_number: u32,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<CombatEvent>,
}

impl CombatEngine {
    /// Create a new combat engine with the given config.
    pub fn new(config: CombatConfig) -> Self {
        Self {
            world: World::new(),
            player: PlayerCombat::new(config.damage_policy),
            player_position: Position::default(),
            arsenal: Arsenal::default(),
            time: SimTime::default(),
            phase: SessionPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_agent_number: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> CombatSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.player, events)
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the agent world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the player state machine.
    pub fn player(&self) -> &PlayerCombat {
        &self.player
    }

    /// Get a read-only reference to the weapon arsenal.
    pub fn arsenal(&self) -> &Arsenal {
        &self.arsenal
    }

    // --- Roster management (perception/host collaborators) ---

    /// Register a new agent. Returns the assigned roster number.
    pub fn register_agent(
        &mut self,
        id: &str,
        display_name: &str,
        behavior: AiBehavior,
        position: Position,
    ) -> Result<u32, CombatError> {
        ensure_identifier(id, "agent")?;
        ensure_identifier(display_name, "agent display name")?;

        let agent_number = self.next_agent_number;
        self.next_agent_number += 1;
        world_setup::spawn_agent(
            &mut self.world,
            agent_number,
            id,
            display_name,
            behavior,
            position,
        );
        tracing::debug!(agent_number, id, "agent registered");
        Ok(agent_number)
    }

    /// Remove an agent from the roster (despawn is driven externally).
    pub fn remove_agent(&mut self, agent_number: u32) -> Result<(), CombatError> {
        let entity = self.find_agent(agent_number)?;
        // Entity was just looked up, despawn cannot miss.
        let _ = self.world.despawn(entity);
        Ok(())
    }

    /// Write an agent's threat estimate of the player.
    pub fn set_threat_level(&mut self, agent_number: u32, threat: f32) -> Result<(), CombatError> {
        if threat < 0.0 {
            return Err(CombatError::NegativeAmount {
                context: "threat level",
                amount: f64::from(threat),
            });
        }
        let entity = self.find_agent(agent_number)?;
        if let Ok(mut perception) = self.world.get::<&mut Perception>(entity) {
            perception.threat_level = threat;
        }
        Ok(())
    }

    /// Move an agent to a new position.
    pub fn set_agent_position(
        &mut self,
        agent_number: u32,
        position: Position,
    ) -> Result<(), CombatError> {
        let entity = self.find_agent(agent_number)?;
        if let Ok(mut current) = self.world.get::<&mut Position>(entity) {
            *current = position;
        }
        Ok(())
    }

    /// Move the player; distances are re-derived next tick.
    pub fn set_player_position(&mut self, position: Position) {
        self.player_position = position;
    }

    /// Spawn a randomized encounter around the player's position.
    /// Returns the assigned agent numbers.
    pub fn spawn_encounter(&mut self, plan: &EncounterPlan) -> Vec<u32> {
        world_setup::spawn_encounter(
            &mut self.world,
            &mut self.rng,
            &mut self.next_agent_number,
            plan,
            self.player_position,
        )
    }

    fn find_agent(&self, agent_number: u32) -> Result<hecs::Entity, CombatError> {
        let mut query = self.world.query::<&AgentInfo>();
        query
            .iter()
            .find(|(_, info)| info.agent_number == agent_number)
            .map(|(entity, _)| entity)
            .ok_or(CombatError::AgentNotFound { agent_number })
    }

    /// Process all queued commands. A command that fails leaves state
    /// untouched and surfaces as a `CommandRejected` event.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(error) = self.handle_command(command) {
                tracing::warn!(%error, "command rejected");
                self.events.push(CombatEvent::CommandRejected {
                    reason: error.to_string(),
                });
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CombatError> {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == SessionPhase::Setup {
                    self.phase = SessionPhase::Active;
                    self.events.push(CombatEvent::SessionStarted);
                }
                Ok(())
            }
            PlayerCommand::Pause => {
                if self.phase == SessionPhase::Active {
                    self.phase = SessionPhase::Paused;
                }
                Ok(())
            }
            PlayerCommand::Resume => {
                if self.phase == SessionPhase::Paused {
                    self.phase = SessionPhase::Active;
                }
                Ok(())
            }
            PlayerCommand::Engage => self.player.engage(),
            PlayerCommand::TakeCover => self.player.take_cover(),
            PlayerCommand::Fire => self.player.fire(&mut self.events),
            PlayerCommand::Reload => self.player.reload(&mut self.events),
            PlayerCommand::SetFireMode { mode } => {
                self.player.set_fire_mode(mode);
                Ok(())
            }
            PlayerCommand::EquipWeapon { weapon_id } => {
                let weapon = self.arsenal.get(&weapon_id)?.clone();
                self.player.equip(weapon, &mut self.events);
                Ok(())
            }
            PlayerCommand::InstallUpgrade { upgrade } => {
                self.player.install_upgrade(upgrade, &mut self.events)
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Perception: refresh distances from positions
        systems::perception::run(&mut self.world, self.player_position);
        // 2. Decisions: recompute every agent's task
        systems::decision::run(&mut self.world, &mut self.events);
        // 3. Assault: attacking agents shoot at the player
        systems::assault::run(
            &mut self.world,
            &mut self.rng,
            &mut self.player,
            &mut self.events,
        );
    }

    /// Mutable player access for tests driving the state machine directly.
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerCombat {
        &mut self.player
    }
}
