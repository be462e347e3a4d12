//! Perception system — refreshes each agent's distance to the player.
//!
//! Runs before decisions so the decision function always sees
//! positions from this tick. Threat level is written by the host and
//! left untouched here.

use hecs::World;

use furyfront_core::components::Perception;
use furyfront_core::types::Position;

/// Derive `distance_to_player` from agent and player positions.
pub fn run(world: &mut World, player_position: Position) {
    for (_entity, (position, perception)) in world.query_mut::<(&Position, &mut Perception)>() {
        perception.distance_to_player = position.range_to(&player_position);
    }
}
