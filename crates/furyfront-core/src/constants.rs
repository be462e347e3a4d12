//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Player defense ---

/// Player maximum health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Player maximum armor.
pub const PLAYER_MAX_ARMOR: i32 = 50;

/// Clip capacity used when no weapon is equipped.
pub const DEFAULT_CLIP_CAPACITY: u32 = 30;

/// Reserve ammunition at session start.
pub const DEFAULT_RESERVE_AMMO: u32 = 90;

// --- Damage-type multipliers (health portion only) ---

pub const BULLET_DAMAGE_MULT: f32 = 1.0;
pub const EXPLOSION_DAMAGE_MULT: f32 = 1.3;
pub const MELEE_DAMAGE_MULT: f32 = 1.1;
pub const ENVIRONMENTAL_DAMAGE_MULT: f32 = 0.8;

// --- AI decision thresholds ---

/// At or below this threat level every agent patrols, regardless of
/// behavior or distance.
pub const THREAT_PATROL_FLOOR: f32 = 0.1;

/// Passive agents retreat when the player is closer than this (m).
pub const PASSIVE_RETREAT_RANGE: f32 = 5.0;

/// Defensive agents take cover inside this range (m)...
pub const DEFENSIVE_COVER_RANGE: f32 = 10.0;

/// ...when threat also exceeds this level.
pub const DEFENSIVE_COVER_THREAT: f32 = 0.5;

/// Defensive agents retreat above this threat level.
pub const DEFENSIVE_RETREAT_THREAT: f32 = 0.7;

/// Aggressive agents attack when the player is inside this range (m).
pub const AGGRESSIVE_ATTACK_RANGE: f32 = 20.0;

// --- Agent assault ---

/// Damage per landed agent shot against the player.
pub const AGENT_SHOT_DAMAGE: i32 = 4;

/// Probability per second that an attacking agent lands a shot.
pub const AGENT_HIT_RATE_PER_SEC: f64 = 1.5;
