//! Simulation constants and tuning parameters.

// --- Nukes ---

/// Movement steps per tick when an intent does not specify a speed.
pub const DEFAULT_NUKE_SPEED: u32 = 6;

/// Atom bomb guaranteed-destruction radius (tiles).
pub const ATOM_BOMB_INNER_RADIUS: u32 = 12;

/// Atom bomb falloff radius (tiles).
pub const ATOM_BOMB_OUTER_RADIUS: u32 = 30;

/// Hydrogen bomb guaranteed-destruction radius (tiles).
pub const HYDROGEN_BOMB_INNER_RADIUS: u32 = 80;

/// Hydrogen bomb falloff radius (tiles).
pub const HYDROGEN_BOMB_OUTER_RADIUS: u32 = 100;

/// MIRV warhead guaranteed-destruction radius (tiles).
pub const MIRV_WARHEAD_INNER_RADIUS: u32 = 12;

/// MIRV warhead falloff radius (tiles).
pub const MIRV_WARHEAD_OUTER_RADIUS: u32 = 18;

/// Tiles between the inner and outer radius are destroyed with probability 1/N.
pub const FALLOUT_EDGE_ODDS: u32 = 2;

/// Scale of the death factor: `multiplier * humans / tiles_owned`.
pub const NUKE_DEATH_MULTIPLIER: f64 = 5.0;

// --- Launchers ---

/// Ticks a silo stays on cooldown after launching.
pub const SILO_COOLDOWN_TICKS: u64 = 75;

// --- Diplomacy ---

/// A player must lose strictly more tiles than this to one detonation
/// before the attacker's alliance with them breaks.
pub const ALLIANCE_BREAK_TILE_THRESHOLD: u32 = 100;

/// Relation change applied by the victim toward the attacker.
pub const NUKE_RELATION_PENALTY: i32 = -100;

/// Relation scores are clamped to `[RELATION_MIN, RELATION_MAX]`.
pub const RELATION_MIN: i32 = -100;
pub const RELATION_MAX: i32 = 100;

/// Scores below this are `Relation::Hostile`.
pub const RELATION_HOSTILE_BELOW: i32 = -50;

/// Scores below this (and not hostile) are `Relation::Distrustful`.
pub const RELATION_DISTRUSTFUL_BELOW: i32 = 0;

/// Scores at or above this are `Relation::Friendly`.
pub const RELATION_FRIENDLY_FROM: i32 = 50;

// --- Scheduling ---

/// Default length of the spawn phase (ticks).
pub const SPAWN_PHASE_TICKS: u64 = 0;

/// Upper bound on ticks the replay tool will run a single launch for.
pub const MAX_REPLAY_TICKS: u64 = 10_000;
