//! World state snapshot: the visible state produced after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{GameEvent, GameMessage};
use crate::types::{PlayerId, SimTime, TileRef};

/// Complete world state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub players: Vec<PlayerView>,
    pub units: Vec<UnitView>,
    pub alliances: Vec<AllianceView>,
    /// Number of land tiles currently marked as fallout.
    pub fallout_tiles: u32,
    pub messages: Vec<GameMessage>,
    pub events: Vec<GameEvent>,
    pub nuke_stats: Vec<NukeStatView>,
    pub active_executions: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub troops: u32,
    pub workers: u32,
    pub tiles_owned: u32,
    /// Troops committed to outgoing attacks.
    pub attack_troops: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub kind: UnitType,
    pub owner: PlayerId,
    pub tile: TileRef,
    pub troops: u32,
    pub cooling_down: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllianceView {
    pub requestor: PlayerId,
    pub recipient: PlayerId,
    pub created_at: u64,
}

/// Nukes sent from `sender` at tiles owned by `target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NukeStatView {
    pub sender: PlayerId,
    pub target: PlayerId,
    pub nuke_type: NukeType,
    pub count: u32,
}
