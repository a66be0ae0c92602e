//! Events and messages emitted by the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{PlayerId, TileRef};

/// Simulation events for UI and replay feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A nuke unit was built at its launch cell.
    NukeLaunched {
        sender: PlayerId,
        nuke_type: NukeType,
        src: TileRef,
        dst: TileRef,
    },
    /// A nuke unit disappeared before reaching its destination.
    NukeIntercepted { sender: PlayerId, nuke_type: NukeType },
    /// A nuke detonated.
    NukeDetonated {
        sender: PlayerId,
        nuke_type: NukeType,
        dst: TileRef,
        tiles_destroyed: u32,
        units_destroyed: u32,
    },
    /// An alliance was broken by nuclear aggression.
    AllianceBroken { breaker: PlayerId, other: PlayerId },
}

/// Message shown to a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMessage {
    pub text: String,
    pub kind: MessageType,
    pub recipient: PlayerId,
    pub tick: u64,
}
