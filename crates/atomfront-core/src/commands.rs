//! Player intents sent to the simulation.
//!
//! Intents are queued and turned into executions at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::NukeType;
use crate::types::{PlayerId, TileRef};

/// All possible player actions handled by this simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Intent {
    /// Launch a nuke at `dst`.
    LaunchNuke {
        sender: PlayerId,
        nuke_type: NukeType,
        dst: TileRef,
        /// Explicit launch cell. When absent the sender's build
        /// eligibility picks one (nearest ready silo).
        #[serde(default)]
        src: Option<TileRef>,
        /// Steps per tick. When absent the configured default is used.
        #[serde(default)]
        speed: Option<u32>,
        /// Ticks to hold after spawning before the first movement step.
        #[serde(default)]
        wait_ticks: u32,
    },
}
