//! ECS components for hecs unit entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in executions and systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::UnitType;
use crate::types::{PlayerId, TileRef};

/// Identity of a unit: what it is and who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitType,
    pub owner: PlayerId,
}

/// Tile the unit currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePos(pub TileRef);

/// Troops carried by the unit (transport ships).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Troops(pub u32);

/// Launcher cooldown. `started_at` is the tick of the last launch while cooling down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherCooldown {
    pub started_at: Option<u64>,
}

/// Destination of an in-flight nuke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetonationTarget(pub TileRef);
