//! Fundamental identifier and simulation types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to a cell of the tile grid.
///
/// Only the map knows how to turn it back into coordinates; a `TileRef`
/// obtained from one map is meaningless for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileRef(pub u32);

impl TileRef {
    /// Index into row-major per-tile storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a player (human, bot or nation).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Who owns a tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player(PlayerId),
    /// Unclaimed land or open water.
    #[default]
    TerraNullius,
}

impl Owner {
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Owner::Player(id) => Some(id),
            Owner::TerraNullius => None,
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, Owner::Player(_))
    }
}

impl From<Option<PlayerId>> for Owner {
    fn from(id: Option<PlayerId>) -> Self {
        id.map_or(Owner::TerraNullius, Owner::Player)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
