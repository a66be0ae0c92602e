//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{RELATION_DISTRUSTFUL_BELOW, RELATION_FRIENDLY_FROM, RELATION_HOSTILE_BELOW};

/// Every kind of unit that can exist on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitType {
    AtomBomb,
    HydrogenBomb,
    /// Multi-warhead carrier. Splits into `MirvWarhead`s.
    Mirv,
    MirvWarhead,
    MissileSilo,
    NuclearWarship,
    TransportShip,
    Warship,
    TradeShip,
    City,
    Port,
    DefensePost,
    SamLauncher,
}

impl UnitType {
    /// Units belonging to the guided area-effect weapon family.
    /// Detonations never destroy these.
    pub fn is_nuke(self) -> bool {
        matches!(
            self,
            UnitType::AtomBomb | UnitType::HydrogenBomb | UnitType::Mirv | UnitType::MirvWarhead
        )
    }

    /// Units that launch nukes and go on cooldown after doing so.
    pub fn is_launcher(self) -> bool {
        matches!(self, UnitType::MissileSilo | UnitType::NuclearWarship)
    }

    /// Units that carry troops.
    pub fn carries_troops(self) -> bool {
        matches!(self, UnitType::TransportShip)
    }
}

/// Weapon category driven by a nuke execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NukeType {
    /// Light.
    AtomBomb,
    /// Heavy.
    HydrogenBomb,
    /// A single warhead released by a MIRV. Never escalates diplomatically.
    MirvWarhead,
}

impl NukeType {
    pub const ALL: [NukeType; 3] = [
        NukeType::AtomBomb,
        NukeType::HydrogenBomb,
        NukeType::MirvWarhead,
    ];

    pub fn unit_type(self) -> UnitType {
        match self {
            NukeType::AtomBomb => UnitType::AtomBomb,
            NukeType::HydrogenBomb => UnitType::HydrogenBomb,
            NukeType::MirvWarhead => UnitType::MirvWarhead,
        }
    }

    /// Whether heavy territorial damage from this weapon breaks alliances.
    pub fn escalates(self) -> bool {
        !matches!(self, NukeType::MirvWarhead)
    }

    /// Warning text shown to the target once the weapon is launched.
    pub fn inbound_warning(self) -> Option<&'static str> {
        match self {
            NukeType::AtomBomb => Some("atom bomb inbound"),
            NukeType::HydrogenBomb => Some("hydrogen bomb inbound"),
            NukeType::MirvWarhead => None,
        }
    }
}

impl From<NukeType> for UnitType {
    fn from(nuke: NukeType) -> Self {
        nuke.unit_type()
    }
}

/// Severity of a player-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageType {
    Success,
    Info,
    Warning,
    Error,
}

/// Nuke execution lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NukePhase {
    /// Constructed, `init` not yet called.
    #[default]
    Uninitialized,
    /// Bound to its sender, waiting to resolve a spawn cell.
    AwaitingSpawn,
    /// Weapon unit exists and is travelling (or armed and waiting).
    InFlight,
    /// Reached the destination and detonated.
    Detonated,
    /// Weapon unit destroyed externally before reaching the destination.
    Intercepted,
    /// Navigation produced a cell outside the grid.
    Invalid,
    /// Unknown sender or no eligible spawn cell.
    Aborted,
}

impl NukePhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            NukePhase::Detonated | NukePhase::Intercepted | NukePhase::Invalid | NukePhase::Aborted
        )
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players are still choosing spawn locations.
    #[default]
    Spawn,
    Active,
}

/// Coarse bucket of a bilateral relation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relation {
    Hostile,
    Distrustful,
    Neutral,
    Friendly,
}

impl Relation {
    pub fn from_score(score: i32) -> Self {
        if score < RELATION_HOSTILE_BELOW {
            Relation::Hostile
        } else if score < RELATION_DISTRUSTFUL_BELOW {
            Relation::Distrustful
        } else if score < RELATION_FRIENDLY_FROM {
            Relation::Neutral
        } else {
            Relation::Friendly
        }
    }
}
