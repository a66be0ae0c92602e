//! Game configuration: nuke speeds, blast magnitudes and casualty curves.
//!
//! Loaded from JSON; every field falls back to the stock tuning in
//! [`crate::constants`] when omitted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::NukeType;

/// Blast radii of one weapon type, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NukeMagnitude {
    /// Everything within this radius is destroyed.
    pub inner: u32,
    /// Tiles between `inner` and `outer` are destroyed by chance.
    pub outer: u32,
}

impl NukeMagnitude {
    pub fn new(inner: u32, outer: u32) -> Self {
        Self { inner, outer }
    }

    pub fn inner_squared(&self) -> u64 {
        u64::from(self.inner) * u64::from(self.inner)
    }

    pub fn outer_squared(&self) -> u64 {
        u64::from(self.outer) * u64::from(self.outer)
    }
}

/// How annulus tiles draw their coin during blast resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalloffPolicy {
    /// One stream seeded from the detonation tick, consumed by every
    /// annulus evaluation in traversal order.
    #[default]
    SharedStream,
    /// Each tile's coin depends only on the detonation tick and the tile.
    /// Enlarging the outer radius never shrinks the destroyed set.
    PerTile,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{nuke_type:?} magnitude has inner radius {inner} beyond outer radius {outer}")]
    InvertedMagnitude {
        nuke_type: NukeType,
        inner: u32,
        outer: u32,
    },
    #[error("default nuke speed must be at least 1")]
    ZeroSpeed,
    #[error("nuke death multiplier must be finite and non-negative, got {0}")]
    BadDeathMultiplier(f64),
}

/// Tunable game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub default_nuke_speed: u32,
    pub atom_bomb: NukeMagnitude,
    pub hydrogen_bomb: NukeMagnitude,
    pub mirv_warhead: NukeMagnitude,
    pub nuke_death_multiplier: f64,
    pub silo_cooldown_ticks: u64,
    pub spawn_phase_ticks: u64,
    pub falloff_policy: FalloffPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_nuke_speed: DEFAULT_NUKE_SPEED,
            atom_bomb: NukeMagnitude::new(ATOM_BOMB_INNER_RADIUS, ATOM_BOMB_OUTER_RADIUS),
            hydrogen_bomb: NukeMagnitude::new(
                HYDROGEN_BOMB_INNER_RADIUS,
                HYDROGEN_BOMB_OUTER_RADIUS,
            ),
            mirv_warhead: NukeMagnitude::new(MIRV_WARHEAD_INNER_RADIUS, MIRV_WARHEAD_OUTER_RADIUS),
            nuke_death_multiplier: NUKE_DEATH_MULTIPLIER,
            silo_cooldown_ticks: SILO_COOLDOWN_TICKS,
            spawn_phase_ticks: SPAWN_PHASE_TICKS,
            falloff_policy: FalloffPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_nuke_speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        if !self.nuke_death_multiplier.is_finite() || self.nuke_death_multiplier < 0.0 {
            return Err(ConfigError::BadDeathMultiplier(self.nuke_death_multiplier));
        }
        for nuke_type in NukeType::ALL {
            let m = self.nuke_magnitude(nuke_type);
            if m.inner > m.outer {
                return Err(ConfigError::InvertedMagnitude {
                    nuke_type,
                    inner: m.inner,
                    outer: m.outer,
                });
            }
        }
        Ok(())
    }

    pub fn nuke_magnitude(&self, nuke_type: NukeType) -> NukeMagnitude {
        match nuke_type {
            NukeType::AtomBomb => self.atom_bomb,
            NukeType::HydrogenBomb => self.hydrogen_bomb,
            NukeType::MirvWarhead => self.mirv_warhead,
        }
    }

    /// Casualties among `humans` for a player left holding `tiles_owned` tiles.
    /// Small empires lose proportionally more.
    pub fn nuke_death_factor(&self, humans: u32, tiles_owned: u32) -> u32 {
        let deaths = self.nuke_death_multiplier * f64::from(humans) / f64::from(tiles_owned.max(1));
        deaths.floor() as u32
    }
}
