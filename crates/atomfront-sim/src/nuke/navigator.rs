//! Staircase guidance toward a fixed destination tile.
//!
//! Each step moves one tile along x or y. The odds of an x-step shrink as
//! the vertical gap grows relative to the horizontal one, so the path
//! bends toward a straight line while staying on the grid lattice.

use glam::IVec2;

use atomfront_core::types::TileRef;
use atomfront_map::GameMap;

use crate::random::PseudoRandom;

/// Outcome of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(TileRef),
    /// The chosen cell lies outside the grid.
    OffGrid(IVec2),
}

#[derive(Debug, Clone)]
pub struct Navigator {
    random: PseudoRandom,
}

impl Navigator {
    pub fn new(seed: u64) -> Self {
        Self {
            random: PseudoRandom::new(seed),
        }
    }

    /// One x-step for every `ratio` draws on average.
    pub fn ratio(delta: IVec2) -> u32 {
        1 + delta.y.unsigned_abs() / (delta.x.unsigned_abs() + 1)
    }

    /// Advance one tile from `current` toward `dst`. Consumes exactly one
    /// random draw.
    pub fn step(&mut self, map: &GameMap, current: TileRef, dst: TileRef) -> Step {
        let from = map.coords(current);
        let delta = map.coords(dst) - from;

        let next = if self.random.chance(Self::ratio(delta)) && delta.x != 0 {
            from + IVec2::new(delta.x.signum(), 0)
        } else {
            from + IVec2::new(0, delta.y.signum())
        };

        match map.ref_at_coords(next) {
            Some(tile) => Step::Moved(tile),
            None => Step::OffGrid(next),
        }
    }
}
