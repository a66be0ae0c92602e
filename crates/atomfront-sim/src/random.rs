//! Seeded pseudo-random decisions.
//!
//! All randomness in the simulation flows through ChaCha8 streams seeded
//! from logical ticks, never from wall-clock time or OS entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use atomfront_core::types::TileRef;

/// Deterministic decision source. Two instances built from the same seed
/// produce the same sequence of answers.
#[derive(Debug, Clone)]
pub struct PseudoRandom {
    rng: ChaCha8Rng,
}

impl PseudoRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// True with probability `1 / odds`. Odds of 0 or 1 always succeed.
    /// Consumes one draw either way.
    pub fn chance(&mut self, odds: u32) -> bool {
        self.rng.gen_range(0..odds.max(1)) == 0
    }

    /// Stateless variant of [`PseudoRandom::chance`] keyed by `(seed, tile)`.
    /// Each tile reads its own ChaCha stream, so the answer for one tile
    /// does not depend on which other tiles were asked first.
    pub fn tile_chance(seed: u64, tile: TileRef, odds: u32) -> bool {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(u64::from(tile.0));
        rng.gen_range(0..odds.max(1)) == 0
    }
}
