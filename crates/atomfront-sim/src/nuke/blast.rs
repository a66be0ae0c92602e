//! Tiles swept away by a detonation.

use std::collections::BTreeSet;

use atomfront_core::config::{FalloffPolicy, NukeMagnitude};
use atomfront_core::constants::FALLOUT_EDGE_ODDS;
use atomfront_core::types::TileRef;
use atomfront_map::GameMap;

use crate::random::PseudoRandom;

/// Flood-fill from `dst` over every tile within `outer` of it. Tiles inside
/// `inner` always fall; tiles in the annulus fall on a coin flip.
///
/// `seed` is the detonation tick. Under [`FalloffPolicy::SharedStream`] one
/// stream answers every annulus tile in visiting order. Under
/// [`FalloffPolicy::PerTile`] each tile's answer depends on `(seed, tile)`
/// only.
pub fn tiles_to_destroy(
    map: &GameMap,
    dst: TileRef,
    magnitude: NukeMagnitude,
    seed: u64,
    policy: FalloffPolicy,
) -> BTreeSet<TileRef> {
    let inner2 = magnitude.inner_squared();
    let outer2 = magnitude.outer_squared();
    let mut shared = PseudoRandom::new(seed);

    map.bfs(dst, |map, tile| {
        let d2 = map.euclidean_dist_squared(dst, tile);
        if d2 > outer2 {
            return false;
        }
        if d2 <= inner2 {
            return true;
        }
        match policy {
            FalloffPolicy::SharedStream => shared.chance(FALLOUT_EDGE_ODDS),
            FalloffPolicy::PerTile => PseudoRandom::tile_chance(seed, tile, FALLOUT_EDGE_ODDS),
        }
    })
}
