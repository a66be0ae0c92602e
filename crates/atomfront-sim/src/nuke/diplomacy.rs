//! Diplomatic fallout of a detonation.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use atomfront_core::constants::{ALLIANCE_BREAK_TILE_THRESHOLD, NUKE_RELATION_PENALTY};
use atomfront_core::enums::NukeType;
use atomfront_core::types::{PlayerId, TileRef};

use crate::world::GameWorld;

/// Count destroyed tiles per owning player. Unowned tiles are not counted.
pub fn tally_attacked(world: &GameWorld, destroyed: &BTreeSet<TileRef>) -> BTreeMap<PlayerId, u32> {
    let mut tally = BTreeMap::new();
    for &tile in destroyed {
        if let Some(owner) = world.owner(tile).player() {
            *tally.entry(owner).or_insert(0) += 1;
        }
    }
    tally
}

/// Break alliances with, and sour the opinion of, every player who lost
/// more than the threshold of tiles. MIRV warheads never escalate.
///
/// Returns the players whose alliance with `attacker` was broken.
pub fn break_alliances(
    world: &mut GameWorld,
    attacker: PlayerId,
    nuke_type: NukeType,
    tally: &BTreeMap<PlayerId, u32>,
) -> Vec<PlayerId> {
    let mut broken = Vec::new();
    if !nuke_type.escalates() {
        return broken;
    }
    for (&victim, &count) in tally {
        if count <= ALLIANCE_BREAK_TILE_THRESHOLD {
            continue;
        }
        debug!("{victim} lost {count} tiles to {attacker}");
        if world.break_alliance(attacker, victim) {
            broken.push(victim);
        }
        if victim != attacker {
            if let Ok(player) = world.player_mut(victim) {
                player.update_relation(attacker, NUKE_RELATION_PENALTY);
            }
        }
    }
    broken
}
