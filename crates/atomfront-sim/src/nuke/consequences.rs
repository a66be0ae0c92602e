//! Territorial, population and unit losses from a detonation.

use std::collections::BTreeSet;

use log::debug;

use atomfront_core::config::{GameConfig, NukeMagnitude};
use atomfront_core::enums::UnitType;
use atomfront_core::types::{PlayerId, TileRef};

use crate::error::WorldError;
use crate::world::GameWorld;

/// Totals reported once a detonation has been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlastOutcome {
    pub tiles_destroyed: u32,
    pub units_destroyed: u32,
}

/// Apply a detonation at `dst` that destroyed `destroyed`.
///
/// Every owned tile is relinquished and its former owner suffers
/// casualties scaled by the territory it has left. Land tiles become
/// fallout. Finally every non-nuke unit strictly within `outer` of `dst`
/// is removed, whoever owns it.
pub fn apply(
    world: &mut GameWorld,
    dst: TileRef,
    magnitude: NukeMagnitude,
    destroyed: &BTreeSet<TileRef>,
) -> Result<BlastOutcome, WorldError> {
    let config = world.config().clone();
    for &tile in destroyed {
        if let Some(owner) = world.relinquish(tile)? {
            inflict_casualties(world, &config, owner)?;
        }
        if world.map().is_land(tile) {
            world.map_mut().set_fallout(tile, true)?;
        }
    }

    let outer2 = magnitude.outer_squared();
    let doomed: Vec<_> = world
        .all_units()
        .into_iter()
        .filter(|(_, unit, tile)| {
            !unit.kind.is_nuke() && world.map().euclidean_dist_squared(dst, *tile) < outer2
        })
        .map(|(entity, _, _)| entity)
        .collect();

    let mut units_destroyed = 0;
    for entity in doomed {
        if world.delete_unit(entity) {
            units_destroyed += 1;
        }
    }

    Ok(BlastOutcome {
        tiles_destroyed: destroyed.len() as u32,
        units_destroyed,
    })
}

/// One tile's worth of losses for `owner`: troops, workers, troops in
/// outgoing attacks and troops aboard transport ships.
fn inflict_casualties(
    world: &mut GameWorld,
    config: &GameConfig,
    owner: PlayerId,
) -> Result<(), WorldError> {
    let player = world.player_mut(owner)?;
    let tiles = player.num_tiles_owned();

    let troop_loss = config.nuke_death_factor(player.troops(), tiles);
    let worker_loss = config.nuke_death_factor(player.workers(), tiles);
    player.remove_troops(troop_loss);
    player.remove_workers(worker_loss);
    for attack in player.outgoing_attacks_mut() {
        let loss = config.nuke_death_factor(attack.troops, tiles);
        attack.troops = attack.troops.saturating_sub(loss);
    }

    for ship in world.units_of(owner, &[UnitType::TransportShip]) {
        let carried = world.unit_troops(ship).unwrap_or(0);
        let loss = config.nuke_death_factor(carried, tiles);
        world.set_unit_troops(ship, carried.saturating_sub(loss))?;
    }
    debug!("{owner} lost {troop_loss} troops and {worker_loss} workers");
    Ok(())
}
