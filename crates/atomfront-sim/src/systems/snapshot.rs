//! Snapshot system: reads the game world and builds a complete WorldSnapshot.
//!
//! Read-only apart from draining the world's pending messages and events.

use atomfront_core::enums::GamePhase;
use atomfront_core::state::*;
use atomfront_core::types::SimTime;

use crate::world::GameWorld;

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(
    world: &mut GameWorld,
    time: &SimTime,
    phase: GamePhase,
    active_executions: usize,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        phase,
        players: build_players(world),
        units: build_units(world),
        alliances: build_alliances(world),
        fallout_tiles: world.map().fallout_count(),
        messages: world.take_messages(),
        events: world.take_events(),
        nuke_stats: world.stats().nuke_views(),
        active_executions,
    }
}

/// Players in id order.
fn build_players(world: &GameWorld) -> Vec<PlayerView> {
    world
        .players()
        .map(|p| PlayerView {
            id: p.id(),
            name: p.name().to_owned(),
            troops: p.troops(),
            workers: p.workers(),
            tiles_owned: p.num_tiles_owned(),
            attack_troops: p.outgoing_attacks().iter().map(|a| a.troops).collect(),
        })
        .collect()
}

/// Units in spawn order.
fn build_units(world: &GameWorld) -> Vec<UnitView> {
    world
        .all_units()
        .into_iter()
        .map(|(entity, unit, tile)| UnitView {
            kind: unit.kind,
            owner: unit.owner,
            tile,
            troops: world.unit_troops(entity).unwrap_or(0),
            cooling_down: world.is_cooling_down(entity),
        })
        .collect()
}

fn build_alliances(world: &GameWorld) -> Vec<AllianceView> {
    world
        .alliances()
        .iter()
        .map(|a| AllianceView {
            requestor: a.requestor,
            recipient: a.recipient,
            created_at: a.created_at,
        })
        .collect()
}
