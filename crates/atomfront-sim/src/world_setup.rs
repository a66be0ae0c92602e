//! Factories for setting up a game world.
//!
//! The demo world is two continents split by a north-south strait:
//!
//! * Aurelia holds the north of the western continent and a missile silo.
//! * Corvin holds the south of the western continent and is allied with Aurelia.
//! * Boreas holds the whole eastern continent, a city, a silo and a
//!   transport ship waiting in the strait.
//!
//! Aurelia also has an attack underway against Boreas.

use std::ops::Range;

use atomfront_core::config::GameConfig;
use atomfront_core::enums::UnitType;
use atomfront_core::types::{Owner, PlayerId};
use atomfront_map::GameMap;

use crate::error::WorldError;
use crate::player::Player;
use crate::world::GameWorld;

pub const AURELIA: PlayerId = PlayerId(1);
pub const BOREAS: PlayerId = PlayerId(2);
pub const CORVIN: PlayerId = PlayerId(3);

pub const MAP_WIDTH: u32 = 240;
pub const MAP_HEIGHT: u32 = 120;

/// Columns of open water between the continents.
pub const STRAIT: Range<i32> = 110..130;

pub const AURELIA_SILO: (i32, i32) = (60, 30);
pub const BOREAS_SILO: (i32, i32) = (215, 100);
pub const BOREAS_CITY: (i32, i32) = (180, 60);
pub const CORVIN_CITY: (i32, i32) = (50, 90);
pub const BOREAS_TRANSPORT: (i32, i32) = (120, 60);

/// The two-continent map with nobody on it.
pub fn demo_map() -> Result<GameMap, WorldError> {
    Ok(GameMap::from_fn(MAP_WIDTH, MAP_HEIGHT, |p| !STRAIT.contains(&p.x))?)
}

/// The full demo scenario described in the module docs.
pub fn demo_world(config: GameConfig) -> Result<GameWorld, WorldError> {
    let mut world = GameWorld::new(demo_map()?, config);

    world.add_player(Player::new(AURELIA, "Aurelia", 50_000, 20_000));
    world.add_player(Player::new(BOREAS, "Boreas", 60_000, 25_000));
    world.add_player(Player::new(CORVIN, "Corvin", 40_000, 15_000));

    let west = 0..STRAIT.start;
    let east = STRAIT.end..MAP_WIDTH as i32;
    let half = MAP_HEIGHT as i32 / 2;
    claim_rect(&mut world, AURELIA, west.clone(), 0..half)?;
    claim_rect(&mut world, CORVIN, west, half..MAP_HEIGHT as i32)?;
    claim_rect(&mut world, BOREAS, east, 0..MAP_HEIGHT as i32)?;

    place(&mut world, AURELIA, UnitType::MissileSilo, AURELIA_SILO, 0)?;
    place(&mut world, BOREAS, UnitType::MissileSilo, BOREAS_SILO, 0)?;
    place(&mut world, BOREAS, UnitType::City, BOREAS_CITY, 0)?;
    place(&mut world, CORVIN, UnitType::City, CORVIN_CITY, 0)?;
    place(&mut world, BOREAS, UnitType::TransportShip, BOREAS_TRANSPORT, 2_000)?;

    world.form_alliance(AURELIA, CORVIN);
    world
        .player_mut(AURELIA)?
        .launch_attack(Owner::Player(BOREAS), 5_000);

    Ok(world)
}

/// Conquer every land tile in the rectangle for `player`.
pub fn claim_rect(
    world: &mut GameWorld,
    player: PlayerId,
    xs: Range<i32>,
    ys: Range<i32>,
) -> Result<(), WorldError> {
    for y in ys {
        for x in xs.clone() {
            let tile = world.map().checked_ref(x, y)?;
            if world.map().is_land(tile) {
                world.conquer(player, tile)?;
            }
        }
    }
    Ok(())
}

/// Build a unit at `(x, y)`.
pub fn place(
    world: &mut GameWorld,
    owner: PlayerId,
    kind: UnitType,
    (x, y): (i32, i32),
    troops: u32,
) -> Result<hecs::Entity, WorldError> {
    let tile = world.map().checked_ref(x, y)?;
    world.build_unit(owner, kind, tile, troops)
}
