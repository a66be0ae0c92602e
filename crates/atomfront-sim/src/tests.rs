//! Tests for the nuke execution, its navigator and blast resolver, and the engine.

use std::collections::BTreeSet;

use atomfront_core::commands::Intent;
use atomfront_core::config::{FalloffPolicy, GameConfig, NukeMagnitude};
use atomfront_core::enums::*;
use atomfront_core::events::GameEvent;
use atomfront_core::types::{Owner, PlayerId, TileRef};
use atomfront_map::GameMap;

use crate::engine::SimulationEngine;
use crate::execution::Execution;
use crate::nuke::blast::tiles_to_destroy;
use crate::nuke::navigator::{Navigator, Step};
use crate::nuke::NukeExecution;
use crate::player::Player;
use crate::random::PseudoRandom;
use crate::world::GameWorld;
use crate::world_setup::{self, AURELIA, BOREAS, CORVIN};

const ATTACKER: PlayerId = PlayerId(1);
const VICTIM: PlayerId = PlayerId(2);

fn tile(map: &GameMap, x: i32, y: i32) -> TileRef {
    map.ref_at(x, y).unwrap()
}

/// All-land world with an attacker and a victim and no territory.
fn open_world(width: u32, height: u32, config: GameConfig) -> GameWorld {
    let map = GameMap::all_land(width, height).unwrap();
    let mut world = GameWorld::new(map, config);
    world.add_player(Player::new(ATTACKER, "Attacker", 10_000, 4_000));
    world.add_player(Player::new(VICTIM, "Victim", 10_000, 4_000));
    world
}

/// Config where every weapon destroys exactly the disc of `radius`.
fn sharp_config(radius: u32) -> GameConfig {
    let sharp = NukeMagnitude::new(radius, radius);
    GameConfig {
        atom_bomb: sharp,
        hydrogen_bomb: sharp,
        mirv_warhead: sharp,
        ..Default::default()
    }
}

/// Spawn a nuke directly on `dst` and let it detonate on the next tick.
fn detonate_at(world: &mut GameWorld, sender: PlayerId, nuke_type: NukeType, dst: TileRef) -> NukeExecution {
    let mut exec = NukeExecution::new(sender, nuke_type, dst).with_source(dst);
    exec.init(world, 0);
    exec.tick(world, 1);
    exec.tick(world, 2);
    exec
}

fn demo_tile(world: &GameWorld, (x, y): (i32, i32)) -> TileRef {
    tile(world.map(), x, y)
}

// ---- Random ----

#[test]
fn test_pseudo_random_replays_from_seed() {
    let mut a = PseudoRandom::new(77);
    let mut b = PseudoRandom::new(77);
    let draws_a: Vec<bool> = (0..64).map(|_| a.chance(3)).collect();
    let draws_b: Vec<bool> = (0..64).map(|_| b.chance(3)).collect();
    assert_eq!(draws_a, draws_b);
}

#[test]
fn test_chance_with_odds_one_always_succeeds() {
    let mut random = PseudoRandom::new(5);
    assert!((0..100).all(|_| random.chance(1)));
    assert!((0..100).all(|_| random.chance(0)));
}

#[test]
fn test_tile_chance_is_stateless() {
    let t = TileRef(1234);
    let first = PseudoRandom::tile_chance(9, t, 2);
    for _ in 0..10 {
        assert_eq!(PseudoRandom::tile_chance(9, t, 2), first);
    }
}

// ---- Navigator ----

#[test]
fn test_navigator_ratio() {
    assert_eq!(Navigator::ratio(glam::IVec2::new(10, 0)), 1);
    assert_eq!(Navigator::ratio(glam::IVec2::new(0, 10)), 11);
    assert_eq!(Navigator::ratio(glam::IVec2::new(-4, 10)), 3);
    assert_eq!(Navigator::ratio(glam::IVec2::new(9, -9)), 1);
}

#[test]
fn test_navigator_converges_within_manhattan_distance() {
    let map = GameMap::all_land(50, 50).unwrap();
    let src = tile(&map, 3, 40);
    let dst = tile(&map, 45, 2);
    let bound = map.manhattan_dist(src, dst);

    for seed in 0..20 {
        let mut nav = Navigator::new(seed);
        let mut current = src;
        let mut steps = 0;
        while current != dst {
            match nav.step(&map, current, dst) {
                Step::Moved(next) => {
                    assert_eq!(map.manhattan_dist(current, next), 1);
                    current = next;
                }
                Step::OffGrid(cell) => panic!("left the grid at {cell:?}"),
            }
            steps += 1;
            assert!(steps <= bound, "seed {seed} exceeded {bound} steps");
        }
    }
}

#[test]
fn test_navigator_path_replays_from_seed() {
    let map = GameMap::all_land(40, 40).unwrap();
    let src = tile(&map, 1, 1);
    let dst = tile(&map, 30, 35);
    let walk = |seed| {
        let mut nav = Navigator::new(seed);
        let mut path = vec![src];
        let mut current = src;
        while current != dst {
            if let Step::Moved(next) = nav.step(&map, current, dst) {
                current = next;
                path.push(next);
            }
        }
        path
    };
    assert_eq!(walk(11), walk(11));
}

#[test]
fn test_navigator_reports_off_grid_destination() {
    let map = GameMap::all_land(10, 10).unwrap();
    let mut nav = Navigator::new(0);
    // Index one row past the bottom edge.
    let dst = TileRef(103);
    let from = tile(&map, 3, 9);
    assert_eq!(nav.step(&map, from, dst), Step::OffGrid(glam::IVec2::new(3, 10)));
}

// ---- Blast ----

#[test]
fn test_zero_magnitude_destroys_only_destination() {
    let map = GameMap::all_land(20, 20).unwrap();
    let dst = tile(&map, 10, 10);
    for policy in [FalloffPolicy::SharedStream, FalloffPolicy::PerTile] {
        let destroyed = tiles_to_destroy(&map, dst, NukeMagnitude::new(0, 0), 4, policy);
        assert_eq!(destroyed, BTreeSet::from([dst]));
    }
}

#[test]
fn test_inner_radius_always_destroyed() {
    let map = GameMap::all_land(80, 80).unwrap();
    let dst = tile(&map, 40, 40);
    let magnitude = NukeMagnitude::new(12, 30);

    for seed in [0, 1, 99, 12_345] {
        for policy in [FalloffPolicy::SharedStream, FalloffPolicy::PerTile] {
            let destroyed = tiles_to_destroy(&map, dst, magnitude, seed, policy);
            for idx in 0..map.tile_count() as u32 {
                let t = TileRef(idx);
                let d2 = map.euclidean_dist_squared(dst, t);
                if d2 <= magnitude.inner_squared() {
                    assert!(destroyed.contains(&t), "inner tile {t:?} survived");
                }
                if d2 > magnitude.outer_squared() {
                    assert!(!destroyed.contains(&t), "tile {t:?} beyond outer destroyed");
                }
            }
        }
    }
}

#[test]
fn test_annulus_is_partially_destroyed() {
    let map = GameMap::all_land(80, 80).unwrap();
    let dst = tile(&map, 40, 40);
    let magnitude = NukeMagnitude::new(12, 30);
    let destroyed = tiles_to_destroy(&map, dst, magnitude, 7, FalloffPolicy::SharedStream);

    let annulus = (0..map.tile_count() as u32)
        .map(TileRef)
        .filter(|&t| {
            let d2 = map.euclidean_dist_squared(dst, t);
            d2 > magnitude.inner_squared() && d2 <= magnitude.outer_squared()
        })
        .count();
    let hit = destroyed
        .iter()
        .filter(|&&t| map.euclidean_dist_squared(dst, t) > magnitude.inner_squared())
        .count();
    assert!(hit > 0);
    assert!(hit < annulus);
}

#[test]
fn test_blast_monotonic_in_outer_with_per_tile_falloff() {
    let map = GameMap::all_land(90, 90).unwrap();
    let dst = tile(&map, 45, 45);
    let inner = 8;
    let mut previous = tiles_to_destroy(
        &map,
        dst,
        NukeMagnitude::new(inner, inner),
        31,
        FalloffPolicy::PerTile,
    );
    for outer in inner + 1..=36 {
        let next = tiles_to_destroy(
            &map,
            dst,
            NukeMagnitude::new(inner, outer),
            31,
            FalloffPolicy::PerTile,
        );
        assert!(previous.is_subset(&next), "outer {outer} lost tiles");
        previous = next;
    }
}

#[test]
fn test_blast_never_leaves_the_grid() {
    let map = GameMap::all_land(20, 20).unwrap();
    let corner = tile(&map, 0, 0);
    let destroyed = tiles_to_destroy(
        &map,
        corner,
        NukeMagnitude::new(5, 10),
        3,
        FalloffPolicy::SharedStream,
    );
    assert!(destroyed.iter().all(|&t| map.is_valid(t)));
    assert!(destroyed.contains(&corner));
}

#[test]
fn test_blast_replays_from_tick() {
    let map = GameMap::all_land(80, 80).unwrap();
    let dst = tile(&map, 40, 40);
    let magnitude = NukeMagnitude::new(12, 30);
    let a = tiles_to_destroy(&map, dst, magnitude, 500, FalloffPolicy::SharedStream);
    let b = tiles_to_destroy(&map, dst, magnitude, 500, FalloffPolicy::SharedStream);
    assert_eq!(a, b);
}

// ---- Lifecycle ----

#[test]
fn test_unknown_sender_aborts_at_init() {
    let mut world = open_world(20, 20, GameConfig::default());
    let dst = tile(world.map(), 10, 10);
    let mut exec = NukeExecution::new(PlayerId(99), NukeType::AtomBomb, dst).with_source(dst);

    exec.init(&mut world, 0);
    assert!(!exec.is_active());
    assert_eq!(exec.phase(), NukePhase::Aborted);
    assert_eq!(exec.owner(), None);

    exec.tick(&mut world, 1);
    assert!(world.all_units().is_empty());
    assert!(exec.unit().is_none());
}

#[test]
fn test_init_binds_owner() {
    let mut world = open_world(20, 20, GameConfig::default());
    let dst = tile(world.map(), 10, 10);
    let mut exec = NukeExecution::new(ATTACKER, NukeType::AtomBomb, dst);
    assert!(!exec.is_active());

    exec.init(&mut world, 0);
    assert!(exec.is_active());
    assert_eq!(exec.owner(), Some(ATTACKER));
    assert_eq!(exec.phase(), NukePhase::AwaitingSpawn);
    assert!(!exec.active_during_spawn_phase());
}

#[test]
fn test_no_silo_aborts_spawn() {
    let mut world = open_world(20, 20, GameConfig::default());
    let dst = tile(world.map(), 10, 10);
    let mut exec = NukeExecution::new(ATTACKER, NukeType::AtomBomb, dst);
    exec.init(&mut world, 0);
    exec.tick(&mut world, 1);

    assert_eq!(exec.phase(), NukePhase::Aborted);
    assert!(world.all_units().is_empty());
}

#[test]
fn test_mirv_warhead_needs_explicit_source() {
    let mut world = open_world(20, 20, GameConfig::default());
    let silo = tile(world.map(), 2, 2);
    world.build_unit(ATTACKER, UnitType::MissileSilo, silo, 0).unwrap();
    let dst = tile(world.map(), 10, 10);

    let mut exec = NukeExecution::new(ATTACKER, NukeType::MirvWarhead, dst);
    exec.init(&mut world, 0);
    exec.tick(&mut world, 1);
    assert_eq!(exec.phase(), NukePhase::Aborted);
}

#[test]
fn test_spawn_consumes_tick_then_flies() {
    let mut world = open_world(40, 40, GameConfig::default());
    let src = tile(world.map(), 2, 2);
    let dst = tile(world.map(), 30, 30);
    let mut exec = NukeExecution::new(ATTACKER, NukeType::AtomBomb, dst)
        .with_source(src)
        .with_speed(4);
    exec.init(&mut world, 0);

    exec.tick(&mut world, 1);
    let nuke = exec.unit().unwrap();
    assert_eq!(exec.phase(), NukePhase::InFlight);
    assert_eq!(world.unit_tile(nuke), Some(src));

    exec.tick(&mut world, 2);
    let moved = world.unit_tile(nuke).unwrap();
    assert_eq!(world.map().manhattan_dist(src, moved), 4);
}

#[test]
fn test_wait_ticks_delay_movement() {
    let mut world = open_world(30, 30, GameConfig::default());
    let dst = tile(world.map(), 15, 15);
    let mut exec = NukeExecution::new(ATTACKER, NukeType::AtomBomb, dst)
        .with_source(dst)
        .with_wait_ticks(3);
    exec.init(&mut world, 0);

    exec.tick(&mut world, 1);
    for t in 2..5 {
        exec.tick(&mut world, t);
        assert_eq!(exec.phase(), NukePhase::InFlight, "tick {t}");
    }
    exec.tick(&mut world, 5);
    assert_eq!(exec.phase(), NukePhase::Detonated);
}

#[test]
fn test_interception_deactivates_without_detonating() {
    let mut world = open_world(40, 40, GameConfig::default());
    let src = tile(world.map(), 2, 2);
    let dst = tile(world.map(), 30, 30);
    let mut exec = NukeExecution::new(ATTACKER, NukeType::AtomBomb, dst).with_source(src);
    exec.init(&mut world, 0);
    exec.tick(&mut world, 1);

    let nuke = exec.unit().unwrap();
    assert!(world.delete_unit(nuke));

    exec.tick(&mut world, 2);
    assert_eq!(exec.phase(), NukePhase::Intercepted);
    assert!(!exec.is_active());
    assert_eq!(world.map().fallout_count(), 0);
    assert!(world.take_events().iter().any(|e| matches!(
        e,
        GameEvent::NukeIntercepted {
            sender: ATTACKER,
            nuke_type: NukeType::AtomBomb
        }
    )));
}

#[test]
fn test_off_grid_path_invalidates_and_removes_unit() {
    let mut world = open_world(10, 10, GameConfig::default());
    let src = tile(world.map(), 3, 5);
    let mut exec = NukeExecution::new(ATTACKER, NukeType::AtomBomb, TileRef(103)).with_source(src);
    exec.init(&mut world, 0);
    exec.tick(&mut world, 1);
    exec.tick(&mut world, 2);

    assert_eq!(exec.phase(), NukePhase::Invalid);
    assert!(!exec.is_active());
    assert!(world.all_units().is_empty());
}

#[test]
fn test_detonation_removes_the_weapon() {
    let mut world = open_world(30, 30, sharp_config(3));
    let dst = tile(world.map(), 15, 15);
    let exec = detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    assert_eq!(exec.phase(), NukePhase::Detonated);
    assert!(!exec.is_active());
    assert!(!world.unit_exists(exec.unit().unwrap()));
}

// ---- Messages and stats ----

#[test]
fn test_inbound_warning_sent_to_target() {
    let mut world = open_world(30, 30, sharp_config(2));
    let dst = tile(world.map(), 15, 15);
    world.conquer(VICTIM, dst).unwrap();

    let mut exec = NukeExecution::new(ATTACKER, NukeType::HydrogenBomb, dst).with_source(dst);
    exec.init(&mut world, 0);
    exec.tick(&mut world, 1);

    let messages = world.take_messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "Attacker - hydrogen bomb inbound");
    assert_eq!(messages[0].kind, MessageType::Error);
    assert_eq!(messages[0].recipient, VICTIM);
    assert_eq!(
        world.stats().nuke_count(ATTACKER, VICTIM, NukeType::HydrogenBomb),
        1
    );
}

#[test]
fn test_mirv_warhead_sends_no_warning_but_counts() {
    let mut world = open_world(30, 30, sharp_config(2));
    let dst = tile(world.map(), 15, 15);
    world.conquer(VICTIM, dst).unwrap();

    let mut exec = NukeExecution::new(ATTACKER, NukeType::MirvWarhead, dst).with_source(dst);
    exec.init(&mut world, 0);
    exec.tick(&mut world, 1);

    assert!(world.take_messages().is_empty());
    assert_eq!(
        world.stats().nuke_count(ATTACKER, VICTIM, NukeType::MirvWarhead),
        1
    );
}

#[test]
fn test_unowned_destination_sends_nothing() {
    let mut world = open_world(30, 30, sharp_config(2));
    let dst = tile(world.map(), 15, 15);
    let mut exec = NukeExecution::new(ATTACKER, NukeType::AtomBomb, dst).with_source(dst);
    exec.init(&mut world, 0);
    exec.tick(&mut world, 1);

    assert_eq!(exec.target(&world), Owner::TerraNullius);
    assert!(world.take_messages().is_empty());
    assert!(world.stats().nuke_views().is_empty());
}

// ---- Consequences ----

#[test]
fn test_destroyed_tiles_relinquished_and_fallout() {
    let mut world = open_world(30, 30, sharp_config(3));
    world_setup::claim_rect(&mut world, VICTIM, 0..30, 0..30).unwrap();
    let dst = tile(world.map(), 15, 15);
    detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    let disc = 29; // lattice points with x² + y² <= 9
    assert_eq!(world.player(VICTIM).unwrap().num_tiles_owned(), 900 - disc);
    assert_eq!(world.map().fallout_count(), disc);
    assert_eq!(world.owner(dst), Owner::TerraNullius);
    assert!(world.map().has_fallout(dst));
}

#[test]
fn test_water_tiles_get_no_fallout() {
    let map = GameMap::from_fn(30, 30, |p| p.x < 15).unwrap();
    let mut world = GameWorld::new(map, sharp_config(3));
    world.add_player(Player::new(ATTACKER, "Attacker", 100, 100));
    let dst = tile(world.map(), 15, 15);
    detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    assert!(!world.map().has_fallout(dst));
    assert!(world.map().has_fallout(tile(world.map(), 14, 15)));
}

#[test]
fn test_casualties_reduce_population_and_forces() {
    let mut world = open_world(60, 60, sharp_config(8));
    world_setup::claim_rect(&mut world, VICTIM, 0..60, 0..60).unwrap();
    world
        .player_mut(VICTIM)
        .unwrap()
        .launch_attack(Owner::Player(ATTACKER), 1_000);
    let ship_tile = tile(world.map(), 50, 50);
    let ship = world
        .build_unit(VICTIM, UnitType::TransportShip, ship_tile, 5_000)
        .unwrap();

    let dst = tile(world.map(), 15, 15);
    detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    let victim = world.player(VICTIM).unwrap();
    assert!(victim.troops() < 9_000);
    assert!(victim.workers() < 4_000);
    assert!(victim.outgoing_attacks()[0].troops < 1_000);
    assert!(world.unit_troops(ship).unwrap() < 5_000);

    let attacker = world.player(ATTACKER).unwrap();
    assert_eq!(attacker.troops(), 10_000);
    assert_eq!(attacker.workers(), 4_000);
}

#[test]
fn test_casualties_never_go_negative() {
    let mut world = open_world(20, 20, sharp_config(4));
    world.add_player(Player::new(VICTIM, "Victim", 3, 2));
    world_setup::claim_rect(&mut world, VICTIM, 8..12, 8..12).unwrap();
    world
        .player_mut(VICTIM)
        .unwrap()
        .launch_attack(Owner::TerraNullius, 1);

    let dst = tile(world.map(), 10, 10);
    detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    let victim = world.player(VICTIM).unwrap();
    assert_eq!(victim.num_tiles_owned(), 0);
    assert_eq!(victim.troops(), 0);
    assert_eq!(victim.workers(), 0);
    assert_eq!(victim.outgoing_attacks()[0].troops, 0);
}

#[test]
fn test_units_within_outer_destroyed_except_nukes() {
    let mut world = open_world(40, 40, sharp_config(8));
    let dst = tile(world.map(), 15, 15);
    let near = |world: &GameWorld, dx: i32| tile(world.map(), 15 + dx, 15);

    let city = world
        .build_unit(VICTIM, UnitType::City, near(&world, 7), 0)
        .unwrap();
    let own_silo = world
        .build_unit(ATTACKER, UnitType::MissileSilo, near(&world, -3), 0)
        .unwrap();
    let on_edge = world
        .build_unit(VICTIM, UnitType::Port, near(&world, 8), 0)
        .unwrap();
    let other_nuke = world
        .build_nuke(ATTACKER, NukeType::AtomBomb, near(&world, 1), TileRef(0))
        .unwrap();

    detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    assert!(!world.unit_exists(city));
    assert!(!world.unit_exists(own_silo));
    assert!(world.unit_exists(on_edge), "d2 == outer² is outside");
    assert!(world.unit_exists(other_nuke));

    let events = world.take_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::NukeDetonated {
            units_destroyed: 2,
            ..
        }
    )));
}

// ---- Diplomacy ----

/// Victim owns `extra` tiles beyond a 10x10 block, all inside a radius-10 disc.
fn allied_victim_world(extra: i32) -> (GameWorld, TileRef) {
    let mut world = open_world(80, 80, sharp_config(10));
    world_setup::claim_rect(&mut world, VICTIM, 36..46, 36..46).unwrap();
    world_setup::claim_rect(&mut world, VICTIM, 46..46 + extra, 40..41).unwrap();
    world.form_alliance(ATTACKER, VICTIM).unwrap();
    let dst = tile(world.map(), 40, 40);
    (world, dst)
}

#[test]
fn test_alliance_survives_one_hundred_tiles() {
    let (mut world, dst) = allied_victim_world(0);
    assert_eq!(world.player(VICTIM).unwrap().num_tiles_owned(), 100);
    detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    assert!(world.alliance_between(ATTACKER, VICTIM).is_some());
    assert_eq!(world.player(VICTIM).unwrap().relation_score(ATTACKER), 0);
}

#[test]
fn test_alliance_breaks_beyond_one_hundred_tiles() {
    let (mut world, dst) = allied_victim_world(1);
    assert_eq!(world.player(VICTIM).unwrap().num_tiles_owned(), 101);
    detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    assert!(world.alliance_between(ATTACKER, VICTIM).is_none());
    let victim = world.player(VICTIM).unwrap();
    assert_eq!(victim.relation_score(ATTACKER), -100);
    assert_eq!(victim.relation(ATTACKER), Relation::Hostile);
    assert!(world.take_events().iter().any(|e| *e
        == GameEvent::AllianceBroken {
            breaker: ATTACKER,
            other: VICTIM
        }));
}

#[test]
fn test_mirv_warhead_never_breaks_alliance() {
    let (mut world, dst) = allied_victim_world(20);
    detonate_at(&mut world, ATTACKER, NukeType::MirvWarhead, dst);

    assert!(world.alliance_between(ATTACKER, VICTIM).is_some());
    assert_eq!(world.player(VICTIM).unwrap().relation_score(ATTACKER), 0);
}

#[test]
fn test_small_strike_on_ally_changes_nothing() {
    let mut world = open_world(80, 80, sharp_config(10));
    world_setup::claim_rect(&mut world, VICTIM, 38..43, 35..45).unwrap();
    world.form_alliance(ATTACKER, VICTIM).unwrap();
    assert_eq!(world.player(VICTIM).unwrap().num_tiles_owned(), 50);

    let dst = tile(world.map(), 40, 40);
    detonate_at(&mut world, ATTACKER, NukeType::HydrogenBomb, dst);

    assert!(world.alliance_between(ATTACKER, VICTIM).is_some());
    assert_eq!(world.player(VICTIM).unwrap().relation_score(ATTACKER), 0);
    assert_eq!(world.player(VICTIM).unwrap().num_tiles_owned(), 0);
}

#[test]
fn test_self_strike_skips_relation_penalty() {
    let mut world = open_world(80, 80, sharp_config(10));
    world_setup::claim_rect(&mut world, ATTACKER, 30..50, 30..50).unwrap();
    let dst = tile(world.map(), 40, 40);
    detonate_at(&mut world, ATTACKER, NukeType::AtomBomb, dst);

    assert_eq!(world.player(ATTACKER).unwrap().relation_score(ATTACKER), 0);
}

#[test]
fn test_relation_penalty_clamps() {
    let mut player = Player::new(VICTIM, "Victim", 0, 0);
    player.update_relation(ATTACKER, -100);
    player.update_relation(ATTACKER, -100);
    assert_eq!(player.relation_score(ATTACKER), -100);
    player.update_relation(ATTACKER, 500);
    assert_eq!(player.relation_score(ATTACKER), 100);
    assert_eq!(player.relation(ATTACKER), Relation::Friendly);
}

// ---- World ----

#[test]
fn test_can_build_picks_nearest_ready_silo() {
    let mut world = open_world(60, 60, GameConfig::default());
    let far = world
        .build_unit(ATTACKER, UnitType::MissileSilo, tile(world.map(), 2, 2), 0)
        .unwrap();
    let close = world
        .build_unit(ATTACKER, UnitType::MissileSilo, tile(world.map(), 40, 40), 0)
        .unwrap();
    let dst = tile(world.map(), 50, 50);

    assert_eq!(
        world.can_build(ATTACKER, UnitType::AtomBomb, dst),
        world.unit_tile(close)
    );
    world.set_cooldown(close, true).unwrap();
    assert_eq!(
        world.can_build(ATTACKER, UnitType::HydrogenBomb, dst),
        world.unit_tile(far)
    );
    world.set_cooldown(far, true).unwrap();
    assert_eq!(world.can_build(ATTACKER, UnitType::AtomBomb, dst), None);
    assert_eq!(world.can_build(VICTIM, UnitType::AtomBomb, dst), None);
}

#[test]
fn test_conquer_moves_tile_between_players() {
    let mut world = open_world(10, 10, GameConfig::default());
    let t = tile(world.map(), 4, 4);
    world.conquer(ATTACKER, t).unwrap();
    world.conquer(VICTIM, t).unwrap();

    assert!(!world.player(ATTACKER).unwrap().owns(t));
    assert!(world.player(VICTIM).unwrap().owns(t));
    assert_eq!(world.relinquish(t).unwrap(), Some(VICTIM));
    assert_eq!(world.player(VICTIM).unwrap().num_tiles_owned(), 0);
}

#[test]
fn test_unknown_player_is_an_error() {
    let world = open_world(10, 10, GameConfig::default());
    assert!(world.player(PlayerId(42)).is_err());
}

// ---- Engine ----

fn demo_engine() -> SimulationEngine {
    SimulationEngine::new(world_setup::demo_world(GameConfig::default()).unwrap())
}

fn launch(sender: PlayerId, nuke_type: NukeType, dst: TileRef) -> Intent {
    Intent::LaunchNuke {
        sender,
        nuke_type,
        dst,
        src: None,
        speed: None,
        wait_ticks: 0,
    }
}

fn run_until_idle(engine: &mut SimulationEngine) {
    for _ in 0..500 {
        engine.tick();
        if engine.active_executions() == 0 {
            return;
        }
    }
    panic!("executions never finished");
}

#[test]
fn test_demo_world_layout() {
    let world = world_setup::demo_world(GameConfig::default()).unwrap();
    assert_eq!(world.player(AURELIA).unwrap().num_tiles_owned(), 110 * 60);
    assert_eq!(world.player(CORVIN).unwrap().num_tiles_owned(), 110 * 60);
    assert_eq!(world.player(BOREAS).unwrap().num_tiles_owned(), 110 * 120);
    assert!(world.alliance_between(AURELIA, CORVIN).is_some());
    assert_eq!(world.player(AURELIA).unwrap().troops(), 45_000);
}

#[test]
fn test_engine_launch_warns_target_and_cools_silo() {
    let mut engine = demo_engine();
    let dst = demo_tile(engine.world(), world_setup::BOREAS_CITY);
    engine.queue_intent(launch(AURELIA, NukeType::AtomBomb, dst));

    let snap = engine.tick();
    assert_eq!(snap.active_executions, 1);
    assert_eq!(snap.messages.len(), 1);
    assert_eq!(snap.messages[0].text, "Aurelia - atom bomb inbound");
    assert_eq!(snap.messages[0].recipient, BOREAS);
    assert_eq!(snap.nuke_stats.len(), 1);
    assert_eq!(snap.nuke_stats[0].count, 1);

    let silo = snap
        .units
        .iter()
        .find(|u| u.kind == UnitType::MissileSilo && u.owner == AURELIA)
        .unwrap();
    assert!(silo.cooling_down);
    let bomb = snap
        .units
        .iter()
        .find(|u| u.kind == UnitType::AtomBomb)
        .unwrap();
    assert_eq!(bomb.tile, silo.tile);
}

#[test]
fn test_engine_second_launch_aborts_while_cooling() {
    let mut engine = demo_engine();
    let dst = demo_tile(engine.world(), world_setup::BOREAS_CITY);
    engine.queue_intents([
        launch(AURELIA, NukeType::AtomBomb, dst),
        launch(AURELIA, NukeType::AtomBomb, dst),
    ]);

    let snap = engine.tick();
    assert_eq!(snap.active_executions, 1);
    assert_eq!(
        snap.units
            .iter()
            .filter(|u| u.kind == UnitType::AtomBomb)
            .count(),
        1
    );
}

#[test]
fn test_engine_silo_cooldown_expires() {
    let mut engine = demo_engine();
    let dst = demo_tile(engine.world(), world_setup::BOREAS_CITY);
    let silo_tile = demo_tile(engine.world(), world_setup::AURELIA_SILO);
    engine.queue_intent(launch(AURELIA, NukeType::AtomBomb, dst));

    let cooling = |engine: &SimulationEngine| {
        let silo = engine.world().units_of(AURELIA, &[UnitType::MissileSilo])[0];
        assert_eq!(engine.world().unit_tile(silo), Some(silo_tile));
        engine.world().is_cooling_down(silo)
    };

    for _ in 0..75 {
        engine.tick();
    }
    assert!(cooling(&engine));
    engine.tick();
    assert!(!cooling(&engine));
}

#[test]
fn test_engine_full_strike_on_boreas() {
    let mut engine = demo_engine();
    let dst = demo_tile(engine.world(), world_setup::BOREAS_CITY);
    engine.queue_intent(launch(AURELIA, NukeType::AtomBomb, dst));

    let mut events = Vec::new();
    for _ in 0..200 {
        let snap = engine.tick();
        events.extend(snap.events);
        if snap.active_executions == 0 {
            break;
        }
    }

    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::NukeLaunched { sender: AURELIA, .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::NukeDetonated { dst: d, .. } if *d == dst)));

    let world = engine.world();
    assert!(world.units_of(BOREAS, &[UnitType::City]).is_empty());
    assert_eq!(world.units_of(BOREAS, &[UnitType::TransportShip]).len(), 1);
    assert_eq!(world.units_of(AURELIA, &[UnitType::MissileSilo]).len(), 1);
    assert!(world.player(BOREAS).unwrap().num_tiles_owned() < 110 * 120);
    assert!(world.player(BOREAS).unwrap().troops() < 60_000);
    assert_eq!(world.player(AURELIA).unwrap().num_tiles_owned(), 110 * 60);
    assert_eq!(world.player(BOREAS).unwrap().relation(AURELIA), Relation::Hostile);
    assert!(world.map().fallout_count() > 0);
}

#[test]
fn test_engine_spawn_phase_holds_nukes() {
    let config = GameConfig {
        spawn_phase_ticks: 5,
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(world_setup::demo_world(config).unwrap());
    let dst = demo_tile(engine.world(), world_setup::BOREAS_CITY);
    engine.queue_intent(launch(AURELIA, NukeType::AtomBomb, dst));

    for _ in 0..5 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Spawn);
        assert_eq!(snap.active_executions, 1);
        assert!(snap.units.iter().all(|u| u.kind != UnitType::AtomBomb));
    }
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert!(snap.units.iter().any(|u| u.kind == UnitType::AtomBomb));
}

#[test]
fn test_engine_runs_are_identical() {
    let run = || {
        let mut engine = demo_engine();
        let boreas_city = demo_tile(engine.world(), world_setup::BOREAS_CITY);
        let corvin_city = demo_tile(engine.world(), world_setup::CORVIN_CITY);
        engine.queue_intents([
            launch(AURELIA, NukeType::AtomBomb, boreas_city),
            launch(BOREAS, NukeType::HydrogenBomb, corvin_city),
        ]);
        run_until_idle(&mut engine);
        let world = engine.world();
        let counts: Vec<(u32, u32, u32)> = world
            .players()
            .map(|p| (p.troops(), p.workers(), p.num_tiles_owned()))
            .collect();
        let fallout: Vec<u32> = (0..world.map().tile_count() as u32)
            .filter(|&i| world.map().has_fallout(TileRef(i)))
            .collect();
        (counts, fallout)
    };
    assert_eq!(run(), run());
}
