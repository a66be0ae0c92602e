//! Nuke execution: the full life of one guided area-effect weapon.
//!
//! Spawn at a launcher, fly a seeded staircase path to the destination,
//! then detonate: resolve the blast area, settle diplomacy, and apply
//! territorial and unit losses. A nuke whose unit vanishes mid-flight has
//! been intercepted.

pub mod blast;
pub mod consequences;
pub mod diplomacy;
pub mod navigator;

use hecs::Entity;
use log::{debug, info, warn};

use atomfront_core::commands::Intent;
use atomfront_core::enums::{MessageType, NukePhase, NukeType, UnitType};
use atomfront_core::events::GameEvent;
use atomfront_core::types::{Owner, PlayerId, TileRef};

use crate::error::WorldError;
use crate::execution::Execution;
use crate::world::GameWorld;

use self::consequences::BlastOutcome;
use self::navigator::{Navigator, Step};

pub struct NukeExecution {
    sender: PlayerId,
    nuke_type: NukeType,
    dst: TileRef,
    src: Option<TileRef>,
    speed: Option<u32>,
    wait_ticks: u32,

    phase: NukePhase,
    owner: Option<PlayerId>,
    nuke: Option<Entity>,
    navigator: Option<Navigator>,
}

impl NukeExecution {
    pub fn new(sender: PlayerId, nuke_type: NukeType, dst: TileRef) -> Self {
        Self {
            sender,
            nuke_type,
            dst,
            src: None,
            speed: None,
            wait_ticks: 0,
            phase: NukePhase::Uninitialized,
            owner: None,
            nuke: None,
            navigator: None,
        }
    }

    /// Launch from `src` instead of the sender's nearest ready silo.
    pub fn with_source(mut self, src: TileRef) -> Self {
        self.src = Some(src);
        self
    }

    /// Movement steps per tick. Defaults to the configured nuke speed.
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Ticks to hold after spawning before the first movement step.
    pub fn with_wait_ticks(mut self, wait_ticks: u32) -> Self {
        self.wait_ticks = wait_ticks;
        self
    }

    pub fn from_intent(intent: &Intent) -> Self {
        match *intent {
            Intent::LaunchNuke {
                sender,
                nuke_type,
                dst,
                src,
                speed,
                wait_ticks,
            } => {
                let mut exec = Self::new(sender, nuke_type, dst).with_wait_ticks(wait_ticks);
                exec.src = src;
                exec.speed = speed;
                exec
            }
        }
    }

    pub fn phase(&self) -> NukePhase {
        self.phase
    }

    pub fn nuke_type(&self) -> NukeType {
        self.nuke_type
    }

    pub fn destination(&self) -> TileRef {
        self.dst
    }

    /// The weapon unit, once spawned. Stays set after the unit is gone.
    pub fn unit(&self) -> Option<Entity> {
        self.nuke
    }

    /// Whoever owns the destination right now.
    pub fn target(&self, world: &GameWorld) -> Owner {
        world.owner(self.dst)
    }

    fn terminate(&mut self, phase: NukePhase) {
        self.phase = phase;
    }

    /// Build the weapon at its launch cell. Returns false if there is none.
    fn spawn(&mut self, world: &mut GameWorld) -> Result<bool, WorldError> {
        let spawn = match self.src {
            Some(src) => Some(src),
            None => world.can_build(self.sender, self.nuke_type.unit_type(), self.dst),
        };
        let Some(spawn) = spawn else {
            return Ok(false);
        };

        let entity = world.build_nuke(self.sender, self.nuke_type, spawn, self.dst)?;
        self.nuke = Some(entity);

        if let Owner::Player(target) = self.target(world) {
            if let Some(warning) = self.nuke_type.inbound_warning() {
                let name = world.player(self.sender)?.name().to_owned();
                world.display_message(format!("{name} - {warning}"), MessageType::Error, target);
            }
            world
                .stats_mut()
                .increase_nuke_count(self.sender, target, self.nuke_type);
        }

        let launcher = world
            .units_of(self.sender, &[UnitType::MissileSilo, UnitType::NuclearWarship])
            .into_iter()
            .find(|&launcher| world.unit_tile(launcher) == Some(spawn));
        if let Some(launcher) = launcher {
            world.set_cooldown(launcher, true)?;
        }

        info!(
            "{} launched {:?} from {:?} at {:?}",
            self.sender, self.nuke_type, spawn, self.dst
        );
        world.push_event(GameEvent::NukeLaunched {
            sender: self.sender,
            nuke_type: self.nuke_type,
            src: spawn,
            dst: self.dst,
        });
        Ok(true)
    }

    /// Move up to `speed` steps, detonating on arrival.
    fn fly(&mut self, world: &mut GameWorld, nuke: Entity, tick: u64) -> Result<(), WorldError> {
        let speed = self.speed.unwrap_or(world.config().default_nuke_speed);
        for _ in 0..speed {
            let current = world.unit_tile(nuke).ok_or(WorldError::UnitNotFound(nuke))?;
            if current == self.dst {
                self.detonate(world, nuke, tick)?;
                return Ok(());
            }
            let Some(navigator) = self.navigator.as_mut() else {
                return Ok(());
            };
            match navigator.step(world.map(), current, self.dst) {
                Step::Moved(next) => world.move_unit(nuke, next)?,
                Step::OffGrid(cell) => {
                    warn!(
                        "{:?} from {} left the map at ({}, {})",
                        self.nuke_type, self.sender, cell.x, cell.y
                    );
                    world.delete_unit(nuke);
                    self.terminate(NukePhase::Invalid);
                    return Ok(());
                }
            }
        }
        debug!("{:?} from {} now at {:?}", self.nuke_type, self.sender, world.unit_tile(nuke));
        Ok(())
    }

    fn detonate(&mut self, world: &mut GameWorld, nuke: Entity, tick: u64) -> Result<(), WorldError> {
        let magnitude = world.config().nuke_magnitude(self.nuke_type);
        let policy = world.config().falloff_policy;
        let destroyed = blast::tiles_to_destroy(world.map(), self.dst, magnitude, tick, policy);

        let tally = diplomacy::tally_attacked(world, &destroyed);
        diplomacy::break_alliances(world, self.sender, self.nuke_type, &tally);

        let BlastOutcome {
            tiles_destroyed,
            units_destroyed,
        } = consequences::apply(world, self.dst, magnitude, &destroyed)?;

        world.delete_unit(nuke);
        self.terminate(NukePhase::Detonated);

        info!(
            "{:?} from {} detonated at {:?}: {} tiles, {} units",
            self.nuke_type, self.sender, self.dst, tiles_destroyed, units_destroyed
        );
        world.push_event(GameEvent::NukeDetonated {
            sender: self.sender,
            nuke_type: self.nuke_type,
            dst: self.dst,
            tiles_destroyed,
            units_destroyed,
        });
        Ok(())
    }

    fn step(&mut self, world: &mut GameWorld, tick: u64) -> Result<(), WorldError> {
        let Some(nuke) = self.nuke else {
            if !self.spawn(world)? {
                warn!(
                    "{} cannot launch {:?} at {:?}",
                    self.sender, self.nuke_type, self.dst
                );
                self.terminate(NukePhase::Aborted);
            } else {
                self.phase = NukePhase::InFlight;
            }
            return Ok(());
        };

        if !world.unit_exists(nuke) {
            info!("{:?} from {} was intercepted", self.nuke_type, self.sender);
            world.push_event(GameEvent::NukeIntercepted {
                sender: self.sender,
                nuke_type: self.nuke_type,
            });
            self.terminate(NukePhase::Intercepted);
            return Ok(());
        }

        if self.wait_ticks > 0 {
            self.wait_ticks -= 1;
            return Ok(());
        }

        self.fly(world, nuke, tick)
    }
}

impl Execution for NukeExecution {
    fn init(&mut self, world: &mut GameWorld, tick: u64) {
        if !world.has_player(self.sender) {
            warn!("nuke sender {} not found", self.sender);
            self.terminate(NukePhase::Aborted);
            return;
        }
        self.owner = Some(self.sender);
        if self.speed.is_none() {
            self.speed = Some(world.config().default_nuke_speed);
        }
        self.navigator = Some(Navigator::new(tick));
        self.phase = NukePhase::AwaitingSpawn;
    }

    fn tick(&mut self, world: &mut GameWorld, tick: u64) {
        if !self.is_active() {
            return;
        }
        if let Err(err) = self.step(world, tick) {
            warn!("{:?} from {} aborted: {err}", self.nuke_type, self.sender);
            if let Some(nuke) = self.nuke {
                world.delete_unit(nuke);
            }
            self.terminate(NukePhase::Aborted);
        }
    }

    fn is_active(&self) -> bool {
        !self.phase.is_terminal() && self.phase != NukePhase::Uninitialized
    }

    fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    fn active_during_spawn_phase(&self) -> bool {
        false
    }
}
