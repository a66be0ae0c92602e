//! Simulation engine: the scheduler at the core of the game.
//!
//! `SimulationEngine` owns the game world, turns queued player intents into
//! executions, ticks every active execution, runs the world systems and
//! produces `WorldSnapshot`s. Completely headless and deterministic: the
//! only clock is the logical tick.

use std::collections::VecDeque;

use hecs::Entity;
use log::debug;

use atomfront_core::commands::Intent;
use atomfront_core::enums::GamePhase;
use atomfront_core::state::WorldSnapshot;
use atomfront_core::types::SimTime;

use crate::execution::Execution;
use crate::nuke::NukeExecution;
use crate::systems;
use crate::world::GameWorld;

/// The simulation engine. Owns the world and every running execution.
pub struct SimulationEngine {
    world: GameWorld,
    time: SimTime,
    intent_queue: VecDeque<Intent>,
    executions: Vec<Box<dyn Execution>>,
    ready_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create an engine around an already populated world.
    pub fn new(world: GameWorld) -> Self {
        let time = SimTime {
            tick: world.ticks(),
        };
        Self {
            world,
            time,
            intent_queue: VecDeque::new(),
            executions: Vec::new(),
            ready_buffer: Vec::new(),
        }
    }

    /// Queue a player intent for processing at the next tick boundary.
    pub fn queue_intent(&mut self, intent: Intent) {
        self.intent_queue.push_back(intent);
    }

    /// Queue multiple intents.
    pub fn queue_intents(&mut self, intents: impl IntoIterator<Item = Intent>) {
        self.intent_queue.extend(intents);
    }

    /// Schedule an execution. It is initialised immediately at the current tick.
    pub fn add_execution(&mut self, mut execution: Box<dyn Execution>) {
        self.world.set_ticks(self.time.tick);
        execution.init(&mut self.world, self.time.tick);
        self.executions.push(execution);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        let tick = self.time.tick;
        self.world.set_ticks(tick);
        self.process_intents();

        let spawn_phase = self.phase() == GamePhase::Spawn;
        for execution in &mut self.executions {
            if spawn_phase && !execution.active_during_spawn_phase() {
                continue;
            }
            if execution.is_active() {
                execution.tick(&mut self.world, tick);
            }
        }
        self.executions.retain(|e| e.is_active());

        self.run_systems();
        let phase = self.phase();
        self.time.advance();
        self.world.set_ticks(self.time.tick);

        systems::snapshot::build_snapshot(
            &mut self.world,
            &self.time,
            phase,
            self.executions.len(),
        )
    }

    /// Spawn phase lasts for the configured number of opening ticks.
    pub fn phase(&self) -> GamePhase {
        if self.time.tick < self.world.config().spawn_phase_ticks {
            GamePhase::Spawn
        } else {
            GamePhase::Active
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the game world.
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Get a mutable reference to the game world, for scenario setup and
    /// external effects such as interceptions.
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Number of executions still running.
    pub fn active_executions(&self) -> usize {
        self.executions.len()
    }

    /// Turn every queued intent into a scheduled execution.
    fn process_intents(&mut self) {
        while let Some(intent) = self.intent_queue.pop_front() {
            debug!("tick {}: {intent:?}", self.time.tick);
            let execution = match &intent {
                Intent::LaunchNuke { .. } => NukeExecution::from_intent(&intent),
            };
            self.add_execution(Box::new(execution));
        }
    }

    /// Run all world systems in order.
    fn run_systems(&mut self) {
        let cooldown_ticks = self.world.config().silo_cooldown_ticks;
        systems::cooldown::run(
            self.world.units_mut(),
            self.time.tick,
            cooldown_ticks,
            &mut self.ready_buffer,
        );
    }
}
