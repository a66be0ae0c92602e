//! Simulation engine for ATOMFRONT.
//!
//! Owns the game world (map, players, hecs unit world, diplomacy),
//! schedules executions at a fixed logical tick, and produces
//! `WorldSnapshot`s. The nuke execution lives in [`nuke`].

pub mod alliance;
pub mod engine;
pub mod error;
pub mod execution;
pub mod nuke;
pub mod player;
pub mod random;
pub mod stats;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use atomfront_core as core;
pub use atomfront_map as map;
pub use engine::SimulationEngine;
pub use error::WorldError;
pub use execution::Execution;
pub use nuke::NukeExecution;
pub use world::GameWorld;

#[cfg(test)]
mod tests;
