//! The contract every scheduled behaviour implements.

use atomfront_core::types::PlayerId;

use crate::world::GameWorld;

/// A unit of behaviour driven by the engine, one step per tick.
///
/// `init` is called exactly once before the first `tick`. The engine stops
/// calling `tick` once `is_active` returns false and drops the execution.
/// Failures never propagate to the engine; an execution that cannot
/// continue deactivates itself.
pub trait Execution {
    fn init(&mut self, world: &mut GameWorld, tick: u64);

    fn tick(&mut self, world: &mut GameWorld, tick: u64);

    fn is_active(&self) -> bool;

    /// Player on whose behalf this execution acts, once bound.
    fn owner(&self) -> Option<PlayerId>;

    /// Whether the engine should tick this execution while players are
    /// still choosing spawn locations.
    fn active_during_spawn_phase(&self) -> bool {
        false
    }
}
