//! Cooldown system: returns launchers to service once their cooldown elapses.

use hecs::{Entity, World};
use log::debug;

use atomfront_core::components::{LauncherCooldown, Unit};

/// Clear every cooldown started at least `cooldown_ticks` ago.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(units: &mut World, tick: u64, cooldown_ticks: u64, ready_buffer: &mut Vec<Entity>) {
    ready_buffer.clear();

    for (entity, (_unit, cooldown)) in units.query_mut::<(&Unit, &mut LauncherCooldown)>() {
        if let Some(started) = cooldown.started_at {
            if tick.saturating_sub(started) >= cooldown_ticks {
                cooldown.started_at = None;
                ready_buffer.push(entity);
            }
        }
    }

    for entity in ready_buffer.drain(..) {
        debug!("launcher {entity:?} ready");
    }
}
