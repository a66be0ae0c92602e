//! Systems that run over the game world once per tick.
//!
//! Systems are plain functions over the world. They do not own state;
//! everything they touch lives in the world or its unit components.

pub mod cooldown;
pub mod snapshot;
