//! Core types and definitions for the ATOMFRONT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! identifiers, unit kinds, intents, events, snapshots, configuration
//! and tuning constants. It has no dependency on the map or the ECS.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
