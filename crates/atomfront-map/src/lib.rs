//! Tile map for ATOMFRONT.
//!
//! Land/water classification, tile ownership, fallout marking,
//! grid geometry and predicate-bounded flood fills.

pub use atomfront_core as core;

pub mod grid;
pub mod traversal;

// Re-export key types for convenience.
pub use grid::{GameMap, MapError, MapHeader};
