//! Errors raised by world collaborators.
//!
//! Executions never surface these to the scheduler; they log them and
//! terminate instead.

use thiserror::Error;

use atomfront_core::types::{PlayerId, TileRef};
use atomfront_map::MapError;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("unit {0:?} no longer exists")]
    UnitNotFound(hecs::Entity),
    #[error("tile {0:?} is outside the map")]
    InvalidTile(TileRef),
    #[error(transparent)]
    Map(#[from] MapError),
}
