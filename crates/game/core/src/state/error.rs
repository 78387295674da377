//! World state errors.
//!
//! Errors raised when units or sacks are inserted into the world outside of
//! per-tick evaluation (scenario setup, spawning).

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors that occur while mutating the world container.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldError {
    /// A unit with the same id is already linked.
    #[error("unit {0} already exists")]
    DuplicateUnit(EntityId),

    /// No unit with this id is linked into the world.
    #[error("unit {0} not found")]
    UnitNotFound(EntityId),

    /// Position is outside the map bounds.
    #[error("position {position} is out of bounds (map size: {width}x{height})")]
    PositionOutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            WorldError::DuplicateUnit(_) => ErrorSeverity::Internal,
            WorldError::UnitNotFound(_) | WorldError::PositionOutOfBounds { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            WorldError::DuplicateUnit(_) => "WORLD_DUPLICATE_UNIT",
            WorldError::UnitNotFound(_) => "WORLD_UNIT_NOT_FOUND",
            WorldError::PositionOutOfBounds { .. } => "WORLD_POSITION_OUT_OF_BOUNDS",
        }
    }
}
