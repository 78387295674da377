use crate::env::SpellId;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Command issued to a unit from outside the simulation (player input, AI).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitOrder {
    Stop,
    MoveTo(Position),
    Attack(EntityId),
    Pickup(Position),
    CastAtUnit { spell: SpellId, target: EntityId },
    CastAtCell { spell: SpellId, cell: Position },
}

/// Why an order could not be turned into a state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderError {
    #[error("unit {0} does not exist")]
    UnknownUnit(EntityId),

    #[error("{0} is not a known spell")]
    UnknownSpell(SpellId),

    #[error("unit {0} is dead and cannot take orders")]
    UnitDead(EntityId),
}

impl GameError for OrderError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            OrderError::UnknownUnit(_) => "ORDER_UNKNOWN_UNIT",
            OrderError::UnknownSpell(_) => "ORDER_UNKNOWN_SPELL",
            OrderError::UnitDead(_) => "ORDER_UNIT_DEAD",
        }
    }
}
