//! Oracle data errors.

use crate::env::SpellId;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors raised while building or querying oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Two spell templates share an id.
    #[error("{0} defined twice")]
    DuplicateSpell(SpellId),

    /// Static map data references a cell outside the map.
    #[error("cell {0} is out of map bounds")]
    CellOutOfBounds(Position),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::CellOutOfBounds(_) => ErrorSeverity::Validation,
            OracleError::DuplicateSpell(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::DuplicateSpell(_) => "ORACLE_DUPLICATE_SPELL",
            OracleError::CellOutOfBounds(_) => "ORACLE_CELL_OUT_OF_BOUNDS",
        }
    }
}
