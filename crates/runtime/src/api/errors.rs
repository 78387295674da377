//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, oracle setup and order
//! validation so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;
use unit_core::{ErrorSeverity, GameError, OracleError, OrderError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("runtime requires an initial world before building")]
    MissingWorld,

    #[error("invalid scenario: {0}")]
    Scenario(String),

    #[error("world is {world:?} but navigation covers {navigation:?}")]
    DimensionMismatch {
        world: unit_core::MapDimensions,
        navigation: unit_core::MapDimensions,
    },

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl RuntimeError {
    /// Severity of the underlying domain error, if any.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Order(err) => err.severity(),
            RuntimeError::Oracle(err) => err.severity(),
            RuntimeError::MissingOracles
            | RuntimeError::MissingWorld
            | RuntimeError::Scenario(_)
            | RuntimeError::DimensionMismatch { .. } => ErrorSeverity::Validation,
            RuntimeError::CommandChannelClosed
            | RuntimeError::ReplyChannelClosed(_)
            | RuntimeError::WorkerJoin(_) => ErrorSeverity::Fatal,
        }
    }
}
