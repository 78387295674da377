use crate::behavior::{EvalContext, StateStatus};
use crate::state::{EntityId, World};

/// Default state: the unit stands still.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdleState;

impl IdleState {
    /// Never queues anything and never finishes.
    pub fn evaluate(
        &mut self,
        _world: &mut World,
        _unit: EntityId,
        _ctx: &mut EvalContext<'_>,
    ) -> StateStatus {
        StateStatus::Running
    }
}
