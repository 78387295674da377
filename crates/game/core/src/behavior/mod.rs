//! Per-unit behavior states driven once per simulation tick.
//!
//! Each unit owns exactly one [`UnitState`]. On every tick the scheduler calls
//! [`UnitState::evaluate`], which inspects the world, may queue intents on the
//! unit's [`ActionQueue`](crate::action::ActionQueue) and reports whether the
//! state keeps running. Evaluation never fails: every problem collapses into
//! [`StateStatus::Finished`] or "no progress this tick".
//!
//! States only queue intents. Moving, turning and damage resolution happen
//! downstream when the queue is drained.
mod attack;
mod cast;
mod context;
mod idle;
mod movement;
mod order;
mod pickup;
mod walk;

#[cfg(test)]
pub(crate) mod test_support;

pub use attack::AttackState;
pub use cast::CastState;
pub use context::EvalContext;
pub use idle::IdleState;
pub use movement::{MoveState, PathLedger};
pub use order::{OrderError, UnitOrder};
pub use pickup::PickupState;
pub use walk::try_walk_to;

use crate::env::SpellOracle;
use crate::state::{EntityId, Tick, World};

/// Outcome of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateStatus {
    /// Evaluate again next tick.
    Running,
    /// Goal reached or no longer reachable; the owner reverts to idle.
    Finished,
}

impl StateStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, StateStatus::Finished)
    }
}

/// Discriminant of [`UnitState`] for logging and events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StateKind {
    Idle,
    Move,
    Attack,
    Pickup,
    Cast,
}

/// Behavior state of a single unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitState {
    Idle(IdleState),
    Move(MoveState),
    Attack(AttackState),
    Pickup(PickupState),
    Cast(CastState),
}

impl Default for UnitState {
    fn default() -> Self {
        UnitState::Idle(IdleState)
    }
}

impl UnitState {
    pub fn kind(&self) -> StateKind {
        match self {
            UnitState::Idle(_) => StateKind::Idle,
            UnitState::Move(_) => StateKind::Move,
            UnitState::Attack(_) => StateKind::Attack,
            UnitState::Pickup(_) => StateKind::Pickup,
            UnitState::Cast(_) => StateKind::Cast,
        }
    }

    /// Runs one tick of this state for `unit`.
    pub fn evaluate(
        &mut self,
        world: &mut World,
        unit: EntityId,
        ctx: &mut EvalContext<'_>,
    ) -> StateStatus {
        match self {
            UnitState::Idle(state) => state.evaluate(world, unit, ctx),
            UnitState::Move(state) => state.evaluate(world, unit, ctx),
            UnitState::Attack(state) => state.evaluate(world, unit, ctx),
            UnitState::Pickup(state) => state.evaluate(world, unit, ctx),
            UnitState::Cast(state) => state.evaluate(world, unit, ctx),
        }
    }

    /// Builds the state that carries out `order`, issued at `now`.
    pub fn from_order(
        order: &UnitOrder,
        now: Tick,
        spells: &(impl SpellOracle + ?Sized),
    ) -> Result<Self, OrderError> {
        let state = match *order {
            UnitOrder::Stop => UnitState::Idle(IdleState),
            UnitOrder::MoveTo(destination) => UnitState::Move(MoveState::new(destination, now)),
            UnitOrder::Attack(target) => UnitState::Attack(AttackState::new(target)),
            UnitOrder::Pickup(cell) => UnitState::Pickup(PickupState::new(cell)),
            UnitOrder::CastAtUnit { spell, target } => {
                let spell = spells.spell(spell).ok_or(OrderError::UnknownSpell(spell))?;
                UnitState::Cast(CastState::at_unit(spell, target))
            }
            UnitOrder::CastAtCell { spell, cell } => {
                let spell = spells.spell(spell).ok_or(OrderError::UnknownSpell(spell))?;
                UnitState::Cast(CastState::at_cell(spell, cell))
            }
        };
        Ok(state)
    }
}
