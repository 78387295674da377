//! Per-tick scheduling of unit states.
//!
//! The [`Scheduler`] owns one [`UnitState`] per unit and evaluates them in
//! ascending unit-id order, so every peer fed the same orders produces the
//! same intents. A finished state is replaced by idle in the same tick and
//! reported as a [`StateTransition`] for the runtime to publish.

use std::collections::BTreeMap;

use crate::behavior::{EvalContext, OrderError, StateKind, UnitOrder, UnitState};
use crate::env::SpellOracle;
use crate::state::{EntityId, Tick, World};

/// Why a unit changed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitionCause {
    /// A new order replaced the previous state.
    Ordered,
    /// The state reported it was done and the unit fell back to idle.
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateTransition {
    pub unit: EntityId,
    pub from: StateKind,
    pub to: StateKind,
    pub tick: Tick,
    pub cause: TransitionCause,
}

/// Arena of unit states keyed by unit id.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    states: BTreeMap<EntityId, UnitState>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `unit`; units without an entry are idle.
    pub fn state(&self, unit: EntityId) -> Option<&UnitState> {
        self.states.get(&unit)
    }

    pub fn state_of(&self, unit: EntityId) -> StateKind {
        self.states
            .get(&unit)
            .map_or(StateKind::Idle, UnitState::kind)
    }

    /// Replaces the state of `unit` with one carrying out `order`.
    pub fn assign(
        &mut self,
        world: &World,
        unit: EntityId,
        order: &UnitOrder,
        spells: &(impl SpellOracle + ?Sized),
    ) -> Result<StateTransition, OrderError> {
        let issuer = world.unit(unit).ok_or(OrderError::UnknownUnit(unit))?;
        if issuer.is_dead() {
            return Err(OrderError::UnitDead(unit));
        }

        let state = UnitState::from_order(order, world.tick(), spells)?;
        let to = state.kind();
        let from = self
            .states
            .insert(unit, state)
            .map_or(StateKind::Idle, |previous| previous.kind());
        Ok(StateTransition {
            unit,
            from,
            to,
            tick: world.tick(),
            cause: TransitionCause::Ordered,
        })
    }

    /// Evaluates every unit once and returns the states that finished.
    ///
    /// States of units that left the world are dropped first.
    pub fn evaluate_tick(
        &mut self,
        world: &mut World,
        ctx: &mut EvalContext<'_>,
    ) -> Vec<StateTransition> {
        self.states.retain(|unit, _| world.unit(*unit).is_some());

        let tick = world.tick();
        let mut transitions = Vec::new();
        for unit in world.unit_ids() {
            let state = self.states.entry(unit).or_default();
            if !state.evaluate(world, unit, ctx).is_finished() {
                continue;
            }
            let from = state.kind();
            *state = UnitState::default();
            if from != StateKind::Idle {
                transitions.push(StateTransition {
                    unit,
                    from,
                    to: StateKind::Idle,
                    tick,
                    cause: TransitionCause::Finished,
                });
            }
        }
        transitions
    }
}
