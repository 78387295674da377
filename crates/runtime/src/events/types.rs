//! Event types for different topics.

use serde::{Deserialize, Serialize};
use unit_core::{EntityId, Notification, Position, SpellId, StateTransition, Tick};

/// Notification emitted by a unit state, stamped with its tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub tick: Tick,
    pub notification: Notification,
}

/// Unit behavior and the outcome of applied intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateEvent {
    /// A unit was ordered into a new state or its state finished.
    Transition(StateTransition),

    /// A melee swing landed.
    MeleeHit {
        attacker: EntityId,
        target: EntityId,
        damage: u32,
        tick: Tick,
    },

    /// A spell was released.
    SpellCast {
        caster: EntityId,
        spell: SpellId,
        target: Option<EntityId>,
        target_cell: Option<Position>,
        tick: Tick,
    },

    /// A unit's health dropped to zero or below.
    UnitDied {
        unit: EntityId,
        killer: Option<EntityId>,
        tick: Tick,
    },
}

/// Emitted once per completed tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    /// The tick that was just evaluated.
    pub tick: Tick,
    /// Hex-encoded world digest after the tick's intents were applied.
    pub digest: String,
}
