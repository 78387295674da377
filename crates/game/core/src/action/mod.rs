//! Intents queued by unit states for the animation/replication subsystem.
//!
//! States never execute movement or combat themselves. They append
//! [`Action`] intents to the unit's [`ActionQueue`]; a downstream consumer
//! (the runtime's intent applier, or a client renderer) drains and plays them.
//!
//! # Module Structure
//!
//! - `movement`: Move and Rotate intents
//! - `combat`: Attack intents (melee swing or spell release)

pub mod combat;
pub mod movement;

pub use combat::{AttackAction, AttackStyle};
pub use movement::{MoveAction, RotateAction};

use crate::state::EntityId;

/// A single queued intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Rotate(RotateAction),
    Attack(AttackAction),
}

impl Action {
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Move(action) => action.actor,
            Action::Rotate(action) => action.actor,
            Action::Attack(action) => action.actor,
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Action::Attack(_))
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Action::Move(action)
    }
}

impl From<RotateAction> for Action {
    fn from(action: RotateAction) -> Self {
        Action::Rotate(action)
    }
}

impl From<AttackAction> for Action {
    fn from(action: AttackAction) -> Self {
        Action::Attack(action)
    }
}

/// Append-only sequence of intents belonging to one unit.
///
/// States only push and peek at the last entry. Draining is reserved for the
/// consumer that plays the intents.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionQueue {
    entries: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: impl Into<Action>) {
        self.entries.push(action.into());
    }

    pub fn last(&self) -> Option<&Action> {
        self.entries.last()
    }

    /// True if the most recently queued intent is an attack.
    pub fn last_is_attack(&self) -> bool {
        self.last().is_some_and(Action::is_attack)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.entries.iter()
    }

    /// Removes and returns every queued intent in insertion order.
    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.entries)
    }
}
