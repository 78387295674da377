use crate::state::{Angle, EntityId, Position};

/// Step the actor one path node toward `destination`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub destination: Position,
}

impl MoveAction {
    pub fn new(actor: EntityId, destination: Position) -> Self {
        Self { actor, destination }
    }
}

/// Turn the actor to face `angle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotateAction {
    pub actor: EntityId,
    pub angle: Angle,
}

impl RotateAction {
    pub fn new(actor: EntityId, angle: Angle) -> Self {
        Self { actor, angle }
    }
}
