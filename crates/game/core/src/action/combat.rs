use crate::combat::DamageFlags;
use crate::env::SpellId;
use crate::state::{EntityId, Position};

/// Offensive intent: a melee swing or the release of a spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: EntityId,
    pub target: Option<EntityId>,
    pub style: AttackStyle,
}

impl AttackAction {
    /// Melee swing carrying the raw rolled damage.
    pub fn melee(actor: EntityId, target: EntityId, flags: DamageFlags, damage: u32) -> Self {
        Self {
            actor,
            target: Some(target),
            style: AttackStyle::Melee { flags, damage },
        }
    }

    /// Spell release toward a unit and/or a cell.
    pub fn spell(
        actor: EntityId,
        spell: SpellId,
        target: Option<EntityId>,
        target_cell: Option<Position>,
    ) -> Self {
        Self {
            actor,
            target,
            style: AttackStyle::Spell { spell, target_cell },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackStyle {
    Melee { flags: DamageFlags, damage: u32 },
    Spell {
        spell: SpellId,
        target_cell: Option<Position>,
    },
}
