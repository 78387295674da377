use std::fmt;

use crate::state::ItemHandle;

/// Identifier of a spell template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellId(pub u16);

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spell:{}", self.0)
    }
}

/// Read-only spell data a caster needs to approach, validate and release a spell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub id: SpellId,
    /// Casting distance in cells.
    pub range: f32,
    pub mana_cost: u32,
    /// Item the spell is bound to (scrolls, wands). Item-bound spells cost no mana.
    #[cfg_attr(feature = "serde", serde(default))]
    pub item: Option<ItemHandle>,
    /// Whether casting consumes one unit of `item`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_disposable: bool,
    /// Offensive spells cannot target their caster.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_attack: bool,
}

impl Spell {
    pub fn new(id: SpellId, range: f32, mana_cost: u32) -> Self {
        Self {
            id,
            range,
            mana_cost,
            item: None,
            item_disposable: false,
            is_attack: false,
        }
    }

    pub fn offensive(mut self) -> Self {
        self.is_attack = true;
        self
    }

    /// Binds the spell to an item; `disposable` items are consumed per cast.
    pub fn bound_to(mut self, item: ItemHandle, disposable: bool) -> Self {
        self.item = Some(item);
        self.item_disposable = disposable;
        self
    }

    pub fn is_item_bound(&self) -> bool {
        self.item.is_some()
    }
}

/// Spell template store.
pub trait SpellOracle: Send + Sync {
    fn spell(&self, id: SpellId) -> Option<Spell>;
}
