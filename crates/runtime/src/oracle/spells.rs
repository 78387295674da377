//! Spell templates served through [`unit_core::SpellOracle`].
use std::collections::BTreeMap;

use unit_core::{OracleError, Spell, SpellId, SpellOracle};

#[derive(Clone, Debug, Default)]
pub struct SpellBook {
    spells: BTreeMap<SpellId, Spell>,
}

impl SpellBook {
    pub fn new(spells: impl IntoIterator<Item = Spell>) -> Result<Self, OracleError> {
        let mut book = BTreeMap::new();
        for spell in spells {
            let id = spell.id;
            if book.insert(id, spell).is_some() {
                return Err(OracleError::DuplicateSpell(id));
            }
        }
        Ok(Self { spells: book })
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl SpellOracle for SpellBook {
    fn spell(&self, id: SpellId) -> Option<Spell> {
        self.spells.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let spells = [
            Spell::new(SpellId(1), 3.0, 5),
            Spell::new(SpellId(1), 4.0, 6),
        ];
        assert_eq!(
            SpellBook::new(spells).unwrap_err(),
            OracleError::DuplicateSpell(SpellId(1))
        );
    }

    #[test]
    fn looks_up_by_id() {
        let book = SpellBook::new([Spell::new(SpellId(3), 3.0, 5)]).unwrap();
        assert_eq!(book.spell(SpellId(3)).map(|s| s.mana_cost), Some(5));
        assert!(book.spell(SpellId(4)).is_none());
    }
}
