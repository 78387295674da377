//! Spell catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use unit_core::Spell;

use crate::loaders::{LoadResult, read_file};

/// Spell catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<Spell>,
}

/// Loader for spell templates from RON files.
pub struct SpellLoader;

impl SpellLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Spell>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a catalog, rejecting duplicate ids and negative ranges.
    pub fn parse(content: &str) -> LoadResult<Vec<Spell>> {
        let catalog: SpellCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for spell in &catalog.spells {
            if !seen.insert(spell.id) {
                anyhow::bail!("{} defined twice", spell.id);
            }
            if spell.range.is_nan() || spell.range < 0.0 {
                anyhow::bail!("{} has invalid range {}", spell.id, spell.range);
            }
            if spell.item_disposable && spell.item.is_none() {
                anyhow::bail!("{} is disposable but bound to no item", spell.id);
            }
        }
        Ok(catalog.spells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_core::{ItemHandle, SpellId};

    #[test]
    fn parses_catalog_with_defaults() {
        let spells = SpellLoader::parse(
            r#"(
                spells: [
                    (id: SpellId(1), range: 6.0, mana_cost: 12, is_attack: true),
                    (id: SpellId(2), range: 4.0, mana_cost: 0, item: Some(ItemHandle(30)), item_disposable: true),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(spells.len(), 2);
        assert_eq!(spells[0].id, SpellId(1));
        assert!(spells[0].is_attack);
        assert_eq!(spells[0].item, None);
        assert_eq!(spells[1].item, Some(ItemHandle(30)));
        assert!(spells[1].item_disposable);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = SpellLoader::parse(
            "(spells: [(id: SpellId(1), range: 1.0, mana_cost: 1), (id: SpellId(1), range: 2.0, mana_cost: 1)])",
        )
        .unwrap_err();
        assert!(err.to_string().contains("defined twice"));
    }

    #[test]
    fn disposable_without_item_is_rejected() {
        let err = SpellLoader::parse(
            "(spells: [(id: SpellId(4), range: 1.0, mana_cost: 0, item_disposable: true)])",
        )
        .unwrap_err();
        assert!(err.to_string().contains("bound to no item"));
    }
}
