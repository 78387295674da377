//! Runtime implementations of the unit-core oracle traits.
//!
//! These wrap static content (map walls, faction alliances, spell templates)
//! and are bundled into an [`OracleManager`] so the runtime can build
//! [`unit_core::GameEnv`] snapshots on demand. The data is immutable at
//! runtime; dynamic state lives in [`unit_core::World`].
mod navigation;
mod rules;
mod spells;

use std::sync::Arc;

use unit_content::Scenario;
use unit_core::{Env, GameConfig, GameEnv, OracleError, PcgRng, Spell, SpellOracle};

pub use navigation::GridNavigator;
pub use rules::FactionRules;
pub use spells::SpellBook;

/// Manages all oracle implementations and provides unified access.
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) navigation: Arc<GridNavigator>,
    pub(crate) rules: Arc<FactionRules>,
    pub(crate) spells: Arc<SpellBook>,
    pub(crate) config: Arc<GameConfig>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(
        navigation: Arc<GridNavigator>,
        rules: Arc<FactionRules>,
        spells: Arc<SpellBook>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            navigation,
            rules,
            spells,
            config,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Builds oracles for a scenario's map with the given spells and rules.
    pub fn from_scenario(
        scenario: &Scenario,
        spells: Vec<Spell>,
        rules: FactionRules,
        config: GameConfig,
    ) -> Result<Self, OracleError> {
        let dimensions = scenario.dimensions();
        let walls = scenario.walls();
        if let Some(wall) = walls.iter().find(|wall| !dimensions.contains(**wall)) {
            return Err(OracleError::CellOutOfBounds(*wall));
        }

        Ok(Self::new(
            Arc::new(GridNavigator::new(dimensions, walls)),
            Arc::new(rules),
            Arc::new(SpellBook::new(spells)?),
            Arc::new(config),
        ))
    }

    /// Converts oracle manager into GameEnv for unit-core.
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::new(
            self.navigation.as_ref(),
            self.rules.as_ref(),
            &self.rng,
            self.config.as_ref(),
        )
        .into_game_env()
    }

    pub fn navigation(&self) -> &GridNavigator {
        &self.navigation
    }

    pub fn spells(&self) -> &dyn SpellOracle {
        self.spells.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use unit_content::ScenarioLoader;

    use super::*;

    #[test]
    fn wall_outside_map_is_rejected() {
        let scenario = ScenarioLoader::parse("(dimensions: (4, 4), walls: [(9, 9)])").unwrap();
        let result =
            OracleManager::from_scenario(&scenario, vec![], FactionRules::new(), GameConfig::default());
        assert!(matches!(result, Err(OracleError::CellOutOfBounds(_))));
    }
}
