//! Content factory for loading everything a simulation needs from one directory.

use std::path::{Path, PathBuf};

use unit_core::{GameConfig, Spell};

use crate::loaders::{ConfigLoader, LoadResult, Scenario, ScenarioLoader, SpellLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── spells.ron
/// └── scenarios/
///     └── skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`, or defaults if the file
    /// does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load spell templates from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<Vec<Spell>> {
        let path = self.data_dir.join("spells.ron");
        SpellLoader::load(&path)
    }

    /// Load `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{name}.ron"));
        ScenarioLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use unit_core::{EntityId, SpellId};

    use super::*;

    #[test]
    fn loads_content_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "ticks_per_second = 30\n").unwrap();
        fs::write(
            dir.path().join("spells.ron"),
            "(spells: [(id: SpellId(1), range: 5.0, mana_cost: 8)])",
        )
        .unwrap();
        fs::create_dir(dir.path().join("scenarios")).unwrap();
        fs::write(
            dir.path().join("scenarios/duel.ron"),
            "(dimensions: (16, 16), units: [(id: 4, position: (2, 2), health: 50, damage: (1, 3))])",
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().ticks_per_second, 30);
        assert_eq!(factory.load_spells().unwrap()[0].id, SpellId(1));

        let world = factory.load_scenario("duel").unwrap().build_world().unwrap();
        assert!(world.unit(EntityId(4)).is_some());
    }

    #[test]
    fn bundled_data_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../../data"));
        factory.load_config().unwrap();
        assert!(!factory.load_spells().unwrap().is_empty());

        let scenario = factory.load_scenario("skirmish").unwrap();
        scenario.build_world().unwrap();
        assert!(!scenario.timeline().is_empty());
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_scenario_names_the_path() {
        let dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(dir.path());
        let err = factory.load_scenario("nowhere").unwrap_err();
        assert!(err.to_string().contains("nowhere.ron"));
    }
}
