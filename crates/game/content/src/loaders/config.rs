//! Game configuration loader.

use std::path::Path;

use unit_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Missing keys fall back to [`GameConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.ticks_per_second == 0 {
            anyhow::bail!("ticks_per_second must be positive");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_core::DamageRoll;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            ticks_per_second = 10
            damage_roll = "inclusive"
            "#,
        )
        .unwrap();

        assert_eq!(config.ticks_per_second, 10);
        assert_eq!(config.damage_roll, DamageRoll::Inclusive);
        assert_eq!(
            config.path_backoff_seconds,
            GameConfig::DEFAULT_PATH_BACKOFF_SECONDS
        );
        assert_eq!(config.path_backoff_ticks(), 50);
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let err = ConfigLoader::parse("ticks_per_second = 0").unwrap_err();
        assert!(err.to_string().contains("ticks_per_second"));
    }

    #[test]
    fn malformed_toml_reports_context() {
        let err = ConfigLoader::parse("ticks_per_second = [").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config TOML"));
    }
}
