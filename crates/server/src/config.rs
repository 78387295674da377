//! Server configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use unit_core::Role;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
    pub ticks: u64,
    pub role: Role,
    /// Run ticks back to back instead of at the configured tick rate.
    pub unpaced: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: "skirmish".to_owned(),
            ticks: 200,
            role: Role::Authoritative,
            unpaced: false,
        }
    }
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_DATA_DIR` - Content directory (default: `data`)
    /// - `SIM_SCENARIO` - Scenario name under `scenarios/` (default: `skirmish`)
    /// - `SIM_TICKS` - Number of ticks to run (default: 200)
    /// - `SIM_ROLE` - `authoritative` or `observer` (default: authoritative)
    /// - `SIM_UNPACED` - Skip tick pacing (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SIM_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(name) = env::var("SIM_SCENARIO") {
            config.scenario = name;
        }
        if let Some(ticks) = read_env::<u64>("SIM_TICKS") {
            config.ticks = ticks;
        }
        if let Ok(role) = env::var("SIM_ROLE") {
            config.role = parse_role(&role).unwrap_or_else(|| {
                tracing::warn!(%role, "unknown SIM_ROLE, staying authoritative");
                Role::Authoritative
            });
        }
        if let Some(unpaced) = read_env::<bool>("SIM_UNPACED") {
            config.unpaced = unpaced;
        }

        config
    }
}

fn parse_role(value: &str) -> Option<Role> {
    match value.trim().to_ascii_lowercase().as_str() {
        "authoritative" | "server" => Some(Role::Authoritative),
        "observer" | "client" => Some(Role::Observer),
        _ => None,
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_case_insensitively() {
        assert_eq!(parse_role("Observer"), Some(Role::Observer));
        assert_eq!(parse_role(" server "), Some(Role::Authoritative));
        assert_eq!(parse_role("spectator"), None);
    }
}
