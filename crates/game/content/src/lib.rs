//! Data-driven content definitions and loaders.
//!
//! This crate reads the static data a simulation starts from:
//! - Game configuration (TOML)
//! - Spell templates (RON)
//! - Scenarios: map size, walls, units, ground loot and scripted orders (RON)
//!
//! Content is consumed by the runtime when it builds its oracles and the
//! initial world. Loaders use unit-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, SackSpec, Scenario, ScenarioLoader, ScriptedOrder, SpellLoader,
    UnitSpec,
};
