//! Async runtime hosting the unit behavior simulation.
//!
//! A single [`SimulationWorker`](workers::SimulationWorker) owns the world and
//! the per-unit state scheduler. Clients talk to it through a cloneable
//! [`RuntimeHandle`]: they issue [`UnitOrder`](unit_core::UnitOrder)s, step
//! the clock and subscribe to [`Topic`]s on the [`EventBus`].
//!
//! Modules:
//! - [`api`]: handle and error types
//! - [`events`]: topic-based event bus
//! - [`oracle`]: grid navigation, faction rules and the spell book
//! - [`workers`]: the simulation loop and intent playback
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;
pub mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, NotificationEvent, StateEvent, TickEvent, Topic};
pub use oracle::{FactionRules, GridNavigator, OracleManager, SpellBook};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
