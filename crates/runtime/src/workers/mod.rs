//! Background workers driven by the runtime.
//!
//! - [`SimulationWorker`]: owns the world and scheduler, evaluates ticks
//! - [`IntentApplier`]: plays queued intents back into the world

mod intents;
mod simulation;

pub use intents::IntentApplier;
pub use simulation::{Command, SimulationWorker};
