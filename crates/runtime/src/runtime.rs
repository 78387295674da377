//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the simulation.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use unit_content::Scenario;
use unit_core::{GameConfig, Role, Spell, Tick, World};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::oracle::{FactionRules, OracleManager};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Whether this process owns the world (server) or predicts it (client).
    pub role: Role,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            role: Role::Authoritative,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the tick simulation
///
/// Runtime owns the worker task; [`RuntimeHandle`] provides a cloneable
/// façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    tick_interval: Duration,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Evaluate a single tick immediately.
    pub async fn step(&self) -> Result<Tick> {
        self.handle.step(1).await
    }

    /// Run `ticks` ticks paced at the configured tick rate.
    pub async fn run_ticks(&self, ticks: u64) -> Result<Tick> {
        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        let mut now = Tick::ZERO;
        for _ in 0..ticks {
            interval.tick().await;
            now = self.step().await?;
        }
        Ok(now)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Stops the worker even while cloned handles are still alive; their
    /// later requests fail with a channel-closed [`RuntimeError`].
    pub async fn shutdown(self) -> Result<()> {
        // Already stopped if the channel is closed; joining reports why.
        let _ = self.handle.request_shutdown().await;
        drop(self.handle);
        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    world: Option<World>,
    oracles: Option<OracleManager>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            world: None,
            oracles: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.config.role = role;
        self
    }

    /// Provide the initial world
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Builds both world and oracles from a scenario.
    ///
    /// Uses the game config currently set on the builder.
    pub fn scenario(
        mut self,
        scenario: &Scenario,
        spells: Vec<Spell>,
        rules: FactionRules,
    ) -> Result<Self> {
        let world = scenario
            .build_world()
            .map_err(|error| RuntimeError::Scenario(error.to_string()))?;
        let oracles = OracleManager::from_scenario(
            scenario,
            spells,
            rules,
            self.config.game_config.clone(),
        )?;
        self.world = Some(world);
        self.oracles = Some(oracles);
        Ok(self)
    }

    /// Build the runtime and spawn the simulation worker
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let world = self.world.ok_or(RuntimeError::MissingWorld)?;

        let navigation = oracles.navigation().dimensions();
        if world.dimensions() != navigation {
            return Err(RuntimeError::DimensionMismatch {
                world: world.dimensions(),
                navigation,
            });
        }

        let ticks_per_second = oracles.config().ticks_per_second.max(1);
        let tick_interval = Duration::from_secs(1) / ticks_per_second;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        tracing::info!(
            units = world.units().count(),
            role = ?self.config.role,
            ticks_per_second,
            "runtime starting"
        );

        let sim_worker =
            SimulationWorker::new(world, oracles, self.config.role, command_rx, event_bus);
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            tick_interval,
            sim_worker_handle,
        })
    }
}
