//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! ordering units, stepping the simulation or streaming events from specific
//! topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use unit_core::{EntityId, StateKind, StateTransition, Tick, UnitOrder, World};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Replace a unit's current state with one carrying out `order`.
    pub async fn order(&self, unit: EntityId, order: UnitOrder) -> Result<StateTransition> {
        self.request(|reply| Command::Order { unit, order, reply })
            .await?
    }

    /// Evaluate `ticks` ticks back to back and return the new clock.
    pub async fn step(&self, ticks: u32) -> Result<Tick> {
        self.request(|reply| Command::Step { ticks, reply }).await
    }

    /// Current state kind of a unit (idle for unknown units).
    pub async fn state_of(&self, unit: EntityId) -> Result<StateKind> {
        self.request(|reply| Command::QueryState { unit, reply })
            .await
    }

    /// Query the current world (read-only snapshot)
    pub async fn query_world(&self) -> Result<World> {
        self.request(|reply| Command::QueryWorld { reply }).await
    }

    /// Asks the worker to stop. Commands already queued ahead of it are
    /// still processed.
    pub(crate) async fn request_shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Notification` - Pickup messages and sync requests
    /// - `Topic::State` - State transitions, hits, casts and deaths
    /// - `Topic::Tick` - Tick completion with world digest
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
