//! Simulation worker that owns the authoritative [`unit_core::World`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), evaluates
//! unit states through the [`Scheduler`], plays the queued intents and
//! publishes the outcome on the [`EventBus`].

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use unit_core::{
    EntityId, EvalContext, Notification, Role, Scheduler, StateKind, StateTransition, Tick,
    UnitOrder, World,
};

use super::IntentApplier;
use crate::api::Result;
use crate::events::{Event, EventBus, NotificationEvent, StateEvent, TickEvent};
use crate::oracle::OracleManager;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Replace a unit's state with one carrying out `order`.
    Order {
        unit: EntityId,
        order: UnitOrder,
        reply: oneshot::Sender<Result<StateTransition>>,
    },
    /// Evaluate `ticks` ticks and reply with the new clock.
    Step {
        ticks: u32,
        reply: oneshot::Sender<Tick>,
    },
    /// Query the current world (read-only).
    QueryWorld { reply: oneshot::Sender<World> },
    /// Query the state kind a unit is in.
    QueryState {
        unit: EntityId,
        reply: oneshot::Sender<StateKind>,
    },
    /// Stop the worker even if other handles are still alive.
    Shutdown,
}

/// Background task that processes simulation commands.
pub struct SimulationWorker {
    world: World,
    scheduler: Scheduler,
    oracles: OracleManager,
    role: Role,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    pub fn new(
        world: World,
        oracles: OracleManager,
        role: Role,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            world,
            scheduler: Scheduler::new(),
            oracles,
            role,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends on [`Command::Shutdown`] or once every command
    /// sender is dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if matches!(cmd, Command::Shutdown) {
                break;
            }
            self.handle_command(cmd);
        }
        debug!(tick = %self.world.tick(), "simulation worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Shutdown => {}
            Command::Order { unit, order, reply } => {
                let _ = reply.send(self.order(unit, order));
            }
            Command::Step { ticks, reply } => {
                for _ in 0..ticks {
                    self.step();
                }
                let _ = reply.send(self.world.tick());
            }
            Command::QueryWorld { reply } => {
                let _ = reply.send(self.world.clone());
            }
            Command::QueryState { unit, reply } => {
                let _ = reply.send(self.scheduler.state_of(unit));
            }
        }
    }

    fn order(&mut self, unit: EntityId, order: UnitOrder) -> Result<StateTransition> {
        let transition = self
            .scheduler
            .assign(&self.world, unit, &order, self.oracles.spells())
            .inspect_err(|error| warn!(%unit, ?order, %error, "order rejected"))?;

        debug!(%unit, ?order, from = %transition.from, to = %transition.to, "order accepted");
        self.event_bus
            .publish(Event::State(StateEvent::Transition(transition)));
        Ok(transition)
    }

    /// Evaluates one tick: states, then intents, then the clock.
    fn step(&mut self) {
        let tick = self.world.tick();
        let mut notifications: Vec<Notification> = Vec::new();

        let transitions = {
            let env = self.oracles.as_game_env();
            let mut ctx = EvalContext::new(env, &mut notifications, self.role);
            self.scheduler.evaluate_tick(&mut self.world, &mut ctx)
        };

        for notification in notifications {
            self.event_bus
                .publish(Event::Notification(NotificationEvent { tick, notification }));
        }
        for transition in transitions {
            debug!(unit = %transition.unit, from = %transition.from, %tick, "state finished");
            self.event_bus
                .publish(Event::State(StateEvent::Transition(transition)));
        }

        let applied = IntentApplier::new(self.oracles.navigation()).apply(&mut self.world, tick);
        for event in applied {
            self.event_bus.publish(Event::State(event));
        }

        let digest = hex::encode(self.world.digest());
        self.world.advance_tick();
        if tick.0 % u64::from(self.oracles.config().ticks_per_second.max(1)) == 0 {
            info!(%tick, %digest, "tick");
        }
        self.event_bus.publish(Event::Tick(TickEvent { tick, digest }));
    }
}
