//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{NotificationEvent, StateEvent, TickEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Pickup messages and replication sync requests
    Notification,
    /// State transitions and applied intents (hits, casts, deaths)
    State,
    /// Tick completion
    Tick,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Notification(NotificationEvent),
    State(StateEvent),
    Tick(TickEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Notification(_) => Topic::Notification,
            Event::State(_) => Topic::State,
            Event::Tick(_) => Topic::Tick,
        }
    }
}

/// Topic-based event bus
///
/// Every topic has its own broadcast channel, created up front. Publishing is
/// best-effort: events sent while nobody listens are dropped.
#[derive(Clone)]
pub struct EventBus {
    notification: broadcast::Sender<Event>,
    state: broadcast::Sender<Event>,
    tick: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notification: broadcast::channel(capacity).0,
            state: broadcast::channel(capacity).0,
            tick: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Notification => &self.notification,
            Topic::State => &self.state,
            Topic::Tick => &self.tick,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channel(topic).subscribe()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channel(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
