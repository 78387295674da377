//! Fire-and-forget notifications emitted by unit states.
//!
//! States report item pickups and request replication syncs through a
//! [`NotificationSink`]. Sync requests are only emitted when the evaluating
//! process is [`Role::Authoritative`]; the role is passed explicitly into
//! every evaluation.

use crate::state::{EntityId, ItemHandle};

/// Which side of the network is evaluating unit states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    /// The server: owns the world and replicates it.
    #[default]
    Authoritative,
    /// A client predicting locally.
    Observer,
}

impl Role {
    pub const fn is_authoritative(self) -> bool {
        matches!(self, Role::Authoritative)
    }
}

/// What was picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickupKind {
    Item(ItemHandle),
    Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    /// "You have picked up ..." message for the unit's owner.
    ItemPickup {
        unit: EntityId,
        kind: PickupKind,
        amount: u64,
    },
    /// Full inventory resync for the unit.
    PackSync { unit: EntityId },
    /// Short stats (health/mana) resync for the unit.
    StatsSync { unit: EntityId },
}

impl Notification {
    pub fn unit(&self) -> EntityId {
        match *self {
            Notification::ItemPickup { unit, .. }
            | Notification::PackSync { unit }
            | Notification::StatsSync { unit } => unit,
        }
    }
}

/// Receiver of notifications; never fails and never blocks.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
