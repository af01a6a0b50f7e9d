//! Snapshot fan-out to consumers
//!
//! Every applied command ends with a notification carrying the complete
//! `PlaybackSnapshot`. Consumers register either:
//! - a callback, invoked synchronously in registration order
//! - a channel, receiving an owned snapshot per notification
//!
//! Channels whose receiver has been dropped are pruned on the next
//! notification.

use crate::types::PlaybackSnapshot;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fmt;
use tracing::debug;

/// Callback invoked with the new snapshot after each command
pub type SnapshotCallback = Box<dyn FnMut(&PlaybackSnapshot)>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Subscriber {
    Callback(SnapshotCallback),
    Channel(Sender<PlaybackSnapshot>),
}

/// Registered consumers of the playback state
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

impl Subscribers {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback consumer
    pub fn add_callback(&mut self, callback: SnapshotCallback) -> SubscriptionId {
        let id = self.allocate_id();
        self.entries.push((id, Subscriber::Callback(callback)));
        id
    }

    /// Register a channel consumer and return its receiving end
    pub fn add_channel(&mut self) -> Receiver<PlaybackSnapshot> {
        let (tx, rx) = unbounded();
        let id = self.allocate_id();
        self.entries.push((id, Subscriber::Channel(tx)));
        rx
    }

    /// Remove a consumer
    ///
    /// Returns false if the id was unknown (already removed or pruned).
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered consumers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no consumer is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver a snapshot to every consumer
    pub fn notify(&mut self, snapshot: &PlaybackSnapshot) {
        self.entries.retain_mut(|(id, subscriber)| match subscriber {
            Subscriber::Callback(callback) => {
                callback(snapshot);
                true
            }
            Subscriber::Channel(tx) => {
                if tx.send(snapshot.clone()).is_ok() {
                    true
                } else {
                    debug!(subscription = id.0, "Dropping disconnected snapshot channel");
                    false
                }
            }
        });
    }

    fn allocate_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for Subscribers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
