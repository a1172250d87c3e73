//! Observer bookkeeping owned by the simulation worker.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use rpg_core::{ObserverId, Snapshot};

/// Attached observers in registration order.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverId, mpsc::Sender<Arc<Snapshot>>)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sender: mpsc::Sender<Arc<Snapshot>>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, sender));
        debug!(target: "runtime::registry", observer = %id, attached = self.observers.len(), "observer registered");
        id
    }

    /// Drops the observer's sender, closing its stream. False if unknown.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(known, _)| *known != id);
        let removed = self.observers.len() != before;
        if removed {
            debug!(target: "runtime::registry", observer = %id, attached = self.observers.len(), "observer removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Sends `snapshot` to every observer, waiting on each in turn.
    ///
    /// Observers whose receiver has been dropped are removed.
    pub async fn broadcast(&mut self, snapshot: Arc<Snapshot>) {
        let mut gone = Vec::new();
        for (id, sender) in &self.observers {
            if sender.send(Arc::clone(&snapshot)).await.is_err() {
                gone.push(*id);
            }
        }

        for id in gone {
            warn!(target: "runtime::registry", observer = %id, "observer receiver dropped; detaching");
            self.remove(id);
        }
    }

    /// Sends `snapshot` to one observer only.
    pub async fn send_to(&mut self, id: ObserverId, snapshot: Arc<Snapshot>) {
        let Some((_, sender)) = self.observers.iter().find(|(known, _)| *known == id) else {
            return;
        };
        if sender.send(snapshot).await.is_err() {
            warn!(target: "runtime::registry", observer = %id, "observer receiver dropped; detaching");
            self.remove(id);
        }
    }
}
