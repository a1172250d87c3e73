use std::sync::Arc;

use tokio::sync::mpsc;

use rpg_core::{Input, ObserverId, Snapshot};

use super::errors::Result;
use super::handle::RuntimeHandle;

/// One attached front-end.
///
/// Receives a snapshot after every resolved turn, in order, and can feed
/// inputs back into the shared queue.
#[derive(Debug)]
pub struct Observer {
    id: ObserverId,
    snapshots: mpsc::Receiver<Arc<Snapshot>>,
    handle: RuntimeHandle,
}

impl Observer {
    pub(crate) fn new(
        id: ObserverId,
        snapshots: mpsc::Receiver<Arc<Snapshot>>,
        handle: RuntimeHandle,
    ) -> Self {
        Self {
            id,
            snapshots,
            handle,
        }
    }

    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Next published snapshot. `None` once this observer has been detached
    /// or the worker has stopped.
    pub async fn recv(&mut self) -> Option<Arc<Snapshot>> {
        self.snapshots.recv().await
    }

    /// Snapshot already waiting in the channel, if any.
    pub fn try_recv(&mut self) -> Option<Arc<Snapshot>> {
        self.snapshots.try_recv().ok()
    }

    pub async fn send(&self, input: Input) -> Result<()> {
        self.handle.send_input(input).await
    }

    /// Detach this observer. Snapshots already queued can still be received.
    pub async fn close(&self) -> Result<()> {
        self.handle.close_window(self.id).await
    }

    pub fn handle(&self) -> &RuntimeHandle {
        &self.handle
    }
}
