//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing: inputs go into the shared queue
//! and [`RuntimeHandle::attach`] registers a new observer.
use tokio::sync::{mpsc, oneshot};

use rpg_core::{Input, ObserverId};

use super::errors::{Result, RuntimeError};
use super::observer::Observer;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone, Debug)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    snapshot_buffer_size: usize,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, snapshot_buffer_size: usize) -> Self {
        Self {
            command_tx,
            snapshot_buffer_size: snapshot_buffer_size.max(1),
        }
    }

    /// Queue one input for the simulation worker.
    ///
    /// Waits while the queue is full.
    pub async fn send_input(&self, input: Input) -> Result<()> {
        self.command_tx
            .send(Command::Input(input))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Ask the worker to stop after the inputs already queued ahead of this one.
    pub async fn quit(&self) -> Result<()> {
        self.send_input(Input::QuitGame).await
    }

    /// Detach the observer with `id`; its snapshot stream ends.
    pub async fn close_window(&self, id: ObserverId) -> Result<()> {
        self.send_input(Input::CloseWindow(id)).await
    }

    /// Register a new observer.
    ///
    /// The returned observer's first snapshot is the state at the moment the
    /// worker processed the attach request.
    pub async fn attach(&self) -> Result<Observer> {
        let (snapshot_tx, snapshot_rx) = mpsc::channel(self.snapshot_buffer_size);
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Attach {
                snapshots: snapshot_tx,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        let id = reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?;
        Ok(Observer::new(id, snapshot_rx, self.clone()))
    }

    pub(crate) fn snapshot_buffer_size(&self) -> usize {
        self.snapshot_buffer_size
    }
}
