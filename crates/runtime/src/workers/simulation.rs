//! Simulation worker that owns the authoritative [`World`].
//!
//! Drains the shared input queue one command at a time, resolves each input
//! through [`rpg_core::GameEngine`], and publishes the resulting snapshot to
//! every attached observer before taking the next command.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use rpg_core::{GameError, GameStatus, Input, ObserverId, Snapshot, World};

use super::registry::ObserverRegistry;
use crate::api::{Result, RuntimeError};
use crate::runtime::RunOutcome;

/// Commands accepted by the simulation worker.
#[derive(Debug)]
pub enum Command {
    /// One player input, processed in arrival order.
    Input(Input),
    /// Register a new observer. The current snapshot is delivered before the
    /// id is sent back.
    Attach {
        snapshots: mpsc::Sender<Arc<Snapshot>>,
        reply: oneshot::Sender<ObserverId>,
    },
}

/// Background task that resolves turns.
pub struct SimulationWorker {
    world: World,
    command_rx: mpsc::Receiver<Command>,
    registry: ObserverRegistry,
}

impl SimulationWorker {
    pub fn new(
        world: World,
        command_rx: mpsc::Receiver<Command>,
        registry: ObserverRegistry,
    ) -> Self {
        info!(
            target: "runtime::worker",
            level = world.current_level_name(),
            observers = registry.len(),
            "simulation worker initialised"
        );

        Self {
            world,
            command_rx,
            registry,
        }
    }

    /// Main worker loop. Returns once the run is over.
    pub async fn run(mut self) -> Result<RunOutcome> {
        let initial = self.current_snapshot(self.status());
        self.registry.broadcast(initial).await;

        while let Some(command) = self.command_rx.recv().await {
            match command {
                Command::Attach { snapshots, reply } => self.attach(snapshots, reply).await,
                Command::Input(input) => {
                    if let Some(outcome) = self.handle_input(input).await? {
                        info!(
                            target: "runtime::worker",
                            turn = self.world.turn(),
                            outcome = %outcome,
                            "simulation worker stopping"
                        );
                        return Ok(outcome);
                    }
                }
            }
        }

        info!(target: "runtime::worker", turn = self.world.turn(), "input queue closed");
        Ok(RunOutcome::InputClosed)
    }

    async fn attach(
        &mut self,
        snapshots: mpsc::Sender<Arc<Snapshot>>,
        reply: oneshot::Sender<ObserverId>,
    ) {
        let id = self.registry.register(snapshots);
        let snapshot = self.current_snapshot(self.status());
        self.registry.send_to(id, snapshot).await;

        if reply.send(id).is_err() {
            debug!(target: "runtime::worker", observer = %id, "attach reply channel closed (caller dropped)");
            self.registry.remove(id);
        }
    }

    /// Resolves one input. `Some` ends the run.
    async fn handle_input(&mut self, input: Input) -> Result<Option<RunOutcome>> {
        if input.is_quit() {
            return Ok(Some(RunOutcome::Quit));
        }

        let attached = self.registry.len();
        if let Input::CloseWindow(id) = input {
            self.registry.remove(id);
        }

        let outcome = self.world.resolve(&input).map_err(|source| {
            error!(
                target: "runtime::worker",
                turn = self.world.turn(),
                input = ?input,
                code = source.error_code(),
                severity = source.severity().as_str(),
                error = %source,
                "turn resolution broke a world invariant"
            );
            RuntimeError::Invariant {
                turn: self.world.turn(),
                source,
            }
        })?;

        debug!(
            target: "runtime::worker",
            turn = self.world.turn(),
            input = ?input,
            action = ?outcome.action,
            monsters = outcome.monsters_updated,
            "turn resolved"
        );

        let snapshot = self.current_snapshot(outcome.status);
        self.registry.broadcast(snapshot).await;

        if outcome.status.is_terminal() {
            return Ok(Some(RunOutcome::PlayerDied));
        }
        if attached > 0 && self.registry.is_empty() {
            return Ok(Some(RunOutcome::ObserversDetached));
        }
        Ok(None)
    }

    fn status(&self) -> GameStatus {
        if self.world.player().character.is_alive() {
            GameStatus::Running
        } else {
            GameStatus::PlayerDead
        }
    }

    fn current_snapshot(&self, status: GameStatus) -> Arc<Snapshot> {
        Arc::new(self.world.snapshot(status))
    }
}
