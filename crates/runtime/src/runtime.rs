//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up the input queue and the
//! per-observer snapshot channels, and exposes a builder-based API for
//! front-ends to drive the game.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use rpg_core::{GameConfig, World};

use crate::api::{Observer, Result, RuntimeError, RuntimeHandle};
use crate::workers::{ObserverRegistry, SimulationWorker};

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Capacity of the shared input queue.
    pub input_buffer_size: usize,
    /// Capacity of each observer's snapshot channel.
    pub snapshot_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            input_buffer_size: 32,
            snapshot_buffer_size: 16,
        }
    }
}

/// Why the simulation worker stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RunOutcome {
    /// A `QuitGame` input was processed.
    Quit,
    /// The last attached observer closed its window.
    ObserversDetached,
    /// The player's hitpoints reached zero.
    PlayerDied,
    /// Every handle was dropped.
    InputClosed,
}

/// Running game: the worker task plus the observers created at build time.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    observers: Vec<Observer>,
    worker: JoinHandle<Result<RunOutcome>>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Cloneable handle for sending inputs and attaching more observers.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Observers registered by [`RuntimeBuilder::observers`]. Empty after the
    /// first call.
    pub fn take_observers(&mut self) -> Vec<Observer> {
        std::mem::take(&mut self.observers)
    }

    /// Waits for the worker to stop.
    ///
    /// Drops this runtime's own handle first, so the run also ends once every
    /// other handle and observer is gone.
    pub async fn join(self) -> Result<RunOutcome> {
        let Runtime {
            handle,
            observers,
            worker,
        } = self;
        drop(handle);
        drop(observers);

        worker.await.map_err(RuntimeError::WorkerJoin)?
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    world: Option<World>,
    observers: usize,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            world: None,
            observers: 1,
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Number of observers attached before the first snapshot is published.
    pub fn observers(mut self, count: usize) -> Self {
        self.observers = count;
        self
    }

    /// Spawns the simulation worker.
    ///
    /// Every pre-registered observer receives the initial snapshot as its
    /// first message. Must be called from within a tokio runtime.
    pub fn build(self) -> Result<Runtime> {
        let world = self.world.ok_or(RuntimeError::MissingWorld)?;

        let (command_tx, command_rx) = mpsc::channel(self.config.input_buffer_size.max(1));
        let handle = RuntimeHandle::new(command_tx, self.config.snapshot_buffer_size);

        let mut registry = ObserverRegistry::new();
        let observers = (0..self.observers)
            .map(|_| {
                let (snapshot_tx, snapshot_rx) = mpsc::channel(handle.snapshot_buffer_size());
                let id = registry.register(snapshot_tx);
                Observer::new(id, snapshot_rx, handle.clone())
            })
            .collect();

        let worker = SimulationWorker::new(world, command_rx, registry);
        let worker = tokio::spawn(worker.run());

        Ok(Runtime {
            handle,
            observers,
            worker,
        })
    }
}
