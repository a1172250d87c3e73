//! Runtime orchestration for the turn-based simulation.
//!
//! One simulation worker task owns the authoritative [`rpg_core::World`]. Every
//! front-end talks to it through a single bounded input queue and receives an
//! [`Arc`](std::sync::Arc)-wrapped [`rpg_core::Snapshot`] after each resolved
//! turn on its own channel.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod runtime;

mod workers;

pub use api::{Observer, Result, RuntimeError, RuntimeHandle};
pub use runtime::{RunOutcome, Runtime, RuntimeBuilder, RuntimeConfig};
