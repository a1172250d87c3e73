//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker resolves turns and publishes snapshots through the
//! observer registry it owns.

mod registry;
mod simulation;

pub use registry::ObserverRegistry;
pub use simulation::{Command, SimulationWorker};
