//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and from turn resolution so
//! clients can bubble them up with consistent context.
use rpg_core::{ErrorSeverity, GameError, InvariantViolation};
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a world before building")]
    MissingWorld,

    #[error("turn {turn} broke a world invariant")]
    Invariant {
        turn: u64,
        #[source]
        source: InvariantViolation,
    },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_) => {
                ErrorSeverity::Recoverable
            }
            RuntimeError::MissingWorld => ErrorSeverity::Validation,
            RuntimeError::WorkerJoin(_) => ErrorSeverity::Fatal,
            RuntimeError::Invariant { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            RuntimeError::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            RuntimeError::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            RuntimeError::MissingWorld => "RUNTIME_MISSING_WORLD",
            RuntimeError::Invariant { source, .. } => source.error_code(),
        }
    }
}
