//! Unified error type surfaced by the brain.
//!
//! Wraps framework failures and loop coordination problems so the behavior
//! loop can classify them in one place.
use bot_api::FrameworkError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Framework(#[from] FrameworkError),

    #[error("match info not available yet")]
    MatchInfoUnavailable,

    #[error("behavior loop task join failed")]
    LoopJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// True for errors raised because a new pathfinding goal replaced an
    /// in-flight one. These are expected and never logged.
    pub fn is_path_interruption(&self) -> bool {
        matches!(self, RuntimeError::Framework(err) if err.is_path_interruption())
    }
}
