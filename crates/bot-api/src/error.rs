//! Errors reported by the bot framework.
use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrameworkError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameworkError {
    /// An in-flight path was aborted. Expected whenever a new goal replaces
    /// the current one.
    #[error("pathfinding interrupted: {0}")]
    PathInterrupted(PathInterruption),

    #[error("bot is not connected")]
    NotConnected,

    #[error("item {0:?} is not in the inventory")]
    ItemMissing(String),

    #[error("{action} failed: {reason}")]
    ActionFailed {
        action: &'static str,
        reason: String,
    },

    #[error("{action} timed out after {millis}ms")]
    Timeout { action: &'static str, millis: u64 },
}

impl FrameworkError {
    pub fn action(action: &'static str, reason: impl Into<String>) -> Self {
        Self::ActionFailed {
            action,
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_path_interruption(&self) -> bool {
        matches!(self, FrameworkError::PathInterrupted(_))
    }
}

/// Why the pathfinder dropped its current path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathInterruption {
    /// A new goal was set while the previous one was still being pursued.
    GoalChanged,
    /// Pathing was stopped explicitly.
    PathStopped,
}

impl fmt::Display for PathInterruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PathInterruption::GoalChanged => "GoalChanged",
            PathInterruption::PathStopped => "PathStopped",
        };
        write!(f, "{}", label)
    }
}
