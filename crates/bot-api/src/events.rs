//! Lifecycle events delivered by the framework.
use serde::{Deserialize, Serialize};

use crate::MatchInfo;

/// Events the brain subscribes to.
///
/// Every variant carries fixed fields; the framework adapter is responsible
/// for translating its own payloads into these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotEvent {
    MatchStarted {
        info: Option<MatchInfo>,
    },
    MatchEnded {
        info: Option<MatchInfo>,
    },
    /// Any player left the server; the brain checks whether it was itself.
    PlayerLeft {
        username: String,
    },
    Disconnected {
        reason: Option<String>,
    },
    Kicked {
        reason: String,
    },
    Death,
    Spawn,
}

impl BotEvent {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            BotEvent::MatchStarted { .. } => "match_started",
            BotEvent::MatchEnded { .. } => "match_ended",
            BotEvent::PlayerLeft { .. } => "player_left",
            BotEvent::Disconnected { .. } => "disconnected",
            BotEvent::Kicked { .. } => "kicked",
            BotEvent::Death => "death",
            BotEvent::Spawn => "spawn",
        }
    }
}
