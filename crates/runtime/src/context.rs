//! Blackboard shared by the strategies during one pass.
use std::sync::Arc;

use bot_api::{BotFramework, Vec3};

use crate::config::{BotConfig, Thresholds};
use crate::error::Result;
use crate::snapshot::Snapshot;
use crate::throttle::MovementThrottle;

/// Context for one strategy pass.
///
/// Holds the fresh [`Snapshot`], the framework handle and the movement
/// throttle. The throttle is copied in by the loop before the pass and copied
/// back out afterwards so the remembered target survives across iterations.
pub struct BrainContext {
    pub bot: Arc<dyn BotFramework>,
    pub config: Arc<BotConfig>,
    pub snapshot: Snapshot,
    pub movement: MovementThrottle,
}

impl BrainContext {
    pub fn new(
        bot: Arc<dyn BotFramework>,
        config: Arc<BotConfig>,
        snapshot: Snapshot,
        movement: MovementThrottle,
    ) -> Self {
        Self {
            bot,
            config,
            snapshot,
            movement,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.config.thresholds
    }

    /// Throttled movement toward `target`.
    pub async fn move_toward(&mut self, target: Vec3, reach: f64) -> Result<bool> {
        self.movement
            .move_toward(self.bot.as_ref(), target, reach)
            .await
    }
}
