//! Behavior loop that drives one bot for the lifetime of a match.
//!
//! Each iteration waits out the tick throttle, captures a [`Snapshot`], equips
//! armor and runs the strategy chain. Errors never end the loop; only the
//! match ending or the [`LoopToken`] going stale does.

use std::sync::Arc;

use bot_api::BotFramework;
use tracing::{debug, error, info};

use crate::cancellation::{LoopToken, MatchState};
use crate::config::BotConfig;
use crate::context::BrainContext;
use crate::error::{Result, RuntimeError};
use crate::snapshot::Snapshot;
use crate::strategy::{StrategyChain, default_chain};
use crate::throttle::{MovementThrottle, TickThrottle};

/// Why a loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    MatchEnded,
    /// The generation advanced (disconnect, death, kick, leave) or the
    /// controller shut down.
    Cancelled,
}

/// Summary returned when a loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopExit {
    pub generation: u64,
    pub iterations: u64,
    pub reason: ExitReason,
}

/// Single-flight decision loop.
pub struct BehaviorLoop {
    bot: Arc<dyn BotFramework>,
    config: Arc<BotConfig>,
    chain: StrategyChain,
    match_state: MatchState,
    throttle: TickThrottle,
    movement: MovementThrottle,
}

impl BehaviorLoop {
    /// Creates a loop running the default strategy chain.
    pub fn new(bot: Arc<dyn BotFramework>, config: Arc<BotConfig>, match_state: MatchState) -> Self {
        let throttle = TickThrottle::new(config.timing.tick);
        let movement = MovementThrottle::new(config.movement, config.timing.approach_timeout);
        Self {
            bot,
            config,
            chain: default_chain(),
            match_state,
            throttle,
            movement,
        }
    }

    /// Replaces the strategy chain.
    pub fn with_chain(mut self, chain: StrategyChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn movement(&self) -> &MovementThrottle {
        &self.movement
    }

    fn termination(&self, token: &LoopToken) -> Option<ExitReason> {
        if token.is_stale() {
            Some(ExitReason::Cancelled)
        } else if !self.match_state.in_progress() {
            Some(ExitReason::MatchEnded)
        } else {
            None
        }
    }

    /// Runs until the match ends or the token goes stale.
    pub async fn run(mut self, mut token: LoopToken) -> LoopExit {
        let generation = token.generation();
        info!("Starting behavior loop for generation {}", generation);

        let mut iterations = 0u64;
        let reason = loop {
            if let Some(reason) = self.termination(&token) {
                break reason;
            }

            // Always throttle first so the loop never outpaces the server.
            self.throttle.wait().await;
            if let Some(reason) = self.termination(&token) {
                break reason;
            }
            iterations += 1;

            match self.step(&token).await {
                Ok(Some(strategy)) => debug!("[Loop] {} acted", strategy),
                Ok(None) => debug!("[Loop] No strategy acted"),
                Err(RuntimeError::MatchInfoUnavailable) => {
                    info!("Match info not available yet, waiting");
                }
                // A new goal replaced an in-flight path. That is how retargeting works.
                Err(err) if err.is_path_interruption() => {}
                Err(err) => {
                    error!(
                        error = ?err,
                        "An error occurred while running this turn of logic: {}", err
                    );
                    // The failed command may never have reached the pathfinder.
                    self.movement.reset();
                    // Avoid a tight loop on repeated errors, but stop waiting
                    // as soon as this loop is invalidated.
                    tokio::select! {
                        _ = tokio::time::sleep(self.config.timing.error_backoff) => {}
                        _ = token.stale() => {}
                    }
                }
            }
        };

        info!(
            "Ended loop that ran for generation {} ({:?} after {} iterations)",
            generation, reason, iterations
        );
        LoopExit {
            generation,
            iterations,
            reason,
        }
    }

    /// One decision pass. Returns the name of the strategy that acted.
    ///
    /// The token is checked again after the armor call, since a death or
    /// disconnect may have been handled while it was awaiting.
    pub async fn step(&mut self, token: &LoopToken) -> Result<Option<&'static str>> {
        let snapshot = Snapshot::capture(self.bot.as_ref(), &self.config.sensing)?;

        self.bot.equip_best_armor().await?;
        if token.is_stale() {
            debug!(
                "[Loop] Generation {} went stale, skipping strategies",
                token.generation()
            );
            return Ok(None);
        }

        let mut ctx = BrainContext::new(
            Arc::clone(&self.bot),
            Arc::clone(&self.config),
            snapshot,
            self.movement,
        );
        let outcome = self.chain.select(&mut ctx).await;
        self.movement = ctx.movement;
        outcome
    }
}
