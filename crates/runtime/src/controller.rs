//! Bot lifecycle: configuration, event handling and loop supervision.
//!
//! [`configure_bot`] is the single entry point the framework adapter calls
//! once at startup. The returned [`BotController`] reacts to [`BotEvent`]s and
//! keeps at most one [`BehaviorLoop`] alive at a time.

use std::sync::Arc;

use bot_api::{BotEvent, BotFramework, FrameworkSettings, MatchInfo};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cancellation::{LoopGeneration, MatchState};
use crate::config::BotConfig;
use crate::error::{Result, RuntimeError};
use crate::workers::{BehaviorLoop, LoopExit};

/// Applies framework settings and returns a controller for the bot.
pub async fn configure_bot(
    bot: Arc<dyn BotFramework>,
    config: BotConfig,
) -> Result<BotController> {
    let arena = bot.arena();
    let settings = FrameworkSettings {
        debug: false,
        allow_parkour: true,
        allow_dig_while_pathing: false,
        unbreakable_blocks: arena.unbreakable_blocks,
    };
    bot.apply_settings(&settings).await?;
    debug!(
        "Framework configured with {} unbreakable block types",
        settings.unbreakable_blocks.len()
    );

    Ok(BotController::new(bot, config))
}

/// Owns the loop generation and the match state for one bot.
pub struct BotController {
    bot: Arc<dyn BotFramework>,
    config: Arc<BotConfig>,
    generation: LoopGeneration,
    match_state: MatchState,
    active: Option<JoinHandle<LoopExit>>,
}

impl BotController {
    pub fn new(bot: Arc<dyn BotFramework>, config: BotConfig) -> Self {
        Self {
            bot,
            config: Arc::new(config),
            generation: LoopGeneration::new(),
            match_state: MatchState::new(),
            active: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.current()
    }

    pub fn match_in_progress(&self) -> bool {
        self.match_state.in_progress()
    }

    pub fn is_loop_running(&self) -> bool {
        self.active.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Reacts to one framework event.
    pub async fn handle_event(&mut self, event: BotEvent) {
        debug!("Received event: {}", event.label());
        match event {
            BotEvent::MatchStarted { .. } => {
                info!("The match has started");
                self.match_state.set_in_progress(true);
            }
            BotEvent::MatchEnded { info } => {
                self.report_result(info.as_ref());
                self.match_state.set_in_progress(false);
            }
            BotEvent::PlayerLeft { username } => {
                if username == self.bot.username() {
                    info!("I have left the match");
                    self.generation.advance();
                }
            }
            BotEvent::Disconnected { reason } => {
                info!("I have disconnected: {}", reason.as_deref().unwrap_or("unknown"));
                self.generation.advance();
            }
            BotEvent::Kicked { reason } => {
                warn!("I have been kicked: {}", reason);
                self.generation.advance();
            }
            BotEvent::Death => {
                info!("I have died");
                self.generation.advance();
                // Drop whatever goal was being pursued; failure here is harmless.
                if let Err(err) = self.bot.stop_pathing().await {
                    debug!("Failed to stop pathing after death: {}", err);
                }
            }
            BotEvent::Spawn => {
                if let Err(err) = self.bot.chat(&self.config.greeting).await {
                    warn!("Failed to send greeting: {}", err);
                }
                self.start_loop();
            }
        }
    }

    fn report_result(&self, info: Option<&MatchInfo>) {
        let username = self.bot.username();
        match info.and_then(|info| info.player(&username)) {
            Some(player) => info!(
                "The match has ended - I had {} captures and scored {} points",
                player.metadata.flag_captures, player.metadata.score
            ),
            None => info!("The match has ended"),
        }
    }

    /// Starts a fresh loop, invalidating any loop still running.
    fn start_loop(&mut self) {
        if self.is_loop_running() {
            self.generation.advance();
        }
        let token = self.generation.token();
        let behavior = BehaviorLoop::new(
            Arc::clone(&self.bot),
            Arc::clone(&self.config),
            self.match_state.clone(),
        );
        self.active = Some(tokio::spawn(behavior.run(token)));
    }

    /// Handles events until the channel closes, then shuts the loop down.
    pub async fn drive(mut self, mut events: mpsc::Receiver<BotEvent>) -> Result<Option<LoopExit>> {
        while let Some(event) = events.recv().await {
            self.handle_event(event).await;
        }
        self.shutdown().await
    }

    /// Invalidates the running loop and waits for it to exit.
    pub async fn shutdown(mut self) -> Result<Option<LoopExit>> {
        self.generation.advance();
        match self.active.take() {
            Some(handle) => handle.await.map(Some).map_err(RuntimeError::LoopJoin),
            None => Ok(None),
        }
    }
}
