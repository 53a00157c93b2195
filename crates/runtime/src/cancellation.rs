//! Loop invalidation and match state.
//!
//! Every disconnect, death, kick or own leave advances the [`LoopGeneration`].
//! A loop captures a [`LoopToken`] when it starts and exits as soon as the
//! live generation no longer matches, so a respawn can never leave two loops
//! driving the same bot.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

/// Monotonic generation counter owned by the controller.
#[derive(Debug)]
pub struct LoopGeneration {
    tx: watch::Sender<u64>,
}

impl LoopGeneration {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    pub fn current(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Invalidates every outstanding token and returns the new generation.
    pub fn advance(&self) -> u64 {
        self.tx.send_modify(|generation| *generation += 1);
        self.current()
    }

    /// Captures the current generation.
    pub fn token(&self) -> LoopToken {
        let rx = self.tx.subscribe();
        let generation = *rx.borrow();
        LoopToken { rx, generation }
    }
}

impl Default for LoopGeneration {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellation token bound to one generation.
#[derive(Clone, Debug)]
pub struct LoopToken {
    rx: watch::Receiver<u64>,
    generation: u64,
}

impl LoopToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once the generation moved on or the controller is gone.
    pub fn is_stale(&self) -> bool {
        *self.rx.borrow() != self.generation || self.rx.has_changed().is_err()
    }

    /// Resolves when the token becomes stale.
    pub async fn stale(&mut self) {
        while !self.is_stale() {
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Shared "match in progress" flag.
///
/// Starts out true so a bot that joins after the start event still plays.
#[derive(Clone, Debug)]
pub struct MatchState {
    in_progress: Arc<AtomicBool>,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            in_progress: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    pub fn set_in_progress(&self, in_progress: bool) {
        self.in_progress.store(in_progress, Ordering::Release);
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
