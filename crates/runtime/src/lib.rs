//! Decision-making core of a Capture the Flag bot.
//!
//! This crate turns the framework's world view into at most one action per
//! server tick. Consumers call [`configure_bot`] once and forward framework
//! events to the returned [`BotController`].
//!
//! Modules are organized by responsibility:
//! - [`controller`] reacts to lifecycle events and supervises the loop
//! - [`workers`] hosts the behavior loop itself
//! - [`strategy`] holds the prioritized condition → action rules
//! - [`snapshot`] and [`sensing`] build the per-iteration world view
//! - [`throttle`] rate-limits iterations and pathfinding retargets
//! - [`items`] looks up potions, blocks and equipment in the inventory
//! - [`cancellation`] invalidates stale loops
pub mod cancellation;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod items;
pub mod sensing;
pub mod snapshot;
pub mod strategy;
pub mod throttle;
pub mod workers;

pub use cancellation::{LoopGeneration, LoopToken, MatchState};
pub use config::{BotConfig, SensingConfig, Thresholds, TimingConfig};
pub use context::BrainContext;
pub use controller::{BotController, configure_bot};
pub use error::{Result, RuntimeError};
pub use snapshot::Snapshot;
pub use strategy::{Strategy, StrategyChain, default_chain};
pub use throttle::{MoveMode, MovementThrottle, TickThrottle};
pub use workers::{BehaviorLoop, ExitReason, LoopExit};
