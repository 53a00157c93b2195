//! Worker tasks that back the bot controller.
//!
//! The behavior loop polls the world once per tick and runs the strategy
//! chain; the controller spawns one per spawn event.

mod behavior_loop;

pub use behavior_loop::{BehaviorLoop, ExitReason, LoopExit};
