//! Async priority selection for real-time bot decision loops.
//!
//! A decision pass walks an ordered list of behaviors and stops at the first
//! one that acts. Behaviors are async because acting means talking to a game
//! server, and fallible because that conversation can fail.
//!
//! - **Single flight**: a pass performs at most one action
//! - **Deterministic order**: children are always tried in declaration order
//! - **Errors short-circuit**: a failing behavior aborts the pass and the error
//!   is handed to the caller untouched
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Acted or Declined
//! - Composite node: [`Selector`]
//! - Decorator node: [`Guard`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::Selector;
pub use decorator::Guard;
pub use status::Status;
