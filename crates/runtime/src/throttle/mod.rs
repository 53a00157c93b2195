//! Rate limiting for the behavior loop.
//!
//! - [`TickThrottle`] keeps iterations at least one server tick apart
//! - [`MovementThrottle`] avoids re-planning paths toward (almost) the same target
mod movement;
mod tick;

pub use movement::{MoveMode, MovementThrottle};
pub use tick::TickThrottle;
