//! Builder utilities for ergonomic chain construction.
//!
//! Instead of writing verbose `Box::new(Guard::new(...))`, use the shorter
//! functions here.

use crate::{Behavior, Guard};

/// Creates a guard node.
///
/// Shorthand for `Box::new(Guard::new(condition, child))`.
#[inline]
pub fn guard<C: Send + 'static, E: Send + 'static>(
    condition: impl Fn(&C) -> bool + Send + Sync + 'static,
    child: Box<dyn Behavior<C, E>>,
) -> Box<dyn Behavior<C, E>> {
    Box::new(Guard::new(condition, child))
}
