//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify whether it runs.

use async_trait::async_trait;

use crate::{Behavior, Status};

type Condition<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// Only evaluates its child when a condition over the context holds.
///
/// # Semantics
///
/// - If the condition is false, returns `Declined` without touching the child
/// - Otherwise returns whatever the child returns
///
/// The guard reports the child's name so logs name the node that acted.
pub struct Guard<C: Send, E: Send> {
    condition: Condition<C>,
    child: Box<dyn Behavior<C, E>>,
}

impl<C: Send, E: Send> Guard<C, E> {
    /// Creates a guard around the given child behavior.
    pub fn new(
        condition: impl Fn(&C) -> bool + Send + Sync + 'static,
        child: Box<dyn Behavior<C, E>>,
    ) -> Self {
        Self {
            condition: Box::new(condition),
            child,
        }
    }
}

#[async_trait]
impl<C: Send, E: Send> Behavior<C, E> for Guard<C, E> {
    fn name(&self) -> &'static str {
        self.child.name()
    }

    async fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        if !(self.condition)(&*ctx) {
            return Ok(Status::Declined);
        }
        self.child.tick(ctx).await
    }
}
