//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all nodes. The trait is generic over a context type `C`
//! (the blackboard nodes read and write) and an error type `E`.

use async_trait::async_trait;

use crate::Status;

/// A node that can be evaluated against a context.
#[async_trait]
pub trait Behavior<C: Send, E: Send>: Send + Sync {
    /// Stable name used in logs to report which node acted.
    fn name(&self) -> &'static str;

    /// Evaluate this node against the given context.
    ///
    /// # Returns
    ///
    /// - `Ok(Status::Acted)` if the node issued its action
    /// - `Ok(Status::Declined)` if its preconditions did not hold
    /// - `Err(_)` if issuing the action failed
    async fn tick(&self, ctx: &mut C) -> Result<Status, E>;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C, E>>` to also implement `Behavior<C, E>`,
/// enabling heterogeneous collections of nodes.
#[async_trait]
impl<C: Send, E: Send> Behavior<C, E> for Box<dyn Behavior<C, E>> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        (**self).tick(ctx).await
    }
}
