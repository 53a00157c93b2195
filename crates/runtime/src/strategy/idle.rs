use async_trait::async_trait;
use behavior_tree::{Behavior, Status};
use tracing::debug;

use super::EXACT_REACH;
use crate::context::BrainContext;
use crate::error::RuntimeError;

/// Fallback: hold the center of the map where the flag respawns.
pub struct IdlePosition;

#[async_trait]
impl Behavior<BrainContext, RuntimeError> for IdlePosition {
    fn name(&self) -> &'static str {
        "idle_position"
    }

    async fn tick(&self, ctx: &mut BrainContext) -> Result<Status, RuntimeError> {
        let center = ctx.snapshot.arena.flag_spawn;
        debug!("Moving toward center point: {}", center);
        ctx.move_toward(center, EXACT_REACH).await?;
        Ok(Status::Acted)
    }
}
