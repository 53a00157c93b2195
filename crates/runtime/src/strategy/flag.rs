use async_trait::async_trait;
use behavior_tree::{Behavior, Status};
use tracing::info;

use super::EXACT_REACH;
use crate::context::BrainContext;
use crate::error::RuntimeError;

/// Carries the flag back to our scoring pad.
pub struct ScoreFlag;

#[async_trait]
impl Behavior<BrainContext, RuntimeError> for ScoreFlag {
    fn name(&self) -> &'static str {
        "score_flag"
    }

    async fn tick(&self, ctx: &mut BrainContext) -> Result<Status, RuntimeError> {
        if !ctx.snapshot.has_flag {
            return Ok(Status::Declined);
        }
        let score_at = ctx.snapshot.arena.score_location(ctx.snapshot.team);
        info!("I have the flag, running to score at {}", score_at);
        ctx.move_toward(score_at, EXACT_REACH).await?;
        Ok(Status::Acted)
    }
}

/// Walks onto the flag while it lies on the ground.
pub struct CollectFlag;

#[async_trait]
impl Behavior<BrainContext, RuntimeError> for CollectFlag {
    fn name(&self) -> &'static str {
        "collect_flag"
    }

    async fn tick(&self, ctx: &mut BrainContext) -> Result<Status, RuntimeError> {
        let Some(flag) = ctx.snapshot.flag_location else {
            return Ok(Status::Declined);
        };
        info!("Moving toward the flag at {}", flag);
        ctx.move_toward(flag, EXACT_REACH).await?;
        Ok(Status::Acted)
    }
}
