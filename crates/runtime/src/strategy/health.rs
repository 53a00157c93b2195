use async_trait::async_trait;
use behavior_tree::{Behavior, Status};
use tracing::info;

use crate::context::BrainContext;
use crate::error::RuntimeError;
use crate::items::{PotionKind, find_potion, item_label, use_potion, use_potion_of_kind};

/// Reacts to low health. Never moves.
///
/// At or below the critical threshold the only option is a poison cloud at the
/// feet of a close opponent so they go down with us. Between critical and
/// warning, drink whatever heals.
pub struct LowHealth;

#[async_trait]
impl Behavior<BrainContext, RuntimeError> for LowHealth {
    fn name(&self) -> &'static str {
        "low_health"
    }

    async fn tick(&self, ctx: &mut BrainContext) -> Result<Status, RuntimeError> {
        let thresholds = ctx.thresholds();
        let snapshot = &ctx.snapshot;

        if snapshot.health <= thresholds.critical_health {
            let Some(near) = snapshot.nearest_opponent_within(thresholds.ninja_range_sq) else {
                return Ok(Status::Declined);
            };
            let Some(potion) = find_potion(&snapshot.inventory, PotionKind::Ninja) else {
                return Ok(Status::Declined);
            };
            info!(
                "[Health] Near death, dropping {} at the feet of {}",
                item_label(potion),
                near.name
            );
            ctx.bot.look_at(near.position.offset(0.0, -1.0, 0.0)).await?;
            return Ok(use_potion(ctx.bot.as_ref(), potion).await?.into());
        }

        if snapshot.health <= thresholds.warning_health {
            info!("[Health] Need to use potion while my health is low");
            let used =
                use_potion_of_kind(ctx.bot.as_ref(), &snapshot.inventory, PotionKind::Health)
                    .await?;
            return Ok(used.into());
        }

        Ok(Status::Declined)
    }
}
