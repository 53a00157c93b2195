use async_trait::async_trait;
use behavior_tree::{Behavior, Status};
use bot_api::ItemQuery;
use tracing::info;

use super::EXACT_REACH;
use crate::context::BrainContext;
use crate::error::RuntimeError;
use crate::sensing::rank;

/// Picks up the most useful nearby drop.
///
/// Items the bot already owns are weighted so heavily that any new item in
/// sight wins. Drops on another level (e.g. down in the tunnel) are ignored.
pub struct LootItems;

#[async_trait]
impl Behavior<BrainContext, RuntimeError> for LootItems {
    fn name(&self) -> &'static str {
        "loot_items"
    }

    async fn tick(&self, ctx: &mut BrainContext) -> Result<Status, RuntimeError> {
        let thresholds = ctx.thresholds();
        let sensing = &ctx.config.sensing;
        let snapshot = &ctx.snapshot;
        let me = snapshot.position;

        let found = ctx.bot.find_dropped_items(&ItemQuery {
            max_distance: sensing.sight_range,
        });
        let ranked = rank(
            found,
            |item| {
                if snapshot.inventory_contains(&item.name) {
                    thresholds.owned_item_weight
                } else {
                    thresholds.new_item_weight
                }
            },
            |distance, value| distance * value,
            Some(sensing.loot_max_count),
        );
        let best = ranked
            .into_iter()
            .map(|hit| hit.result)
            .find(|item| item.position.vertical_gap(me) < thresholds.vertical_band);

        let Some(item) = best else {
            return Ok(Status::Declined);
        };
        info!("Going to collect item: {} at: {}", item.name, item.position);
        ctx.move_toward(item.position, EXACT_REACH).await?;
        Ok(Status::Acted)
    }
}
