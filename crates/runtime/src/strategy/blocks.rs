use async_trait::async_trait;
use behavior_tree::{Behavior, Status};
use bot_api::{EquipSlot, Team, Vec3};
use tracing::{debug, info};

use super::NEAR_REACH;
use crate::context::BrainContext;
use crate::error::RuntimeError;
use crate::items::find_placeable_block;

/// Bridge blockade slots on the blue side.
pub const BLUE_BLOCK_PLACEMENTS: [Vec3; 4] = [
    Vec3::new(81.0, 65.0, -387.0),
    Vec3::new(81.0, 66.0, -387.0),
    Vec3::new(81.0, 65.0, -385.0),
    Vec3::new(81.0, 66.0, -385.0),
];

/// Bridge blockade slots on the red side.
pub const RED_BLOCK_PLACEMENTS: [Vec3; 4] = [
    Vec3::new(111.0, 65.0, -387.0),
    Vec3::new(111.0, 66.0, -387.0),
    Vec3::new(111.0, 65.0, -385.0),
    Vec3::new(111.0, 66.0, -385.0),
];

pub fn block_placements(team: Team) -> &'static [Vec3] {
    match team {
        Team::Blue => &BLUE_BLOCK_PLACEMENTS,
        Team::Red => &RED_BLOCK_PLACEMENTS,
    }
}

/// Fills empty blockade slots near our side when no opponent is close.
///
/// Only opponents on the same level count as a threat; anyone down in the
/// tunnel cannot interrupt.
pub struct PlaceBlocks;

#[async_trait]
impl Behavior<BrainContext, RuntimeError> for PlaceBlocks {
    fn name(&self) -> &'static str {
        "place_blocks"
    }

    async fn tick(&self, ctx: &mut BrainContext) -> Result<Status, RuntimeError> {
        let thresholds = ctx.thresholds().clone();
        let me = ctx.snapshot.position;

        let threats = ctx
            .snapshot
            .opponents
            .iter()
            .filter(|o| {
                o.position.vertical_gap(me) < thresholds.vertical_band
                    && o.position.distance_squared(me) < thresholds.danger_range_sq
            })
            .count();
        debug!(
            "Checking {} opponents in range before placing blocks",
            threats
        );
        if threats > 0 {
            return Ok(Status::Declined);
        }

        let Some(block) = find_placeable_block(&ctx.snapshot.inventory).cloned() else {
            debug!("No placeable blocks in inventory");
            return Ok(Status::Declined);
        };

        for &slot in block_placements(ctx.snapshot.team) {
            let range_sq = slot.distance_squared(me);
            if range_sq > thresholds.placement_range_sq {
                continue;
            }
            let filled = ctx.bot.block_at(slot).is_some_and(|b| !b.is_air());
            if filled {
                continue;
            }

            info!("Moving to place block {:?} at: {}", block.display_name, slot);
            ctx.move_toward(slot, NEAR_REACH).await?;
            if range_sq < thresholds.placement_reach_sq {
                info!("Placing block {:?} at: {}", block.display_name, slot);
                ctx.bot.equip(&block, EquipSlot::Hand).await?;
                // top face of the block under the slot
                ctx.bot
                    .place_block(slot.offset(0.0, -1.0, 0.0), Vec3::UP)
                    .await?;
            }
            return Ok(Status::Acted);
        }

        Ok(Status::Declined)
    }
}
