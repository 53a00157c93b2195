use async_trait::async_trait;
use behavior_tree::{Behavior, Status};
use tracing::{debug, info};

use super::NEAR_REACH;
use crate::context::BrainContext;
use crate::error::RuntimeError;
use crate::items::{PotionKind, use_potion_of_kind};

/// Hunts down an opponent carrying our flag.
///
/// Only meaningful while the flag is not lying on the ground; the chain guards
/// it accordingly.
pub struct AttackFlagCarrier;

#[async_trait]
impl Behavior<BrainContext, RuntimeError> for AttackFlagCarrier {
    fn name(&self) -> &'static str {
        "attack_flag_carrier"
    }

    async fn tick(&self, ctx: &mut BrainContext) -> Result<Status, RuntimeError> {
        let snapshot = &ctx.snapshot;
        debug!(
            "Checking {} opponents in range for flag carriers",
            snapshot.opponents.len()
        );

        let carrier = snapshot.opponents.iter().find(|o| {
            o.held_item
                .as_ref()
                .is_some_and(|item| snapshot.arena.is_flag(&item.name))
        });
        let Some(carrier) = carrier else {
            return Ok(Status::Declined);
        };

        info!(
            "Attacking flag carrier {} at position: {}",
            carrier.name, carrier.position
        );
        // run faster to catch them; attacking does not depend on having a potion
        use_potion_of_kind(ctx.bot.as_ref(), &snapshot.inventory, PotionKind::Movement).await?;
        ctx.bot.attack(carrier).await?;
        Ok(Status::Acted)
    }
}

/// Fights the closest opponent in range, or falls back to a teammate when
/// outnumbered.
///
/// Carrying the flag shrinks the engagement radius: better to keep running
/// than to drop the flag in a fight. With no teammates in sight there is
/// nowhere to retreat to, so the bot fights regardless.
pub struct AttackNearbyOpponent;

#[async_trait]
impl Behavior<BrainContext, RuntimeError> for AttackNearbyOpponent {
    fn name(&self) -> &'static str {
        "attack_nearby_opponent"
    }

    async fn tick(&self, ctx: &mut BrainContext) -> Result<Status, RuntimeError> {
        let thresholds = ctx.thresholds();
        let snapshot = &ctx.snapshot;

        let outnumbered = snapshot.is_outnumbered();
        let yolo = snapshot.teammates.is_empty();
        let range_sq = if snapshot.has_flag {
            thresholds.engage_range_with_flag_sq
        } else {
            thresholds.engage_range_sq
        };

        let Some(target) = snapshot.nearest_opponent_within(range_sq) else {
            debug!("No opponents in engagement range");
            return Ok(Status::Declined);
        };

        if !outnumbered || yolo {
            info!("Attacking opponent at position: {}", target.position);
            ctx.bot.attack(target).await?;
            return Ok(Status::Acted);
        }

        let Some(rally) = snapshot.teammates.first().map(|mate| mate.position) else {
            return Ok(Status::Declined);
        };
        info!("Outnumbered, running to nearest team-mate for help");
        ctx.move_toward(rally, NEAR_REACH).await?;
        Ok(Status::Acted)
    }
}
