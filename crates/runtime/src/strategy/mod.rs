//! Condition → action rules and the priority chain that orders them.
//!
//! Each strategy reads the [`BrainContext`] snapshot and either issues its
//! action (`Status::Acted`) or declines. The chain stops at the first strategy
//! that acts, so at most one of them acts per loop iteration.
//!
//! Priority, highest first:
//! 1. [`LowHealth`] - survive (heal or take an opponent down with us)
//! 2. [`AttackFlagCarrier`] - only while the flag is not on the ground
//! 3. [`AttackNearbyOpponent`] - fight, or retreat to a teammate when outnumbered
//! 4. [`ScoreFlag`] - carry the flag home
//! 5. [`CollectFlag`] - pick up the loose flag
//! 6. [`PlaceBlocks`] - barricade the bridges when nobody is around
//! 7. [`LootItems`] - grab useful drops
//! 8. [`IdlePosition`] - hold the center
mod blocks;
mod combat;
mod flag;
mod health;
mod idle;
mod loot;

use behavior_tree::builder::guard;
use behavior_tree::{Behavior, Selector};

use crate::context::BrainContext;
use crate::error::RuntimeError;

pub use blocks::{BLUE_BLOCK_PLACEMENTS, PlaceBlocks, RED_BLOCK_PLACEMENTS, block_placements};
pub use combat::{AttackFlagCarrier, AttackNearbyOpponent};
pub use flag::{CollectFlag, ScoreFlag};
pub use health::LowHealth;
pub use idle::IdlePosition;
pub use loot::LootItems;

pub type Strategy = Box<dyn Behavior<BrainContext, RuntimeError>>;

pub type StrategyChain = Selector<BrainContext, RuntimeError>;

/// Reach used when walking onto a point (flag, item, score pad).
pub(crate) const EXACT_REACH: f64 = 1.0;

/// Reach used when getting near something (teammate, placement slot).
pub(crate) const NEAR_REACH: f64 = 3.0;

/// Builds the default priority chain.
pub fn default_chain() -> StrategyChain {
    let flag_not_on_ground = |ctx: &BrainContext| ctx.snapshot.flag_location.is_none();

    Selector::new(
        "ctf",
        vec![
            Box::new(LowHealth),
            guard::<BrainContext, RuntimeError>(flag_not_on_ground, Box::new(AttackFlagCarrier)),
            Box::new(AttackNearbyOpponent),
            Box::new(ScoreFlag),
            Box::new(CollectFlag),
            Box::new(PlaceBlocks),
            Box::new(LootItems),
            Box::new(IdlePosition),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chain_priority_order() {
        assert_eq!(
            default_chain().child_names(),
            vec![
                "low_health",
                "attack_flag_carrier",
                "attack_nearby_opponent",
                "score_flag",
                "collect_flag",
                "place_blocks",
                "loot_items",
                "idle_position",
            ]
        );
    }
}
