//! The framework trait and its query/settings types.
//!
//! Queries are synchronous reads of the framework's cached world view. Anything
//! that sends a packet or drives the pathfinder is async and fallible.
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::{Block, CtfArena, DroppedItem, Entity, Item, MatchInfo, Vec3};

/// A search hit together with its distance from the bot.
#[derive(Clone, Debug, PartialEq)]
pub struct Found<T> {
    pub result: T,
    pub distance: f64,
}

/// Entity search parameters.
///
/// An empty `names` list matches nothing. The framework returns every match
/// within `max_distance` unsorted; ranking and truncation are the caller's job.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityQuery {
    pub names: Vec<String>,
    pub attackable: bool,
    pub max_distance: f64,
}

/// Dropped item search parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemQuery {
    pub max_distance: f64,
}

/// A pathfinding goal: get within `range` blocks of `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalNear {
    pub target: Vec3,
    pub range: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipSlot {
    Hand,
    OffHand,
}

/// Framework behaviour toggles applied once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameworkSettings {
    pub debug: bool,
    /// Let the pathfinder jump short walls and plan sprint jumps.
    pub allow_parkour: bool,
    /// The CTF map cannot be dug; digging leads to stuck paths.
    pub allow_dig_while_pathing: bool,
    pub unbreakable_blocks: Vec<String>,
}

/// Everything the brain needs from the bot framework.
#[async_trait]
pub trait BotFramework: Send + Sync {
    // ------------------------------------------------------------------
    // Self
    // ------------------------------------------------------------------

    fn username(&self) -> String;

    fn position(&self) -> Vec3;

    fn health(&self) -> f32;

    /// Team name of this bot, if the match has assigned one.
    fn team_name(&self) -> Option<String>;

    fn inventory(&self) -> Vec<Item>;

    // ------------------------------------------------------------------
    // Match and arena
    // ------------------------------------------------------------------

    /// `None` until the match metadata has been received.
    fn match_info(&self) -> Option<MatchInfo>;

    /// Usernames of everyone on another team. Empty in practice mode.
    fn opponent_usernames(&self) -> Vec<String>;

    fn arena(&self) -> CtfArena;

    /// Location of the flag while it lies on the ground, `None` while carried.
    fn flag_location(&self) -> Option<Vec3>;

    /// Whether this bot is carrying the flag.
    fn has_flag(&self) -> bool;

    // ------------------------------------------------------------------
    // Sensing
    // ------------------------------------------------------------------

    fn find_entities(&self, query: &EntityQuery) -> Vec<Found<Entity>>;

    fn find_dropped_items(&self, query: &ItemQuery) -> Vec<Found<DroppedItem>>;

    fn block_at(&self, position: Vec3) -> Option<Block>;

    fn is_moving(&self) -> bool;

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    async fn apply_settings(&self, settings: &FrameworkSettings) -> Result<()>;

    /// Start pathing toward the goal and return immediately.
    async fn set_goal(&self, goal: GoalNear) -> Result<()>;

    /// Path toward `target` and resolve once within `reach` or after `timeout`.
    async fn approach(&self, target: Vec3, reach: f64, timeout: Duration) -> Result<()>;

    async fn stop_pathing(&self) -> Result<()>;

    async fn equip(&self, item: &Item, slot: EquipSlot) -> Result<()>;

    async fn unequip(&self, slot: EquipSlot) -> Result<()>;

    async fn hold_item(&self, item: &Item) -> Result<()>;

    async fn activate_held_item(&self) -> Result<()>;

    async fn look_at(&self, position: Vec3) -> Result<()>;

    /// Approach and swing at the entity.
    async fn attack(&self, target: &Entity) -> Result<()>;

    /// Place the held block against `reference` on the face pointed to by `face`.
    async fn place_block(&self, reference: Vec3, face: Vec3) -> Result<()>;

    async fn equip_best_armor(&self) -> Result<()>;

    async fn chat(&self, message: &str) -> Result<()>;
}
