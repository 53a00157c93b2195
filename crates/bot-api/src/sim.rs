//! Deterministic in-memory framework.
//!
//! [`SimulatedBot`] keeps a tiny world model behind a mutex and records every
//! command it receives, so tests can assert exactly what the brain asked for.
//! [`SimulatedBot::advance`] moves the bot along its current goal, which is
//! enough to drive a headless demo match.
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::{
    Block, BotFramework, CtfArena, DroppedItem, Entity, EntityQuery, EquipSlot, Found,
    FrameworkError, FrameworkSettings, GoalNear, Item, ItemQuery, MatchInfo, Team, Vec3,
};

/// A command issued to the simulated framework.
#[derive(Clone, Debug, PartialEq)]
pub enum SimCommand {
    ApplySettings,
    SetGoal(GoalNear),
    Approach { target: Vec3, reach: f64 },
    StopPathing,
    Equip { item: String, slot: EquipSlot },
    Unequip(EquipSlot),
    Hold(String),
    Activate,
    LookAt(Vec3),
    Attack(String),
    PlaceBlock { reference: Vec3, face: Vec3 },
    EquipArmor,
    Chat(String),
}

impl SimCommand {
    /// Commands that change the world or the bot's path, as opposed to
    /// bookkeeping such as armor management, aiming or chat.
    pub fn is_world_action(&self) -> bool {
        matches!(
            self,
            SimCommand::SetGoal(_)
                | SimCommand::Approach { .. }
                | SimCommand::Activate
                | SimCommand::Attack(_)
                | SimCommand::PlaceBlock { .. }
        )
    }
}

/// Mutable state behind a [`SimulatedBot`].
#[derive(Debug)]
pub struct SimWorld {
    pub username: String,
    pub position: Vec3,
    pub health: f32,
    pub team: Option<String>,
    pub match_info: Option<MatchInfo>,
    pub opponents: Vec<String>,
    pub entities: Vec<Entity>,
    pub dropped_items: Vec<DroppedItem>,
    pub blocks: HashMap<(i64, i64, i64), Block>,
    pub inventory: Vec<Item>,
    /// Item in the main hand.
    pub held: Option<Item>,
    pub moving: bool,
    pub goal: Option<GoalNear>,
    pub flag_location: Option<Vec3>,
    pub has_flag: bool,
    pub captures: u32,
    pub arena: CtfArena,
    pub settings: Option<FrameworkSettings>,
    /// Errors returned, in order, by the next action calls.
    pub pending_failures: VecDeque<FrameworkError>,
    pub commands: Vec<SimCommand>,
}

impl SimWorld {
    pub fn new(username: impl Into<String>) -> Self {
        let arena = CtfArena::default();
        Self {
            username: username.into(),
            position: arena.flag_spawn,
            health: 20.0,
            team: None,
            match_info: None,
            opponents: Vec::new(),
            entities: Vec::new(),
            dropped_items: Vec::new(),
            blocks: HashMap::new(),
            inventory: Vec::new(),
            held: None,
            moving: false,
            goal: None,
            flag_location: None,
            has_flag: false,
            captures: 0,
            arena,
            settings: None,
            pending_failures: VecDeque::new(),
            commands: Vec::new(),
        }
    }

    pub fn set_block(&mut self, position: Vec3, block: Block) {
        self.blocks.insert(position.block_coords(), block);
    }

    fn record(&mut self, command: SimCommand) -> Result<()> {
        self.commands.push(command);
        match self.pending_failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// In-memory [`BotFramework`] implementation.
#[derive(Debug)]
pub struct SimulatedBot {
    world: Mutex<SimWorld>,
}

impl SimulatedBot {
    pub fn new(world: SimWorld) -> Self {
        Self {
            world: Mutex::new(world),
        }
    }

    /// Locks the world for inspection or scripting.
    pub fn world(&self) -> MutexGuard<'_, SimWorld> {
        self.world.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn commands(&self) -> Vec<SimCommand> {
        self.world().commands.clone()
    }

    pub fn take_commands(&self) -> Vec<SimCommand> {
        std::mem::take(&mut self.world().commands)
    }

    /// Queues an error for the next action call.
    pub fn fail_next(&self, err: FrameworkError) {
        self.world().pending_failures.push_back(err);
    }

    /// Moves the bot up to `step` blocks toward its goal and resolves flag
    /// pickups, captures and item pickups at the new position.
    pub fn advance(&self, step: f64) {
        let mut world = self.world();
        let Some(goal) = world.goal else {
            return;
        };

        let remaining = world.position.distance(goal.target);
        if remaining <= goal.range.max(step) {
            world.position = goal.target;
            world.moving = false;
            world.goal = None;
        } else {
            let ratio = step / remaining;
            let from = world.position;
            world.position = from.offset(
                (goal.target.x - from.x) * ratio,
                (goal.target.y - from.y) * ratio,
                (goal.target.z - from.z) * ratio,
            );
        }

        let position = world.position;
        if let Some(flag) = world.flag_location
            && flag.distance_squared(position) <= 2.0
        {
            world.flag_location = None;
            world.has_flag = true;
        }

        let team = Team::from_name(world.team.as_deref());
        let score_at = world.arena.score_location(team);
        if world.has_flag && score_at.distance_squared(position) <= 2.0 {
            world.has_flag = false;
            world.captures += 1;
            world.flag_location = Some(world.arena.flag_spawn);
        }

        let (picked, left): (Vec<_>, Vec<_>) = std::mem::take(&mut world.dropped_items)
            .into_iter()
            .partition(|item| item.position.distance_squared(position) <= 2.0);
        world.dropped_items = left;
        for item in picked {
            let pickup = Item::new(item.name.clone(), item.name);
            world.inventory.push(pickup);
        }
    }
}

#[async_trait]
impl BotFramework for SimulatedBot {
    fn username(&self) -> String {
        self.world().username.clone()
    }

    fn position(&self) -> Vec3 {
        self.world().position
    }

    fn health(&self) -> f32 {
        self.world().health
    }

    fn team_name(&self) -> Option<String> {
        self.world().team.clone()
    }

    fn inventory(&self) -> Vec<Item> {
        self.world().inventory.clone()
    }

    fn match_info(&self) -> Option<MatchInfo> {
        self.world().match_info.clone()
    }

    fn opponent_usernames(&self) -> Vec<String> {
        self.world().opponents.clone()
    }

    fn arena(&self) -> CtfArena {
        self.world().arena.clone()
    }

    fn flag_location(&self) -> Option<Vec3> {
        self.world().flag_location
    }

    fn has_flag(&self) -> bool {
        self.world().has_flag
    }

    fn find_entities(&self, query: &EntityQuery) -> Vec<Found<Entity>> {
        let world = self.world();
        let max_sq = query.max_distance * query.max_distance;
        world
            .entities
            .iter()
            .filter(|e| query.names.iter().any(|n| *n == e.name))
            .filter(|e| e.position.distance_squared(world.position) <= max_sq)
            .map(|e| Found {
                distance: e.position.distance(world.position),
                result: e.clone(),
            })
            .collect()
    }

    fn find_dropped_items(&self, query: &ItemQuery) -> Vec<Found<DroppedItem>> {
        let world = self.world();
        let max_sq = query.max_distance * query.max_distance;
        world
            .dropped_items
            .iter()
            .filter(|i| i.position.distance_squared(world.position) <= max_sq)
            .map(|i| Found {
                distance: i.position.distance(world.position),
                result: i.clone(),
            })
            .collect()
    }

    fn block_at(&self, position: Vec3) -> Option<Block> {
        self.world().blocks.get(&position.block_coords()).cloned()
    }

    fn is_moving(&self) -> bool {
        self.world().moving
    }

    async fn apply_settings(&self, settings: &FrameworkSettings) -> Result<()> {
        let mut world = self.world();
        world.settings = Some(settings.clone());
        world.record(SimCommand::ApplySettings)
    }

    async fn set_goal(&self, goal: GoalNear) -> Result<()> {
        let mut world = self.world();
        world.record(SimCommand::SetGoal(goal))?;
        world.goal = Some(goal);
        world.moving = true;
        Ok(())
    }

    async fn approach(&self, target: Vec3, reach: f64, _timeout: Duration) -> Result<()> {
        let mut world = self.world();
        world.record(SimCommand::Approach { target, reach })?;
        world.position = target;
        world.goal = None;
        world.moving = false;
        Ok(())
    }

    async fn stop_pathing(&self) -> Result<()> {
        let mut world = self.world();
        world.goal = None;
        world.moving = false;
        world.record(SimCommand::StopPathing)
    }

    async fn equip(&self, item: &Item, slot: EquipSlot) -> Result<()> {
        let mut world = self.world();
        if !world.inventory.iter().any(|i| i == item) {
            return Err(FrameworkError::ItemMissing(item.name.clone()));
        }
        world.record(SimCommand::Equip {
            item: item.display_name.clone(),
            slot,
        })?;
        if slot == EquipSlot::Hand {
            world.held = Some(item.clone());
        }
        Ok(())
    }

    async fn unequip(&self, slot: EquipSlot) -> Result<()> {
        self.world().record(SimCommand::Unequip(slot))
    }

    async fn hold_item(&self, item: &Item) -> Result<()> {
        let mut world = self.world();
        if !world.inventory.iter().any(|i| i == item) {
            return Err(FrameworkError::ItemMissing(item.name.clone()));
        }
        world.record(SimCommand::Hold(item.display_name.clone()))?;
        world.held = Some(item.clone());
        Ok(())
    }

    async fn activate_held_item(&self) -> Result<()> {
        self.world().record(SimCommand::Activate)
    }

    async fn look_at(&self, position: Vec3) -> Result<()> {
        self.world().record(SimCommand::LookAt(position))
    }

    async fn attack(&self, target: &Entity) -> Result<()> {
        self.world().record(SimCommand::Attack(target.name.clone()))
    }

    async fn place_block(&self, reference: Vec3, face: Vec3) -> Result<()> {
        let mut world = self.world();
        world.record(SimCommand::PlaceBlock { reference, face })?;
        let Some(held) = world.held.clone() else {
            return Err(FrameworkError::action("place block", "nothing in hand"));
        };
        let target = reference.offset(face.x, face.y, face.z);
        world.set_block(
            target,
            Block {
                type_id: 1,
                name: held.name,
            },
        );
        Ok(())
    }

    async fn equip_best_armor(&self) -> Result<()> {
        self.world().record(SimCommand::EquipArmor)
    }

    async fn chat(&self, message: &str) -> Result<()> {
        self.world().record(SimCommand::Chat(message.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntityId;

    #[test]
    fn find_entities_filters_by_name_and_range() {
        let mut world = SimWorld::new("me");
        world.position = Vec3::ZERO;
        world.entities = vec![
            Entity::new(EntityId(1), "enemy", Vec3::new(3.0, 0.0, 4.0)),
            Entity::new(EntityId(2), "enemy2", Vec3::new(40.0, 0.0, 0.0)),
            Entity::new(EntityId(3), "friend", Vec3::new(1.0, 0.0, 0.0)),
        ];
        let bot = SimulatedBot::new(world);

        let found = bot.find_entities(&EntityQuery {
            names: vec!["enemy".into(), "enemy2".into()],
            attackable: true,
            max_distance: 33.0,
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].result.id, EntityId(1));
        assert_eq!(found[0].distance, 5.0);
    }

    #[tokio::test]
    async fn queued_failure_is_returned_once() {
        let bot = SimulatedBot::new(SimWorld::new("me"));
        bot.fail_next(FrameworkError::NotConnected);

        assert_eq!(bot.chat("hi").await, Err(FrameworkError::NotConnected));
        assert_eq!(bot.chat("hi").await, Ok(()));
        assert_eq!(bot.commands().len(), 2);
    }

    #[tokio::test]
    async fn placing_fills_the_block_above_the_reference() {
        let mut world = SimWorld::new("me");
        world.inventory = vec![Item::new("dirt", "Dirt")];
        let dirt = world.inventory[0].clone();
        let bot = SimulatedBot::new(world);
        let reference = Vec3::new(81.0, 64.0, -387.0);

        assert!(bot.place_block(reference, Vec3::UP).await.is_err());
        bot.equip(&dirt, EquipSlot::Hand).await.unwrap();
        bot.place_block(reference, Vec3::UP).await.unwrap();

        let placed = bot.block_at(Vec3::new(81.0, 65.0, -387.0)).unwrap();
        assert_eq!(placed.name, "dirt");
        assert!(bot.block_at(reference).is_none());
    }

    #[tokio::test]
    async fn advance_walks_to_flag_and_scores() {
        let mut world = SimWorld::new("me");
        world.team = Some("BLUE".into());
        world.position = Vec3::new(90.0, 63.0, -386.0);
        world.flag_location = Some(world.arena.flag_spawn);
        let score = world.arena.blue_score_location;
        let spawn = world.arena.flag_spawn;
        let bot = SimulatedBot::new(world);

        bot.set_goal(GoalNear { target: spawn, range: 1.0 }).await.unwrap();
        bot.advance(10.0);
        assert!(bot.has_flag());
        assert!(!bot.is_moving());

        bot.set_goal(GoalNear { target: score, range: 1.0 }).await.unwrap();
        for _ in 0..20 {
            bot.advance(5.0);
        }
        assert!(!bot.has_flag());
        assert_eq!(bot.world().captures, 1);
        assert_eq!(bot.flag_location(), Some(spawn));
    }
}
