#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use bot_api::{
    BotFramework, Entity, EntityId, Item, MatchInfo, PlayerInfo, PlayerMetadata, SimCommand,
    SimWorld, SimulatedBot, TeamInfo, Vec3,
};
use ctf_runtime::{BotConfig, BrainContext, MoveMode, MovementThrottle, Snapshot};

pub const ME: &str = "blue_bot";

/// A position on the blue side of the bridge.
pub const HOME: Vec3 = Vec3::new(70.0, 65.0, -386.0);

fn player(username: &str, team: &str, is_bot: bool) -> PlayerInfo {
    PlayerInfo {
        username: username.to_owned(),
        team: Some(team.to_owned()),
        is_bot,
        metadata: PlayerMetadata::default(),
    }
}

/// Blue bot with match info listing the given teammates and red opponents.
pub fn world_with(teammates: &[&str], opponents: &[&str]) -> SimWorld {
    let mut world = SimWorld::new(ME);
    world.team = Some("BLUE".into());
    world.position = HOME;

    let mut players = vec![player(ME, "BLUE", true)];
    players.extend(teammates.iter().map(|name| player(name, "BLUE", true)));
    players.extend(opponents.iter().map(|name| player(name, "RED", true)));
    world.match_info = Some(MatchInfo {
        teams: vec![
            TeamInfo { name: "BLUE".into() },
            TeamInfo { name: "RED".into() },
        ],
        players,
    });
    world.opponents = opponents.iter().map(|s| (*s).to_owned()).collect();
    world
}

pub fn arena_world() -> SimWorld {
    world_with(&["blue_mate"], &["red_1", "red_2"])
}

/// Places a visible entity relative to the bot's position.
pub fn place(world: &mut SimWorld, id: u32, name: &str, dx: f64, dy: f64, dz: f64) {
    let at = world.position.offset(dx, dy, dz);
    world.entities.push(Entity::new(EntityId(id), name, at));
}

pub fn potion(label: &str) -> Item {
    Item::new("potion", "Potion").with_custom_name(format!(r#"{{"extra":[{{"text":"{label}"}}]}}"#))
}

pub fn flag_item() -> Item {
    Item::new("white_banner", "White Banner")
}

pub fn sim(world: SimWorld) -> Arc<SimulatedBot> {
    Arc::new(SimulatedBot::new(world))
}

pub fn context(bot: &Arc<SimulatedBot>) -> BrainContext {
    let config = Arc::new(BotConfig::default());
    let snapshot = Snapshot::capture(bot.as_ref(), &config.sensing).expect("match info present");
    let framework: Arc<dyn BotFramework> = bot.clone();
    BrainContext::new(
        framework,
        config,
        snapshot,
        MovementThrottle::new(MoveMode::Background, Duration::from_secs(1)),
    )
}

pub fn world_actions(bot: &SimulatedBot) -> Vec<SimCommand> {
    bot.commands()
        .into_iter()
        .filter(SimCommand::is_world_action)
        .collect()
}
