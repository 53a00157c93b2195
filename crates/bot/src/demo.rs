//! Scripted arena for the headless demo match.
use std::env;
use std::time::Duration;

use bot_api::{
    DroppedItem, Entity, EntityId, Item, MatchInfo, PlayerInfo, PlayerMetadata, SimWorld,
    SimulatedBot, TeamInfo, Vec3,
};

/// Demo run settings.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub username: String,
    pub duration: Duration,
    /// Blocks walked per simulation step.
    pub step: f64,
    pub step_interval: Duration,
}

impl DemoConfig {
    /// Environment variables:
    /// - `CTF_BOT_USERNAME` - Name of the demo bot (default: ctf_bot)
    /// - `CTF_DEMO_SECONDS` - Length of the demo match (default: 30)
    pub fn from_env() -> Self {
        let username =
            read_env::<String>("CTF_BOT_USERNAME").unwrap_or_else(|| "ctf_bot".to_owned());
        let seconds = read_env::<u64>("CTF_DEMO_SECONDS").unwrap_or(30);

        Self {
            username,
            duration: Duration::from_secs(seconds),
            step: 0.25,
            step_interval: Duration::from_millis(50),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn player(username: &str, team: &str) -> PlayerInfo {
    PlayerInfo {
        username: username.to_owned(),
        team: Some(team.to_owned()),
        is_bot: true,
        metadata: PlayerMetadata::default(),
    }
}

/// Blue bot on its side of the bridge, flag waiting at the center and one red
/// guard camping near the red scoring pad.
pub fn arena(username: &str) -> SimWorld {
    let mut world = SimWorld::new(username);
    world.team = Some("BLUE".to_owned());
    world.position = Vec3::new(75.0, 65.0, -386.0);
    world.flag_location = Some(world.arena.flag_spawn);
    world.inventory = vec![
        Item::new("stone_sword", "Stone Sword"),
        Item::new("dirt", "Dirt").with_count(16),
        Item::new("golden_apple", "Golden Apple"),
    ];

    let guard = "red_guard";
    world.match_info = Some(MatchInfo {
        teams: vec![
            TeamInfo {
                name: "BLUE".to_owned(),
            },
            TeamInfo {
                name: "RED".to_owned(),
            },
        ],
        players: vec![player(username, "BLUE"), player(guard, "RED")],
    });
    world.opponents = vec![guard.to_owned()];
    world.entities = vec![Entity::new(
        EntityId(2),
        guard,
        Vec3::new(35.0, 63.0, -390.0),
    )];
    world.dropped_items = vec![DroppedItem {
        id: EntityId(40),
        name: "bow".to_owned(),
        position: Vec3::new(128.0, 63.0, -385.0),
    }];
    world
}

/// Match info as reported when the match ends, with this bot's captures filled in.
pub fn final_info(bot: &SimulatedBot) -> Option<MatchInfo> {
    let world = bot.world();
    let mut info = world.match_info.clone()?;
    if let Some(me) = info.players.iter_mut().find(|p| p.username == world.username) {
        me.metadata.flag_captures = world.captures;
    }
    Some(info)
}
