//! Per-iteration view of the world.
use bot_api::{BotFramework, CtfArena, Entity, Item, Team, Vec3};
use tracing::debug;

use crate::config::SensingConfig;
use crate::error::{Result, RuntimeError};
use crate::items::inventory_labels;
use crate::sensing::{nearest_opponents, nearest_teammates};

/// Everything the strategies read during one pass. Rebuilt every iteration.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub username: String,
    pub position: Vec3,
    pub health: f32,
    pub team_name: Option<String>,
    pub team: Team,
    pub other_team: Option<String>,
    /// Closest first, bounded by `SensingConfig::max_opponents`.
    pub opponents: Vec<Entity>,
    /// Closest first.
    pub teammates: Vec<Entity>,
    pub inventory: Vec<Item>,
    pub has_flag: bool,
    /// Where the flag lies on the ground, `None` while someone carries it.
    pub flag_location: Option<Vec3>,
    pub arena: CtfArena,
}

impl Snapshot {
    /// Reads the framework's current view.
    ///
    /// Fails with [`RuntimeError::MatchInfoUnavailable`] until the match
    /// metadata has arrived.
    pub fn capture(bot: &dyn BotFramework, sensing: &SensingConfig) -> Result<Self> {
        let match_info = bot.match_info().ok_or(RuntimeError::MatchInfoUnavailable)?;

        let team_name = bot.team_name();
        let other_team = match_info
            .other_team(team_name.as_deref())
            .map(str::to_owned);
        let position = bot.position();
        let inventory = bot.inventory();

        debug!(
            "My team: {:?}, my position: {}, my inventory: {:?}",
            team_name,
            position,
            inventory_labels(&inventory)
        );

        let opponent_names = bot.opponent_usernames();
        debug!("Found the following opponents: {:?}", opponent_names);
        let opponents = nearest_opponents(
            bot,
            opponent_names,
            sensing.sight_range,
            sensing.max_opponents,
        );
        let teammates = nearest_teammates(
            bot,
            &match_info,
            sensing.sight_range,
            sensing.teammate_bots_only,
        );

        Ok(Self {
            username: bot.username(),
            position,
            health: bot.health(),
            team: Team::from_name(team_name.as_deref()),
            team_name,
            other_team,
            opponents,
            teammates,
            inventory,
            has_flag: bot.has_flag(),
            flag_location: bot.flag_location(),
            arena: bot.arena(),
        })
    }

    /// More opponents in sight than we could field including ourselves.
    pub fn is_outnumbered(&self) -> bool {
        self.teammates.len() + 1 < self.opponents.len()
    }

    /// Closest opponent within the squared radius.
    pub fn nearest_opponent_within(&self, range_sq: f64) -> Option<&Entity> {
        self.opponents
            .iter()
            .find(|o| o.position.distance_squared(self.position) <= range_sq)
    }

    pub fn inventory_contains(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.name == name)
    }
}
