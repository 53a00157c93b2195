//! Match metadata and CTF arena layout reported by the framework.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// Teams participating in the current match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub teams: Vec<TeamInfo>,
    pub players: Vec<PlayerInfo>,
}

impl MatchInfo {
    pub fn player(&self, username: &str) -> Option<&PlayerInfo> {
        self.players.iter().find(|p| p.username == username)
    }

    pub fn team_of(&self, username: &str) -> Option<&str> {
        self.player(username).and_then(|p| p.team.as_deref())
    }

    /// First team whose name differs from `my_team`.
    pub fn other_team(&self, my_team: Option<&str>) -> Option<&str> {
        self.teams
            .iter()
            .map(|t| t.name.as_str())
            .find(|name| Some(*name) != my_team)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub username: String,
    pub team: Option<String>,
    pub is_bot: bool,
    #[serde(default)]
    pub metadata: PlayerMetadata,
}

/// Per-player match statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerMetadata {
    pub score: i64,
    pub flag_captures: u32,
}

/// The two CTF sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// Resolves a framework team name. Anything that is not `BLUE` plays for red,
    /// including a missing team during practice mode.
    ///
    /// The comparison ignores ASCII case, so a server reporting `blue` still
    /// maps to [`Team::Blue`] instead of silently falling through to red.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(name) if name.eq_ignore_ascii_case("BLUE") => Team::Blue,
            _ => Team::Red,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Team::Blue => "BLUE",
            Team::Red => "RED",
        };
        write!(f, "{}", label)
    }
}

/// Fixed coordinates of the CTF map, as published by the framework's CTF utilities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CtfArena {
    /// Center of the map where the flag respawns.
    pub flag_spawn: Vec3,
    pub blue_score_location: Vec3,
    pub red_score_location: Vec3,
    /// Suffix of the flag item's registry name (e.g. `white_banner`).
    pub flag_suffix: String,
    /// Block names the bot is never allowed to break while pathing.
    pub unbreakable_blocks: Vec<String>,
}

impl CtfArena {
    pub fn score_location(&self, team: Team) -> Vec3 {
        match team {
            Team::Blue => self.blue_score_location,
            Team::Red => self.red_score_location,
        }
    }

    /// Returns true if the item name marks it as the flag.
    pub fn is_flag(&self, item_name: &str) -> bool {
        item_name.contains(self.flag_suffix.as_str())
    }
}

impl Default for CtfArena {
    fn default() -> Self {
        let unbreakable = [
            // castles
            "stone_bricks",
            "stone_brick_slab",
            "stone_brick_stairs",
            "stone_brick_wall",
            "ladder",
            "cracked_stone_bricks",
            "white_carpet",
            // blue castle
            "blue_carpet",
            "light_blue_carpet",
            "blue_stained_glass_pane",
            "light_blue_stained_glass_pane",
            "soul_torch",
            "soul_wall_torch",
            "soul_lantern",
            "lapis_block",
            "blue_glazed_terracotta",
            // red castle
            "red_carpet",
            "pink_carpet",
            "red_stained_glass_pane",
            "pink_stained_glass_pane",
            "redstone_torch",
            "redstone_wall_torch",
            "lantern",
            "red_wool",
            "red_glazed_terracotta",
            // item spawns and flag barrier
            "polished_andesite",
            "polished_andesite_slab",
            "polished_andesite_stairs",
            // arena, obstacles and the underwater tunnel
            "snow_block",
            "snow",
            "glass",
            "glass_pane",
            "white_stained_glass_pane",
            "spruce_fence",
        ];

        Self {
            flag_spawn: Vec3::new(96.0, 63.0, -386.0),
            blue_score_location: Vec3::new(160.0, 63.0, -385.0),
            red_score_location: Vec3::new(33.0, 63.0, -385.0),
            flag_suffix: "_banner".to_owned(),
            unbreakable_blocks: unbreakable.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_resolution_defaults_to_red() {
        assert_eq!(Team::from_name(Some("BLUE")), Team::Blue);
        assert_eq!(Team::from_name(Some("blue")), Team::Blue);
        assert_eq!(Team::from_name(Some("RED")), Team::Red);
        assert_eq!(Team::from_name(None), Team::Red);
    }

    #[test]
    fn other_team_skips_own() {
        let info = MatchInfo {
            teams: vec![
                TeamInfo { name: "BLUE".into() },
                TeamInfo { name: "RED".into() },
            ],
            players: vec![],
        };
        assert_eq!(info.other_team(Some("BLUE")), Some("RED"));
        assert_eq!(info.other_team(Some("RED")), Some("BLUE"));
    }

    #[test]
    fn flag_detection_uses_suffix() {
        let arena = CtfArena::default();
        assert!(arena.is_flag("white_banner"));
        assert!(!arena.is_flag("stone_sword"));
    }
}
