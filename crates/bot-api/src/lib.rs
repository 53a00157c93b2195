//! Interface to the external Minecraft bot framework.
//!
//! The CTF brain never talks to a game server directly. Pathfinding, entity
//! sensing, inventory management and chat all live in a third-party framework
//! which is consumed through the [`BotFramework`] trait defined here.
//!
//! Modules are organized by responsibility:
//! - [`geometry`] provides [`Vec3`] and distance helpers
//! - [`world`] holds the read-only records the framework hands out
//! - [`match_info`] describes teams, players and the CTF arena
//! - [`events`] defines the lifecycle events delivered by the framework
//! - [`framework`] is the trait itself plus query and settings types
//! - [`sim`] (feature `sim`) is an in-memory framework for tests and demos
pub mod error;
pub mod events;
pub mod framework;
pub mod geometry;
pub mod match_info;
pub mod world;

#[cfg(feature = "sim")]
pub mod sim;

pub use error::{FrameworkError, PathInterruption};
pub use events::BotEvent;
pub use framework::{
    BotFramework, EntityQuery, EquipSlot, Found, FrameworkSettings, GoalNear, ItemQuery,
};
pub use geometry::Vec3;
pub use match_info::{CtfArena, MatchInfo, PlayerInfo, PlayerMetadata, Team, TeamInfo};
pub use world::{Block, DroppedItem, Entity, EntityId, Item};

#[cfg(feature = "sim")]
pub use sim::{SimCommand, SimulatedBot, SimWorld};
