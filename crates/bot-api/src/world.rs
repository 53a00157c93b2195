//! Read-only records describing things the bot can sense.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// Framework-assigned entity identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An inventory or held item.
///
/// `name` is the registry name (`red_banner`), `display_name` the localized
/// name (`Red Banner`). Potions share both, so the only distinguishing field
/// is `custom_name`, which holds a JSON text component when present.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub display_name: String,
    pub custom_name: Option<String>,
    pub count: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            custom_name: None,
            count: 1,
        }
    }

    pub fn with_custom_name(mut self, custom_name: impl Into<String>) -> Self {
        self.custom_name = Some(custom_name.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

/// A player or mob visible to the bot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Username for players, entity type name otherwise.
    pub name: String,
    pub position: Vec3,
    pub held_item: Option<Item>,
    pub health: Option<f32>,
}

impl Entity {
    pub fn new(id: EntityId, name: impl Into<String>, position: Vec3) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            held_item: None,
            health: None,
        }
    }

    pub fn holding(mut self, item: Item) -> Self {
        self.held_item = Some(item);
        self
    }
}

/// An item entity lying on the ground.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DroppedItem {
    pub id: EntityId,
    pub name: String,
    pub position: Vec3,
}

/// A block in the world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub type_id: u32,
    pub name: String,
}

impl Block {
    pub const AIR_ID: u32 = 0;

    pub fn air() -> Self {
        Self {
            type_id: Self::AIR_ID,
            name: "air".to_owned(),
        }
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.type_id == Self::AIR_ID
    }
}
