use bot_api::{BotFramework, Item};
use strum::{Display, EnumIter};
use tracing::info;

use super::item_label;
use crate::error::Result;

/// Potion families, each with names in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PotionKind {
    Movement,
    Combat,
    /// Area poison: dropped at an opponent's feet when about to die.
    Ninja,
    Health,
}

impl PotionKind {
    pub fn names(self) -> &'static [&'static str] {
        match self {
            PotionKind::Movement => &["Gotta Go Fast", "Lava Swim"],
            PotionKind::Combat => &["Increased Damage Potion"],
            PotionKind::Ninja => &["Poison Cloud II", "Poison Cloud"],
            PotionKind::Health => &[
                "Totem of Undying",
                "Healing Potion",
                "Tincture of Life",
                "Tincture of Mending II",
                "Tincture of Mending",
                "Golden Apple",
            ],
        }
    }

    pub fn matches(self, item: &Item) -> bool {
        let label = item_label(item);
        self.names().contains(&label.as_str())
    }
}

/// First inventory item of the given kind.
pub fn find_potion(inventory: &[Item], kind: PotionKind) -> Option<&Item> {
    inventory.iter().find(|item| kind.matches(item))
}

/// Holds and drinks (or throws) the potion.
pub async fn use_potion(bot: &dyn BotFramework, potion: &Item) -> Result<bool> {
    bot.hold_item(potion).await?;
    info!("[Potions] Using potion: {}", item_label(potion));
    bot.activate_held_item().await?;
    Ok(true)
}

/// Uses a potion of the given kind if the inventory has one.
pub async fn use_potion_of_kind(
    bot: &dyn BotFramework,
    inventory: &[Item],
    kind: PotionKind,
) -> Result<bool> {
    match find_potion(inventory, kind) {
        Some(potion) => use_potion(bot, potion).await,
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn potion(label: &str) -> Item {
        Item::new("potion", "Potion")
            .with_custom_name(format!(r#"{{"extra":[{{"text":"{label}"}}]}}"#))
    }

    #[test]
    fn finds_first_inventory_match() {
        let inventory = vec![
            Item::new("dirt", "Dirt"),
            potion("Tincture of Mending"),
            potion("Healing Potion"),
        ];
        let found = find_potion(&inventory, PotionKind::Health).unwrap();
        assert_eq!(item_label(found), "Tincture of Mending");
    }

    #[test]
    fn golden_apple_counts_as_health_by_display_name() {
        let inventory = vec![Item::new("golden_apple", "Golden Apple")];
        assert!(find_potion(&inventory, PotionKind::Health).is_some());
        assert!(find_potion(&inventory, PotionKind::Ninja).is_none());
    }

    #[test]
    fn kinds_do_not_share_names() {
        for a in PotionKind::iter() {
            for b in PotionKind::iter().filter(|b| *b != a) {
                assert!(a.names().iter().all(|n| !b.names().contains(n)));
            }
        }
        assert_eq!(PotionKind::Ninja.to_string(), "ninja");
    }
}
