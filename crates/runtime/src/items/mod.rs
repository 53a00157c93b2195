//! Inventory lookups: potions, placeable blocks and off-hand equipment.
mod equipment;
mod potions;

use bot_api::Item;
use serde::Deserialize;

pub use equipment::{
    PLACEABLE_BLOCKS, equip_shield, find_placeable_block, find_shield, unequip_off_hand,
};
pub use potions::{PotionKind, find_potion, use_potion, use_potion_of_kind};

#[derive(Deserialize)]
struct TextComponent {
    #[serde(default)]
    extra: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    text: String,
}

/// The name players see for an item.
///
/// Prefers the custom name (a JSON text component), then the display name,
/// then the registry name. Potions all share one registry and display name,
/// so the custom name is the only way to tell them apart.
pub fn item_label(item: &Item) -> String {
    if let Some(custom) = item.custom_name.as_deref()
        && let Ok(component) = serde_json::from_str::<TextComponent>(custom)
        && let Some(first) = component.extra.into_iter().next()
    {
        return first.text;
    }
    if item.display_name.is_empty() {
        item.name.clone()
    } else {
        item.display_name.clone()
    }
}

/// Labels of every inventory item, for logging.
pub fn inventory_labels(inventory: &[Item]) -> Vec<String> {
    inventory.iter().map(item_label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_name_wins() {
        let item = Item::new("potion", "Potion")
            .with_custom_name(r#"{"extra":[{"text":"Poison Cloud II"}],"text":""}"#);
        assert_eq!(item_label(&item), "Poison Cloud II");
    }

    #[test]
    fn malformed_custom_name_falls_back_to_display_name() {
        let item = Item::new("potion", "Potion").with_custom_name("not json");
        assert_eq!(item_label(&item), "Potion");

        let empty_extra = Item::new("potion", "Potion").with_custom_name(r#"{"text":"x"}"#);
        assert_eq!(item_label(&empty_extra), "Potion");
    }

    #[test]
    fn missing_display_name_falls_back_to_registry_name() {
        let item = Item::new("golden_apple", "");
        assert_eq!(item_label(&item), "golden_apple");
    }
}
