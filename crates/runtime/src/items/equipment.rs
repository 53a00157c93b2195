use bot_api::{BotFramework, EquipSlot, Item};
use tracing::info;

use crate::error::Result;

/// Display names of blocks the bot may use to barricade the bridges.
pub const PLACEABLE_BLOCKS: [&str; 4] = ["Gravel", "Grass Block", "Dirt", "Stripped Dark Oak Wood"];

pub fn find_placeable_block(inventory: &[Item]) -> Option<&Item> {
    inventory
        .iter()
        .find(|item| PLACEABLE_BLOCKS.contains(&item.display_name.as_str()))
}

pub fn find_shield(inventory: &[Item]) -> Option<&Item> {
    inventory
        .iter()
        .find(|item| item.display_name.contains("Shield") || item.name.contains("shield"))
}

/// Moves a shield from the inventory into the off-hand, if there is one.
pub async fn equip_shield(bot: &dyn BotFramework, inventory: &[Item]) -> Result<bool> {
    let Some(shield) = find_shield(inventory) else {
        return Ok(false);
    };
    info!("[Shield] Equipping: {}", shield.display_name);
    bot.equip(shield, EquipSlot::OffHand).await?;
    Ok(true)
}

pub async fn unequip_off_hand(bot: &dyn BotFramework) -> Result<()> {
    bot.unequip(EquipSlot::OffHand).await?;
    Ok(())
}
