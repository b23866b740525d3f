//! Observation command handlers.
//!
//! None of these change the world: they report the current room, what lies
//! in it, its exits, or what the player is carrying.

use crate::{ItemHolder, View, ViewItem, World};

use anyhow::Result;

/// Shows description of surroundings.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &World, view: &mut View) -> Result<()> {
    world.current_room()?.show(view);
    Ok(())
}

/// Lists the items lying in the current room.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn items_handler(world: &World, view: &mut View) -> Result<()> {
    view.push(ViewItem::RoomItems(world.current_room()?.item_names()));
    Ok(())
}

/// Lists the exit directions of the current room.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn exits_handler(world: &World, view: &mut View) -> Result<()> {
    world.current_room()?.show_exits(view);
    Ok(())
}

/// Show player inventory.
pub fn inv_handler(world: &World, view: &mut View) {
    view.push(ViewItem::Inventory(world.player.item_names()));
}
