//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that move items between the
//! current room and the player's inventory.

use crate::{
    View, ViewItem, World,
    condition::check_conditions,
    item_search::{SearchError, find_by_prefix, find_exact, resolve_choice},
    world::{Location, WorldError},
};

use anyhow::{Context, Result, anyhow};
use log::info;

/// An ambiguous `get` waiting for the player to pick one of the candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChoice {
    pub phrase: String,
    pub candidates: Vec<String>,
}

/// Pick up the item in the current room whose name starts with `phrase`.
///
/// When several items share the prefix, the player is asked which one was
/// meant and the returned `PendingChoice` must be resolved by [`choose_handler`]
/// with the next line of input.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn get_handler(world: &mut World, view: &mut View, phrase: &str) -> Result<Option<PendingChoice>> {
    let search = find_by_prefix(world.current_room()?, phrase);
    match search {
        Ok(item) => {
            pick_up(world, view, &item)?;
            Ok(None)
        },
        Err(SearchError::NoMatch(_)) => {
            info!("get '{phrase}': nothing matches in '{}'", world.player.location);
            view.push(ViewItem::ActionFailure(format!("There's no {phrase} here.")));
            Ok(None)
        },
        Err(SearchError::Ambiguous { phrase, candidates }) => {
            info!("get '{phrase}' is ambiguous: {candidates:?}");
            view.push(ViewItem::ItemChoice {
                verb: "get".into(),
                candidates: candidates.clone(),
            });
            Ok(Some(PendingChoice { phrase, candidates }))
        },
    }
}

/// Resolve a pending ambiguous `get` with the player's answer.
///
/// The answer must name one of the candidates in full; anything else abandons
/// the pickup.
///
/// # Errors
/// - if the chosen item cannot be moved (world state no longer matches the candidates)
pub fn choose_handler(world: &mut World, view: &mut View, pending: &PendingChoice, answer: &str) -> Result<()> {
    match resolve_choice(&pending.candidates, answer) {
        Some(item) => pick_up(world, view, &item),
        None => {
            info!("get '{}' abandoned: '{}' is not a candidate", pending.phrase, answer.trim());
            view.push(ViewItem::ActionFailure("Invalid item choice.".into()));
            Ok(())
        },
    }
}

/// Move `item` from the current room into the inventory, then check the room's conditions.
fn pick_up(world: &mut World, view: &mut View, item: &str) -> Result<()> {
    let here = Location::Room(world.player.location.clone());
    match world.transfer(item, &here, &Location::Inventory) {
        Ok(()) => {
            info!("player picked up '{item}' in '{}'", world.player.location);
            view.push(ViewItem::ActionSuccess(format!("You pick up the {item}.")));
            check_conditions(world, view)?;
            Ok(())
        },
        Err(WorldError::AlreadyHeld(_)) => {
            view.push(ViewItem::ActionFailure(format!("You already have the {item}.")));
            Ok(())
        },
        Err(e) => Err(anyhow!(e).context(format!("picking up '{item}'"))),
    }
}

/// Drop the carried item whose name is exactly `name` (case-insensitive) into the current room.
///
/// Dropping never triggers win or lose conditions.
///
/// # Errors
/// - if the item cannot be moved into the player's room
pub fn drop_handler(world: &mut World, view: &mut View, name: &str) -> Result<()> {
    let Ok(item) = find_exact(&world.player, name) else {
        view.push(ViewItem::ActionFailure(format!("You're not carrying {name}.")));
        return Ok(());
    };
    let here = Location::Room(world.player.location.clone());
    world
        .transfer(&item, &Location::Inventory, &here)
        .with_context(|| format!("dropping '{item}'"))?;
    info!("player dropped '{item}' in '{}'", world.player.location);
    view.push(ViewItem::ActionSuccess(format!("You drop the {item}.")));
    Ok(())
}
