//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::{View, ViewItem, World, condition::check_conditions};

use anyhow::Result;
use log::{info, warn};

/// Move the player through the exit labeled `direction`, if the current room has one.
///
/// Arriving shows the new room and then evaluates its win/lose conditions.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn move_to_handler(world: &mut World, view: &mut View, direction: &str) -> Result<()> {
    let (leaving, destination) = {
        let current_room = world.current_room()?;
        (
            current_room.name.clone(),
            current_room.exit_to(direction).map(str::to_string),
        )
    };

    let Some(destination) = destination else {
        info!("no exit '{direction}' from '{leaving}'");
        view.push(ViewItem::ActionFailure(format!("There's no way to go {direction}.")));
        return Ok(());
    };

    match world.move_to(&destination) {
        Ok(new_room) => {
            info!("player moved {direction} from '{leaving}' to '{}'", new_room.name);
            new_room.show(view);
        },
        Err(e) => {
            warn!("exit '{direction}' from '{leaving}' is broken: {e}");
            view.push(ViewItem::Error(format!("The way {direction} seems to lead nowhere.")));
            return Ok(());
        },
    }

    check_conditions(world, view)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Room,
        condition::{LoseCondition, RoomConditions},
        world::SessionStatus,
    };

    fn world() -> World {
        let hall = Room::new("hall", "A hall.")
            .with_exit("north", "pit")
            .with_exit("east", "den")
            .with_exit("west", "void");
        let den = Room::new("den", "A den.").with_exit("west", "hall");
        let pit = Room::new("pit", "A pit.").with_conditions(RoomConditions {
            win: None,
            lose: Some(LoseCondition {
                message: "You fall.".into(),
            }),
        });
        World::new([hall, den, pit], "hall").unwrap()
    }

    #[test]
    fn moving_through_an_exit_shows_the_new_room() {
        let mut world = world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, "east").unwrap();
        assert_eq!(world.current_room().unwrap().name, "den");
        assert_eq!(
            view.items()[0],
            ViewItem::RoomDescription {
                name: "den".into(),
                description: "A den.".into()
            }
        );
        assert!(world.is_running());
    }

    #[test]
    fn missing_exit_keeps_player_in_place() {
        let mut world = world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, "south").unwrap();
        assert_eq!(world.current_room().unwrap().name, "hall");
        assert_eq!(
            view.items(),
            &[ViewItem::ActionFailure("There's no way to go south.".into())]
        );
    }

    #[test]
    fn broken_exit_is_reported_not_followed() {
        // bypasses load-time validation on purpose
        let mut world = world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, "west").unwrap();
        assert_eq!(world.current_room().unwrap().name, "hall");
        assert!(view.items()[0].is_error());
    }

    #[test]
    fn arriving_evaluates_conditions() {
        let mut world = world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, "north").unwrap();
        assert_eq!(world.status(), SessionStatus::Lost);
        assert_eq!(view.items().last(), Some(&ViewItem::Defeat("You fall.".into())));
    }
}
