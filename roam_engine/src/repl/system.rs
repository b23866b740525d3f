//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are about the game itself
//! rather than the world: help, quitting, and input the parser rejected.

use crate::command::{Direction, Verb};
use crate::view::HelpEntry;
use crate::world::SessionStatus;
use crate::{ItemHolder, View, ViewItem, World, repl::ReplControl};

use log::info;

/// Quit the game.
pub fn quit_handler(world: &mut World, view: &mut View) -> ReplControl {
    info!("player quit in '{}'", world.player.location);
    info!("ending inventory:");
    world.player.item_names().iter().for_each(|item| info!("- {item}"));

    view.push(ViewItem::Farewell("Goodbye!".into()));
    world.stop(SessionStatus::Quit);
    ReplControl::Quit
}

/// Show the command list.
pub fn help_handler(view: &mut View) {
    let entries = Verb::ALL
        .into_iter()
        .map(|verb| HelpEntry {
            usage: verb.usage().to_string(),
            abbreviations: verb.abbreviations().into_iter().map(str::to_string).collect(),
        })
        .collect();
    view.push(ViewItem::Help(entries));

    let directions: Vec<String> = Direction::ALL
        .into_iter()
        .map(|dir| match dir.abbreviation() {
            Some(abbr) => format!("{dir} ({abbr})"),
            None => dir.to_string(),
        })
        .collect();
    view.push(ViewItem::EngineMessage(format!(
        "A direction on its own also moves you: {}.",
        directions.join(", ")
    )));
}

/// A verb that needs an argument arrived without one.
pub fn incomplete_handler(view: &mut View, verb: Verb) {
    let object = if verb == Verb::Go { "somewhere" } else { "something" };
    view.push(ViewItem::ActionFailure(format!("Sorry, you need to '{verb}' {object}.")));
}

/// The first word wasn't a verb, abbreviation, or direction.
pub fn unknown_handler(view: &mut View, word: &str) {
    info!("unrecognized command word '{word}'");
    view.push(ViewItem::Error(format!("Invalid command: {word}.")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Room;

    #[test]
    fn quit_says_goodbye_and_ends_session() {
        let mut world = World::new([Room::new("a", "")], "a").unwrap();
        let mut view = View::new();
        let control = quit_handler(&mut world, &mut view);
        assert_eq!(control, ReplControl::Quit);
        assert_eq!(world.status(), SessionStatus::Quit);
        assert_eq!(view.items(), &[ViewItem::Farewell("Goodbye!".into())]);
    }

    #[test]
    fn help_lists_every_verb() {
        let mut view = View::new();
        help_handler(&mut view);
        let ViewItem::Help(entries) = &view.items()[0] else {
            panic!("expected help listing first");
        };
        assert_eq!(entries.len(), Verb::ALL.len());
        assert!(entries.iter().any(|e| e.to_string().starts_with("inventory") && e.abbreviations == vec!["inv".to_string()]));
        assert!(view.items()[1].to_string().contains("north (n)"));
    }

    #[test]
    fn rejected_input_messages() {
        let mut view = View::new();
        unknown_handler(&mut view, "dance");
        incomplete_handler(&mut view, Verb::Go);
        incomplete_handler(&mut view, Verb::Drop);
        let text: Vec<String> = view.items().iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            vec![
                "Invalid command: dance.",
                "Sorry, you need to 'go' somewhere.",
                "Sorry, you need to 'drop' something.",
            ]
        );
    }
}
