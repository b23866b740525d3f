//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`World`].
//! [`Session`] holds everything that lives across turns, so the loop itself
//! only reads lines, feeds them in, and flushes the view.

mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::loader::settings::Settings;
use crate::style::GameStyle;
use crate::world::{SessionStatus, World};
use crate::{View, ViewItem};

use anyhow::Result;
use log::{info, warn};

use input::InputManager;
pub use input::InputEvent;

/// Consecutive end-of-input reads tolerated before the session is closed.
pub const MAX_IDLE_READS: usize = 3;

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// A game in progress: the world plus any question still waiting for an answer.
#[derive(Debug, Clone)]
pub struct Session {
    pub world: World,
    pending: Option<PendingChoice>,
    idle_reads: usize,
}

impl Session {
    pub fn new(world: World) -> Self {
        Self {
            world,
            pending: None,
            idle_reads: 0,
        }
    }

    /// True if the next line will be read as the answer to a disambiguation question.
    pub fn awaiting_choice(&self) -> bool {
        self.pending.is_some()
    }

    /// Prompt to show before the next line of input.
    pub fn prompt<'a>(&self, settings: &'a Settings) -> &'a str {
        if self.awaiting_choice() {
            &settings.choice_prompt
        } else {
            &settings.prompt
        }
    }

    /// Process one line of player input.
    ///
    /// If a disambiguation question is pending, the line answers it and is not
    /// parsed as a command. Once the session has ended, input is ignored.
    ///
    /// # Errors
    /// - propagates handler failures, which only arise from a corrupted world
    pub fn submit(&mut self, view: &mut View, line: &str) -> Result<ReplControl> {
        #[allow(clippy::enum_glob_use)]
        use Command::*;

        if !self.world.is_running() {
            warn!("input '{line}' ignored: session already ended as {:?}", self.world.status());
            return Ok(ReplControl::Quit);
        }

        if let Some(pending) = self.pending.take() {
            choose_handler(&mut self.world, view, &pending, line)?;
            return Ok(self.control());
        }

        let command = parse_command(line);
        info!("command: {command:?}");
        match command {
            Empty => {},
            Go(direction) => move_to_handler(&mut self.world, view, &direction)?,
            Look => look_handler(&self.world, view)?,
            Get(phrase) => self.pending = get_handler(&mut self.world, view, &phrase)?,
            Drop(name) => drop_handler(&mut self.world, view, &name)?,
            Inventory => inv_handler(&self.world, view),
            Items => items_handler(&self.world, view)?,
            Exits => exits_handler(&self.world, view)?,
            Help => help_handler(view),
            Quit => return Ok(quit_handler(&mut self.world, view)),
            Incomplete(verb) => incomplete_handler(view, verb),
            Unknown(word) => unknown_handler(view, &word),
        }
        Ok(self.control())
    }

    /// Process one read from the terminal.
    ///
    /// End of input is recoverable: the player is reminded how to leave, and
    /// only after `MAX_IDLE_READS` in a row does the session end as `Quit`.
    /// Ctrl-C cancels the current line. Any line resets the count.
    ///
    /// # Errors
    /// - propagates failures from [`Session::submit`]
    pub fn handle_input(&mut self, view: &mut View, event: InputEvent) -> Result<ReplControl> {
        match event {
            InputEvent::Line(line) => {
                self.idle_reads = 0;
                self.submit(view, &line)
            },
            InputEvent::Eof => Ok(self.end_of_input(view)),
            InputEvent::Interrupted => {
                self.idle_reads = 0;
                view.push(ViewItem::EngineMessage("Command canceled.".into()));
                Ok(self.control())
            },
        }
    }

    fn end_of_input(&mut self, view: &mut View) -> ReplControl {
        if !self.world.is_running() {
            return ReplControl::Quit;
        }
        self.idle_reads += 1;
        if self.idle_reads >= MAX_IDLE_READS {
            info!("no input after {} attempts; closing session", self.idle_reads);
            return quit_handler(&mut self.world, view);
        }
        view.push(ViewItem::EngineMessage("Use 'quit' to exit.".into()));
        ReplControl::Continue
    }

    fn control(&self) -> ReplControl {
        if self.world.is_running() {
            ReplControl::Continue
        } else {
            ReplControl::Quit
        }
    }
}

/// Run the main read–eval–print loop until the session ends.
///
/// Shows the starting room, then reads and dispatches commands until the player
/// wins, loses, or quits. Returns the final status.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(world: World, settings: &Settings) -> Result<SessionStatus> {
    let mut view = View::new();
    let mut session = Session::new(world);
    let mut input_manager = InputManager::new();

    look_handler(&session.world, &mut view)?;
    view.flush();

    while session.world.is_running() {
        let prompt = session.prompt(settings).prompt_style().to_string();

        let input_event = match input_manager.read_line(&prompt) {
            Ok(event) => event,
            Err(err) => {
                warn!("failed to read input: {err}");
                view.push(ViewItem::Error("Failed to read input. Try again.".into()));
                InputEvent::Eof
            },
        };

        let control = session.handle_input(&mut view, input_event)?;
        view.flush();
        if control == ReplControl::Quit {
            break;
        }
    }
    Ok(session.world.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Room;

    fn session() -> Session {
        let hall = Room::new("hall", "A hall.").with_item("lamp");
        Session::new(World::new([hall], "hall").unwrap())
    }

    fn messages(view: &mut View) -> Vec<String> {
        view.take_items().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn end_of_input_reminds_then_quits() {
        let mut session = session();
        let mut view = View::new();
        for _ in 1..MAX_IDLE_READS {
            let control = session.handle_input(&mut view, InputEvent::Eof).unwrap();
            assert_eq!(control, ReplControl::Continue);
            assert_eq!(messages(&mut view), vec!["Use 'quit' to exit.".to_string()]);
            assert!(session.world.is_running());
        }
        let control = session.handle_input(&mut view, InputEvent::Eof).unwrap();
        assert_eq!(control, ReplControl::Quit);
        assert_eq!(session.world.status(), SessionStatus::Quit);
        assert_eq!(messages(&mut view), vec!["Goodbye!".to_string()]);
    }

    #[test]
    fn a_line_resets_the_end_of_input_count() {
        let mut session = session();
        let mut view = View::new();
        for _ in 1..MAX_IDLE_READS {
            session.handle_input(&mut view, InputEvent::Eof).unwrap();
        }
        session.handle_input(&mut view, InputEvent::Line("look".into())).unwrap();
        for _ in 1..MAX_IDLE_READS {
            session.handle_input(&mut view, InputEvent::Eof).unwrap();
        }
        assert!(session.world.is_running());
    }

    #[test]
    fn interrupt_cancels_only_the_line() {
        let mut session = session();
        let mut view = View::new();
        let control = session.handle_input(&mut view, InputEvent::Interrupted).unwrap();
        assert_eq!(control, ReplControl::Continue);
        assert_eq!(messages(&mut view), vec!["Command canceled.".to_string()]);
        assert!(session.world.is_running());
    }

    #[test]
    fn pending_choice_survives_end_of_input() {
        let hall = Room::new("hall", "").with_item("key").with_item("keycard");
        let mut session = Session::new(World::new([hall], "hall").unwrap());
        let mut view = View::new();
        session.submit(&mut view, "get key").unwrap();
        session.handle_input(&mut view, InputEvent::Eof).unwrap();
        assert!(session.awaiting_choice());
        session.handle_input(&mut view, InputEvent::Line("keycard".into())).unwrap();
        assert!(session.world.inventory().contains("keycard"));
    }
}
