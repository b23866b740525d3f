//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.
use std::fmt;

use colored::Colorize;
use log::debug;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::item::list_with_articles;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_CHOICE: &str = "?";
const ICON_CELEBRATE: &str = "🎉"; // U+1F389
const ICON_ENGINE: &str = "⚙";
const ICON_DEATH: &str = "☠";

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone, Default)]
pub struct View {
    items: Vec<ViewItem>,
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ViewItem) {
        debug!("view <- {item}");
        self.items.push(item);
    }

    /// Items queued for the current frame, in push order.
    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    /// Remove and return everything queued so far.
    pub fn take_items(&mut self) -> Vec<ViewItem> {
        std::mem::take(&mut self.items)
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let width = termwidth().min(100);
        let items = self.take_items();

        let environment: Vec<&ViewItem> = items.iter().filter(|i| i.section() == Section::Environment).collect();
        let direct: Vec<&ViewItem> = items.iter().filter(|i| i.section() == Section::DirectResult).collect();
        let ending: Vec<&ViewItem> = items.iter().filter(|i| i.section() == Section::Ending).collect();
        let system: Vec<&ViewItem> = items.iter().filter(|i| i.section() == Section::System).collect();

        // First Section: Environment / Frame of Reference
        if !environment.is_empty() {
            println!("{:.>width$}\n", "scene".section_style());
            environment.iter().for_each(|item| render(item));
        }
        // Second Section: Immediate / direct results of player command
        if !direct.is_empty() {
            println!("{:.>width$}\n", "results".section_style());
            direct.iter().for_each(|item| render(item));
        }
        // Third Section: game over
        if !ending.is_empty() {
            println!("{:.>width$}\n", "the end".section_style());
            ending.iter().for_each(|item| render(item));
        }
        // Fourth Section: System messages (help, quit, input problems)
        if !system.is_empty() {
            println!("{:.>width$}\n", "game".section_style());
            system.iter().for_each(|item| render(item));
        }
        println!();
    }
}

/// Print a single item with its styling.
fn render(item: &ViewItem) {
    match item {
        ViewItem::RoomDescription { name, description } => {
            println!("{}", name.room_titlebar_style());
            println!("{}\n", fill(description, normal_block()).description_style());
        },
        ViewItem::RoomItems(items) if items.is_empty() => {
            println!("{}\n", "There's nothing here.".italic());
        },
        ViewItem::RoomItems(items) => {
            println!("{}", "You see:".subheading_style());
            for item in items {
                println!("{}", fill(&format!("- {}", item.item_style()), indented_block()));
            }
            println!();
        },
        ViewItem::RoomExits(exits) => {
            if exits.is_empty() {
                println!("{}\n", "There is no way out.".denied_style());
            } else {
                let styled: Vec<String> = exits.iter().map(|e| e.exit_style().to_string()).collect();
                println!("{} {}\n", "Exits:".subheading_style(), styled.join(" "));
            }
        },
        ViewItem::Inventory(items) => {
            if items.is_empty() {
                println!("{}\n", "You're not carrying anything.".italic());
            } else {
                println!("{}", "Inventory:".subheading_style());
                for item in items {
                    println!("{}", fill(&format!("- {}", item.item_style()), indented_block()));
                }
                println!();
            }
        },
        ViewItem::ActionSuccess(msg) => {
            println!("{}\n", fill(&format!("{:<4}{msg}", ICON_SUCCESS.green()), normal_block()));
        },
        ViewItem::ActionFailure(msg) => {
            println!("{}\n", fill(&format!("{:<4}{msg}", ICON_FAILURE.red()), normal_block()));
        },
        ViewItem::Error(msg) => {
            println!("{}\n", fill(&format!("{:<4}{}", ICON_ERROR, msg.error_style()), normal_block()));
        },
        ViewItem::ItemChoice { .. } => {
            println!("{}\n", fill(&format!("{:<4}{item}", ICON_CHOICE.bold()), normal_block()));
        },
        ViewItem::Help(entries) => {
            println!("{}", "Commands:".subheading_style());
            for entry in entries {
                println!("{}", fill(&entry.to_string(), indented_block()));
            }
            println!();
        },
        ViewItem::EngineMessage(msg) => {
            println!("{}\n", fill(&format!("{ICON_ENGINE:<4}{msg}"), normal_block()));
        },
        ViewItem::Victory(msg) => {
            println!("{}\n", fill(&format!("{ICON_CELEBRATE:<4}{}", msg.victory_style()), normal_block()));
        },
        ViewItem::Defeat(msg) => {
            println!("{}\n", fill(&format!("{ICON_DEATH:<4}{}", msg.defeat_style()), normal_block()));
        },
        ViewItem::Farewell(msg) => println!("{msg}"),
    }
}

/// Broad grouping of `ViewItem`s, displayed in this order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Environment,
    DirectResult,
    Ending,
    System,
}

/// One line of the help listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub usage: String,
    pub abbreviations: Vec<String>,
}
impl fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.abbreviations.is_empty() {
            write!(f, "{}", self.usage)
        } else {
            write!(f, "{} (short: {})", self.usage, self.abbreviations.join(", "))
        }
    }
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    Defeat(String),
    EngineMessage(String),
    Error(String),
    Farewell(String),
    Help(Vec<HelpEntry>),
    Inventory(Vec<String>),
    ItemChoice { verb: String, candidates: Vec<String> },
    RoomDescription { name: String, description: String },
    RoomExits(Vec<String>),
    RoomItems(Vec<String>),
    Victory(String),
}

impl ViewItem {
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. } | ViewItem::RoomItems(_) | ViewItem::RoomExits(_) => Section::Environment,
            ViewItem::Inventory(_)
            | ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::ItemChoice { .. } => Section::DirectResult,
            ViewItem::Victory(_) | ViewItem::Defeat(_) => Section::Ending,
            ViewItem::Help(_) | ViewItem::EngineMessage(_) | ViewItem::Farewell(_) => Section::System,
        }
    }
}

/// Plain, unstyled text of an item (used for logs and tests).
impl fmt::Display for ViewItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewItem::RoomDescription { name, description } => write!(f, "{name}: {description}"),
            ViewItem::RoomItems(items) if items.is_empty() => write!(f, "There's nothing here."),
            ViewItem::RoomItems(items) => write!(f, "You see: {}", items.join(", ")),
            ViewItem::RoomExits(exits) if exits.is_empty() => write!(f, "There is no way out."),
            ViewItem::RoomExits(exits) => write!(f, "Exits: {}", exits.join(" ")),
            ViewItem::Inventory(items) if items.is_empty() => write!(f, "You're not carrying anything."),
            ViewItem::Inventory(items) => write!(f, "Inventory: {}", items.join(", ")),
            ViewItem::ItemChoice { verb, candidates } => {
                write!(f, "Did you want to {verb} {}?", list_with_articles(candidates, "or"))
            },
            ViewItem::Help(entries) => {
                let lines: Vec<String> = entries.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            },
            ViewItem::ActionFailure(msg)
            | ViewItem::ActionSuccess(msg)
            | ViewItem::Defeat(msg)
            | ViewItem::EngineMessage(msg)
            | ViewItem::Error(msg)
            | ViewItem::Farewell(msg)
            | ViewItem::Victory(msg) => write!(f, "{msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_take_preserve_order() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("one".into()));
        view.push(ViewItem::Error("two".into()));
        assert_eq!(view.items().len(), 2);
        let items = view.take_items();
        assert!(items[0].is_action_success());
        assert!(items[1].is_error());
        assert!(view.items().is_empty());
    }

    #[test]
    fn choice_reads_as_a_question() {
        let item = ViewItem::ItemChoice {
            verb: "get".into(),
            candidates: vec!["key".into(), "keycard".into()],
        };
        assert_eq!(item.to_string(), "Did you want to get the key or the keycard?");
    }

    #[test]
    fn empty_lists_have_friendly_text() {
        assert_eq!(ViewItem::Inventory(Vec::new()).to_string(), "You're not carrying anything.");
        assert_eq!(ViewItem::RoomExits(Vec::new()).to_string(), "There is no way out.");
        assert_eq!(ViewItem::RoomItems(Vec::new()).to_string(), "There's nothing here.");
    }

    #[test]
    fn help_entries_mention_abbreviations() {
        let entry = HelpEntry {
            usage: "inventory: list what you're carrying".into(),
            abbreviations: vec!["i".into(), "inv".into()],
        };
        assert_eq!(entry.to_string(), "inventory: list what you're carrying (short: i, inv)");
    }

    #[test]
    fn sections_group_items() {
        assert_eq!(ViewItem::RoomExits(Vec::new()).section(), Section::Environment);
        assert_eq!(ViewItem::Victory(String::new()).section(), Section::Ending);
        assert_eq!(ViewItem::Farewell(String::new()).section(), Section::System);
        assert_eq!(ViewItem::ActionFailure(String::new()).section(), Section::DirectResult);
    }

    #[test]
    fn flushing_clears_the_frame() {
        colored::control::set_override(false);
        let mut view = View::new();
        view.push(ViewItem::Farewell("Goodbye!".into()));
        view.flush();
        assert!(view.items().is_empty());
    }
}
