//! Command module
//!
//! Turns one line of player input into a [`Command`]. The vocabulary is fixed:
//! nine verbs, ten directions, and a small table of abbreviations.
use std::fmt;

use variantly::Variantly;

/// The canonical verbs the engine understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Verb {
    Go,
    Look,
    Get,
    Drop,
    Inventory,
    Items,
    Exits,
    Help,
    Quit,
}

impl Verb {
    pub const ALL: [Verb; 9] = [
        Verb::Go,
        Verb::Look,
        Verb::Get,
        Verb::Drop,
        Verb::Inventory,
        Verb::Items,
        Verb::Exits,
        Verb::Help,
        Verb::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Look => "look",
            Verb::Get => "get",
            Verb::Drop => "drop",
            Verb::Inventory => "inventory",
            Verb::Items => "items",
            Verb::Exits => "exits",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    /// One-line usage shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Verb::Go => "go <direction>: move through an exit of the current room",
            Verb::Look => "look: describe the current room again",
            Verb::Get => "get <item>: pick up an item lying here",
            Verb::Drop => "drop <item>: put down an item you're carrying",
            Verb::Inventory => "inventory: list what you're carrying",
            Verb::Items => "items: list the items lying here",
            Verb::Exits => "exits: list the ways out of this room",
            Verb::Help => "help: show this list",
            Verb::Quit => "quit: leave the game",
        }
    }

    /// Abbreviations that resolve to this verb.
    pub fn abbreviations(self) -> Vec<&'static str> {
        VERB_ABBREVIATIONS
            .iter()
            .filter(|(_, expansions)| expansions.first() == Some(&self))
            .map(|(abbr, _)| *abbr)
            .collect()
    }

    fn from_word(word: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.name() == word)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abbreviation -> candidate verbs. When more than one verb is listed, the first one wins.
pub const VERB_ABBREVIATIONS: &[(&str, &[Verb])] = &[
    ("g", &[Verb::Get, Verb::Go]),
    ("i", &[Verb::Items, Verb::Inventory]),
    ("inv", &[Verb::Inventory]),
];

/// Compass and vertical directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 10] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
        Direction::Up,
        Direction::Down,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Northeast => "northeast",
            Direction::Northwest => "northwest",
            Direction::Southeast => "southeast",
            Direction::Southwest => "southwest",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn abbreviation(self) -> Option<&'static str> {
        match self {
            Direction::North => Some("n"),
            Direction::South => Some("s"),
            Direction::East => Some("e"),
            Direction::West => Some("w"),
            Direction::Northeast => Some("ne"),
            Direction::Northwest => Some("nw"),
            Direction::Southeast => Some("se"),
            Direction::Southwest => Some("sw"),
            Direction::Up | Direction::Down => None,
        }
    }

    /// Parse a full direction word or its abbreviation.
    pub fn parse(word: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.name() == word || dir.abbreviation() == Some(word))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Blank line: nothing to do.
    Empty,
    Go(String),
    Look,
    Get(String),
    Drop(String),
    Inventory,
    Items,
    Exits,
    Help,
    Quit,
    /// A verb that needs an argument was given none.
    Incomplete(Verb),
    Unknown(String),
}

/// Parses an input line and returns the corresponding `Command`.
///
/// Input is trimmed and lowercased first. A bare direction (or its
/// abbreviation) means `go <direction>`. Arguments are the remaining words
/// joined by single spaces, so multi-word item names survive.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((first, rest)) = words.split_first() else {
        return Command::Empty;
    };
    let argument = rest.join(" ");

    let verb = match resolve_verb(first) {
        Some(verb) => verb,
        None => {
            if let Some(dir) = Direction::parse(first) {
                return Command::Go(dir.name().to_string());
            }
            return Command::Unknown((*first).to_string());
        },
    };

    match verb {
        Verb::Go | Verb::Get | Verb::Drop if argument.is_empty() => Command::Incomplete(verb),
        Verb::Go => Command::Go(
            Direction::parse(&argument).map_or(argument, |dir| dir.name().to_string()),
        ),
        Verb::Get => Command::Get(argument),
        Verb::Drop => Command::Drop(argument),
        Verb::Look => Command::Look,
        Verb::Inventory => Command::Inventory,
        Verb::Items => Command::Items,
        Verb::Exits => Command::Exits,
        Verb::Help => Command::Help,
        Verb::Quit => Command::Quit,
    }
}

/// Resolve a word to a verb: abbreviations first, then full verb names.
fn resolve_verb(word: &str) -> Option<Verb> {
    VERB_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == word)
        .and_then(|(_, expansions)| expansions.first().copied())
        .or_else(|| Verb::from_word(word))
}

/// Every word the parser recognizes in first position, for completion.
pub fn vocabulary() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = Verb::ALL.iter().map(|verb| verb.name()).collect();
    words.extend(VERB_ABBREVIATIONS.iter().map(|(abbr, _)| *abbr));
    for dir in Direction::ALL {
        words.push(dir.name());
        words.extend(dir.abbreviation());
    }
    words.sort_unstable();
    words.dedup();
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_lines_are_no_ops() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   \t "), Command::Empty);
    }

    #[test]
    fn full_verbs_parse() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("items"), Command::Items);
        assert_eq!(parse_command("exits"), Command::Exits);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        assert_eq!(parse_command("  GET   Rusty   Key  "), Command::Get("rusty key".into()));
        assert_eq!(parse_command("LOOK"), Command::Look);
    }

    #[test]
    fn multi_expansion_abbreviations_take_first_choice() {
        assert_eq!(parse_command("g lamp"), Command::Get("lamp".into()));
        assert_eq!(parse_command("i"), Command::Items);
        assert_eq!(parse_command("inv"), Command::Inventory);
    }

    #[test]
    fn bare_directions_mean_go() {
        assert_eq!(parse_command("n"), Command::Go("north".into()));
        assert_eq!(parse_command("southwest"), Command::Go("southwest".into()));
        assert_eq!(parse_command("up"), Command::Go("up".into()));
    }

    #[test]
    fn go_expands_direction_abbreviations() {
        assert_eq!(parse_command("go ne"), Command::Go("northeast".into()));
        assert_eq!(parse_command("go west"), Command::Go("west".into()));
        // free-text exit labels pass through
        assert_eq!(parse_command("go trap door"), Command::Go("trap door".into()));
    }

    #[test]
    fn verbs_needing_arguments_report_incomplete() {
        assert_eq!(parse_command("go"), Command::Incomplete(Verb::Go));
        assert_eq!(parse_command("get"), Command::Incomplete(Verb::Get));
        assert_eq!(parse_command("drop"), Command::Incomplete(Verb::Drop));
    }

    #[test]
    fn unknown_verbs_are_reported() {
        assert_eq!(parse_command("dance wildly"), Command::Unknown("dance".into()));
        assert_eq!(parse_command("u"), Command::Unknown("u".into()));
    }

    #[test]
    fn abbreviations_are_listed_per_verb() {
        assert_eq!(Verb::Get.abbreviations(), vec!["g"]);
        assert_eq!(Verb::Inventory.abbreviations(), vec!["inv"]);
        assert_eq!(Verb::Items.abbreviations(), vec!["i"]);
        assert!(Verb::Go.abbreviations().is_empty());
        assert!(Verb::Quit.abbreviations().is_empty());
    }

    #[test]
    fn vocabulary_covers_verbs_and_directions() {
        let words = vocabulary();
        assert!(words.contains(&"inventory"));
        assert!(words.contains(&"nw"));
        assert!(words.contains(&"g"));
        assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
