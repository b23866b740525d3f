//! Win / lose conditions attached to rooms.
//!
//! Conditions are evaluated, never consumed: they are read fresh from the
//! player's current room every time the player moves or picks something up.

use crate::{ItemHolder, View, ViewItem, World, world::SessionStatus};

use anyhow::Result;
use log::info;
use roam_data::ConditionsDef;

/// Player wins here while holding `item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinCondition {
    pub item: String,
    pub message: String,
}

/// Player loses on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoseCondition {
    pub message: String,
}

/// Conditions for a single room. Either or both may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomConditions {
    pub win: Option<WinCondition>,
    pub lose: Option<LoseCondition>,
}

/// Result of a condition that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won(String),
    Lost(String),
}
impl Outcome {
    /// Terminal session status this outcome puts the world in.
    pub fn status(&self) -> SessionStatus {
        match self {
            Outcome::Won(_) => SessionStatus::Won,
            Outcome::Lost(_) => SessionStatus::Lost,
        }
    }
}

impl From<&ConditionsDef> for RoomConditions {
    fn from(def: &ConditionsDef) -> Self {
        Self {
            win: def.win.as_ref().map(|win| WinCondition {
                item: win.item.clone(),
                message: win.message.clone(),
            }),
            lose: def.lose.as_ref().map(|lose| LoseCondition {
                message: lose.message.clone(),
            }),
        }
    }
}

impl RoomConditions {
    /// Returns the outcome that applies given what `holder` is carrying, if any.
    ///
    /// Win is checked first, so a room carrying both conditions can still be won.
    pub fn evaluate(&self, holder: &impl ItemHolder) -> Option<Outcome> {
        if let Some(win) = &self.win
            && holder.contains_item(&win.item)
        {
            return Some(Outcome::Won(win.message.clone()));
        }
        self.lose.as_ref().map(|lose| Outcome::Lost(lose.message.clone()))
    }
}

/// Evaluate the current room's conditions and end the session if one fires.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn check_conditions(world: &mut World, view: &mut View) -> Result<Option<Outcome>> {
    if !world.is_running() {
        return Ok(None);
    }
    let room = world.current_room()?;
    let Some(outcome) = room.conditions.evaluate(&world.player) else {
        return Ok(None);
    };
    info!("condition fired in '{}': {:?}", room.name, outcome);

    world.stop(outcome.status());
    match &outcome {
        Outcome::Won(message) => view.push(ViewItem::Victory(message.clone())),
        Outcome::Lost(message) => view.push(ViewItem::Defeat(message.clone())),
    }
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn conditions(win_item: Option<&str>, lose: bool) -> RoomConditions {
        RoomConditions {
            win: win_item.map(|item| WinCondition {
                item: item.to_string(),
                message: "won".into(),
            }),
            lose: lose.then(|| LoseCondition { message: "lost".into() }),
        }
    }

    #[test]
    fn no_conditions_never_fire() {
        let player = Player::new("hall");
        assert_eq!(RoomConditions::default().evaluate(&player), None);
    }

    #[test]
    fn win_requires_the_item() {
        let mut player = Player::new("hall");
        let room = conditions(Some("crown"), false);
        assert_eq!(room.evaluate(&player), None);
        player.add_item("crown");
        assert_eq!(room.evaluate(&player), Some(Outcome::Won("won".into())));
    }

    #[test]
    fn lose_fires_unconditionally() {
        let player = Player::new("pit");
        assert_eq!(
            conditions(None, true).evaluate(&player),
            Some(Outcome::Lost("lost".into()))
        );
    }

    #[test]
    fn win_takes_priority_over_lose() {
        let mut player = Player::new("bridge");
        let room = conditions(Some("amulet"), true);
        assert_eq!(room.evaluate(&player), Some(Outcome::Lost("lost".into())));
        player.add_item("amulet");
        assert_eq!(room.evaluate(&player), Some(Outcome::Won("won".into())));
    }

    #[test]
    fn outcomes_map_to_terminal_statuses() {
        assert_eq!(Outcome::Won("w".into()).status(), SessionStatus::Won);
        assert_eq!(Outcome::Lost("l".into()).status(), SessionStatus::Lost);
        assert!(Outcome::Lost(String::new()).status().is_terminal());
    }

    #[test]
    fn converts_from_map_definition() {
        let def = ConditionsDef {
            win: Some(roam_data::WinDef {
                item: "key".into(),
                message: "free".into(),
            }),
            lose: None,
        };
        let conditions = RoomConditions::from(&def);
        assert_eq!(conditions.win.map(|w| w.item), Some("key".to_string()));
        assert!(conditions.lose.is_none());
    }
}
