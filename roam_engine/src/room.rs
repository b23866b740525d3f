//! Room definitions.
//!
//! Any location the player can stand in is a "Room", whether it's a closet
//! or a canyon. The exits and conditions of a room never change once loaded;
//! only the items lying in it do.

use crate::{ItemHolder, View, ViewItem, command::Direction, condition::RoomConditions};

use roam_data::RoomDef;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Direction label -> target room name.
    pub exits: BTreeMap<String, String>,
    /// Items lying here. A room may hold several items of the same name.
    pub items: Vec<String>,
    pub conditions: RoomConditions,
}

impl From<&RoomDef> for Room {
    fn from(def: &RoomDef) -> Self {
        Self {
            name: def.name.clone(),
            description: def.desc.clone(),
            exits: def.exits.clone(),
            items: def.items.clone(),
            conditions: RoomConditions::from(&def.conditions),
        }
    }
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to add an exit.
    pub fn with_exit(mut self, direction: &str, to: &str) -> Self {
        self.exits.insert(direction.to_string(), to.to_string());
        self
    }

    /// Builder-style helper to place an item.
    pub fn with_item(mut self, item: &str) -> Self {
        self.items.push(item.to_string());
        self
    }

    /// Builder-style helper to attach conditions.
    pub fn with_conditions(mut self, conditions: RoomConditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Name of the room reached by going `direction`, if there's an exit that way.
    ///
    /// A label spelled the same (ignoring ASCII case) wins. Otherwise a label
    /// naming the same compass direction matches, so an exit keyed "n" is
    /// followed by "north" and vice versa.
    pub fn exit_to(&self, direction: &str) -> Option<&str> {
        let by_text = self.exits.iter().find(|(label, _)| label.eq_ignore_ascii_case(direction));
        let by_direction = || {
            let wanted = Direction::parse(&direction.to_lowercase())?;
            self.exits
                .iter()
                .find(|(label, _)| Direction::parse(&label.to_lowercase()) == Some(wanted))
        };
        by_text.or_else(by_direction).map(|(_, target)| target.as_str())
    }

    /// Exit direction labels in display order.
    pub fn exit_labels(&self) -> Vec<String> {
        self.exits.keys().cloned().collect()
    }

    /// Push the full room view: name and description, items, and exits.
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });
        self.show_items(view);
        self.show_exits(view);
    }

    /// Push the list of items in the room (nothing when the room is empty).
    pub fn show_items(&self, view: &mut View) {
        if !self.items.is_empty() {
            view.push(ViewItem::RoomItems(self.item_names()));
        }
    }

    /// Push the list of exit labels.
    pub fn show_exits(&self, view: &mut View) {
        view.push(ViewItem::RoomExits(self.exit_labels()));
    }
}

impl ItemHolder for Room {
    fn add_item(&mut self, item: &str) {
        self.items.push(item.to_string());
    }

    fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|held| held == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    fn contains_item(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    fn item_names(&self) -> Vec<String> {
        self.items.clone()
    }
}
