use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room names double as identifiers throughout a map.
pub type RoomName = String;

/// Top-level map data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MapDef {
    pub start: RoomName,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RoomDef {
    pub name: RoomName,
    pub desc: String,
    /// Direction label -> target room name.
    #[serde(default)]
    pub exits: BTreeMap<String, RoomName>,
    /// Items lying in the room at start. Repeated names are allowed.
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub conditions: ConditionsDef,
}

/// Optional end-of-game conditions attached to a room.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConditionsDef {
    #[serde(default)]
    pub win: Option<WinDef>,
    #[serde(default)]
    pub lose: Option<LoseDef>,
}

impl ConditionsDef {
    pub fn is_empty(&self) -> bool {
        self.win.is_none() && self.lose.is_none()
    }
}

/// Player wins on entering the room (or picking up the item there) while holding `item`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinDef {
    pub item: String,
    pub message: String,
}

/// Player loses as soon as they enter the room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoseDef {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_room_fields_default() {
        let json = r#"{ "start": "hall", "rooms": [ { "name": "hall", "desc": "A hall." } ] }"#;
        let map: MapDef = serde_json::from_str(json).unwrap();
        let hall = &map.rooms[0];
        assert!(hall.exits.is_empty());
        assert!(hall.items.is_empty());
        assert!(hall.conditions.is_empty());
    }

    #[test]
    fn conditions_parse_from_json() {
        let json = r#"{
            "name": "vault",
            "desc": "A vault.",
            "exits": { "south": "hall" },
            "items": ["coin", "coin"],
            "conditions": {
                "win": { "item": "key", "message": "You escape!" },
                "lose": { "message": "The floor gives way." }
            }
        }"#;
        let room: RoomDef = serde_json::from_str(json).unwrap();
        assert_eq!(room.exits.get("south").map(String::as_str), Some("hall"));
        assert_eq!(room.items, vec!["coin".to_string(), "coin".to_string()]);
        assert_eq!(room.conditions.win.as_ref().map(|w| w.item.as_str()), Some("key"));
        assert_eq!(
            room.conditions.lose.as_ref().map(|l| l.message.as_str()),
            Some("The floor gives way.")
        );
    }

    #[test]
    fn missing_start_is_a_parse_error() {
        let json = r#"{ "rooms": [] }"#;
        assert!(serde_json::from_str::<MapDef>(json).is_err());
    }
}
