//! Reading map files and turning their definitions into runtime rooms.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use roam_data::MapDef;

use crate::{Room, World};

/// Read and parse a JSON map file.
///
/// # Errors
/// - on file IO error or malformed JSON
pub fn load_mapdef(path: &Path) -> Result<MapDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading map from '{}'", path.display()))?;
    parse_mapdef(&text).with_context(|| format!("parsing map JSON from '{}'", path.display()))
}

/// Parse map JSON text.
///
/// # Errors
/// - on malformed JSON or missing required fields
pub fn parse_mapdef(text: &str) -> Result<MapDef> {
    Ok(serde_json::from_str(text)?)
}

/// Convert an already-validated `MapDef` into a `World`.
///
/// # Errors
/// - if the start room is not among the rooms
pub fn build_world_from_def(def: &MapDef) -> Result<World> {
    let rooms = def.rooms.iter().map(Room::from);
    World::new(rooms, &def.start).context("while placing the player in the start room")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HOUSE: &str = r#"{
        "start": "porch",
        "rooms": [
            { "name": "porch", "desc": "A creaky porch.", "exits": { "in": "parlor" } },
            { "name": "parlor", "desc": "Dusty chairs.", "exits": { "out": "porch" }, "items": ["candle"] }
        ]
    }"#;

    #[test]
    fn parses_and_builds_world() {
        let def = parse_mapdef(HOUSE).unwrap();
        let world = build_world_from_def(&def).unwrap();
        assert_eq!(world.rooms.len(), 2);
        assert_eq!(world.current_room().unwrap().name, "porch");
        assert_eq!(world.rooms["parlor"].items, vec!["candle".to_string()]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_mapdef("{ \"start\": ").is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HOUSE.as_bytes()).unwrap();
        let def = load_mapdef(file.path()).unwrap();
        assert_eq!(def.start, "porch");
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_mapdef(Path::new("no/such/map.json")).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/map.json"));
    }
}
