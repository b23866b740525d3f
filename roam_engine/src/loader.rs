//! Loader utilities for building a `World` from a map file.
//!
//! The map is JSON (see `roam_data::MapDef`). It is validated as a whole before
//! any runtime structure is built, so a world that loads is always sound:
//! unique room names, every exit leading somewhere, a real start room.

pub mod mapdef;
pub mod settings;

use crate::World;
use crate::loader::mapdef::{build_world_from_def, load_mapdef};

use anyhow::{Context, Result, bail};
use log::info;
use roam_data::MapDef;
use std::path::Path;

/// Load the `World` from a JSON map file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world(map_path: &Path) -> Result<World> {
    let mapdef = load_mapdef(map_path).context("while loading map from file")?;
    world_from_mapdef(&mapdef).with_context(|| format!("while building world from '{}'", map_path.display()))
}

/// Validate a parsed map and build the `World` from it.
///
/// # Errors
/// Returns every validation problem at once, or a build failure.
pub fn world_from_mapdef(mapdef: &MapDef) -> Result<World> {
    validate_mapdef(mapdef)?;
    let world = build_world_from_def(mapdef)?;
    info!("{} rooms added to World", world.rooms.len());
    info!(
        "{} items placed in rooms",
        world.rooms.values().map(|room| room.items.len()).sum::<usize>()
    );
    info!("player starts in '{}'", world.player.location);
    Ok(world)
}

/// Validate the map and return a single aggregated error.
fn validate_mapdef(def: &MapDef) -> Result<()> {
    let errors = roam_data::validate_map(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("map validation failed:\n{details}");
}
