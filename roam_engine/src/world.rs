//! Data structures representing the game world.
//!
//! This module defines [`World`] and related types used at runtime to
//! track the current state of the adventure.

use crate::{ItemHolder, Player, Room};

use log::{info, warn};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use variantly::Variantly;

/// Places an item can be: lying in a named room or carried by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Location {
    Inventory,
    Room(String),
}

/// Where the session stands. Every state other than `Running` is terminal.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Variantly)]
pub enum SessionStatus {
    #[default]
    Running,
    Won,
    Lost,
    Quit,
}
impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        self != SessionStatus::Running
    }
}

/// Failures of world-level operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("no room named '{0}' to move to")]
    InvalidExit(String),
    #[error("no room named '{0}' in the world")]
    UnknownRoom(String),
    #[error("'{item}' is not at {from:?}")]
    ItemNotFound { item: String, from: Location },
    #[error("'{0}' is already in the inventory")]
    AlreadyHeld(String),
}

/// Complete state of the running game.
///
/// The room graph (names, descriptions, exits, conditions) is fixed once the
/// world is built. Only item placement, the player's location and the
/// session status change afterwards.
#[derive(Debug, Clone)]
pub struct World {
    pub rooms: HashMap<String, Room>,
    pub player: Player,
    status: SessionStatus,
}
impl World {
    /// Build a world from its rooms with the player standing in `start`.
    ///
    /// # Errors
    /// - if `start` does not name one of the rooms
    pub fn new(rooms: impl IntoIterator<Item = Room>, start: &str) -> Result<World, WorldError> {
        let rooms: HashMap<String, Room> = rooms.into_iter().map(|room| (room.name.clone(), room)).collect();
        if !rooms.contains_key(start) {
            return Err(WorldError::UnknownRoom(start.to_string()));
        }
        info!("new World created with {} rooms, starting in '{start}'", rooms.len());
        Ok(Self {
            rooms,
            player: Player::new(start),
            status: SessionStatus::Running,
        })
    }

    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room is not in the world
    pub fn current_room(&self) -> Result<&Room, WorldError> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| WorldError::UnknownRoom(self.player.location.clone()))
    }

    /// Move the player to the named room.
    ///
    /// # Errors
    /// - `InvalidExit` if no room has that name; the player stays put
    pub fn move_to(&mut self, room_name: &str) -> Result<&Room, WorldError> {
        let Some(room) = self.rooms.get(room_name) else {
            return Err(WorldError::InvalidExit(room_name.to_string()));
        };
        self.player.location = room.name.clone();
        Ok(room)
    }

    /// Items the player is carrying.
    pub fn inventory(&self) -> &BTreeSet<String> {
        &self.player.inventory
    }

    /// Move one `item` from `from` to `to` as a single step.
    ///
    /// All checks run before anything is touched, so on error neither location
    /// has changed. On success the item is in `to` and no longer in `from`.
    ///
    /// # Errors
    /// - `UnknownRoom` if either location names a room that doesn't exist
    /// - `ItemNotFound` if `from` doesn't hold the item
    /// - `AlreadyHeld` if `to` is the inventory and it already holds the item
    pub fn transfer(&mut self, item: &str, from: &Location, to: &Location) -> Result<(), WorldError> {
        if !self.holder(from)?.contains_item(item) {
            return Err(WorldError::ItemNotFound {
                item: item.to_string(),
                from: from.clone(),
            });
        }
        let destination = self.holder(to)?;
        if from == to {
            return Ok(());
        }
        if to.is_inventory() && destination.contains_item(item) {
            return Err(WorldError::AlreadyHeld(item.to_string()));
        }

        self.holder_mut(from)?.remove_item(item);
        match self.holder_mut(to) {
            Ok(destination) => destination.add_item(item),
            Err(e) => {
                // unreachable after the checks above, but never lose the item
                warn!("transfer of '{item}' failed mid-way ({e}); returning it to {from:?}");
                self.holder_mut(from)?.add_item(item);
                return Err(e);
            },
        }
        info!("'{item}' moved from {from:?} to {to:?}");
        Ok(())
    }

    /// Whether the session still accepts commands.
    pub fn is_running(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// End the session with a terminal `status`. The first terminal status sticks.
    pub fn stop(&mut self, status: SessionStatus) {
        if self.status.is_terminal() {
            warn!("session already ended as {:?}; ignoring {status:?}", self.status);
            return;
        }
        info!("session ended: {status:?}");
        self.status = status;
    }

    fn holder(&self, location: &Location) -> Result<&dyn ItemHolder, WorldError> {
        match location {
            Location::Inventory => Ok(&self.player),
            Location::Room(name) => self
                .rooms
                .get(name)
                .map(|room| room as &dyn ItemHolder)
                .ok_or_else(|| WorldError::UnknownRoom(name.clone())),
        }
    }

    fn holder_mut(&mut self, location: &Location) -> Result<&mut dyn ItemHolder, WorldError> {
        match location {
            Location::Inventory => Ok(&mut self.player),
            Location::Room(name) => self
                .rooms
                .get_mut(name)
                .map(|room| room as &mut dyn ItemHolder)
                .ok_or_else(|| WorldError::UnknownRoom(name.clone())),
        }
    }
}
