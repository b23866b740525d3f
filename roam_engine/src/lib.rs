#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Roam engine: loads a room map and runs a text adventure over it.

pub const ROAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod condition;
pub mod data_paths;
pub mod item;
pub mod item_search;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use item::ItemHolder;
pub use loader::load_world;
pub use player::Player;
pub use repl::{ReplControl, Session, run_repl};
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::{Location, SessionStatus, World, WorldError};
