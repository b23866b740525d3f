#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Roam **
//! Walk a map of rooms, pick things up, and find the way out.

use roam_engine::data_paths::{data_path, resolve_map_path};
use roam_engine::loader::settings::load_settings;
use roam_engine::{ROAM_VERSION, SessionStatus, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let settings = load_settings(&data_path("settings.toml"));
    if !settings.color {
        colored::control::set_override(false);
    }

    let map_path = resolve_map_path(std::env::args().nth(1));
    info!("Start: loading world from '{}'...", map_path.display());
    let world = match load_world(&map_path) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("{} {err:#}", "Could not load the map:".red().bold());
            return Ok(ExitCode::from(1));
        },
    };
    info!("World loaded successfully.");

    println!("{}\n", format!("ROAM v{ROAM_VERSION}").bright_yellow().underline());
    let status = run_repl(world, &settings).context("while running the game")?;
    info!("game over: {status:?}");
    Ok(exit_code(status))
}

/// Process exit code for how the session ended.
fn exit_code(status: SessionStatus) -> ExitCode {
    match status {
        SessionStatus::Lost => ExitCode::from(2),
        SessionStatus::Won | SessionStatus::Quit | SessionStatus::Running => ExitCode::SUCCESS,
    }
}
