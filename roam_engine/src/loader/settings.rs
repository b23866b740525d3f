//! Player-facing settings and their loader.
//!
//! Settings live in an optional `settings.toml` next to the map data. A missing
//! or unreadable file is not an error: the defaults below are used instead.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Complete settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prompt shown before each command.
    pub prompt: String,
    /// Prompt shown while waiting for the player to pick between similar items.
    pub choice_prompt: String,
    /// Set to false to disable ANSI colors.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: "What would you like to do? ".to_string(),
            choice_prompt: "Which one? ".to_string(),
            color: true,
        }
    }
}

/// Parse settings from TOML text.
///
/// # Errors
/// - on TOML syntax or type errors
pub fn parse_settings(text: &str) -> Result<Settings> {
    toml::from_str(text).context("parsing settings TOML")
}

/// Load settings from `toml_path`, falling back to defaults if it is missing or invalid.
pub fn load_settings(toml_path: &Path) -> Settings {
    if !toml_path.exists() {
        info!("no settings file at '{}', using defaults", toml_path.display());
        return Settings::default();
    }
    match fs::read_to_string(toml_path)
        .with_context(|| format!("reading settings from '{}'", toml_path.display()))
        .and_then(|text| parse_settings(&text))
    {
        Ok(settings) => {
            info!("settings loaded from '{}'", toml_path.display());
            settings
        },
        Err(e) => {
            warn!("failed to load settings ({e:#}), using defaults");
            Settings::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = parse_settings("color = false").unwrap();
        assert!(!settings.color);
        assert_eq!(settings.prompt, Settings::default().prompt);
    }

    #[test]
    fn bad_types_are_rejected() {
        assert!(parse_settings("color = \"sometimes\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        assert_eq!(load_settings(Path::new("no/such/settings.toml")), Settings::default());
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"prompt = [").unwrap();
        assert_eq!(load_settings(file.path()), Settings::default());
    }

    #[test]
    fn valid_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"prompt = \"> \"\nchoice_prompt = \"which? \"").unwrap();
        let settings = load_settings(file.path());
        assert_eq!(settings.prompt, "> ");
        assert_eq!(settings.choice_prompt, "which? ");
        assert!(settings.color);
    }
}
