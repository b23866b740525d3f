//! Locating the map file and other runtime data.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable naming the map file when no path is given on the command line.
pub const MAP_ENV_VAR: &str = "ROAM_MAP";

/// Map file looked up in the data directory when nothing else is specified.
pub const DEFAULT_MAP_FILE: &str = "map.json";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Pick the map file: explicit argument, then `ROAM_MAP`, then `map.json` in the data root.
pub fn resolve_map_path(cli_arg: Option<String>) -> PathBuf {
    choose_map_path(cli_arg, env::var(MAP_ENV_VAR).ok())
}

fn choose_map_path(cli_arg: Option<String>, env_value: Option<String>) -> PathBuf {
    cli_arg
        .or(env_value)
        .filter(|path| !path.trim().is_empty())
        .map_or_else(|| data_path(DEFAULT_MAP_FILE), PathBuf::from)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = Vec::new();

    // Common layouts: workspace root and flattened `data/`.
    candidates.push(PathBuf::from("roam_engine/data"));
    candidates.push(PathBuf::from("data"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("roam_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("roam_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("roam_engine/data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins() {
        let path = choose_map_path(Some("castle.json".into()), Some("env.json".into()));
        assert_eq!(path, PathBuf::from("castle.json"));
    }

    #[test]
    fn environment_is_second_choice() {
        let path = choose_map_path(None, Some("env.json".into()));
        assert_eq!(path, PathBuf::from("env.json"));
    }

    #[test]
    fn falls_back_to_data_root() {
        let path = choose_map_path(None, Some("   ".into()));
        assert!(path.ends_with(DEFAULT_MAP_FILE));
    }
}
