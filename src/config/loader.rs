//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;
use crate::error::{ChordKitError, Result};

/// Default config path with `~` expanded.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load configuration from ~/.chordkit/config.json
///
/// Returns Config::default() if the file is missing or invalid.
pub fn load_config() -> Config {
    load_config_from(&default_config_path())
}

/// Load configuration from an explicit path, falling back to defaults.
#[instrument(name = "load_config")]
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match read_config(path) {
        Ok(config) => {
            info!(
                path = %path.display(),
                shortcuts = config.shortcuts.len(),
                "Successfully loaded config"
            );
            config
        }
        Err(e) => {
            let hint = match &e {
                ChordKitError::ConfigParse(parse) if parse.to_string().contains("missing field") => {
                    "\n\nHint: every shortcut needs an 'id' and a 'keys' array. Example:\n\
                    { \"shortcuts\": [ { \"id\": \"duplicate\", \"keys\": [\"Ctrl\", \"KeyD\"], \
                    \"alternateKeys\": [\"Cmd\", \"KeyD\"] } ] }"
                }
                _ => "",
            };
            warn!(
                error = %e,
                path = %path.display(),
                hint = %hint,
                "Failed to load config, using defaults"
            );
            Config::default()
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| ChordKitError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Strictly parse a JSON config document.
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(serde_json::from_str(content)?)
}
