//! User-editable presence text, persisted as JSON in the config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

const SETTINGS_FILE: &str = "presence.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceSettings {
    /// Main text line displayed while in a game session.
    pub in_game_details: String,
    /// Secondary text line displayed while in the main menu.
    pub main_menu_state: String,
}

impl Default for PresenceSettings {
    fn default() -> Self {
        Self {
            in_game_details: "Exploring the world.".to_string(),
            main_menu_state: "Idling in the main menu.".to_string(),
        }
    }
}

fn settings_path() -> Result<PathBuf, SettingsError> {
    let config_dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
    let dir = config_dir.join("lodestone");

    fs::create_dir_all(&dir).map_err(|source| SettingsError::Io {
        path: dir.clone(),
        source,
    })?;

    Ok(dir.join(SETTINGS_FILE))
}

/// Load settings from the platform config directory, falling back to the
/// defaults when no file exists yet.
pub fn load_settings() -> Result<PresenceSettings, SettingsError> {
    load_settings_from(&settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Result<PresenceSettings, SettingsError> {
    tracing::debug!("loading settings from {}", path.display());

    if !path.exists() {
        return Ok(PresenceSettings::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Save settings to the platform config directory.
pub fn save_settings(settings: &PresenceSettings) -> Result<(), SettingsError> {
    save_settings_to(&settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &PresenceSettings) -> Result<(), SettingsError> {
    tracing::debug!("saving settings to {}", path.display());

    let contents = serde_json::to_string_pretty(settings).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, contents).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
