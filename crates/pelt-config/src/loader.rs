//! Settings loading: read from a path or the platform default location.

use std::path::{Path, PathBuf};

use tracing::info;

use pelt_common::ConfigError;

use crate::schema::Settings;

/// Get the platform-specific default settings file path.
///
/// On macOS: `~/Library/Application Support/pelt/settings.json`
/// On Linux: `~/.config/pelt/settings.json`
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("pelt").join("settings.json"))
}

/// Load settings from a specific JSON file path.
///
/// Missing fields are filled with serde defaults; validation is the
/// caller's concern.
pub fn load_from_path(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let settings: Settings = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))?;

    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from the platform default path.
///
/// If the file does not exist, writes a default template there and
/// returns it so the user has something to edit.
pub fn load_default() -> Result<Settings, ConfigError> {
    let path = default_settings_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no settings found at {}, creating default", path.display());
            create_default_settings(&path)?;
            Ok(Settings::default())
        }
        other => other,
    }
}

/// Write a default settings file.
pub fn create_default_settings(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create settings directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = serde_json::to_string_pretty(&Settings::default())
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize defaults: {e}")))?;

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default settings to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default settings at {}", path.display());
    Ok(())
}
