//! Application settings persistence
//!
//! Saving and loading user preferences. The only persisted preference is the
//! display theme; on first run it is seeded from the OS dark-mode signal and
//! every change is written straight back to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings { dark_mode: false },
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "inails", "iNailsStudio")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load persisted settings, or resolve them from the OS preference.
    ///
    /// A persisted value always wins. When no file exists (first run) the OS
    /// dark-mode signal decides, and the resolved value is written back
    /// immediately so later runs read it from disk.
    pub fn load_or_detect() -> Self {
        if let Some(settings) = Self::file_path().and_then(|p| Self::load_from_file(&p).ok()) {
            return settings;
        }

        let settings = Self::from_system();
        if let Err(err) = settings.save() {
            tracing::warn!("failed to persist initial settings: {err}");
        }
        settings
    }

    /// Seed settings from the OS dark-mode preference.
    fn from_system() -> Self {
        let dark_mode = matches!(dark_light::detect(), dark_light::Mode::Dark);
        tracing::info!("no saved theme, following system preference (dark: {dark_mode})");
        Self {
            display: DisplaySettings { dark_mode },
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_and_restores_the_dark_mode_flag() {
        let mut settings = Settings::default();
        settings.display.dark_mode = true;

        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert!(restored.display.dark_mode);
    }

    #[test]
    fn persisted_value_round_trips_through_a_file() {
        let path = std::env::temp_dir().join("inails-settings-test.json");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;

        settings.save_to_file(&path).unwrap();
        let restored = Settings::load_from_file(&path).unwrap();
        assert!(restored.display.dark_mode);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unreadable_file_is_a_parse_error() {
        let path = std::env::temp_dir().join("inails-settings-garbage.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_file(&path);
    }
}
