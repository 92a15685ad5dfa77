//! Application settings
//!
//! Read-only preferences loaded once at startup. Nothing is written back:
//! the app keeps no state between runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Smallest control width that still fits the press padding and glyphs
const MIN_CONTROL_WIDTH: f32 = 32.0;
/// Largest control width
const MAX_CONTROL_WIDTH: f32 = 512.0;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dark or light theme
    pub dark_mode: bool,
    /// Width (and height) of the decorated button
    pub control_width: f32,
    /// Initial window size
    pub window: WindowSettings,
}

/// Initial window geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            control_width: 70.0,
            window: WindowSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 320.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rebound", "Rebound")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse settings; absent fields take their defaults
    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Control width clamped to a usable range
    pub fn control_width(&self) -> f32 {
        if self.control_width.is_finite() {
            self.control_width.clamp(MIN_CONTROL_WIDTH, MAX_CONTROL_WIDTH)
        } else {
            Settings::default().control_width
        }
    }

    /// Initial window size, never smaller than the control
    pub fn window_size(&self) -> iced::Size {
        let min = self.control_width();
        iced::Size::new(
            finite_or(self.window.width, min).max(min),
            finite_or(self.window.height, min).max(min),
        )
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
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
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.dark_mode);
        assert_eq!(settings.control_width(), 70.0);
        assert_eq!(settings.window_size(), iced::Size::new(320.0, 320.0));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "dark_mode": false }"#).unwrap();
        assert!(!settings.dark_mode);
        assert_eq!(settings.control_width, 70.0);
        assert_eq!(settings.window, WindowSettings::default());

        let settings = Settings::from_json(r#"{ "window": { "height": 500 } }"#).unwrap();
        assert_eq!(settings.window.width, 320.0);
        assert_eq!(settings.window.height, 500.0);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("rebound-settings-that-does-not-exist.json");
        let err = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("rebound-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "control_width": 96 }"#).unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.control_width(), 96.0);
        assert!(settings.dark_mode);
    }

    #[test]
    fn test_control_width_is_clamped() {
        let mut settings = Settings {
            control_width: 4.0,
            ..Default::default()
        };
        assert_eq!(settings.control_width(), MIN_CONTROL_WIDTH);

        settings.control_width = 10_000.0;
        assert_eq!(settings.control_width(), MAX_CONTROL_WIDTH);

        settings.control_width = f32::NAN;
        assert_eq!(settings.control_width(), 70.0);
    }

    #[test]
    fn test_window_never_smaller_than_control() {
        let settings = Settings {
            control_width: 200.0,
            window: WindowSettings {
                width: 100.0,
                height: 400.0,
            },
            ..Default::default()
        };
        assert_eq!(settings.window_size(), iced::Size::new(200.0, 400.0));
    }
}
