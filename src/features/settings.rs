//! Application settings persistence
//!
//! Handles saving and loading the switch configuration and display
//! preferences.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::switch::SwitchOptions;

/// Smallest and largest control side offered by the demo
pub const CONTROL_SIZE_RANGE: std::ops::RangeInclusive<f32> = 80.0..=320.0;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Switch configuration
    #[serde(default)]
    pub switch: SwitchOptions,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark theme
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Side of the switch control in logical pixels
    #[serde(default = "default_control_size")]
    pub control_size: f32,
}

fn default_true() -> bool {
    true
}

fn default_control_size() -> f32 {
    180.0
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            control_size: default_control_size(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("io", "safety-switch", "SafetySwitch")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if missing or broken
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load settings from the default file
    pub fn try_load() -> anyhow::Result<Self> {
        let path = Self::file_path().context("Could not determine config directory")?;
        Self::load_from_file(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.switch.validate()?;
        Ok(settings)
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
        // Ensure parent directory exists
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
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
    /// A value was read fine but is out of range
    Invalid(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
            SettingsError::Invalid(e) => write!(f, "Invalid setting: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
