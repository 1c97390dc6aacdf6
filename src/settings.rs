//! Rig settings with persistence
//!
//! Settings are read from the path given on the command line, or from
//! `~/.config/chaserig/settings.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use chaserig_core::TimeConfig;
use chaserig_game::{CameraConfig, ConfigError, LocomotionConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All rig settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    pub camera: CameraConfig,
    pub locomotion: LocomotionConfig,
    pub time: TimeConfig,
    pub demo: DemoSettings,
}

impl RigSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chaserig"))
    }

    /// Get the default settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from `path`, or the default location when `None`.
    ///
    /// Missing or unreadable files fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let Some(path) = Self::settings_path() else {
                    warn!("Could not determine config directory");
                    return Self::default();
                };
                path
            }
        };

        if !path.exists() {
            info!("No settings file found at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Check the camera, locomotion, and frame time invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        self.locomotion.validate()?;
        validate_time(&self.time)
    }
}

/// Check the frame time invariants
fn validate_time(config: &TimeConfig) -> Result<(), ConfigError> {
    if !config.time_scale.is_finite() {
        return Err(ConfigError::NonFinite("time_scale"));
    }
    if !config.max_delta_time.is_finite() {
        return Err(ConfigError::NonFinite("max_delta_time"));
    }
    if config.time_scale < 0.0 {
        return Err(ConfigError::NegativeTimeScale(config.time_scale));
    }
    if config.max_delta_time <= 0.0 {
        return Err(ConfigError::NonPositiveMaxDelta(config.max_delta_time));
    }
    Ok(())
}

/// Settings for the headless demo loop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of frames to simulate
    pub frames: u32,
    /// Raw frame delta fed to the frame clock, in seconds
    pub frame_delta: f32,
    /// Subject walk speed at full stick, in meters per second
    pub walk_speed: f32,
    /// Log a status line every this many frames
    pub log_interval: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_delta: 1.0 / 60.0,
            walk_speed: 4.0,
            log_interval: 60,
        }
    }
}
