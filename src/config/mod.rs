//! Configuration file support for hboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/hboard/config.toml`. Settings
//! cover keyboard behavior (haptics, minimalist mode, theme) and input
//! timing (long-press threshold, key repeat interval).
//!
//! If no config file exists, or the file cannot be read or parsed, sensible
//! defaults are used automatically; a broken config must never prevent the
//! keyboard from coming up.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ThemeMode;
pub use types::{KeyboardConfig, TimingConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Main configuration structure containing all user settings.
///
/// This is the root type deserialized from the TOML file. All fields have
/// defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [keyboard]
/// haptic_feedback = true
/// minimalist_mode = false
/// theme = "follow-system"
///
/// [timing]
/// long_press_ms = 500
/// key_repeat_ms = 50
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone, JsonSchema)]
pub struct Config {
    /// Keyboard behavior (haptics, minimalist mode, theme)
    #[serde(default)]
    pub keyboard: KeyboardConfig,

    /// Input timing (long-press threshold, repeat interval)
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Out-of-range values are clamped to the nearest valid value and a
    /// warning is logged.
    ///
    /// Validated ranges:
    /// - `long_press_ms`: 100 - 2000
    /// - `key_repeat_ms`: 10 - 1000
    fn validate_and_clamp(&mut self) {
        if !(100..=2000).contains(&self.timing.long_press_ms) {
            warn!(
                "Invalid long_press_ms {}, clamping to 100-2000 range",
                self.timing.long_press_ms
            );
            self.timing.long_press_ms = self.timing.long_press_ms.clamp(100, 2000);
        }

        if !(10..=1000).contains(&self.timing.key_repeat_ms) {
            warn!(
                "Invalid key_repeat_ms {}, clamping to 10-1000 range",
                self.timing.key_repeat_ms
            );
            self.timing.key_repeat_ms = self.timing.key_repeat_ms.clamp(10, 1000);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/hboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("hboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, falling back to
    /// defaults on any failure.
    ///
    /// A missing file is the normal first-run case and logs at info level.
    /// Unreadable or unparseable files log a warning with the underlying
    /// error; construction never fails because of configuration.
    pub fn load() -> Self {
        let config_path = match Self::get_config_path() {
            Ok(path) => path,
            Err(err) => {
                warn!("Could not resolve config path ({err:#}), using defaults");
                return Self::default();
            }
        };

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(err) => {
                warn!("Failed to load config ({err:#}), using defaults");
                Self::default()
            }
        }
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Returns the JSON schema for the configuration file format.
    ///
    /// Used by the `dump-config-schema` binary so external tools can validate
    /// config files without linking against this crate.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
