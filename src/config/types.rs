//! Configuration type definitions.

use super::enums::ThemeMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Keyboard behavior settings.
///
/// Controls which keys exist and how key actions feel. All values are read
/// once when the keyboard view is constructed; changing them afterwards
/// requires recreating the view.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct KeyboardConfig {
    /// Request a discrete haptic pulse for every key action
    #[serde(default = "default_haptic_feedback")]
    pub haptic_feedback: bool,

    /// Hide the space and shift keys, leaving only H, backspace, and return
    #[serde(default = "default_minimalist_mode")]
    pub minimalist_mode: bool,

    /// Color theme (light, dark, or follow-system)
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            haptic_feedback: default_haptic_feedback(),
            minimalist_mode: default_minimalist_mode(),
            theme: ThemeMode::default(),
        }
    }
}

/// Input timing settings.
///
/// The original platform supplied these from its own view configuration; here
/// they are explicit so hosts and tests can control them.
#[derive(Debug, Serialize, Deserialize, Clone, JsonSchema)]
pub struct TimingConfig {
    /// How long a key must stay held before a long-press fires, in
    /// milliseconds (valid range: 100 - 2000)
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,

    /// Interval between repeated insertions while a repeatable key is held
    /// past its long-press, in milliseconds (valid range: 10 - 1000)
    #[serde(default = "default_key_repeat_ms")]
    pub key_repeat_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            long_press_ms: default_long_press_ms(),
            key_repeat_ms: default_key_repeat_ms(),
        }
    }
}

impl TimingConfig {
    /// Long-press threshold as a [`Duration`].
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    /// Key repeat interval as a [`Duration`].
    pub fn key_repeat(&self) -> Duration {
        Duration::from_millis(self.key_repeat_ms)
    }
}

fn default_haptic_feedback() -> bool {
    true
}

fn default_minimalist_mode() -> bool {
    false
}

fn default_long_press_ms() -> u64 {
    500
}

fn default_key_repeat_ms() -> u64 {
    50
}
