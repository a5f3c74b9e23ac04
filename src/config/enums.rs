//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color theme selection for the keyboard surface.
///
/// `FollowSystem` is resolved against the host's darkness hint once, when the
/// keyboard view is constructed; the resolved palette does not change for the
/// lifetime of the view.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    /// Always use the light palette
    Light,
    /// Always use the dark palette
    Dark,
    /// Resolve to light or dark from the host's system preference
    #[default]
    FollowSystem,
}

impl ThemeMode {
    /// Parses a theme mode from a command-line string.
    ///
    /// Returns `None` for unrecognized input so callers can warn and keep the
    /// configured value instead.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "follow-system" | "system" => Some(ThemeMode::FollowSystem),
            _ => None,
        }
    }
}
