//! RGBA color type and the light/dark key palettes.
//!
//! The keyboard view resolves its palette exactly once, at construction; the
//! rest of the crate treats a [`Theme`] as immutable data.

use crate::config::ThemeMode;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Formats the color as `#rrggbb` or `#rrggbbaa` when not fully opaque.
    ///
    /// Used by the demo driver to print tint state in a compact form.
    pub fn to_hex(&self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// A resolved key palette.
///
/// `primary` tints the shift icon while uppercase is active; `control_normal`
/// tints it otherwise. The remaining colors are static key chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Accent color (shift icon tint while uppercase)
    pub primary: Color,
    /// Neutral icon/control color (shift icon tint while lowercase)
    pub control_normal: Color,
    /// Key cap glyph color
    pub key_text: Color,
    /// Key cap background color
    pub key_background: Color,
}

/// Light palette.
pub const LIGHT: Theme = Theme {
    primary: Color::new(0.384, 0.0, 0.933, 1.0),
    control_normal: Color::new(0.0, 0.0, 0.0, 0.54),
    key_text: Color::new(0.129, 0.129, 0.129, 1.0),
    key_background: Color::new(0.98, 0.98, 0.98, 1.0),
};

/// Dark palette.
pub const DARK: Theme = Theme {
    primary: Color::new(0.733, 0.525, 0.988, 1.0),
    control_normal: Color::new(1.0, 1.0, 1.0, 0.7),
    key_text: Color::new(0.92, 0.92, 0.92, 1.0),
    key_background: Color::new(0.071, 0.071, 0.071, 1.0),
};

impl Theme {
    /// Resolves a configured theme mode to a concrete palette.
    ///
    /// `system_prefers_dark` is the host's darkness hint and is only
    /// consulted for [`ThemeMode::FollowSystem`].
    pub fn resolve(mode: ThemeMode, system_prefers_dark: bool) -> Theme {
        match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
            ThemeMode::FollowSystem => {
                if system_prefers_dark {
                    DARK
                } else {
                    LIGHT
                }
            }
        }
    }
}
