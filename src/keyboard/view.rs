//! The keyboard view: key wiring, semantic dispatch, and case visuals.

use log::{debug, trace};
use std::time::Instant;

use crate::config::Config;
use crate::input::{KeyAction, KeyId, PointerPhase, PressClassifier};
use crate::theme::{Color, Theme};

use super::haptics::Haptics;
use super::listener::KeyboardListener;

/// The case-dependent visual state of the board.
///
/// Everything else about the board's appearance is static layout; these two
/// values are the only visuals driven by logic, and they are recomputed
/// synchronously whenever the case toggles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyVisuals {
    /// Glyph shown on the H key cap (`'h'` or `'H'`)
    pub h_glyph: char,
    /// Tint applied to the shift icon (primary color while uppercase,
    /// neutral control color otherwise)
    pub shift_tint: Color,
}

impl KeyVisuals {
    fn for_case(uppercase: bool, theme: &Theme) -> Self {
        if uppercase {
            Self {
                h_glyph: 'H',
                shift_tint: theme.primary,
            }
        } else {
            Self {
                h_glyph: 'h',
                shift_tint: theme.control_normal,
            }
        }
    }
}

/// The five-key board.
///
/// Owns one [`PressClassifier`] per wired key and forwards the semantic
/// events they produce to the host's [`KeyboardListener`]. Case state lives
/// on the listener; the view keeps only the derived [`KeyVisuals`], which it
/// recomputes before returning from a shift tap so no intermediate visual
/// state is ever observable.
///
/// Configuration is snapshotted at construction: minimalist mode decides
/// which keys are wired at all, and the theme mode is resolved to a fixed
/// palette. Recreate the view to apply changed settings.
pub struct KeyboardView<L: KeyboardListener> {
    listener: L,
    haptics: Box<dyn Haptics>,
    theme: Theme,
    haptic_feedback: bool,
    keys: Vec<PressClassifier>,
    visuals: KeyVisuals,
}

impl<L: KeyboardListener> KeyboardView<L> {
    /// Builds the board from a configuration snapshot.
    ///
    /// `system_prefers_dark` is the host's darkness hint, consulted only
    /// when the configured theme is `follow-system`. In minimalist mode the
    /// space and shift keys are not wired: pointer events for them are
    /// ignored entirely and they report as not visible.
    pub fn new(
        listener: L,
        haptics: Box<dyn Haptics>,
        config: &Config,
        system_prefers_dark: bool,
    ) -> Self {
        let theme = Theme::resolve(config.keyboard.theme, system_prefers_dark);
        let long_press = config.timing.long_press();

        let keys: Vec<PressClassifier> = KeyId::ALL
            .into_iter()
            .filter(|key| {
                !config.keyboard.minimalist_mode || !matches!(key, KeyId::Space | KeyId::Shift)
            })
            .map(|key| PressClassifier::new(key, long_press))
            .collect();

        let visuals = KeyVisuals::for_case(listener.is_uppercase(), &theme);

        debug!(
            "keyboard view up: {} keys wired, haptics {}",
            keys.len(),
            if config.keyboard.haptic_feedback {
                "on"
            } else {
                "off"
            }
        );

        Self {
            listener,
            haptics,
            theme,
            haptic_feedback: config.keyboard.haptic_feedback,
            keys,
            visuals,
        }
    }

    /// Routes one raw pointer transition to the key's classifier and
    /// dispatches whatever semantic actions it produces.
    ///
    /// Events for keys hidden by minimalist mode are dropped here, so a tap
    /// on the hidden space/shift region is a no-op however often it repeats.
    pub fn handle_pointer(&mut self, key: KeyId, phase: PointerPhase, now: Instant) {
        let Some(classifier) = self.keys.iter_mut().find(|c| c.key() == key) else {
            trace!("{key:?} is not wired; dropping {phase:?}");
            return;
        };

        let actions = classifier.on_pointer(phase, now);
        for action in actions {
            self.dispatch(key, action);
        }
    }

    /// Checks all pending long-press deadlines against `now`.
    ///
    /// The host calls this from its timer/tick source. Deadlines cleared by
    /// an earlier up/cancel can no longer fire.
    pub fn poll(&mut self, now: Instant) {
        let mut fired = Vec::new();
        for classifier in &mut self.keys {
            if let Some(action) = classifier.poll_long_press(now) {
                fired.push((classifier.key(), action));
            }
        }
        for (key, action) in fired {
            self.dispatch(key, action);
        }
    }

    /// Whether a key is present on this board.
    pub fn is_visible(&self, key: KeyId) -> bool {
        self.keys.iter().any(|c| c.key() == key)
    }

    /// Current case-dependent visuals.
    pub fn visuals(&self) -> KeyVisuals {
        self.visuals
    }

    /// The palette resolved at construction.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Borrows the host listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutably borrows the host listener (e.g. to drive its tick).
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the view, returning the host listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    fn dispatch(&mut self, key: KeyId, action: KeyAction) {
        debug!("{key:?}: {action:?}");

        match (key, action) {
            // Press anchors the press/release pair inside the classifier;
            // the listener surface has no on-press callback.
            (_, KeyAction::Press) => {}

            (KeyId::H, KeyAction::Tap) => {
                self.feedback();
                self.listener.on_h();
            }
            (KeyId::H, KeyAction::LongPress) => {
                self.feedback();
                self.listener.on_long_h();
            }
            (KeyId::H, KeyAction::Release) => self.listener.on_release_h(),

            (KeyId::Backspace, KeyAction::Tap) => {
                self.feedback();
                self.listener.on_backspace();
            }
            (KeyId::Backspace, KeyAction::LongPress) => {
                self.feedback();
                self.listener.on_long_backspace();
            }
            (KeyId::Backspace, KeyAction::Release) => self.listener.on_release_backspace(),

            (KeyId::Space, KeyAction::Tap) => {
                self.feedback();
                self.listener.on_space();
            }
            (KeyId::Return, KeyAction::Tap) => {
                self.feedback();
                self.listener.on_return();
            }
            (KeyId::Shift, KeyAction::Tap) => {
                self.feedback();
                let uppercase = !self.listener.is_uppercase();
                self.listener.set_uppercase(uppercase);
                // Re-render before the next event can be processed
                self.apply_case();
            }

            // Tap-only keys have no long-press or release behavior; the
            // classifier never produces these combinations.
            _ => {}
        }
    }

    /// Recomputes the H glyph and shift tint from the listener's case state.
    fn apply_case(&mut self) {
        self.visuals = KeyVisuals::for_case(self.listener.is_uppercase(), &self.theme);
    }

    /// One discrete pulse per semantic action, gated on configuration.
    fn feedback(&mut self) {
        if self.haptic_feedback {
            self.haptics.pulse();
        }
    }
}
