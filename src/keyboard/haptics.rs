//! Haptic feedback capability.

/// Actuator for discrete haptic pulses.
///
/// The view requests at most one pulse per semantic key action, before the
/// corresponding listener callback, and only while haptic feedback is
/// enabled in configuration.
pub trait Haptics {
    /// Requests one discrete pulse.
    fn pulse(&mut self);
}

/// No-op actuator for hosts without a vibration motor.
#[derive(Debug, Default)]
pub struct NullHaptics;

impl Haptics for NullHaptics {
    fn pulse(&mut self) {}
}
