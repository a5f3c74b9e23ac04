//! Per-key pointer classification state machine.

use log::trace;
use std::time::{Duration, Instant};

use super::events::{KeyAction, KeyId, PointerPhase};

/// Classifies one key's pointer timeline into semantic [`KeyAction`]s.
///
/// Each key owns exactly one classifier, which enforces the single-interaction
/// invariant: a key cannot be down twice at once, and a release without a
/// preceding press is ignored.
///
/// Long-press detection is a deadline armed on pointer-down and cleared
/// synchronously on up/cancel. The owner polls it with the current time via
/// [`poll_long_press`](PressClassifier::poll_long_press); once cleared, the
/// deadline can never fire late. Only the repeatable keys have long-press
/// behavior; holding a tap-only key for any duration still classifies as a
/// tap on release.
#[derive(Debug)]
pub struct PressClassifier {
    key: KeyId,
    long_press_threshold: Duration,
    down: bool,
    long_press_deadline: Option<Instant>,
    long_press_fired: bool,
}

impl PressClassifier {
    /// Creates a classifier for `key` with the given long-press threshold.
    pub fn new(key: KeyId, long_press_threshold: Duration) -> Self {
        Self {
            key,
            long_press_threshold,
            down: false,
            long_press_deadline: None,
            long_press_fired: false,
        }
    }

    /// The key this classifier is wired to.
    pub fn key(&self) -> KeyId {
        self.key
    }

    /// Whether the pointer is currently down on this key.
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Feeds one raw pointer transition, returning the semantic actions it
    /// produces in order.
    ///
    /// Malformed sequences (up or cancel without a prior down, duplicate
    /// down) produce no actions. `Release` is only emitted for the
    /// repeatable keys; tap-only keys report just `Tap`, and only on a clean
    /// `Up` (a canceled press produces nothing for them).
    pub fn on_pointer(&mut self, phase: PointerPhase, now: Instant) -> Vec<KeyAction> {
        let mut out = Vec::with_capacity(2);

        match phase {
            PointerPhase::Down => {
                if self.down {
                    trace!("{:?}: duplicate down ignored", self.key);
                    return out;
                }
                self.down = true;
                self.long_press_fired = false;
                if self.key.is_repeatable() {
                    self.long_press_deadline = Some(now + self.long_press_threshold);
                    out.push(KeyAction::Press);
                }
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                if !self.down {
                    trace!("{:?}: {phase:?} without press ignored", self.key);
                    return out;
                }
                self.down = false;
                // Synchronous cancellation: a cleared deadline cannot fire.
                self.long_press_deadline = None;

                if phase == PointerPhase::Up && !self.long_press_fired {
                    out.push(KeyAction::Tap);
                }
                if self.key.is_repeatable() {
                    out.push(KeyAction::Release);
                }
            }
        }

        out
    }

    /// Checks the long-press deadline against `now`.
    ///
    /// Returns `Some(LongPress)` at most once per press, and never after the
    /// press has ended.
    pub fn poll_long_press(&mut self, now: Instant) -> Option<KeyAction> {
        if self.long_press_fired {
            return None;
        }
        match self.long_press_deadline {
            Some(deadline) if now >= deadline => {
                self.long_press_fired = true;
                self.long_press_deadline = None;
                trace!("{:?}: long-press fired", self.key);
                Some(KeyAction::LongPress)
            }
            _ => None,
        }
    }
}
