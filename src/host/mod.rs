//! Reference host: an editable text buffer behind the listener contract.
//!
//! This is the crate's stand-in for a real input connection. It owns the
//! canonical case state, inserts `h`/`H` on key actions, and implements
//! repeat-insertion: a long-press on H or backspace keeps applying the key
//! until the matching release, driven by [`TextBuffer::tick`].

use log::debug;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::keyboard::KeyboardListener;


/// Content violations reported by [`TextBuffer::validate`].
///
/// The buffer itself can only ever produce valid content; validation exists
/// for text injected from outside (pasted, restored, ...).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// The buffer contains a character other than h, H, or whitespace.
    #[error("invalid character {ch:?} at offset {position} (only the letter H is allowed)")]
    InvalidCharacter {
        /// The offending character
        ch: char,
        /// Byte offset of the character in the buffer
        position: usize,
    },
}

/// Which repeatable key is currently auto-repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepeatKey {
    H,
    Backspace,
}

/// An editable text buffer implementing [`KeyboardListener`].
///
/// Single-threaded like the rest of the dispatch path; the host event loop
/// calls [`tick`](TextBuffer::tick) with the current time to advance
/// repeat-insertion.
#[derive(Debug)]
pub struct TextBuffer {
    text: String,
    uppercase: bool,
    repeat_interval: Duration,
    repeating: Option<RepeatKey>,
    next_repeat: Option<Instant>,
}

impl TextBuffer {
    /// Creates an empty lowercase buffer with the given repeat interval.
    pub fn new(repeat_interval: Duration) -> Self {
        Self {
            text: String::new(),
            uppercase: false,
            repeat_interval,
            repeating: None,
            next_repeat: None,
        }
    }

    /// Current buffer content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer content, e.g. with restored or pasted text.
    ///
    /// No validation happens here; call [`validate`](TextBuffer::validate)
    /// afterwards to surface foreign characters.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether a repeatable key is currently auto-repeating.
    pub fn is_repeating(&self) -> bool {
        self.repeating.is_some()
    }

    /// Checks that the buffer holds nothing but the letter H and whitespace.
    ///
    /// Returns the first offending character, if any.
    pub fn validate(&self) -> Result<(), HostError> {
        for (position, ch) in self.text.char_indices() {
            if !matches!(ch, 'h' | 'H') && !ch.is_whitespace() {
                return Err(HostError::InvalidCharacter { ch, position });
            }
        }
        Ok(())
    }

    /// Advances repeat-insertion up to `now`.
    ///
    /// The first call after a long-press schedules the cadence; each elapsed
    /// interval applies the held key once more. Does nothing while no key is
    /// repeating.
    pub fn tick(&mut self, now: Instant) {
        let Some(key) = self.repeating else {
            return;
        };

        let mut next = match self.next_repeat {
            Some(next) => next,
            // First tick after the long-press: schedule, don't insert (the
            // long-press callback already applied the key once).
            None => {
                self.next_repeat = Some(now + self.repeat_interval);
                return;
            }
        };

        while next <= now {
            self.apply(key);
            next += self.repeat_interval;
        }
        self.next_repeat = Some(next);
    }

    fn apply(&mut self, key: RepeatKey) {
        match key {
            RepeatKey::H => self.insert_h(),
            RepeatKey::Backspace => self.delete_last(),
        }
    }

    fn insert_h(&mut self) {
        self.text.push(if self.uppercase { 'H' } else { 'h' });
    }

    fn delete_last(&mut self) {
        self.text.pop();
    }

    fn start_repeat(&mut self, key: RepeatKey) {
        debug!("repeat start: {key:?}");
        self.repeating = Some(key);
        self.next_repeat = None;
    }

    fn stop_repeat(&mut self, key: RepeatKey) {
        if self.repeating == Some(key) {
            debug!("repeat stop: {key:?}");
            self.repeating = None;
            self.next_repeat = None;
        }
    }
}

impl KeyboardListener for TextBuffer {
    fn is_uppercase(&self) -> bool {
        self.uppercase
    }

    fn set_uppercase(&mut self, uppercase: bool) {
        self.uppercase = uppercase;
    }

    fn on_h(&mut self) {
        self.insert_h();
    }

    fn on_long_h(&mut self) {
        // The long-press itself inserts; ticks take over from here
        self.insert_h();
        self.start_repeat(RepeatKey::H);
    }

    fn on_release_h(&mut self) {
        self.stop_repeat(RepeatKey::H);
    }

    fn on_backspace(&mut self) {
        self.delete_last();
    }

    fn on_long_backspace(&mut self) {
        self.delete_last();
        self.start_repeat(RepeatKey::Backspace);
    }

    fn on_release_backspace(&mut self) {
        self.stop_repeat(RepeatKey::Backspace);
    }

    fn on_space(&mut self) {
        self.text.push(' ');
    }

    fn on_return(&mut self) {
        self.text.push('\n');
    }
}
