//! Line-oriented demo driver.
//!
//! Feeds pointer events into a keyboard view wired to the reference
//! [`TextBuffer`] host. Time is a virtual clock advanced by the `wait`
//! command, so scripted runs are fully reproducible.
//!
//! Commands, one per line (`#` starts a comment):
//!
//! ```text
//! down <key>      pointer down          keys: h, backspace, space,
//! up <key>        pointer up                  return, shift
//! cancel <key>    pointer cancel
//! tap <key>       down followed by up
//! wait <ms>       advance the clock (long presses and repeats fire)
//! show            print buffer, case, and key visuals
//! quit            stop reading
//! ```

use anyhow::Result;
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::host::TextBuffer;
use crate::input::{KeyId, PointerPhase};
use crate::keyboard::{Haptics, KeyboardListener, KeyboardView};

/// How long a scripted `tap` holds the key down.
const TAP_HOLD_MS: u64 = 40;

/// Clock granularity while `wait` advances time.
///
/// Fine enough that long presses fire close to their deadline; repeat
/// catch-up in the host makes the exact step size irrelevant for counts.
const WAIT_STEP_MS: u64 = 10;

/// Haptic actuator that reports pulses through the log.
struct LogHaptics;

impl Haptics for LogHaptics {
    fn pulse(&mut self) {
        debug!("haptic pulse");
    }
}

/// Runs the demo loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    system_prefers_dark: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    let host = TextBuffer::new(config.timing.key_repeat());
    let mut view = KeyboardView::new(host, Box::new(LogHaptics), config, system_prefers_dark);
    let mut now = Instant::now();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();

        match command {
            "down" | "up" | "cancel" => match argument.and_then(parse_key) {
                Some(key) => {
                    let phase = match command {
                        "down" => PointerPhase::Down,
                        "up" => PointerPhase::Up,
                        _ => PointerPhase::Cancel,
                    };
                    view.handle_pointer(key, phase, now);
                }
                None => warn!("unrecognized key in '{line}'"),
            },
            "tap" => match argument.and_then(parse_key) {
                Some(key) => {
                    view.handle_pointer(key, PointerPhase::Down, now);
                    now += Duration::from_millis(TAP_HOLD_MS);
                    view.handle_pointer(key, PointerPhase::Up, now);
                }
                None => warn!("unrecognized key in '{line}'"),
            },
            "wait" => match argument.and_then(|ms| ms.parse::<u64>().ok()) {
                Some(ms) => {
                    let mut remaining = ms;
                    while remaining > 0 {
                        let step = remaining.min(WAIT_STEP_MS);
                        now += Duration::from_millis(step);
                        remaining -= step;
                        view.poll(now);
                        view.listener_mut().tick(now);
                    }
                }
                None => warn!("wait needs a millisecond count: '{line}'"),
            },
            "show" => print_state(&view, out)?,
            "quit" => break,
            _ => warn!("unrecognized command: '{line}'"),
        }
    }

    Ok(())
}

fn print_state<W: Write>(view: &KeyboardView<TextBuffer>, out: &mut W) -> Result<()> {
    let visuals = view.visuals();
    let host = view.listener();

    writeln!(out, "buffer: {:?}", host.text())?;
    writeln!(
        out,
        "case: {}",
        if host.is_uppercase() {
            "uppercase"
        } else {
            "lowercase"
        }
    )?;
    if view.is_visible(KeyId::Shift) {
        writeln!(
            out,
            "keys: h={:?} shift-tint={}",
            visuals.h_glyph,
            visuals.shift_tint.to_hex()
        )?;
    } else {
        writeln!(out, "keys: h={:?} (minimalist)", visuals.h_glyph)?;
    }

    Ok(())
}

fn parse_key(name: &str) -> Option<KeyId> {
    match name.to_lowercase().as_str() {
        "h" => Some(KeyId::H),
        "backspace" | "bs" => Some(KeyId::Backspace),
        "space" => Some(KeyId::Space),
        "return" | "enter" => Some(KeyId::Return),
        "shift" => Some(KeyId::Shift),
        _ => None,
    }
}
