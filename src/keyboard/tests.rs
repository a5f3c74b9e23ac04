use super::*;
use crate::config::Config;
use crate::input::{KeyId, PointerPhase};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    H,
    LongH,
    ReleaseH,
    Backspace,
    LongBackspace,
    ReleaseBackspace,
    Space,
    Return,
}

#[derive(Default)]
struct RecordingListener {
    uppercase: bool,
    calls: Vec<Call>,
}

impl KeyboardListener for RecordingListener {
    fn is_uppercase(&self) -> bool {
        self.uppercase
    }
    fn set_uppercase(&mut self, uppercase: bool) {
        self.uppercase = uppercase;
    }
    fn on_h(&mut self) {
        self.calls.push(Call::H);
    }
    fn on_long_h(&mut self) {
        self.calls.push(Call::LongH);
    }
    fn on_release_h(&mut self) {
        self.calls.push(Call::ReleaseH);
    }
    fn on_backspace(&mut self) {
        self.calls.push(Call::Backspace);
    }
    fn on_long_backspace(&mut self) {
        self.calls.push(Call::LongBackspace);
    }
    fn on_release_backspace(&mut self) {
        self.calls.push(Call::ReleaseBackspace);
    }
    fn on_space(&mut self) {
        self.calls.push(Call::Space);
    }
    fn on_return(&mut self) {
        self.calls.push(Call::Return);
    }
}

struct CountingHaptics(Rc<Cell<usize>>);

impl Haptics for CountingHaptics {
    fn pulse(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn create_view(
    config: &Config,
    uppercase: bool,
) -> (KeyboardView<RecordingListener>, Rc<Cell<usize>>, Instant) {
    let pulses = Rc::new(Cell::new(0));
    let listener = RecordingListener {
        uppercase,
        calls: Vec::new(),
    };
    let view = KeyboardView::new(
        listener,
        Box::new(CountingHaptics(pulses.clone())),
        config,
        false,
    );
    (view, pulses, Instant::now())
}

fn ms(t0: Instant, millis: u64) -> Instant {
    t0 + Duration::from_millis(millis)
}

fn tap(view: &mut KeyboardView<RecordingListener>, key: KeyId, t0: Instant, at_ms: u64) {
    view.handle_pointer(key, PointerPhase::Down, ms(t0, at_ms));
    view.handle_pointer(key, PointerPhase::Up, ms(t0, at_ms + 40));
}

#[test]
fn quick_tap_on_h_while_uppercase() {
    let config = Config::default();
    let (mut view, pulses, t0) = create_view(&config, true);
    let visuals_before = view.visuals();

    tap(&mut view, KeyId::H, t0, 0);

    // Tap reports on_h, and the press still closes with its release; case
    // and visuals are untouched.
    assert_eq!(view.listener().calls, vec![Call::H, Call::ReleaseH]);
    assert!(view.listener().is_uppercase());
    assert_eq!(view.visuals(), visuals_before);
    assert_eq!(pulses.get(), 1);
}

#[test]
fn long_hold_backspace_then_release() {
    let config = Config::default();
    let (mut view, _pulses, t0) = create_view(&config, false);

    view.handle_pointer(KeyId::Backspace, PointerPhase::Down, t0);
    view.poll(ms(t0, 600));
    view.handle_pointer(KeyId::Backspace, PointerPhase::Up, ms(t0, 700));

    // Long-press then release, with no plain backspace tap in between
    assert_eq!(
        view.listener().calls,
        vec![Call::LongBackspace, Call::ReleaseBackspace]
    );
}

#[test]
fn releasing_before_threshold_prevents_long_press() {
    let config = Config::default();
    let (mut view, _pulses, t0) = create_view(&config, false);

    view.handle_pointer(KeyId::H, PointerPhase::Down, t0);
    view.handle_pointer(KeyId::H, PointerPhase::Up, ms(t0, 200));
    // Poll long after the original deadline would have elapsed
    view.poll(ms(t0, 10_000));

    assert_eq!(view.listener().calls, vec![Call::H, Call::ReleaseH]);
}

#[test]
fn cancel_releases_held_key_without_tap() {
    let config = Config::default();
    let (mut view, pulses, t0) = create_view(&config, false);

    view.handle_pointer(KeyId::H, PointerPhase::Down, t0);
    view.handle_pointer(KeyId::H, PointerPhase::Cancel, ms(t0, 100));

    // The host must never be left believing the key is still held
    assert_eq!(view.listener().calls, vec![Call::ReleaseH]);
    // Release carries no haptic
    assert_eq!(pulses.get(), 0);
}

#[test]
fn shift_tap_toggles_case_and_rerenders() {
    let config = Config::default();
    let (mut view, pulses, t0) = create_view(&config, false);
    assert_eq!(view.visuals().h_glyph, 'h');

    tap(&mut view, KeyId::Shift, t0, 0);

    assert!(view.listener().is_uppercase());
    assert_eq!(view.visuals().h_glyph, 'H');
    assert_eq!(view.visuals().shift_tint, view.theme().primary);
    // Case toggle is not one of the eight action callbacks
    assert!(view.listener().calls.is_empty());
    assert_eq!(pulses.get(), 1);
}

#[test]
fn shift_double_tap_round_trips() {
    let config = Config::default();
    let (mut view, _pulses, t0) = create_view(&config, false);
    let visuals_before = view.visuals();

    tap(&mut view, KeyId::Shift, t0, 0);
    tap(&mut view, KeyId::Shift, t0, 100);

    assert!(!view.listener().is_uppercase());
    assert_eq!(view.visuals(), visuals_before);
    assert_eq!(view.visuals().shift_tint, view.theme().control_normal);
}

#[test]
fn uppercase_at_construction_renders_uppercase() {
    let config = Config::default();
    let (view, _pulses, _t0) = create_view(&config, true);

    assert_eq!(view.visuals().h_glyph, 'H');
    assert_eq!(view.visuals().shift_tint, view.theme().primary);
}

#[test]
fn minimalist_mode_drops_space_and_shift() {
    let mut config = Config::default();
    config.keyboard.minimalist_mode = true;
    let (mut view, pulses, t0) = create_view(&config, false);

    assert!(!view.is_visible(KeyId::Space));
    assert!(!view.is_visible(KeyId::Shift));
    assert!(view.is_visible(KeyId::H));
    assert!(view.is_visible(KeyId::Backspace));
    assert!(view.is_visible(KeyId::Return));

    // Events in the hidden regions stay no-ops however often they repeat
    for round in 0..3 {
        tap(&mut view, KeyId::Space, t0, round * 100);
        tap(&mut view, KeyId::Shift, t0, round * 100 + 50);
    }

    assert!(view.listener().calls.is_empty());
    assert!(!view.listener().is_uppercase());
    assert_eq!(pulses.get(), 0);

    // The remaining keys behave identically
    tap(&mut view, KeyId::H, t0, 1000);
    assert_eq!(view.listener().calls, vec![Call::H, Call::ReleaseH]);
}

#[test]
fn disabled_haptics_suppress_pulses_but_not_callbacks() {
    let mut config = Config::default();
    config.keyboard.haptic_feedback = false;
    let (mut view, pulses, t0) = create_view(&config, false);

    // Exercise every action type: taps on all five keys, long-press and
    // release on both repeatable keys.
    tap(&mut view, KeyId::H, t0, 0);
    tap(&mut view, KeyId::Backspace, t0, 100);
    tap(&mut view, KeyId::Space, t0, 200);
    tap(&mut view, KeyId::Return, t0, 300);
    tap(&mut view, KeyId::Shift, t0, 400);
    view.handle_pointer(KeyId::H, PointerPhase::Down, ms(t0, 500));
    view.poll(ms(t0, 1100));
    view.handle_pointer(KeyId::H, PointerPhase::Up, ms(t0, 1200));

    assert_eq!(pulses.get(), 0);
    assert_eq!(
        view.listener().calls,
        vec![
            Call::H,
            Call::ReleaseH,
            Call::Backspace,
            Call::ReleaseBackspace,
            Call::Space,
            Call::Return,
            Call::LongH,
            Call::ReleaseH,
        ]
    );
    assert!(view.listener().is_uppercase());
}

#[test]
fn one_pulse_per_semantic_action_not_per_pointer_event() {
    let config = Config::default();
    let (mut view, pulses, t0) = create_view(&config, false);

    // A quick tap is two raw pointer events but one haptic action
    tap(&mut view, KeyId::H, t0, 0);
    assert_eq!(pulses.get(), 1);

    // A long press is down + poll + up: one haptic for the long-press,
    // none for the release
    view.handle_pointer(KeyId::Backspace, PointerPhase::Down, ms(t0, 100));
    view.poll(ms(t0, 700));
    view.handle_pointer(KeyId::Backspace, PointerPhase::Up, ms(t0, 800));
    assert_eq!(pulses.get(), 2);
}

#[test]
fn theme_resolution_is_fixed_at_construction() {
    let mut config = Config::default();
    config.keyboard.theme = crate::config::ThemeMode::Dark;
    let (view, _pulses, _t0) = create_view(&config, false);

    assert_eq!(view.theme(), &crate::theme::DARK);

    // follow-system resolves against the hint passed at construction
    config.keyboard.theme = crate::config::ThemeMode::FollowSystem;
    let listener = RecordingListener::default();
    let view = KeyboardView::new(listener, Box::new(NullHaptics), &config, true);
    assert_eq!(view.theme(), &crate::theme::DARK);
}
