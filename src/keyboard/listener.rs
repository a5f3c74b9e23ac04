//! Host capability contract.

/// Receiver for keyboard output, implemented by the host.
///
/// The view calls the listener; the listener never calls the view. All
/// callbacks run synchronously on the dispatch path and are expected to
/// return promptly.
///
/// Case state lives on the listener: `is_uppercase` is the sole source of
/// truth, and only the view may flip it (through
/// [`set_uppercase`](KeyboardListener::set_uppercase), on a shift tap).
/// Hosts that write it from elsewhere will desync the rendered key caps.
pub trait KeyboardListener {
    /// Current case state.
    fn is_uppercase(&self) -> bool;

    /// Updates case state. Called by the view on a shift tap.
    fn set_uppercase(&mut self, uppercase: bool);

    /// The H key was tapped.
    fn on_h(&mut self);

    /// The H key was held past the long-press threshold.
    fn on_long_h(&mut self);

    /// The H key was let go (up or cancel), however the press classified.
    fn on_release_h(&mut self);

    /// The backspace key was tapped.
    fn on_backspace(&mut self);

    /// The backspace key was held past the long-press threshold.
    fn on_long_backspace(&mut self);

    /// The backspace key was let go, however the press classified.
    fn on_release_backspace(&mut self);

    /// The space key was tapped.
    fn on_space(&mut self);

    /// The return key was tapped.
    fn on_return(&mut self);
}
