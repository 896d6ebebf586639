//! Domain-level keyboard actions independent of key bindings.

/// User intent, decoupled from concrete keys.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled
/// by [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application. Default: q / Esc / Ctrl+C
    Quit,
    /// Pause or resume the strip from the keyboard. Default: Space / p
    TogglePause,
}
