//! Layout dimension constants for TUI rendering.

/// Height of the bordered strip box (border + one card row + border).
pub const STRIP_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Title drawn on the strip border.
pub const STRIP_TITLE: &str = " brands ";

/// Poll timeout when no timer is armed (paused strip).
pub const IDLE_POLL_MS: u64 = 250;
