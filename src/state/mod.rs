//! Application state management (pure core)

pub mod app_state;
pub mod hover;

pub use app_state::AppState;
pub use hover::{HoverTracker, HoverTransition};
