//! View-state layer: pure layout computed from model data.
//!
//! Nothing here touches the terminal; the view layer asks these types
//! where things go and draws them.

pub mod strip;

pub use strip::{card_width, CardSlot, PlacedCard, StripLayout, CARD_GAP, CARD_PADDING};
