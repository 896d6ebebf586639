//! brandstrip
//!
//! Terminal marquee that scrolls a looped strip of brand cards. Hovering a
//! card pauses the strip, narrow terminals scroll faster.
//!
//! The scroll engine, viewport classifier and strip layout are pure and
//! driven by an explicit clock; the `view` module is the impure shell that
//! owns the terminal and the event loop.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;
pub mod viewport;
