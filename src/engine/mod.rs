//! Scroll-state engine (pure core)
//!
//! Owns the strip position, the pause flag and at most one repeating
//! timer. The timer lives in the host [`Scheduler`]; the engine only keeps
//! its handle and is told about firings through [`ScrollEngine::on_timer`].
//!
//! # State machine
//!
//! | state            | hover-enter      | hover-leave     | profile change  |
//! |------------------|------------------|-----------------|-----------------|
//! | Running+Armed    | Paused+Disarmed  | (no-op)         | Running+Armed*  |
//! | Paused+Disarmed  | (no-op)          | Running+Armed   | Paused+Disarmed |
//!
//! `*` re-armed with a fresh period. Teardown from any state disarms.

pub mod profile;
pub mod scheduler;

pub use profile::{EngineConfig, SpeedProfile};
pub use scheduler::{Scheduler, TimerId};

use std::time::Instant;
use tracing::{debug, trace};

/// Length of one loop of the strip, in percent.
pub const WRAP: f64 = 100.0;

/// Mutable engine state. `position` is always in `[0, WRAP)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Horizontal shift as a percentage of the looped strip.
    pub position: f64,
    /// Whether advancement is suspended.
    pub paused: bool,
}

impl ScrollState {
    fn advanced(self, step: f64) -> Self {
        Self {
            position: wrap_position(self.position + step),
            ..self
        }
    }
}

/// Wrap any finite value into `[0, WRAP)`.
pub fn wrap_position(value: f64) -> f64 {
    let wrapped = value.rem_euclid(WRAP);
    // rem_euclid can round up to WRAP for tiny negative inputs
    if wrapped >= WRAP {
        0.0
    } else {
        wrapped
    }
}

/// Timer-driven marquee position.
#[derive(Debug)]
pub struct ScrollEngine {
    config: EngineConfig,
    state: ScrollState,
    is_narrow: bool,
    profile: SpeedProfile,
    scheduler: Scheduler,
    timer: Option<TimerId>,
}

impl ScrollEngine {
    /// Create an engine at position 0.
    ///
    /// Starts Running+Armed unless `config.start_paused` is set.
    pub fn new(config: EngineConfig, is_narrow: bool, scheduler: Scheduler, now: Instant) -> Self {
        let profile = SpeedProfile::derive(&config, is_narrow);
        let mut engine = Self {
            config,
            state: ScrollState {
                position: 0.0,
                paused: config.start_paused,
            },
            is_narrow,
            profile,
            scheduler,
            timer: None,
        };
        debug!(?profile, paused = engine.state.paused, "scroll engine created");
        engine.arm(now);
        engine
    }

    /// Current position in `[0, 100)`.
    pub fn position(&self) -> f64 {
        self.state.position
    }

    /// Snapshot of position and pause flag.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Whether hover or the keyboard has stopped the strip.
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Classification the current profile was derived from.
    pub fn is_narrow(&self) -> bool {
        self.is_narrow
    }

    /// Profile currently in effect.
    pub fn profile(&self) -> SpeedProfile {
        self.profile
    }

    /// Base configuration the profiles are derived from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether the engine holds a live timer.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some_and(|id| self.scheduler.is_armed(id))
    }

    /// Handle of the live timer, if any.
    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer
    }

    /// Timer callback. Advances once if `id` is this engine's live timer.
    ///
    /// Returns whether the position changed. Firings from timers disarmed
    /// earlier (by pause or profile change) are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.state.paused || self.timer != Some(id) {
            trace!(timer = id.get(), "ignoring stale firing");
            return false;
        }
        self.state = self.state.advanced(self.profile.step_size);
        true
    }

    /// Pause-control entry point wired to hover enter/leave.
    ///
    /// Pausing keeps the position. Setting the current value again does
    /// nothing, so the running period is not restarted.
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.state.paused == paused {
            return;
        }
        self.state.paused = paused;
        debug!(paused, position = self.state.position, "pause changed");
        if paused {
            self.disarm();
        } else {
            self.arm(now);
        }
    }

    /// Apply a viewport classification. Re-arms with a fresh period when it
    /// flips while running.
    pub fn set_narrow(&mut self, is_narrow: bool, now: Instant) {
        if self.is_narrow == is_narrow {
            return;
        }
        self.disarm();
        self.is_narrow = is_narrow;
        self.profile = SpeedProfile::derive(&self.config, is_narrow);
        debug!(is_narrow, profile = ?self.profile, "speed profile changed");
        self.arm(now);
    }

    /// Disarm and consume the engine.
    pub fn teardown(mut self) {
        self.disarm();
    }

    fn arm(&mut self, now: Instant) {
        self.disarm();
        if self.state.paused {
            return;
        }
        self.timer = Some(
            self.scheduler
                .set_interval(self.profile.tick_interval, now),
        );
    }

    fn disarm(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.clear_interval(id);
        }
    }
}

impl Drop for ScrollEngine {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
