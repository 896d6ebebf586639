//! Base engine configuration and the responsive speed profile.

use std::time::Duration;
use tracing::warn;

/// Default step per tick, in percent of the looped strip.
pub const DEFAULT_STEP_SIZE: f64 = 0.1;

/// Default tick period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Shortest tick period the engine will arm.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Construction-time engine settings.
///
/// Use [`EngineConfig::new`] to get sanitized values; the struct fields are
/// public for tests and literal construction, and [`SpeedProfile::derive`]
/// sanitizes again anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Base step per tick (percent).
    pub base_step_size: f64,
    /// Base tick period.
    pub base_tick_interval: Duration,
    /// Start in the Paused+Disarmed state.
    pub start_paused: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_step_size: DEFAULT_STEP_SIZE,
            base_tick_interval: DEFAULT_TICK_INTERVAL,
            start_paused: false,
        }
    }
}

impl EngineConfig {
    /// Build a config, replacing non-positive values with the defaults.
    pub fn new(base_step_size: f64, base_tick_interval: Duration) -> Self {
        Self {
            base_step_size: sanitize_step(base_step_size),
            base_tick_interval: sanitize_interval(base_tick_interval),
            start_paused: false,
        }
    }

    /// Build a config from a millisecond count as it appears in config files.
    pub fn from_millis(base_step_size: f64, base_tick_interval_ms: u64) -> Self {
        Self::new(base_step_size, Duration::from_millis(base_tick_interval_ms))
    }

    /// Same config, starting paused.
    pub fn paused(mut self) -> Self {
        self.start_paused = true;
        self
    }
}

fn sanitize_step(step: f64) -> f64 {
    if step.is_finite() && step > 0.0 {
        step
    } else {
        warn!(step, fallback = DEFAULT_STEP_SIZE, "non-positive scroll step replaced");
        DEFAULT_STEP_SIZE
    }
}

fn sanitize_interval(interval: Duration) -> Duration {
    if interval.is_zero() {
        warn!(fallback = ?DEFAULT_TICK_INTERVAL, "zero scroll interval replaced");
        DEFAULT_TICK_INTERVAL
    } else {
        interval
    }
}

/// Effective step and period for the current viewport classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedProfile {
    /// Percent advanced per tick. Always > 0.
    pub step_size: f64,
    /// Tick period. Always >= [`MIN_TICK_INTERVAL`].
    pub tick_interval: Duration,
}

impl SpeedProfile {
    /// Narrow viewports show fewer cards per row, so the strip moves
    /// twice as far, twice as often.
    pub fn derive(config: &EngineConfig, is_narrow: bool) -> Self {
        let step = sanitize_step(config.base_step_size);
        let interval = sanitize_interval(config.base_tick_interval);

        if is_narrow {
            Self {
                step_size: step * 2.0,
                tick_interval: (interval / 2).max(MIN_TICK_INTERVAL),
            }
        } else {
            Self {
                step_size: step,
                tick_interval: interval.max(MIN_TICK_INTERVAL),
            }
        }
    }
}
