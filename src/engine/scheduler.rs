//! Single-threaded repeating timer service.
//!
//! The event loop owns the clock: it asks for the next deadline, waits for
//! input up to that point, then calls [`Scheduler::fire_due`] and routes
//! each firing to the owner of the timer. Nothing here runs on its own
//! thread, so handlers never overlap.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::trace;

/// Upper bound on firings per timer in one `fire_due` call.
///
/// A timer that fell further behind is rephased to `now + period` instead
/// of replaying every missed period.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

/// Handle returned by [`Scheduler::set_interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw numeric id (for logging).
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Interval {
    period: Duration,
    next_fire: Instant,
}

#[derive(Debug, Default)]
struct TimerQueue {
    next_id: u64,
    timers: BTreeMap<TimerId, Interval>,
}

/// Shared handle to the host timer queue.
///
/// Cloning is cheap; all clones see the same queue.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    inner: Rc<RefCell<TimerQueue>>,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a repeating timer whose first firing is one `period` after `now`.
    ///
    /// A zero period is raised to one millisecond.
    pub fn set_interval(&self, period: Duration, now: Instant) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        let mut queue = self.inner.borrow_mut();
        let id = TimerId(queue.next_id);
        queue.next_id += 1;
        queue.timers.insert(
            id,
            Interval {
                period,
                next_fire: now + period,
            },
        );
        trace!(timer = id.get(), ?period, "interval armed");
        id
    }

    /// Disarm a timer. Returns `false` if it was not armed.
    pub fn clear_interval(&self, id: TimerId) -> bool {
        let removed = self.inner.borrow_mut().timers.remove(&id).is_some();
        if removed {
            trace!(timer = id.get(), "interval cleared");
        }
        removed
    }

    /// Whether `id` is currently armed.
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.inner.borrow().timers.contains_key(&id)
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Earliest deadline among armed timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .borrow()
            .timers
            .values()
            .map(|interval| interval.next_fire)
            .min()
    }

    /// Time left until the next deadline, saturating at zero.
    ///
    /// `None` when no timer is armed.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Collect every firing due at `now`, in deadline order.
    ///
    /// Each returned id corresponds to one period elapsed for that timer.
    pub fn fire_due(&self, now: Instant) -> Vec<TimerId> {
        let mut queue = self.inner.borrow_mut();
        let mut fired: Vec<(Instant, TimerId)> = Vec::new();

        for (id, interval) in queue.timers.iter_mut() {
            let mut count = 0;
            while interval.next_fire <= now {
                if count == MAX_CATCH_UP_TICKS {
                    interval.next_fire = now + interval.period;
                    break;
                }
                fired.push((interval.next_fire, *id));
                interval.next_fire += interval.period;
                count += 1;
            }
        }

        fired.sort();
        fired.into_iter().map(|(_, id)| id).collect()
    }
}
