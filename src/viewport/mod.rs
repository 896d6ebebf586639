//! Viewport width signal and breakpoint classifier.
//!
//! [`ViewportSignal`] stands in for the host's viewport query service: it
//! holds the last known terminal width and notifies subscribers when the
//! event loop reports a resize. [`ViewportClassifier`] turns that width into
//! the boolean the scroll engine consumes.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Default breakpoint in terminal columns.
pub const DEFAULT_BREAKPOINT_COLUMNS: u16 = 80;

/// "Viewport is at most `max_columns` wide."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Inclusive upper bound for the narrow classification.
    pub max_columns: u16,
}

impl Breakpoint {
    /// Breakpoint at `max_columns` (inclusive).
    pub fn new(max_columns: u16) -> Self {
        Self { max_columns }
    }

    /// Evaluate the predicate. Unknown width is never narrow.
    pub fn matches(&self, width: Option<u16>) -> bool {
        width.is_some_and(|w| w <= self.max_columns)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_COLUMNS)
    }
}

type Listener = Box<dyn FnMut(Option<u16>)>;

#[derive(Default)]
struct SignalInner {
    width: Option<u16>,
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Host-side viewport width with change notifications.
///
/// Cloning shares the same underlying state.
#[derive(Clone, Default)]
pub struct ViewportSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl std::fmt::Debug for ViewportSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ViewportSignal")
            .field("width", &inner.width)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ViewportSignal {
    /// Signal with a known width.
    pub fn new(width: u16) -> Self {
        Self::with_width(Some(width))
    }

    /// Signal for an environment that cannot report its size.
    pub fn unavailable() -> Self {
        Self::with_width(None)
    }

    /// Signal starting at `width`; `None` when the size is unknown.
    pub fn with_width(width: Option<u16>) -> Self {
        let signal = Self::default();
        signal.inner.borrow_mut().width = width;
        signal
    }

    /// Last reported width.
    pub fn width(&self) -> Option<u16> {
        self.inner.borrow().width
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Register a change listener. Dropping the returned guard deregisters it.
    pub fn subscribe(&self, listener: impl FnMut(Option<u16>) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, Box::new(listener));
        Subscription {
            id,
            signal: Rc::downgrade(&self.inner),
        }
    }

    /// Record a new width and notify every listener if it changed.
    pub fn notify(&self, width: Option<u16>) {
        // Listeners are taken out while they run so a listener may read the
        // signal without a double borrow.
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.width == width {
                return;
            }
            inner.width = width;
            std::mem::take(&mut inner.listeners)
        };

        for listener in listeners.values_mut() {
            listener(width);
        }

        let mut inner = self.inner.borrow_mut();
        // Subscriptions created during dispatch landed in the fresh map
        listeners.append(&mut inner.listeners);
        inner.listeners = listeners;
    }

    /// Convenience for a resize event.
    pub fn resize(&self, width: u16) {
        self.notify(Some(width));
    }
}

/// Guard for a [`ViewportSignal`] listener.
#[must_use = "dropping a Subscription deregisters the listener"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    signal: Weak<RefCell<SignalInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner.borrow_mut().listeners.remove(&self.id);
        }
    }
}

/// Boolean "is the viewport narrow" kept current by the signal.
#[derive(Debug)]
pub struct ViewportClassifier {
    breakpoint: Breakpoint,
    is_narrow: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl ViewportClassifier {
    /// Evaluate once against the current width and subscribe for changes.
    pub fn new(signal: &ViewportSignal, breakpoint: Breakpoint) -> Self {
        let is_narrow = Rc::new(Cell::new(breakpoint.matches(signal.width())));

        let cell = Rc::clone(&is_narrow);
        let subscription = signal.subscribe(move |width| {
            let narrow = breakpoint.matches(width);
            if cell.replace(narrow) != narrow {
                debug!(?width, narrow, "viewport classification changed");
            }
        });

        Self {
            breakpoint,
            is_narrow,
            _subscription: subscription,
        }
    }

    /// Current classification.
    pub fn is_narrow(&self) -> bool {
        self.is_narrow.get()
    }

    /// Breakpoint this classifier applies.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}
