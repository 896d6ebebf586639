//! Application state: the brand list, its layout, the scroll engine and the
//! inputs that drive it.

use crate::engine::{EngineConfig, ScrollEngine, Scheduler, TimerId};
use crate::model::BrandEntry;
use crate::state::hover::{HoverTracker, HoverTransition};
use crate::viewport::{Breakpoint, ViewportClassifier, ViewportSignal};
use crate::view_state::StripLayout;
use std::time::Instant;
use tracing::debug;

/// Everything the marquee needs between frames.
#[derive(Debug)]
pub struct AppState {
    brands: Vec<BrandEntry>,
    layout: StripLayout,
    engine: ScrollEngine,
    classifier: ViewportClassifier,
    hover: HoverTracker,
    /// Pause requested from the keyboard (or `start_paused`). Hover never
    /// releases it.
    held: bool,
}

impl AppState {
    /// Classify the viewport, then start the engine with the matching profile.
    pub fn new(
        brands: Vec<BrandEntry>,
        config: EngineConfig,
        breakpoint: Breakpoint,
        signal: &ViewportSignal,
        scheduler: Scheduler,
        now: Instant,
    ) -> Self {
        let classifier = ViewportClassifier::new(signal, breakpoint);
        let engine = ScrollEngine::new(config, classifier.is_narrow(), scheduler, now);
        let layout = StripLayout::new(&brands);
        let held = engine.is_paused();
        debug!(
            brands = brands.len(),
            strip_width = layout.strip_width(),
            "marquee state created"
        );

        Self {
            brands,
            layout,
            engine,
            classifier,
            hover: HoverTracker::new(),
            held,
        }
    }

    /// Brands in display order (one copy).
    pub fn brands(&self) -> &[BrandEntry] {
        &self.brands
    }

    /// Card positions of the looped strip.
    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    /// The scroll engine, for position and profile reads.
    pub fn engine(&self) -> &ScrollEngine {
        &self.engine
    }

    /// Current narrow/wide classification.
    pub fn classifier(&self) -> &ViewportClassifier {
        &self.classifier
    }

    /// Looped index of the hovered card.
    pub fn hovered(&self) -> Option<usize> {
        self.hover.hovered()
    }

    /// Whether the keyboard is holding the strip paused.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Brand behind the hovered card.
    pub fn hovered_brand(&self) -> Option<&BrandEntry> {
        let index = self.hover.hovered()?;
        self.brands.get(index % self.brands.len().max(1))
    }

    /// Column shift for the current position.
    pub fn shift(&self) -> u32 {
        self.layout.shift_for(self.engine.position())
    }

    /// Push the classifier's current value into the engine.
    ///
    /// Call after the viewport signal was notified. Returns whether the
    /// profile changed.
    pub fn sync_viewport(&mut self, now: Instant) -> bool {
        let narrow = self.classifier.is_narrow();
        if narrow == self.engine.is_narrow() {
            return false;
        }
        self.engine.set_narrow(narrow, now);
        true
    }

    /// Pointer is over `card` (looped index) or over nothing.
    ///
    /// Returns whether the hovered card changed.
    pub fn pointer_at(&mut self, card: Option<usize>, now: Instant) -> bool {
        let transitions = self.hover.update(card);
        self.apply_hover(&transitions, now);
        !transitions.is_empty()
    }

    /// Pointer left the strip (or the terminal lost focus).
    pub fn pointer_left(&mut self, now: Instant) -> bool {
        match self.hover.clear() {
            Some(transition) => {
                self.apply_hover(&[transition], now);
                true
            }
            None => false,
        }
    }

    /// Keyboard pause toggle.
    ///
    /// Holds or releases the strip independently of hover: a held strip
    /// stays paused when the pointer leaves a card, and releasing it while
    /// a card is hovered keeps it paused until the pointer leaves.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.held = !self.held;
        debug!(held = self.held, "keyboard pause");
        self.apply_pause(now);
    }

    /// Route a timer firing to the engine.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        self.engine.on_timer(id)
    }

    fn apply_hover(&mut self, transitions: &[HoverTransition], now: Instant) {
        if transitions.is_empty() {
            return;
        }
        for transition in transitions {
            debug!(?transition, "hover");
        }
        self.apply_pause(now);
    }

    /// Crossing from one card to the next resolves to a single
    /// `set_paused(true)`, so the timer is not re-armed in between.
    fn apply_pause(&mut self, now: Instant) {
        let paused = self.held || self.hover.hovered().is_some();
        self.engine.set_paused(paused, now);
    }
}
