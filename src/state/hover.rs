//! Pointer hover tracking over strip cards.
//!
//! Turns "which card is under the pointer now" samples into enter/leave
//! transitions, the way per-card mouse-enter and mouse-leave events would
//! arrive.

/// A change in which card is hovered. The payload is the looped card index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    /// Pointer moved onto a card.
    Enter(usize),
    /// Pointer moved off a card.
    Leave(usize),
}

impl HoverTransition {
    /// Value to hand to the pause-control entry point.
    pub fn pauses(self) -> bool {
        matches!(self, HoverTransition::Enter(_))
    }
}

/// Remembers the hovered card between pointer events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<usize>,
}

impl HoverTracker {
    /// Tracker with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Card currently under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Record the card under the pointer and return the transitions, in
    /// order. Moving from one card straight onto another yields a leave
    /// followed by an enter.
    pub fn update(&mut self, card: Option<usize>) -> Vec<HoverTransition> {
        if card == self.hovered {
            return Vec::new();
        }

        let mut transitions = Vec::with_capacity(2);
        if let Some(previous) = self.hovered {
            transitions.push(HoverTransition::Leave(previous));
        }
        if let Some(next) = card {
            transitions.push(HoverTransition::Enter(next));
        }
        self.hovered = card;
        transitions
    }

    /// Pointer left the strip entirely (focus lost, mouse released elsewhere).
    pub fn clear(&mut self) -> Option<HoverTransition> {
        self.hovered.take().map(HoverTransition::Leave)
    }
}
