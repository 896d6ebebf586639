//! One-line status bar under the strip.
//!
//! Shows whether the strip is moving, which speed profile is active and,
//! while a card is hovered, that brand's link.

use crate::state::AppState;
use crate::view::styles::MarqueeStyles;
use ratatui::text::{Line, Span};
use std::time::Duration;

/// Follows the badge, whose own padding supplies the leading space.
const BADGE_SEPARATOR: &str = "│ ";
const SEPARATOR: &str = " │ ";

/// Milliseconds with sub-millisecond precision only when needed ("30", "12.5").
pub fn format_interval(interval: Duration) -> String {
    let ms = interval.as_micros() as f64 / 1000.0;
    format!("{ms}ms")
}

/// Build the status line for the current state.
pub fn status_line(state: &AppState, styles: &MarqueeStyles) -> Line<'static> {
    let engine = state.engine();
    let profile = engine.profile();

    let badge = if engine.is_paused() {
        Span::styled(" PAUSED ", styles.paused)
    } else {
        Span::styled(" RUNNING ", styles.running)
    };

    let class = if engine.is_narrow() { "narrow" } else { "wide" };
    let mut spans = vec![
        badge,
        Span::styled(BADGE_SEPARATOR, styles.muted),
        Span::styled(
            format!(
                "{class} {:.2}%/{}",
                profile.step_size,
                format_interval(profile.tick_interval)
            ),
            styles.muted,
        ),
    ];

    if let Some(brand) = state.hovered_brand() {
        spans.push(Span::styled(SEPARATOR, styles.muted));
        spans.push(Span::styled(brand.name.clone(), styles.card));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(brand.link.clone(), styles.link));
    }

    Line::from(spans)
}
