//! Frame layout: bordered strip on top, status bar at the bottom.

use crate::state::AppState;
use crate::view::constants::{STATUS_BAR_HEIGHT, STRIP_HEIGHT, STRIP_TITLE};
use crate::view::marquee::Marquee;
use crate::view::status_bar::status_line;
use crate::view::styles::MarqueeStyles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Key hints drawn on the strip's bottom border.
pub const KEY_HINTS: &str = " q quit · space pause ";

/// Outer strip box and status bar areas for a frame.
pub fn split_frame(area: Rect) -> (Rect, Rect) {
    let [strip, _, status] = Layout::vertical([
        Constraint::Length(STRIP_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);
    (strip, status)
}

/// Area inside the strip border where cards are drawn.
pub fn strip_inner_area(area: Rect) -> Rect {
    let (strip, _) = split_frame(area);
    strip_block().inner(strip)
}

fn strip_block() -> Block<'static> {
    Block::bordered()
        .title(STRIP_TITLE)
        .title_bottom(Line::from(KEY_HINTS).right_aligned())
}

/// Draw one frame. Returns the card area for hit testing.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &MarqueeStyles) -> Rect {
    let (strip, status) = split_frame(frame.area());

    let block = strip_block().border_style(styles.border);
    let inner = block.inner(strip);
    frame.render_widget(block, strip);

    frame.render_widget(
        Marquee::new(state.brands(), state.layout(), state.shift())
            .hovered(state.hovered())
            .styles(*styles),
        inner,
    );

    frame.render_widget(Paragraph::new(status_line(state, styles)), status);

    inner
}
