//! Tests for the TuiApp shell, driven through ratatui's TestBackend.

use super::*;
use crate::model::Logo;
use crossterm::event::MouseButton;
use ratatui::backend::TestBackend;
use ratatui::text::Span;

fn brands() -> Vec<BrandEntry> {
    vec![
        BrandEntry::new("ab", "https://ab.example", Logo::Element(Span::raw("*"))),
        BrandEntry::new("cde", "https://cde.example", Logo::Element(Span::raw("*"))),
    ]
}

fn options(breakpoint: u16) -> MarqueeOptions {
    MarqueeOptions {
        engine: EngineConfig::default(),
        breakpoint: Breakpoint::new(breakpoint),
        colors: ColorConfig::new(false),
    }
}

fn app(width: u16, height: u16, breakpoint: u16, now: Instant) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    TuiApp::with_terminal(terminal, brands(), options(breakpoint), now)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse_moved(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Trailing whitespace and blank lines are dropped.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

#[test]
fn first_frame_shows_strip_and_status() {
    let mut app = app(40, 4, 30, Instant::now());
    app.draw().unwrap();

    let output = buffer_to_string(app.terminal().backend().buffer());
    let expected = [
        "┌ brands ──────────────────────────────┐",
        "│ * ab    * cde    * ab    * cde    * a│",
        "└──────────────── q quit · space pause ┘",
        " RUNNING │ wide 0.10%/30ms",
    ]
    .join("\n");
    assert_eq!(output, expected);
    assert_eq!(app.strip_area(), Some(Rect::new(1, 1, 38, 1)));
}

#[test]
fn initial_width_classifies_viewport() {
    let now = Instant::now();
    assert!(app(40, 4, 60, now).app_state().engine().is_narrow());
    assert!(!app(40, 4, 30, now).app_state().engine().is_narrow());
}

#[test]
fn quit_keys() {
    let mut app = app(40, 4, 30, Instant::now());
    let now = Instant::now();
    assert!(app.handle_key(key(KeyCode::Char('q')), now));
    assert!(app.handle_key(key(KeyCode::Esc), now));
    assert!(app.handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        now
    ));
    assert!(!app.handle_key(key(KeyCode::Char('x')), now));
}

#[test]
fn space_toggles_pause_and_disarms_timer() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);
    assert_eq!(app.scheduler().pending(), 1);

    assert!(!app.handle_key(key(KeyCode::Char(' ')), now));
    assert!(app.app_state().engine().is_paused());
    assert_eq!(app.scheduler().pending(), 0);

    app.handle_key(key(KeyCode::Char('p')), now);
    assert!(!app.app_state().engine().is_paused());
    assert_eq!(app.scheduler().pending(), 1);
}

#[test]
fn hovering_a_card_pauses_until_pointer_leaves() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);
    app.draw().unwrap();

    // column 3 of the screen is column 2 of the strip: inside " * ab "
    assert!(app.handle_mouse(mouse_moved(3, 1), now));
    assert_eq!(app.app_state().hovered(), Some(0));
    assert!(app.app_state().engine().is_paused());

    // moving within the same card changes nothing
    assert!(!app.handle_mouse(mouse_moved(4, 1), now));

    // the status bar row is outside the strip
    assert!(app.handle_mouse(mouse_moved(3, 3), now));
    assert_eq!(app.app_state().hovered(), None);
    assert!(!app.app_state().engine().is_paused());
}

#[test]
fn pointer_in_gap_is_not_a_hover() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);
    app.draw().unwrap();

    // strip columns 6 and 7 are the gap after the first card
    assert!(!app.handle_mouse(mouse_moved(8, 1), now));
    assert!(!app.app_state().engine().is_paused());
}

#[test]
fn mouse_before_first_draw_hits_nothing() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);
    assert!(!app.handle_mouse(mouse_moved(3, 1), now));
}

#[test]
fn click_counts_as_pointer_position() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);
    app.draw().unwrap();
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 12,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    assert!(app.handle_mouse(click, now));
    assert_eq!(app.app_state().hovered(), Some(1));
}

#[test]
fn resize_across_breakpoint_switches_profile() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);

    app.handle_resize(20, 4, now);
    assert_eq!(app.viewport().width(), Some(20));
    assert!(app.app_state().engine().is_narrow());
    assert_eq!(app.app_state().engine().profile().step_size, 0.2);
    assert_eq!(app.scheduler().pending(), 1);

    app.handle_resize(100, 4, now);
    assert!(!app.app_state().engine().is_narrow());
    assert_eq!(app.scheduler().pending(), 1);
}

#[test]
fn resize_to_zero_width_is_not_narrow() {
    let now = Instant::now();
    let mut app = app(40, 4, 60, now);
    assert!(app.app_state().engine().is_narrow());

    app.handle_resize(0, 0, now);
    assert_eq!(app.viewport().width(), None);
    assert!(!app.app_state().engine().is_narrow());
}

#[test]
fn resize_keeps_hover_under_resting_pointer() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);
    app.draw().unwrap();
    app.handle_mouse(mouse_moved(3, 1), now);

    app.handle_resize(50, 4, now);
    assert_eq!(app.strip_area(), Some(Rect::new(1, 1, 48, 1)));
    assert_eq!(app.app_state().hovered(), Some(0));
    assert!(app.app_state().engine().is_paused());
    assert_eq!(app.scheduler().pending(), 0);
}

#[test]
fn resize_that_moves_strip_off_pointer_resumes() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);
    app.draw().unwrap();
    app.handle_mouse(mouse_moved(38, 1), now);
    assert!(app.app_state().hovered().is_some());

    // column 38 is on the right border once the terminal is 39 wide
    app.handle_resize(39, 4, now);
    assert_eq!(app.app_state().hovered(), None);
    assert!(!app.app_state().engine().is_paused());
}

#[test]
fn card_sliding_under_resting_pointer_pauses_strip() {
    let start = Instant::now();
    let mut app = app(40, 4, 30, start);
    app.draw().unwrap();

    // screen column 7 is strip column 6: the gap after " * ab "
    assert!(!app.handle_mouse(mouse_moved(7, 1), start));

    let mut t = start;
    for _ in 0..200 {
        t += Duration::from_millis(30);
        if app.fire_timers(t) {
            app.draw().unwrap();
        }
    }

    // shift 2 puts strip column 6 on column 8 of the copy: the second card
    assert_eq!(app.app_state().shift(), 2);
    assert_eq!(app.app_state().hovered(), Some(1));
    assert!(app.app_state().engine().is_paused());
    assert_eq!(app.scheduler().pending(), 0);
}

#[test]
fn focus_lost_forgets_pointer() {
    let start = Instant::now();
    let mut app = app(40, 4, 30, start);
    app.draw().unwrap();
    app.handle_mouse(mouse_moved(7, 1), start);

    assert!(!app.handle_focus_lost(start));
    let mut t = start;
    for _ in 0..200 {
        t += Duration::from_millis(30);
        if app.fire_timers(t) {
            app.draw().unwrap();
        }
    }
    assert_eq!(app.app_state().hovered(), None);
    assert!(!app.app_state().engine().is_paused());
}

#[test]
fn keyboard_pause_survives_hover_and_leave() {
    let now = Instant::now();
    let mut app = app(40, 4, 30, now);
    app.draw().unwrap();

    app.handle_key(key(KeyCode::Char(' ')), now);
    app.handle_mouse(mouse_moved(3, 1), now);
    app.handle_mouse(mouse_moved(3, 3), now);
    assert!(app.app_state().engine().is_paused());
    assert_eq!(app.scheduler().pending(), 0);

    app.handle_key(key(KeyCode::Char(' ')), now);
    assert!(!app.app_state().engine().is_paused());
}

#[test]
fn timers_request_redraw_only_when_shift_moves() {
    let start = Instant::now();
    let mut app = app(40, 4, 30, start);
    app.draw().unwrap();

    // one tick is 0.1% of a 17 column copy: no visible movement
    assert!(!app.fire_timers(start + Duration::from_millis(30)));
    assert!((app.app_state().engine().position() - 0.1).abs() < 1e-9);

    let mut t = start + Duration::from_millis(30);
    let mut redraws = 0;
    for _ in 0..60 {
        t += Duration::from_millis(30);
        if app.fire_timers(t) {
            redraws += 1;
            app.draw().unwrap();
        }
    }
    assert_eq!(redraws, 1);
    assert_eq!(app.app_state().shift(), 1);
}

#[test]
fn paused_strip_ignores_timers() {
    let start = Instant::now();
    let mut app = app(40, 4, 30, start);
    app.handle_key(key(KeyCode::Char(' ')), start);

    assert!(!app.fire_timers(start + Duration::from_secs(1)));
    assert_eq!(app.app_state().engine().position(), 0.0);
}

#[test]
fn dropping_app_leaves_no_pending_timer() {
    let now = Instant::now();
    let app = app(40, 4, 30, now);
    let scheduler = app.scheduler().clone();
    assert_eq!(scheduler.pending(), 1);
    drop(app);
    assert_eq!(scheduler.pending(), 0);
}
