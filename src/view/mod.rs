//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod layout;
pub mod marquee;
pub mod status_bar;
pub mod styles;

pub use marquee::Marquee;
pub use styles::{ColorConfig, MarqueeStyles};

use crate::config::keybindings::KeyBindings;
use crate::engine::{EngineConfig, Scheduler};
use crate::model::{BrandEntry, KeyAction};
use crate::state::AppState;
use crate::viewport::{Breakpoint, ViewportSignal};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::layout::{Position, Rect};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Startup options for the marquee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeOptions {
    /// Base speed and start state.
    pub engine: EngineConfig,
    /// Widths at or below this use the narrow profile.
    pub breakpoint: Breakpoint,
    /// Whether to draw with colors.
    pub colors: ColorConfig,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            breakpoint: Breakpoint::default(),
            colors: ColorConfig::from_env_and_args(false),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    scheduler: Scheduler,
    viewport: ViewportSignal,
    key_bindings: KeyBindings,
    styles: MarqueeStyles,
    /// Card area of the last frame (for hover hit testing)
    last_strip_area: Option<Rect>,
    /// Column shift of the last frame, to skip redraws that change nothing
    last_shift: Option<u32>,
    /// Last reported pointer cell; cards can slide under a resting pointer
    pointer: Option<(u16, u16)>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// focus reporting.
    pub fn new(brands: Vec<BrandEntry>, options: MarqueeOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, brands, options, Instant::now()))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C). Waits for input only as
    /// long as the next timer deadline allows, then fires due timers and
    /// redraws when the visible shift moved.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let idle = Duration::from_millis(constants::IDLE_POLL_MS);

        self.draw()?;

        loop {
            let timeout = self
                .scheduler
                .time_until_next(Instant::now())
                .unwrap_or(idle);

            let mut dirty = false;
            if event::poll(timeout)? {
                let now = Instant::now();
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, now) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        dirty = self.handle_mouse(mouse, now);
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height, now);
                        dirty = true;
                    }
                    Event::FocusLost => {
                        dirty = self.handle_focus_lost(now);
                    }
                    _ => {}
                }
            }

            dirty |= self.fire_timers(Instant::now());

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal.
    ///
    /// The viewport signal starts from the terminal's current width; a
    /// terminal that cannot report its size counts as "not narrow".
    pub fn with_terminal(
        terminal: Terminal<B>,
        brands: Vec<BrandEntry>,
        options: MarqueeOptions,
        now: Instant,
    ) -> Self {
        let width = terminal
            .size()
            .ok()
            .map(|size| size.width)
            .filter(|w| *w > 0);
        let viewport = ViewportSignal::with_width(width);
        let scheduler = Scheduler::new();
        let app_state = AppState::new(
            brands,
            options.engine,
            options.breakpoint,
            &viewport,
            scheduler.clone(),
            now,
        );

        info!(
            ?width,
            narrow = app_state.classifier().is_narrow(),
            paused = app_state.engine().is_paused(),
            "marquee started"
        );

        Self {
            terminal,
            app_state,
            scheduler,
            viewport,
            key_bindings: KeyBindings::default(),
            styles: MarqueeStyles::with_color_config(options.colors),
            last_strip_area: None,
            last_shift: None,
            pointer: None,
        }
    }

    /// Marquee state (engine, hover, layout).
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Timer queue driving the engine.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Width signal fed by resize events.
    pub fn viewport(&self) -> &ViewportSignal {
        &self.viewport
    }

    /// Underlying terminal (tests read the backend buffer).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Card area of the last drawn frame.
    pub fn strip_area(&self) -> Option<Rect> {
        self.last_strip_area
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, whatever extra state flags the terminal sends
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(KeyAction::TogglePause) => {
                self.app_state.toggle_pause(now);
                false
            }
            None => false,
        }
    }

    /// Handle a single mouse event
    ///
    /// Pointer movement over the strip drives hover enter/leave. Returns
    /// whether a redraw is needed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
                self.pointer = Some((mouse.column, mouse.row));
                self.recheck_pointer(now)
            }
            _ => false,
        }
    }

    /// Pointer left the terminal window: nothing is hovered any more.
    pub fn handle_focus_lost(&mut self, now: Instant) -> bool {
        self.pointer = None;
        self.app_state.pointer_left(now)
    }

    /// Terminal resized: update the viewport signal and re-derive the profile.
    ///
    /// The strip area is recomputed for the new size so a resting pointer
    /// is hit tested against where the cards will be drawn.
    pub fn handle_resize(&mut self, width: u16, height: u16, now: Instant) {
        debug!(width, height, "resize");
        self.viewport
            .notify(if width > 0 { Some(width) } else { None });
        self.app_state.sync_viewport(now);
        if self.last_strip_area.is_some() {
            self.last_strip_area = Some(layout::strip_inner_area(Rect::new(0, 0, width, height)));
        }
        self.recheck_pointer(now);
    }

    /// Fire due timers and route them to the engine.
    ///
    /// When the strip moved, the card under a resting pointer is hit tested
    /// again, so a card sliding under it pauses the strip. Returns whether
    /// the visible shift changed since the last frame.
    pub fn fire_timers(&mut self, now: Instant) -> bool {
        let mut advanced = false;
        for id in self.scheduler.fire_due(now) {
            advanced |= self.app_state.on_timer(id);
        }
        if !advanced {
            return false;
        }
        let hover_changed = self.recheck_pointer(now);
        hover_changed || self.last_shift != Some(self.app_state.shift())
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        let mut strip_area = None;

        self.terminal.draw(|frame| {
            strip_area = Some(layout::render_layout(frame, state, styles));
        })?;

        self.last_strip_area = strip_area;
        self.last_shift = Some(self.app_state.shift());
        Ok(())
    }

    /// Hit test the last pointer cell against the current shift.
    fn recheck_pointer(&mut self, now: Instant) -> bool {
        let card = self
            .pointer
            .and_then(|(column, row)| self.card_under(column, row));
        self.app_state.pointer_at(card, now)
    }

    fn card_under(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_strip_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        self.app_state
            .layout()
            .card_at(self.app_state.shift(), column - area.x)
            .map(|slot| slot.index)
    }
}

/// Initialize and run the marquee
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, also when the loop failed.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_marquee(brands: Vec<BrandEntry>, options: MarqueeOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(brands, options)?;

    let result = app.run();

    // Engine teardown disarms its timer before the terminal goes back
    drop(app);
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, focus reporting and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableFocusChange)?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
