//! Marquee styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are enabled.
///
/// Determined by:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether colors should be used.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== MarqueeStyles =====

/// Styles for cards and the status bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeStyles {
    /// Logo and name of a card.
    pub card: Style,
    /// Card under the pointer.
    pub hovered: Style,
    /// Strip border and title.
    pub border: Style,
    /// "running" badge.
    pub running: Style,
    /// "paused" badge.
    pub paused: Style,
    /// Secondary status text (profile, key hints).
    pub muted: Style,
    /// Link of the hovered brand.
    pub link: Style,
}

impl MarqueeStyles {
    /// Colored styles, or modifier-only styles when colors are off.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                card: bold.fg(Color::White),
                hovered: bold.fg(Color::Black).bg(Color::Cyan),
                border: Style::default().fg(Color::DarkGray),
                running: bold.fg(Color::Green),
                paused: bold.fg(Color::Yellow),
                muted: Style::default().fg(Color::Gray),
                link: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            }
        } else {
            Self {
                card: bold,
                hovered: bold.add_modifier(Modifier::REVERSED),
                border: Style::default(),
                running: bold,
                paused: bold,
                muted: Style::default(),
                link: Style::default().add_modifier(Modifier::UNDERLINED),
            }
        }
    }
}

impl Default for MarqueeStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
