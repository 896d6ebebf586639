//! Brand entries and their logos.

use ratatui::style::Style;
use ratatui::text::Span;
use std::fmt;
use std::sync::Arc;

/// Renders a logo given the card style.
pub type LogoFn = dyn Fn(Style) -> Span<'static> + Send + Sync;

/// Named logo renderer.
///
/// Equality compares names, so two factories with the same name are
/// considered the same component.
#[derive(Clone)]
pub struct LogoFactory {
    name: String,
    render: Arc<LogoFn>,
}

impl LogoFactory {
    /// Named factory; `render` receives the card style.
    pub fn new(
        name: impl Into<String>,
        render: impl Fn(Style) -> Span<'static> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            render: Arc::new(render),
        }
    }

    /// Component name, used for equality and debug output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the factory with the card style.
    pub fn render(&self, style: Style) -> Span<'static> {
        (self.render)(style)
    }
}

impl fmt::Debug for LogoFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LogoFactory").field(&self.name).finish()
    }
}

impl PartialEq for LogoFactory {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// How a brand's logo is provided.
#[derive(Debug, Clone, PartialEq)]
pub enum Logo {
    /// Image location. Terminals cannot show it, so a placeholder is drawn.
    Url(String),
    /// Called at render time with the card style.
    Component(LogoFactory),
    /// Prebuilt span; the card style is patched over its own.
    Element(Span<'static>),
}

/// Placeholder drawn for [`Logo::Url`].
pub const IMAGE_PLACEHOLDER: &str = "▣";

impl Logo {
    /// Resolve into a span styled for a card.
    pub fn render(&self, style: Style) -> Span<'static> {
        match self {
            Logo::Url(_) => Span::styled(IMAGE_PLACEHOLDER, style),
            Logo::Component(factory) => factory.render(style),
            Logo::Element(span) => span.clone().patch_style(style),
        }
    }
}

/// One card in the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandEntry {
    /// Display name drawn after the logo.
    pub name: String,
    /// External link, shown in the status bar while hovered.
    pub link: String,
    /// How the logo is drawn.
    pub logo: Logo,
}

impl BrandEntry {
    /// Build an entry from its parts.
    pub fn new(name: impl Into<String>, link: impl Into<String>, logo: Logo) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            logo,
        }
    }
}

/// The list concatenated with itself.
///
/// The strip is shifted by a percentage of one copy, so the frame at
/// 99.9 and the frame at 0 show the same cards and the wrap is invisible.
pub fn looped(brands: &[BrandEntry]) -> Vec<&BrandEntry> {
    brands.iter().chain(brands.iter()).collect()
}

/// Built-in component logos selectable from config files.
pub mod components {
    use super::LogoFactory;
    use ratatui::text::Span;

    /// Names accepted by [`by_name`].
    pub const NAMES: &[&str] = &["initials", "monogram"];

    /// Look up a built-in factory for a brand.
    pub fn by_name(component: &str, brand_name: &str) -> Option<LogoFactory> {
        match component {
            "initials" => Some(initials(brand_name)),
            "monogram" => Some(monogram(brand_name)),
            _ => None,
        }
    }

    /// Up to two leading letters of the brand's words, e.g. `[RL]`.
    pub fn initials(brand_name: &str) -> LogoFactory {
        let letters: String = brand_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
        let text = format!("[{letters}]");
        LogoFactory::new("initials", move |style| Span::styled(text.clone(), style))
    }

    /// First letter in a circle-ish frame, e.g. `(R)`.
    pub fn monogram(brand_name: &str) -> LogoFactory {
        let letter = brand_name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_else(|| "?".to_string());
        let text = format!("({letter})");
        LogoFactory::new("monogram", move |style| Span::styled(text.clone(), style))
    }
}
