//! Configuration file loading with precedence handling.

use crate::engine::EngineConfig;
use crate::engine::profile::{DEFAULT_STEP_SIZE, DEFAULT_TICK_INTERVAL};
use crate::model::brand::components;
use crate::model::{BrandEntry, Logo};
use crate::viewport::{Breakpoint, DEFAULT_BREAKPOINT_COLUMNS};
use ratatui::text::Span;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A brand asks for a component logo that does not exist.
    #[error("Brand '{brand}' uses unknown logo component '{component}' (known: {known})")]
    UnknownLogoComponent {
        /// Brand name.
        brand: String,
        /// Requested component.
        component: String,
        /// Comma-separated list of valid names.
        known: String,
    },

    /// No brands were configured.
    #[error("No brands configured: add [[brands]] entries to the config file or pass --demo")]
    NoBrands,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/brandstrip/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base step per tick, in percent of one copy of the strip.
    #[serde(default)]
    pub scroll_speed: Option<f64>,

    /// Base tick period in milliseconds.
    #[serde(default)]
    pub scroll_interval_ms: Option<u64>,

    /// Widths at or below this many columns use the narrow profile.
    #[serde(default)]
    pub breakpoint_columns: Option<u16>,

    /// Start with the strip paused.
    #[serde(default)]
    pub start_paused: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Cards to show, in order.
    #[serde(default)]
    pub brands: Option<Vec<BrandConfig>>,
}

/// One `[[brands]]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BrandConfig {
    /// Display name.
    pub name: String,
    /// External link shown while hovered.
    pub link: String,
    /// Logo source.
    pub logo: LogoConfig,
}

/// Logo as written in TOML.
///
/// ```toml
/// logo = "https://example.com/logo.png"   # Url
/// logo = { glyph = "🦀" }                  # Element
/// logo = { component = "initials" }        # Component
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LogoConfig {
    /// Image URL.
    Url(String),
    /// Literal text used as the logo.
    Glyph {
        /// Text to draw.
        glyph: String,
    },
    /// Built-in component by name.
    Component {
        /// Component name (see [`components::NAMES`]).
        component: String,
    },
}

impl BrandConfig {
    /// Convert into a [`BrandEntry`], resolving component names.
    pub fn into_entry(self) -> Result<BrandEntry, ConfigError> {
        let logo = match self.logo {
            LogoConfig::Url(url) => Logo::Url(url),
            LogoConfig::Glyph { glyph } => Logo::Element(Span::raw(glyph)),
            LogoConfig::Component { component } => {
                let factory = components::by_name(&component, &self.name).ok_or_else(|| {
                    ConfigError::UnknownLogoComponent {
                        brand: self.name.clone(),
                        component: component.clone(),
                        known: components::NAMES.join(", "),
                    }
                })?;
                Logo::Component(factory)
            }
        };
        Ok(BrandEntry::new(self.name, self.link, logo))
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Base step per tick.
    pub scroll_speed: f64,
    /// Base tick period in milliseconds.
    pub scroll_interval_ms: u64,
    /// Narrow breakpoint in columns.
    pub breakpoint_columns: u16,
    /// Start paused.
    pub start_paused: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Brands in display order.
    pub brands: Vec<BrandConfig>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            scroll_speed: DEFAULT_STEP_SIZE,
            scroll_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            breakpoint_columns: DEFAULT_BREAKPOINT_COLUMNS,
            start_paused: false,
            log_file_path: default_log_path(),
            brands: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    /// Engine settings. Non-positive numbers fall back to defaults here.
    pub fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::from_millis(self.scroll_speed, self.scroll_interval_ms);
        if self.start_paused {
            config.paused()
        } else {
            config
        }
    }

    /// Narrow breakpoint for the viewport classifier.
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.breakpoint_columns)
    }

    /// Build the brand list.
    ///
    /// # Errors
    ///
    /// `NoBrands` if the list is empty, `UnknownLogoComponent` for a bad logo.
    pub fn brand_entries(&self) -> Result<Vec<BrandEntry>, ConfigError> {
        if self.brands.is_empty() {
            return Err(ConfigError::NoBrands);
        }
        self.brands
            .iter()
            .cloned()
            .map(BrandConfig::into_entry)
            .collect()
    }
}

/// Built-in brand list for `--demo`.
pub fn demo_brands() -> Vec<BrandConfig> {
    let brand = |name: &str, link: &str, logo: LogoConfig| BrandConfig {
        name: name.to_string(),
        link: link.to_string(),
        logo,
    };
    vec![
        brand(
            "Rust",
            "https://www.rust-lang.org",
            LogoConfig::Url("https://www.rust-lang.org/logos/rust-logo-512x512.png".into()),
        ),
        brand(
            "Ferris",
            "https://rustacean.net",
            LogoConfig::Glyph {
                glyph: "🦀".into(),
            },
        ),
        brand(
            "Ratatui",
            "https://ratatui.rs",
            LogoConfig::Component {
                component: "initials".into(),
            },
        ),
        brand(
            "Crossterm",
            "https://github.com/crossterm-rs/crossterm",
            LogoConfig::Component {
                component: "monogram".into(),
            },
        ),
        brand(
            "Tokio",
            "https://tokio.rs",
            LogoConfig::Glyph {
                glyph: "◆".into(),
            },
        ),
    ]
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/brandstrip/brandstrip.log` on Linux, or the
/// platform state directory elsewhere. Falls back to the current directory
/// when no state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("brandstrip").join("brandstrip.log")
    } else {
        PathBuf::from("brandstrip.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/brandstrip/config.toml` on Linux, appropriate path on
/// other platforms. Returns `None` if the config directory is unknown.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("brandstrip").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BRANDSTRIP_CONFIG` environment variable
/// 3. Default path `~/.config/brandstrip/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("BRANDSTRIP_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        scroll_speed: config.scroll_speed.unwrap_or(defaults.scroll_speed),
        scroll_interval_ms: config
            .scroll_interval_ms
            .unwrap_or(defaults.scroll_interval_ms),
        breakpoint_columns: config
            .breakpoint_columns
            .unwrap_or(defaults.breakpoint_columns),
        start_paused: config.start_paused.unwrap_or(defaults.start_paused),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        brands: config.brands.unwrap_or(defaults.brands),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BRANDSTRIP_SCROLL_SPEED`: base step per tick
/// - `BRANDSTRIP_SCROLL_INTERVAL_MS`: base tick period
///
/// Values that do not parse are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(speed) = env_parse::<f64>("BRANDSTRIP_SCROLL_SPEED") {
        config.scroll_speed = speed;
    }

    if let Some(interval) = env_parse::<u64>("BRANDSTRIP_SCROLL_INTERVAL_MS") {
        config.scroll_interval_ms = interval;
    }

    config
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `speed_override` - `--speed`
/// * `interval_override` - `--interval`
/// * `breakpoint_override` - `--breakpoint`
/// * `paused_override` - `--paused`, only `Some(true)` when the flag was given
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    speed_override: Option<f64>,
    interval_override: Option<u64>,
    breakpoint_override: Option<u16>,
    paused_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(speed) = speed_override {
        config.scroll_speed = speed;
    }

    if let Some(interval) = interval_override {
        config.scroll_interval_ms = interval;
    }

    if let Some(breakpoint) = breakpoint_override {
        config.breakpoint_columns = breakpoint;
    }

    if let Some(paused) = paused_override {
        config.start_paused = paused;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
