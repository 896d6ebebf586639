//! Error types for the brandstrip shell.
//!
//! The scroll engine and viewport classifier have no fallible operations:
//! bad numbers fall back to defaults and an unknown viewport width means
//! "not narrow". Everything that can fail lives in the impure shell and is
//! collected here.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from application startup and the event loop
//!   - [`ConfigError`] - Config file reading, TOML parsing, brand list validation
//!   - [`LoggingError`] - Log directory creation, tracing subscriber setup
//!   - [`TuiError`] - Terminal setup and rendering failures
//!
//! All of them are fatal: they happen before the first frame or mean the
//! terminal is gone.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error.
///
/// Domain-specific errors convert via `From`, so `?` works across layers.
///
/// # Examples
///
/// ```no_run
/// use brandstrip::config::ConfigError;
/// use brandstrip::model::error::AppError;
///
/// fn start() -> Result<(), AppError> {
///     load()?;
///     Ok(())
/// }
/// # fn load() -> Result<(), ConfigError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration could not be loaded or has no brands to show.
    ///
    /// **Recovery**: Print the message (it names the file and the problem) and exit.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    ///
    /// **Recovery**: Print and exit before the terminal enters raw mode.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer such as a broken pipe while
    /// drawing. Without a working terminal nothing can be shown.
    ///
    /// **Recovery**: Restore the terminal, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),
}
