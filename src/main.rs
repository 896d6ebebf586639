//! brandstrip - Entry Point

use brandstrip::config::{self, ResolvedConfig};
use brandstrip::model::AppError;
use brandstrip::view::{ColorConfig, MarqueeOptions};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// brandstrip - scrolling brand marquee for the terminal
#[derive(Parser, Debug)]
#[command(name = "brandstrip")]
#[command(version)]
#[command(about = "Scrolling strip of brand cards; hover a card to pause")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base step per tick, in percent of one copy of the strip
    #[arg(long)]
    pub speed: Option<f64>,

    /// Base tick interval in milliseconds
    #[arg(long)]
    pub interval: Option<u64>,

    /// Terminals this many columns wide or narrower use the fast profile
    #[arg(long)]
    pub breakpoint: Option<u16>,

    /// Start with the strip paused
    #[arg(long)]
    pub paused: bool,

    /// Show a built-in brand list instead of the configured one
    #[arg(long)]
    pub demo: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);

    // --paused only overrides when given; there is no flag to force "running"
    let paused_override = if args.paused { Some(true) } else { None };
    let mut resolved = config::apply_cli_overrides(
        with_env,
        args.speed,
        args.interval,
        args.breakpoint,
        paused_override,
    );

    if args.demo {
        resolved.brands = config::demo_brands();
    }

    Ok(resolved)
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    // Brand errors surface before the log file or terminal are touched
    let brands = config.brand_entries()?;

    brandstrip::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        brands = brands.len(),
        "Configuration loaded and resolved"
    );

    let options = MarqueeOptions {
        engine: config.engine_config(),
        breakpoint: config.breakpoint(),
        colors: ColorConfig::from_env_and_args(args.no_color),
    };

    brandstrip::view::run_marquee(brands, options).inspect_err(|err| {
        error!(error = %err, "marquee stopped with an error");
    })?;

    info!("marquee exited");
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("brandstrip: {err}");
            ExitCode::FAILURE
        }
    }
}
