//! Configuration module.

pub mod keybindings;
mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path, demo_brands,
    load_config_file, load_config_with_precedence, merge_config, BrandConfig, ConfigError,
    ConfigFile, LogoConfig, ResolvedConfig,
};
