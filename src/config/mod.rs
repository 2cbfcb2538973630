//! Configuration module.
//!
//! Resolution runs Defaults → Config File → Env Vars → CLI Args, each stage
//! overriding the previous one. See [`loader`] for the individual steps.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, BreakpointEntry, ConfigError,
    ConfigFile, HeightsSection, ResolvedConfig, CONFIG_ENV_VAR, COLUMNS_ENV_VAR, FORMAT_ENV_VAR,
};
