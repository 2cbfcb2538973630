//! Configuration file loading with precedence handling.

use crate::layout::Breakpoints;
use crate::model::{ColumnCount, HeightTable};
use crate::render::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "NEWSGRID_CONFIG";
/// Environment variable overriding the column count.
pub const COLUMNS_ENV_VAR: &str = "NEWSGRID_COLUMNS";
/// Environment variable overriding the output format.
pub const FORMAT_ENV_VAR: &str = "NEWSGRID_FORMAT";

const DEFAULT_COLUMN_WIDTH: usize = 28;
const MIN_COLUMN_WIDTH: usize = 8;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, directory instead of file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is outside its valid range.
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Config key or environment variable.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/newsgrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Fixed column count; takes precedence over breakpoints.
    #[serde(default)]
    pub columns: Option<usize>,

    /// Output format ("json" or "text").
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Width of each column in the text preview, in terminal cells.
    #[serde(default)]
    pub column_width: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Height estimate overrides.
    #[serde(default)]
    pub heights: Option<HeightsSection>,

    /// Viewport breakpoints; replaces the defaults entirely when present.
    #[serde(default)]
    pub breakpoints: Option<Vec<BreakpointEntry>>,
}

/// `[heights]` section. Missing entries keep their defaults.
///
/// ```toml
/// [heights]
/// featured = 400
/// with_media = 300
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HeightsSection {
    /// Featured card height in pixels.
    #[serde(default)]
    pub featured: Option<u32>,
    /// Media card height in pixels.
    #[serde(default)]
    pub with_media: Option<u32>,
    /// Text-only card height in pixels; also the unknown-class fallback.
    #[serde(default)]
    pub text_only: Option<u32>,
}

/// One `[[breakpoints]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BreakpointEntry {
    /// Smallest viewport width (px) this entry applies to.
    pub min_width: u32,
    /// Columns to use from `min_width` upward.
    pub columns: usize,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Fixed column count from the config file, environment or `--columns`.
    pub columns: Option<ColumnCount>,
    /// Viewport width from `--width`; selects a breakpoint and outranks a
    /// fixed count coming from the config file or environment.
    pub viewport_width: Option<u32>,
    /// Output format.
    pub format: OutputFormat,
    /// Text preview column width.
    pub column_width: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Height estimates.
    pub heights: HeightTable,
    /// Viewport breakpoints.
    pub breakpoints: Breakpoints,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            columns: None,
            viewport_width: None,
            format: OutputFormat::default(),
            column_width: DEFAULT_COLUMN_WIDTH,
            log_file_path: default_log_path(),
            heights: HeightTable::default(),
            breakpoints: Breakpoints::default(),
        }
    }
}

impl ResolvedConfig {
    /// Column count for a layout pass.
    ///
    /// A viewport width picks its breakpoint; otherwise a fixed count is used,
    /// and with neither the narrowest breakpoint applies.
    pub fn column_count(&self) -> ColumnCount {
        match (self.viewport_width, self.columns) {
            (Some(width), _) => self.breakpoints.columns_for(width),
            (None, Some(columns)) => columns,
            (None, None) => self.breakpoints.columns_for(0),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/newsgrid/newsgrid.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("newsgrid").join("newsgrid.log")
    } else {
        PathBuf::from("newsgrid.log")
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
/// Returns `~/.config/newsgrid/config.toml` on Linux, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("newsgrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `NEWSGRID_CONFIG` environment variable
/// 3. Default path `~/.config/newsgrid/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(env_path));
        }
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
///
/// # Errors
///
/// Returns `ConfigError::Invalid` for a zero column count, a column width below
/// the minimum, or an invalid breakpoint list.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let columns = config
        .columns
        .map(|raw| {
            ColumnCount::new(raw).map_err(|e| ConfigError::Invalid {
                field: "columns",
                reason: e.to_string(),
            })
        })
        .transpose()?;

    let column_width =
        validate_column_width("column_width", config.column_width.unwrap_or(defaults.column_width))?;

    let heights = match config.heights {
        Some(section) => HeightTable {
            featured: section.featured.unwrap_or(defaults.heights.featured),
            with_media: section.with_media.unwrap_or(defaults.heights.with_media),
            text_only: section.text_only.unwrap_or(defaults.heights.text_only),
        },
        None => defaults.heights,
    };

    let breakpoints = match config.breakpoints {
        Some(entries) => Breakpoints::new(
            entries
                .into_iter()
                .map(|entry| (entry.min_width, entry.columns)),
        )
        .map_err(|e| ConfigError::Invalid {
            field: "breakpoints",
            reason: e.to_string(),
        })?,
        None => defaults.breakpoints,
    };

    Ok(ResolvedConfig {
        columns: columns.or(defaults.columns),
        viewport_width: defaults.viewport_width,
        format: config.format.unwrap_or(defaults.format),
        column_width,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        heights,
        breakpoints,
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `NEWSGRID_COLUMNS`: fixed column count
/// - `NEWSGRID_FORMAT`: output format
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if a variable is set to an unparseable value.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(COLUMNS_ENV_VAR) {
        let columns: ColumnCount = raw.parse().map_err(|e: crate::model::LayoutError| {
            ConfigError::Invalid {
                field: COLUMNS_ENV_VAR,
                reason: e.to_string(),
            }
        })?;
        config.columns = Some(columns);
    }

    if let Ok(raw) = std::env::var(FORMAT_ENV_VAR) {
        config.format = raw.parse::<OutputFormat>().map_err(|reason| ConfigError::Invalid {
            field: FORMAT_ENV_VAR,
            reason,
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
/// `--columns` and `--width` are mutually exclusive at the parser; whichever
/// is given replaces the other's effect from lower-precedence sources.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if the column width is below the minimum.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    columns_override: Option<ColumnCount>,
    width_override: Option<u32>,
    format_override: Option<OutputFormat>,
    column_width_override: Option<usize>,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(columns) = columns_override {
        config.columns = Some(columns);
        config.viewport_width = None;
    }

    if let Some(width) = width_override {
        config.viewport_width = Some(width);
    }

    if let Some(format) = format_override {
        config.format = format;
    }

    if let Some(width) = column_width_override {
        config.column_width = validate_column_width("--column-width", width)?;
    }

    Ok(config)
}

fn validate_column_width(field: &'static str, width: usize) -> Result<usize, ConfigError> {
    if width < MIN_COLUMN_WIDTH {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must be at least {MIN_COLUMN_WIDTH}, got {width}"),
        });
    }
    Ok(width)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
