//! Command-line front-end: argument parsing, config resolution, one layout pass.

use crate::config::{self, ResolvedConfig};
use crate::layout::ColumnDistributor;
use crate::model::{AppError, ColumnCount};
use crate::render::{self, OutputFormat};
use crate::source;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// newsgrid - balanced masonry columns for a news feed
#[derive(Parser, Debug)]
#[command(name = "newsgrid")]
#[command(version)]
#[command(about = "Distribute feed items into balanced masonry columns")]
pub struct Args {
    /// Path to a JSON array or JSONL file of items (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Fixed number of columns (positive integer)
    #[arg(short, long, conflicts_with = "width")]
    pub columns: Option<ColumnCount>,

    /// Viewport width in pixels; picks the column count from the breakpoints
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Width of each column in the text preview
    #[arg(long)]
    pub column_width: Option<usize>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Resolve configuration with the full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args.
///
/// # Errors
///
/// Returns `AppError::Config` if a config file exists but is invalid, an
/// environment override cannot be parsed, or `--column-width` is too narrow.
pub fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file)?;
    let with_env = config::apply_env_overrides(merged)?;

    config::apply_cli_overrides(
        with_env,
        args.columns,
        args.width,
        args.format,
        args.column_width,
    )
    .map_err(AppError::from)
}

/// Read items, lay them out and write the result to `out`.
///
/// # Errors
///
/// Returns `AppError::Input` if the items cannot be read and
/// `AppError::Output` if writing fails.
pub fn run<W: Write>(args: &Args, config: &ResolvedConfig, out: &mut W) -> Result<(), AppError> {
    let parsed = source::detect_input_source(args.file.clone())?.read_items()?;
    if parsed.skipped > 0 {
        warn!(skipped = parsed.skipped, "Some input lines were not valid items");
    }

    let column_count = config.column_count();
    let distributor = ColumnDistributor::new(config.heights);
    let distribution = distributor.layout(&parsed.items, column_count);

    info!(
        items = parsed.items.len(),
        columns = column_count.get(),
        heights = ?distribution.heights(),
        "Layout computed"
    );

    render::render(&distribution, config.format, config.column_width, out)?;
    Ok(())
}
