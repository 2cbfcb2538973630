//! newsgrid - Entry Point

use clap::Parser;
use newsgrid::cli::{self, Args};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = cli::resolve_config(&args)?;

    newsgrid::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let stdout = std::io::stdout();
    cli::run(&args, &config, &mut stdout.lock())?;

    Ok(())
}
