//! agentify - AGENTS.md generator
//!
//! Scans a local or remote Git repository and writes an AGENTS.md describing
//! its commands and developer setup.

use agentify::cli::{confirm_overwrite, generate, Cli};
use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    generate(&cli, confirm_overwrite)?;

    Ok(())
}
