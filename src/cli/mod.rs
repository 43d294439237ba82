//! CLI interface using clap
//!
//! Provides the command-line interface for agentify

mod commands;

pub use commands::*;

use clap::Parser;

/// agentify - Generate an AGENTS.md file for a Git repository
#[derive(Parser, Debug)]
#[command(name = "agentify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Local path or remote URL of the repository
    pub repo: String,

    /// Destination path for AGENTS.md
    #[arg(short, long)]
    pub output: Option<String>,

    /// LLM server base URL
    #[arg(short = 's', long, env = "AGENTIFY_HOST")]
    pub host: Option<String>,

    /// Name of the LLM model
    #[arg(short, long, env = "AGENTIFY_MODEL")]
    pub model: Option<String>,

    /// Path to a custom scan prompt (markdown)
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Path to a configuration file (defaults to <repo>/.agentify/config.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Overwrite an existing AGENTS.md without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Hand the README to an LLM instead of scanning the repository
    #[arg(long)]
    pub llm: bool,

    /// Print the document instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Print the raw scan result as JSON and exit
    #[arg(long, conflicts_with_all = ["stdout", "llm"])]
    pub scan_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
