//! agentify - Generate an AGENTS.md summary for a Git repository
//!
//! This library scans a repository worktree for command definitions, the README
//! overview and developer-setup sections of its Markdown files, and renders them
//! into a single Markdown document for coding agents.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod render;
pub mod repo;
pub mod scan;
pub mod writer;

/// Re-export commonly used types
pub use config::AgentifyConfig;
pub use error::AgentifyError;
pub use extract::{CommandDescriptor, Section};
pub use render::{assemble, render_scan};
pub use repo::{prepare_repository, PreparedRepository};
pub use scan::{scan_repository, CommandGroup, RepositoryScan};

/// Application-wide error type
pub use anyhow::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "agentify";
