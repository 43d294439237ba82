//! Command implementations

use super::Cli;
use crate::config::AgentifyConfig;
use crate::error::AgentifyError;
use crate::llm::{load_template, AgentsWriter, LlmClient, LlmConfig, PromptTemplates};
use crate::llm::{DEFAULT_EXAMPLE_AGENTS, DEFAULT_SCAN_PROMPT};
use crate::render::render_scan;
use crate::repo::{prepare_repository, PreparedRepository};
use crate::scan::{scan_repository, RepositoryScan};
use crate::writer::{write_document, OverwritePolicy};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Where the run sends its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Printed,
}

/// Generate AGENTS.md for the repository named on the command line
///
/// `confirm` is asked before replacing an existing document unless `--yes` was given.
pub fn generate<F>(cli: &Cli, mut confirm: F) -> Result<Outcome>
where
    F: FnMut(&Path) -> Result<bool>,
{
    let quiet = cli.stdout || cli.scan_json;
    let progress = |msg: &str| {
        if quiet {
            eprintln!("{}", msg);
        } else {
            println!("{}", msg);
        }
    };

    progress("Opening repository...");
    let prepared = prepare_repository(&cli.repo)?;
    let config = load_config(cli, prepared.path())?;

    if cli.llm {
        progress("Scanning repository and instructing LLM...");
    } else {
        progress("Scanning repository...");
    }
    let scan = scan_repository(prepared.path(), &config)?;

    if cli.scan_json {
        let json = serde_json::to_string_pretty(&scan)?;
        println!("{}", json);
        return Ok(Outcome::Printed);
    }

    let destination = if cli.stdout {
        None
    } else {
        let (dest, exists) = destination(cli, &prepared, &config, &scan);
        let policy = if !exists || cli.yes {
            OverwritePolicy::Overwrite
        } else if confirm(&dest)? {
            OverwritePolicy::Overwrite
        } else {
            return Err(AgentifyError::Declined(config.output_file.clone()).into());
        };
        Some((dest, policy))
    };

    let content = if cli.llm {
        generate_with_llm(&scan, &config)?
    } else {
        render_scan(&scan)
    };

    match destination {
        Some((dest, policy)) => {
            write_document(&dest, &content, policy)?;
            progress(&format!("Wrote {} → {}", config.output_file, dest.display()));
            Ok(Outcome::Written(dest))
        }
        None => {
            print!("{}", content);
            Ok(Outcome::Printed)
        }
    }
}

/// Explicit `--config`, else the repository's own file, then CLI overrides
fn load_config(cli: &Cli, root: &Path) -> Result<AgentifyConfig> {
    let mut config = match cli.config {
        Some(ref path) => AgentifyConfig::load(Path::new(path))?,
        None => AgentifyConfig::load_or_default(root)?,
    };

    if let Some(ref host) = cli.host {
        config.llm.host = host.clone();
    }
    if let Some(ref model) = cli.model {
        config.llm.model = model.clone();
    }
    if let Some(ref prompt) = cli.prompt {
        config.llm.prompt_file = Some(prompt.clone());
    }

    Ok(config)
}

/// Destination path and whether something is already there
///
/// A temporary clone is removed after the run, so its default destination is the
/// current directory instead.
fn destination(
    cli: &Cli,
    prepared: &PreparedRepository,
    config: &AgentifyConfig,
    scan: &RepositoryScan,
) -> (PathBuf, bool) {
    match cli.output {
        Some(ref out) => {
            let dest = PathBuf::from(out);
            let exists = dest.exists();
            (dest, exists)
        }
        None if prepared.is_temporary() => {
            let dest = PathBuf::from(&config.output_file);
            let exists = dest.exists();
            (dest, exists)
        }
        None => (
            prepared.path().join(&config.output_file),
            scan.has_existing_output,
        ),
    }
}

fn generate_with_llm(scan: &RepositoryScan, config: &AgentifyConfig) -> Result<String> {
    if scan.readme.is_empty() {
        return Err(AgentifyError::MissingReadme(scan.root.join(&config.readme_file)).into());
    }

    let templates = PromptTemplates {
        prompt: load_template(
            config.llm.prompt_file.as_deref().map(Path::new),
            DEFAULT_SCAN_PROMPT,
        )?,
        example: load_template(
            config.llm.example_file.as_deref().map(Path::new),
            DEFAULT_EXAMPLE_AGENTS,
        )?,
    };

    let client = LlmClient::new(LlmConfig::from(&config.llm))?;
    tracing::info!("Generating with model {} at {}", client.model(), config.llm.host);

    let writer = AgentsWriter::new(client, templates);
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(writer.write(&scan.readme))
}

/// Ask on the terminal whether an existing document may be replaced
pub fn confirm_overwrite(dest: &Path) -> Result<bool> {
    print!(
        "An existing {} was found, do you want to overwrite it? [y/N]: ",
        dest.display()
    );
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "YES")
}
