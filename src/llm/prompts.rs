//! Prompt templates for AGENTS.md generation

use anyhow::{Context, Result};
use std::path::Path;

/// Placeholder replaced by the README contents
pub const README_PLACEHOLDER: &str = "<ATTACH_README_HERE>";

/// Placeholder replaced by the example AGENTS.md
pub const EXAMPLE_PLACEHOLDER: &str = "<ATTACH_EXAMPLE_AGENTS>";

/// Prompt asking the model for an AGENTS.md
pub struct ScanPrompt;

impl ScanPrompt {
    /// Substitute the README and the example into the template
    ///
    /// Only the first occurrence of each placeholder is replaced.
    pub fn generate(template: &str, readme: &str, example: &str) -> String {
        template
            .replacen(README_PLACEHOLDER, readme, 1)
            .replacen(EXAMPLE_PLACEHOLDER, example, 1)
    }
}

/// Read a template from `path`, or fall back to the built-in text
pub fn load_template(path: Option<&Path>, builtin: &str) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read prompt template: {:?}", p)),
        None => Ok(builtin.to_string()),
    }
}

pub const DEFAULT_SCAN_PROMPT: &str = r#"You are a senior engineer writing onboarding notes for coding agents.

Read the README of a software repository and produce an AGENTS.md file for it.
The AGENTS.md must follow the structure of the example below: a short overview,
the commands a contributor runs day to day, and the developer setup steps.

Rules:
- Output Markdown only, starting with the line `# AGENTS`
- Do not invent commands that the README does not mention
- Keep code blocks exactly as they appear in the README
- Prefer bullet lists over prose

## Example AGENTS.md

<ATTACH_EXAMPLE_AGENTS>

## README

<ATTACH_README_HERE>
"#;

pub const DEFAULT_EXAMPLE_AGENTS: &str = r#"# AGENTS

## Overview

### example-tool

A command-line tool that converts CSV exports into JSON reports.

## Commands (cmd/*)

- `example-tool convert <file>`: Convert a CSV export
- `example-tool serve`: Serve reports over HTTP

## Developer Setup

### Build instructions

```sh
go build ./...
go test ./...
```

### How to contribute

- Fork the repository and create a feature branch
- Run the test suite before opening a pull request
"#;
