//! Command descriptor extraction from source files
//!
//! Matching runs in two passes:
//! - locate descriptor blocks: the constructor marker followed by a `{ ... }` body
//! - pull the usage and description strings out of each block independently
//!
//! The block body stops at the first closing brace, so a descriptor holding a
//! brace-bearing value is truncated there.

use crate::config::CommandPatternConfig;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// One discovered CLI subcommand signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Usage token, e.g. `build [flags]`
    pub usage: String,
    /// One-line description
    pub description: String,
}

/// Finds descriptor block bodies in source text
#[derive(Debug, Clone)]
pub struct BlockMatcher {
    pattern: Regex,
}

impl BlockMatcher {
    /// Create a matcher for blocks opened by `marker`
    pub fn new(marker: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"{}\s*\{{([^}}]*)\}}", regex::escape(marker)))
            .with_context(|| format!("Invalid command marker: {}", marker))?;
        Ok(Self { pattern })
    }

    /// Block bodies (text between the braces) in match order
    pub fn blocks<'a>(&self, source: &'a str) -> Vec<&'a str> {
        self.pattern
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|body| body.as_str())
            .collect()
    }
}

/// Reads the usage and description keys out of a single block body
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    usage: Regex,
    description: Regex,
}

impl FieldMatcher {
    /// Create a matcher for `usage_key: "..."` and `description_key: "..."`
    pub fn new(usage_key: &str, description_key: &str) -> Result<Self> {
        Ok(Self {
            usage: key_pattern(usage_key)?,
            description: key_pattern(description_key)?,
        })
    }

    /// Build a descriptor if both keys are present in the block
    pub fn descriptor(&self, block: &str) -> Option<CommandDescriptor> {
        let usage = self.usage.captures(block)?.get(1)?.as_str();
        let description = self.description.captures(block)?.get(1)?.as_str();

        Some(CommandDescriptor {
            usage: usage.to_string(),
            description: description.to_string(),
        })
    }
}

fn key_pattern(key: &str) -> Result<Regex> {
    Regex::new(&format!(r#"{}\s*:\s*"([^"]+)""#, regex::escape(key)))
        .with_context(|| format!("Invalid descriptor key: {}", key))
}

/// Extracts command descriptors from the source files of a directory
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    blocks: BlockMatcher,
    fields: FieldMatcher,
    extensions: Vec<String>,
}

impl CommandExtractor {
    /// Create an extractor from the configured pattern
    pub fn new(config: &CommandPatternConfig) -> Result<Self> {
        Ok(Self {
            blocks: BlockMatcher::new(&config.marker)?,
            fields: FieldMatcher::new(&config.usage_key, &config.description_key)?,
            extensions: config
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        })
    }

    /// Extract all complete descriptors from one source text
    pub fn extract_source(&self, source: &str) -> Vec<CommandDescriptor> {
        self.blocks
            .blocks(source)
            .into_iter()
            .filter_map(|block| self.fields.descriptor(block))
            .collect()
    }

    /// Extract descriptors from the source files directly inside `dir`
    ///
    /// Files are visited in name order. A missing or unreadable directory, and any
    /// unreadable file, contributes nothing.
    pub fn extract_dir(&self, dir: &Path) -> Vec<CommandDescriptor> {
        let mut descriptors = Vec::new();

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.is_source_file(e.path()));

        for entry in entries {
            match std::fs::read_to_string(entry.path()) {
                Ok(source) => {
                    let found = self.extract_source(&source);
                    tracing::debug!("{} command(s) in {:?}", found.len(), entry.path());
                    descriptors.extend(found);
                }
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {:?}: {}", entry.path(), e);
                }
            }
        }

        descriptors
    }

    fn is_source_file(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }
}
