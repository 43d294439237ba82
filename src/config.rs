//! Configuration for agentify

use crate::error::AgentifyError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Configuration for a repository being summarized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentifyConfig {
    /// Heading phrases that mark a developer-oriented section (case-insensitive substrings)
    #[serde(default = "default_topic_keywords")]
    pub topic_keywords: Vec<String>,

    /// How command descriptors are located in source files
    #[serde(default)]
    pub commands: CommandPatternConfig,

    /// README file name, relative to the repository root
    #[serde(default = "default_readme_file")]
    pub readme_file: String,

    /// Name of the generated document
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Directories (relative to the root) whose markdown files are also scanned
    #[serde(default = "default_doc_dirs")]
    pub doc_dirs: Vec<String>,

    /// Generative model settings
    #[serde(default)]
    pub llm: LlmSettings,
}

/// Command descriptor pattern configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandPatternConfig {
    /// Directories whose immediate subdirectories hold command packages
    #[serde(default = "default_command_dirs")]
    pub directories: Vec<String>,

    /// Source file extensions to read (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Literal text that opens a descriptor block, e.g. `&cobra.Command`
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Key bound to the usage string
    #[serde(default = "default_usage_key")]
    pub usage_key: String,

    /// Key bound to the one-line description
    #[serde(default = "default_description_key")]
    pub description_key: String,
}

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Server base URL (Ollama or OpenAI-compatible)
    #[serde(default = "default_host")]
    pub host: String,

    /// Model name to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Custom prompt template (markdown)
    pub prompt_file: Option<String>,

    /// Custom example AGENTS.md handed to the model
    pub example_file: Option<String>,
}

fn default_topic_keywords() -> Vec<String> {
    vec![
        "dev notes".to_string(),
        "developer instructions".to_string(),
        "dev environment".to_string(),
        "setup this package locally".to_string(),
        "how to build".to_string(),
        "build instructions".to_string(),
        "how to contribute".to_string(),
    ]
}

fn default_command_dirs() -> Vec<String> {
    vec!["cmd".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

fn default_marker() -> String {
    "&cobra.Command".to_string()
}

fn default_usage_key() -> String {
    "Use".to_string()
}

fn default_description_key() -> String {
    "Short".to_string()
}

fn default_readme_file() -> String {
    "README.md".to_string()
}

fn default_output_file() -> String {
    "AGENTS.md".to_string()
}

fn default_doc_dirs() -> Vec<String> {
    vec!["docs".to_string(), "doc".to_string()]
}

fn default_host() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_model() -> String {
    "llama3.2:latest".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for AgentifyConfig {
    fn default() -> Self {
        Self {
            topic_keywords: default_topic_keywords(),
            commands: CommandPatternConfig::default(),
            readme_file: default_readme_file(),
            output_file: default_output_file(),
            doc_dirs: default_doc_dirs(),
            llm: LlmSettings::default(),
        }
    }
}

impl Default for CommandPatternConfig {
    fn default() -> Self {
        Self {
            directories: default_command_dirs(),
            extensions: default_extensions(),
            marker: default_marker(),
            usage_key: default_usage_key(),
            description_key: default_description_key(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            prompt_file: None,
            example_file: None,
        }
    }
}

impl AgentifyConfig {
    /// Load configuration from `.agentify/config.toml` in the repository or return defaults
    pub fn load_or_default(repo_root: &Path) -> Result<Self> {
        let config_path = repo_root.join(".agentify").join("config.toml");

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: AgentifyConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        config.check_paths()?;
        tracing::debug!("Loaded configuration from {:?}", config_path);
        Ok(config)
    }

    /// Every repository-relative path must stay below the repository root
    fn check_paths(&self) -> Result<(), AgentifyError> {
        let fields = [("readme_file", &self.readme_file), ("output_file", &self.output_file)]
            .into_iter()
            .chain(self.doc_dirs.iter().map(|d| ("doc_dirs", d)))
            .chain(self.commands.directories.iter().map(|d| ("commands.directories", d)));

        for (field, value) in fields {
            if !is_inside_repository(value) {
                return Err(AgentifyError::PathOutsideRepository {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_inside_repository(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
