//! LLM-delegated document generation
//!
//! This module handles:
//! - Building the generation prompt from a README and an example AGENTS.md
//! - Talking to Ollama or OpenAI-compatible servers
//!
//! The model's answer is used verbatim as the document.

mod client;
mod prompts;

pub use client::{LlmClient, LlmConfig};
pub use prompts::{
    load_template, ScanPrompt, DEFAULT_EXAMPLE_AGENTS, DEFAULT_SCAN_PROMPT, EXAMPLE_PLACEHOLDER,
    README_PLACEHOLDER,
};

use anyhow::Result;
use async_trait::async_trait;

/// Anything that turns a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Templates handed to the model
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    /// Prompt with README and example placeholders
    pub prompt: String,
    /// Example AGENTS.md shown to the model
    pub example: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_SCAN_PROMPT.to_string(),
            example: DEFAULT_EXAMPLE_AGENTS.to_string(),
        }
    }
}

/// Produces AGENTS.md content by delegating to a text generator
pub struct AgentsWriter<G> {
    generator: G,
    templates: PromptTemplates,
}

impl<G: TextGenerator> AgentsWriter<G> {
    pub fn new(generator: G, templates: PromptTemplates) -> Self {
        Self {
            generator,
            templates,
        }
    }

    /// Generate the document for the given README
    pub async fn write(&self, readme: &str) -> Result<String> {
        let prompt = ScanPrompt::generate(&self.templates.prompt, readme, &self.templates.example);
        tracing::debug!("Prompt is {} bytes", prompt.len());

        self.generator
            .generate(&prompt)
            .await
            .map_err(|e| anyhow::anyhow!("LLM generation failed: {}", e))
    }
}
