//! Persisting the rendered document

use crate::error::AgentifyError;
use anyhow::{Context, Result};
use std::path::Path;

/// What to do when the destination already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    Refuse,
    Overwrite,
}

/// Write `content` verbatim to `dest`
pub fn write_document(dest: &Path, content: &str, policy: OverwritePolicy) -> Result<()> {
    if policy == OverwritePolicy::Refuse && dest.exists() {
        return Err(AgentifyError::OutputExists(dest.to_path_buf()).into());
    }

    std::fs::write(dest, content).with_context(|| format!("Failed to write {:?}", dest))?;
    tracing::debug!("Wrote {} bytes to {:?}", content.len(), dest);

    Ok(())
}
