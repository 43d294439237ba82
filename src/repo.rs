//! Repository acquisition
//!
//! A local directory is used in place. Anything else is treated as a remote URL
//! and cloned into a temporary directory that lives as long as the returned
//! [`PreparedRepository`].

use crate::error::AgentifyError;
use anyhow::{Context, Result};
use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A readable worktree, possibly backed by a temporary clone
#[derive(Debug)]
pub struct PreparedRepository {
    path: PathBuf,
    /// Removed on drop
    temp: Option<TempDir>,
}

impl PreparedRepository {
    /// Root of the worktree
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the worktree is a temporary clone
    pub fn is_temporary(&self) -> bool {
        self.temp.is_some()
    }
}

/// Open a local directory or clone a remote repository
pub fn prepare_repository(repo_arg: &str) -> Result<PreparedRepository> {
    let local = Path::new(repo_arg);
    if local.is_dir() {
        tracing::debug!("Using local repository at {:?}", local);
        return Ok(PreparedRepository {
            path: local.to_path_buf(),
            temp: None,
        });
    }

    let temp = tempfile::Builder::new()
        .prefix("agentify-")
        .tempdir()
        .context("Failed to create temporary directory")?;

    clone_into(repo_arg, temp.path())?;

    Ok(PreparedRepository {
        path: temp.path().to_path_buf(),
        temp: Some(temp),
    })
}

fn clone_into(url: &str, dest: &Path) -> Result<()> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.transfer_progress(|progress| {
        if progress.received_objects() == progress.total_objects() {
            tracing::debug!(
                "Received {} objects ({} bytes)",
                progress.total_objects(),
                progress.received_bytes()
            );
        }
        true
    });

    let mut fetch = FetchOptions::new();
    fetch.remote_callbacks(callbacks);

    tracing::info!("Cloning {} into {:?}", url, dest);
    RepoBuilder::new()
        .fetch_options(fetch)
        .clone(url, dest)
        .map_err(|source| AgentifyError::Clone {
            url: url.to_string(),
            source,
        })?;

    Ok(())
}
