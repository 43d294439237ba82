//! Errors the caller is expected to act on

use std::path::PathBuf;
use thiserror::Error;

/// Conditions surfaced to the user rather than handled internally
#[derive(Debug, Error)]
pub enum AgentifyError {
    /// The destination document is already present and overwriting was not allowed
    #[error("{} already exists; remove it or rename it first", .0.display())]
    OutputExists(PathBuf),

    /// Cloning a remote repository failed
    #[error("could not clone {url}: {source}")]
    Clone {
        url: String,
        #[source]
        source: git2::Error,
    },

    /// The generative path needs a README to work from
    #[error("no README found at {}", .0.display())]
    MissingReadme(PathBuf),

    /// The user declined to replace an existing document
    #[error("an existing {0} file was found, please rename it first")]
    Declined(String),

    /// A configured path would leave the repository
    #[error("{field} must be a path inside the repository, got {value:?}")]
    PathOutsideRepository { field: String, value: String },
}
