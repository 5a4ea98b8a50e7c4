//! Error types for deployinfo
//!
//! Uses `thiserror` for library errors. Retrieval failures live in
//! [`ArtifactError`] so callers can branch on the kind instead of the text.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for crate-level operations (config, CLI plumbing)
pub type DeployInfoResult<T> = Result<T, DeployInfoError>;

/// Result type alias for artifact retrieval
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Artifact retrieval failed.
///
/// Every variant is terminal for the current extraction and is meant to be
/// shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    /// The locator returned no descriptor for the target
    #[error(
        "no deploy info artifact found for {target}; was the deploy info output group requested?"
    )]
    NoArtifact { target: String },

    /// The locator returned more than one candidate descriptor
    #[error("more than one deploy info artifact found: {}", bracketed(.paths))]
    Ambiguous { paths: Vec<PathBuf> },

    /// The single candidate does not exist on disk
    #[error("deploy info file doesn't exist: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// The descriptor could not be read or decoded
    #[error("failed to decode deploy info {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// A merged manifest could not be read or parsed
    #[error(
        "could not read merged manifest file {} due to error: {message}",
        .path.display()
    )]
    ManifestRead { path: PathBuf, message: String },

    /// The artifact locator itself failed
    #[error("failed to retrieve build artifacts for {target}: {message}")]
    Retrieval { target: String, message: String },
}

impl ArtifactError {
    pub(crate) fn manifest_read(path: &Path, message: impl Into<String>) -> Self {
        ArtifactError::ManifestRead {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Render paths as `[a, b, c]`, keeping the given order.
fn bracketed(paths: &[PathBuf]) -> String {
    let joined = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Main error type for everything around extraction
#[derive(Error, Debug)]
pub enum DeployInfoError {
    /// Artifact retrieval failed
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Invalid configuration file
    #[error("invalid config in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Target label could not be parsed
    #[error("invalid target label '{label}': {reason}")]
    InvalidLabel { label: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
