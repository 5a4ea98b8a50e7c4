//! ArtifactLocator port - resolves a target to its build outputs
//!
//! The build tool owns the output layout; the extractor only asks for the
//! outputs of one target that pass a path filter.

use std::path::PathBuf;

use crate::domain::value_objects::{PathFilter, TargetLabel};

/// A build output reported for a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildArtifact {
    /// Output available on the local file system
    Local(PathBuf),
    /// Output that only exists remotely (e.g. a content-addressed store)
    Remote { uri: String },
}

/// Keep only artifacts that are local files, in the order given.
pub fn local_files(artifacts: Vec<BuildArtifact>) -> Vec<PathBuf> {
    artifacts
        .into_iter()
        .filter_map(|artifact| match artifact {
            BuildArtifact::Local(path) => Some(path),
            BuildArtifact::Remote { .. } => None,
        })
        .collect()
}

/// Artifact query failures
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("build output query failed: {message}")]
    Query { message: String },
}

pub trait ArtifactLocator {
    /// Outputs of `target` whose path passes `filter`, in build-reported order
    fn build_artifacts_for_target(
        &self,
        target: &TargetLabel,
        filter: &PathFilter,
    ) -> Result<Vec<BuildArtifact>, LocatorError>;
}

impl<T: ArtifactLocator + ?Sized> ArtifactLocator for &T {
    fn build_artifacts_for_target(
        &self,
        target: &TargetLabel,
        filter: &PathFilter,
    ) -> Result<Vec<BuildArtifact>, LocatorError> {
        (**self).build_artifacts_for_target(target, filter)
    }
}
