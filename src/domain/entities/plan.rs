//! DeploymentPlan entity - what to install and which manifests describe it

use std::path::PathBuf;

/// Result of resolving a `DeployDescriptor` against an execution root.
///
/// Built once per extraction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPlan<M> {
    merged_manifest: M,
    test_target_manifest: Option<M>,
    packages: Vec<PathBuf>,
}

impl<M> DeploymentPlan<M> {
    pub fn new(
        merged_manifest: M,
        test_target_manifest: Option<M>,
        packages: Vec<PathBuf>,
    ) -> Self {
        Self {
            merged_manifest,
            test_target_manifest,
            packages,
        }
    }

    /// Parsed merged manifest of the application
    pub fn merged_manifest(&self) -> &M {
        &self.merged_manifest
    }

    /// Parsed manifest of the app under test (android_test targets only)
    pub fn test_target_manifest(&self) -> Option<&M> {
        self.test_target_manifest.as_ref()
    }

    /// Absolute package paths in install order
    pub fn packages(&self) -> &[PathBuf] {
        &self.packages
    }
}
