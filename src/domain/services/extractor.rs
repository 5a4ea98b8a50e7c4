//! Deploy descriptor extraction
//!
//! Pipeline for one invocation:
//! 1. Ask the locator for the target's descriptor; exactly one local file must match
//! 2. Decode it
//! 3. Resolve manifests and packages against the execution root
//!
//! Every failure is terminal for the call and surfaces as an [`ArtifactError`].

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use prost::Message;
use tracing::{debug, info, warn};

use crate::domain::entities::{ArtifactRef, DeployDescriptor, DeploymentPlan};
use crate::domain::ports::{local_files, ArtifactLocator, ManifestLookup};
use crate::domain::value_objects::{PathFilter, TargetLabel};
use crate::error::{ArtifactError, ArtifactResult};

/// Extracts deployment plans using injected collaborators.
///
/// Both ports are also implemented for `&T`, so callers can lend
/// long-lived services instead of moving them in.
pub struct DeployDescriptorExtractor<AL, ML>
where
    AL: ArtifactLocator,
    ML: ManifestLookup,
{
    locator: AL,
    manifests: ML,
}

impl<AL, ML> DeployDescriptorExtractor<AL, ML>
where
    AL: ArtifactLocator,
    ML: ManifestLookup,
{
    pub fn new(locator: AL, manifests: ML) -> Self {
        Self { locator, manifests }
    }

    pub fn locator(&self) -> &AL {
        &self.locator
    }

    pub fn manifests(&self) -> &ML {
        &self.manifests
    }

    /// Find the single descriptor file for `target`.
    pub fn locate_descriptor(
        &self,
        target: &TargetLabel,
        filter: &PathFilter,
    ) -> ArtifactResult<PathBuf> {
        let artifacts = self
            .locator
            .build_artifacts_for_target(target, filter)
            .map_err(|e| ArtifactError::Retrieval {
                target: target.to_string(),
                message: e.to_string(),
            })?;
        let mut files = local_files(artifacts);
        debug!(label = %target, candidates = files.len(), "located deploy info candidates");

        let path = match files.len() {
            0 => {
                return Err(ArtifactError::NoArtifact {
                    target: target.to_string(),
                })
            }
            1 => files.remove(0),
            _ => return Err(ArtifactError::Ambiguous { paths: files }),
        };

        if !path.exists() {
            return Err(ArtifactError::MissingFile { path });
        }
        Ok(path)
    }

    /// Resolve `descriptor` against `execution_root` into a plan.
    ///
    /// Each manifest is parsed first and its cache entry invalidated second;
    /// a parse failure returns before the invalidation.
    pub fn build_deployment_plan(
        &self,
        execution_root: &Path,
        descriptor: &DeployDescriptor,
    ) -> ArtifactResult<DeploymentPlan<ML::Manifest>> {
        let primary = descriptor.merged_manifest.as_ref().ok_or_else(|| {
            ArtifactError::manifest_read(execution_root, "deploy info has no merged manifest")
        })?;
        let merged_manifest = self.read_and_invalidate(execution_root, primary)?;

        let test_target_manifest = match descriptor.test_target_manifest() {
            Some(artifact) => Some(self.read_and_invalidate(execution_root, artifact)?),
            None => {
                let count = descriptor.additional_merged_manifests.len();
                if count > 1 {
                    warn!(
                        count,
                        "ignoring additional merged manifests; only a single test target manifest is supported"
                    );
                }
                None
            }
        };

        let packages: Vec<PathBuf> = descriptor
            .packages_to_deploy
            .iter()
            .map(|artifact| artifact.resolve(execution_root))
            .collect();

        info!(
            packages = packages.len(),
            has_test_target = test_target_manifest.is_some(),
            "built deployment plan"
        );
        Ok(DeploymentPlan::new(
            merged_manifest,
            test_target_manifest,
            packages,
        ))
    }

    /// Locate, decode and resolve in one call.
    pub fn extract(
        &self,
        target: &TargetLabel,
        filter: &PathFilter,
        execution_root: &Path,
    ) -> ArtifactResult<DeploymentPlan<ML::Manifest>> {
        let path = self.locate_descriptor(target, filter)?;
        let descriptor = read_descriptor(&path)?;
        self.build_deployment_plan(execution_root, &descriptor)
    }

    fn read_and_invalidate(
        &self,
        execution_root: &Path,
        artifact: &ArtifactRef,
    ) -> ArtifactResult<ML::Manifest> {
        let path = artifact.resolve(execution_root);
        let manifest = self
            .manifests
            .parsed_manifest(&path)
            .map_err(|e| ArtifactError::manifest_read(&path, e.to_string()))?;
        self.manifests.invalidate_cached_manifest(&path);
        Ok(manifest)
    }
}

/// Decode the descriptor at `path`.
///
/// The file handle is closed when this returns, on success or failure.
pub fn read_descriptor(path: &Path) -> ArtifactResult<DeployDescriptor> {
    let decode_error = |message: String| ArtifactError::Decode {
        path: path.to_path_buf(),
        message,
    };

    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ArtifactError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => decode_error(e.to_string()),
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| decode_error(e.to_string()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "decoding deploy info");

    DeployDescriptor::decode(bytes.as_slice()).map_err(|e| decode_error(e.to_string()))
}
