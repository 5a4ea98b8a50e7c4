//! Extract Use Case
//!
//! Pure orchestration: picks collaborators, opens a span per call, and hands
//! the work to `DeployDescriptorExtractor`.

use std::path::{Path, PathBuf};

use tracing::info_span;

use crate::config::Config;
use crate::domain::entities::{DeployDescriptor, DeploymentPlan};
use crate::domain::ports::{ArtifactLocator, ManifestLookup};
use crate::domain::services::{read_descriptor, DeployDescriptorExtractor};
use crate::error::ArtifactResult;
use crate::infrastructure::{CachedManifestService, OutputDirLocator, RawManifestParser};

use super::options::ExtractOptions;

/// Use case backed by the on-disk output tree and the raw manifest cache
pub type DefaultExtractUseCase =
    ExtractUseCase<OutputDirLocator, CachedManifestService<RawManifestParser>>;

pub struct ExtractUseCase<AL, ML>
where
    AL: ArtifactLocator,
    ML: ManifestLookup,
{
    extractor: DeployDescriptorExtractor<AL, ML>,
}

impl<AL, ML> ExtractUseCase<AL, ML>
where
    AL: ArtifactLocator,
    ML: ManifestLookup,
{
    pub fn new(locator: AL, manifests: ML) -> Self {
        Self {
            extractor: DeployDescriptorExtractor::new(locator, manifests),
        }
    }

    pub fn extractor(&self) -> &DeployDescriptorExtractor<AL, ML> {
        &self.extractor
    }

    /// Locate, decode and resolve the target's deploy info
    pub fn execute(
        &self,
        options: &ExtractOptions,
    ) -> ArtifactResult<DeploymentPlan<ML::Manifest>> {
        let span = info_span!(
            "extract_deploy_info",
            label = %options.target,
            execution_root = %options.execution_root.display()
        );
        let _enter = span.enter();

        self.extractor
            .extract(&options.target, &options.filter, &options.execution_root)
    }

    /// Only find the descriptor file
    pub fn locate(&self, options: &ExtractOptions) -> ArtifactResult<PathBuf> {
        let span = info_span!("locate_deploy_info", label = %options.target);
        let _enter = span.enter();

        self.extractor
            .locate_descriptor(&options.target, &options.filter)
    }
}

impl DefaultExtractUseCase {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            OutputDirLocator::new(config.resolved_output_root()),
            CachedManifestService::new(RawManifestParser),
        )
    }
}

/// Decode a descriptor file directly, bypassing target lookup
pub fn describe(path: &Path) -> ArtifactResult<DeployDescriptor> {
    read_descriptor(path)
}
