//! deployinfo - deploy-info extraction for Android build targets
//!
//! A build step emits a binary deploy-info descriptor per target. This crate
//! finds exactly one such descriptor, decodes it, and resolves the merged
//! manifests and installable packages it names against the build's
//! execution root.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DefaultExtractUseCase, ExtractOptions, ExtractUseCase};
pub use config::{Config, OutputFormat};
pub use domain::entities::{ArtifactRef, DeployDescriptor, DeploymentPlan};
pub use domain::ports::{
    ArtifactLocator, BuildArtifact, LocatorError, ManifestLookup, ManifestParser,
};
pub use domain::services::{read_descriptor, DeployDescriptorExtractor};
pub use domain::value_objects::{PathFilter, TargetLabel};
pub use error::{ArtifactError, ArtifactResult, DeployInfoError, DeployInfoResult};
pub use infrastructure::{CachedManifestService, OutputDirLocator, RawManifest, RawManifestParser};
