//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_locator;
pub mod manifest_lookup;

pub use artifact_locator::{local_files, ArtifactLocator, BuildArtifact, LocatorError};
pub use manifest_lookup::{ManifestLookup, ManifestParser};
