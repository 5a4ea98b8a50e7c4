//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `locator/` - Build output lookup (`OutputDirLocator`)
//! - `manifest/` - Manifest parsing and the shared cache

pub mod locator;
pub mod manifest;

pub use locator::OutputDirLocator;
pub use manifest::{CachedManifestService, RawManifest, RawManifestParser};
