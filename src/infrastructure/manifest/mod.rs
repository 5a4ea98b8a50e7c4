//! Manifest lookup implementations

mod cache;
mod raw;

pub use cache::CachedManifestService;
pub use raw::{RawManifest, RawManifestParser};
