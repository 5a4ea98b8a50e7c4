//! ManifestLookup port - parsed merged manifests with a path-keyed cache
//!
//! Parsing and invalidation are separate operations; callers decide the order.

use std::io;
use std::path::Path;

pub trait ManifestLookup {
    type Manifest;

    /// Parsed manifest at `path`, possibly served from a cache
    fn parsed_manifest(&self, path: &Path) -> io::Result<Self::Manifest>;

    /// Drop any cached parse for `path`. Idempotent and infallible.
    fn invalidate_cached_manifest(&self, path: &Path);
}

impl<T: ManifestLookup + ?Sized> ManifestLookup for &T {
    type Manifest = T::Manifest;

    fn parsed_manifest(&self, path: &Path) -> io::Result<Self::Manifest> {
        (**self).parsed_manifest(path)
    }

    fn invalidate_cached_manifest(&self, path: &Path) {
        (**self).invalidate_cached_manifest(path)
    }
}

/// Turns a manifest file into a manifest record, uncached
pub trait ManifestParser {
    type Manifest;

    fn parse(&self, path: &Path) -> io::Result<Self::Manifest>;
}
