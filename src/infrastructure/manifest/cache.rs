//! Path-keyed manifest cache
//!
//! Implements the ManifestLookup port on top of any `ManifestParser`.
//! One instance is meant to be shared by every caller in the process.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::ports::{ManifestLookup, ManifestParser};

type Cache<M> = HashMap<PathBuf, Arc<M>>;

pub struct CachedManifestService<P: ManifestParser> {
    parser: P,
    cache: Mutex<Cache<P::Manifest>>,
}

impl<P: ManifestParser> CachedManifestService<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_cached(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    pub fn cached_len(&self) -> usize {
        self.lock().len()
    }

    // A panic while holding the lock leaves the map intact, so keep using it.
    fn lock(&self) -> MutexGuard<'_, Cache<P::Manifest>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: ManifestParser + Default> Default for CachedManifestService<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: ManifestParser> ManifestLookup for CachedManifestService<P> {
    type Manifest = Arc<P::Manifest>;

    fn parsed_manifest(&self, path: &Path) -> io::Result<Self::Manifest> {
        if let Some(hit) = self.lock().get(path) {
            debug!(path = %path.display(), "manifest cache hit");
            return Ok(Arc::clone(hit));
        }

        // Parse outside the lock; a concurrent parse of the same path just
        // overwrites with an equivalent value.
        let parsed = Arc::new(self.parser.parse(path)?);
        self.lock().insert(path.to_path_buf(), Arc::clone(&parsed));
        Ok(parsed)
    }

    fn invalidate_cached_manifest(&self, path: &Path) {
        if self.lock().remove(path).is_some() {
            debug!(path = %path.display(), "invalidated cached manifest");
        }
    }
}
