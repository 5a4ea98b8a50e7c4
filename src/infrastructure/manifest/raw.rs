//! Raw manifest parser
//!
//! Reads a merged manifest as text without interpreting it. Consumers that
//! need structured fields plug in their own `ManifestParser`.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::ManifestParser;

/// Merged manifest as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawManifest {
    path: PathBuf,
    contents: String,
}

impl RawManifest {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RawManifestParser;

impl ManifestParser for RawManifestParser {
    type Manifest = RawManifest;

    fn parse(&self, path: &Path) -> io::Result<RawManifest> {
        let contents = std::fs::read_to_string(path)?;
        Ok(RawManifest::new(path, contents))
    }
}
