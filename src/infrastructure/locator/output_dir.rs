//! Output-directory locator
//!
//! Implements the ArtifactLocator port by looking at the build's output tree
//! directly: outputs of `//pkg:name` live in `<output_root>/pkg/` and are
//! named after the target (`name.*`, or `name_mi.*` for mobile-install).

use std::path::PathBuf;

use ignore::WalkBuilder;
use tracing::debug;

use crate::domain::ports::{ArtifactLocator, BuildArtifact, LocatorError};
use crate::domain::value_objects::{PathFilter, TargetLabel};

/// Locates outputs under a build output root such as `bazel-bin`
#[derive(Debug, Clone)]
pub struct OutputDirLocator {
    output_root: PathBuf,
}

impl OutputDirLocator {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    fn belongs_to(target: &TargetLabel, file_name: &str) -> bool {
        let name = target.name();
        file_name
            .strip_prefix(name)
            .map(|rest| rest.starts_with('.') || rest.starts_with("_mi."))
            .unwrap_or(false)
    }
}

impl ArtifactLocator for OutputDirLocator {
    fn build_artifacts_for_target(
        &self,
        target: &TargetLabel,
        filter: &PathFilter,
    ) -> Result<Vec<BuildArtifact>, LocatorError> {
        let package_dir = self.output_root.join(target.package_dir());
        if !package_dir.is_dir() {
            debug!(dir = %package_dir.display(), "package output directory does not exist");
            return Ok(Vec::new());
        }

        // Build outputs are normally git-ignored, so standard filters stay off.
        let walker = WalkBuilder::new(&package_dir)
            .standard_filters(false)
            .max_depth(Some(1))
            .build();

        let mut found = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| LocatorError::Query {
                message: e.to_string(),
            })?;
            let path = entry.path();
            // Build outputs are often symlinks into a cache; follow them.
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if Self::belongs_to(target, file_name) && filter.matches(&path.to_string_lossy()) {
                found.push(path.to_path_buf());
            }
        }
        found.sort();

        debug!(
            dir = %package_dir.display(),
            matches = found.len(),
            "scanned package outputs"
        );
        Ok(found.into_iter().map(BuildArtifact::Local).collect())
    }
}
