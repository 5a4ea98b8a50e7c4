#![no_main]

use std::path::Path;

use deployinfo::{DeployDescriptor, DeployDescriptorExtractor};
use libfuzzer_sys::fuzz_target;
use prost::Message;

struct NoOutputs;

impl deployinfo::ArtifactLocator for NoOutputs {
    fn build_artifacts_for_target(
        &self,
        _target: &deployinfo::TargetLabel,
        _filter: &deployinfo::PathFilter,
    ) -> Result<Vec<deployinfo::BuildArtifact>, deployinfo::LocatorError> {
        Ok(Vec::new())
    }
}

struct EchoManifests;

impl deployinfo::ManifestLookup for EchoManifests {
    type Manifest = std::path::PathBuf;

    fn parsed_manifest(&self, path: &Path) -> std::io::Result<Self::Manifest> {
        Ok(path.to_path_buf())
    }

    fn invalidate_cached_manifest(&self, _path: &Path) {}
}

fuzz_target!(|data: &[u8]| {
    // Decoding and plan building must never panic, whatever the bytes.
    if let Ok(descriptor) = DeployDescriptor::decode(data) {
        let extractor = DeployDescriptorExtractor::new(NoOutputs, EchoManifests);
        let _ = extractor.build_deployment_plan(Path::new("/exec"), &descriptor);
    }
});
