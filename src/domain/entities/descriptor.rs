//! DeployDescriptor entity - the build's deploy-info record
//!
//! The wire schema belongs to the build system. These messages only mirror
//! the tags we read; anything else on the wire is skipped by the decoder.

use std::path::{Component, Path, PathBuf};

/// A single build output, addressed relative to the execution root
#[derive(Clone, PartialEq, Eq, Hash, prost::Message)]
pub struct ArtifactRef {
    #[prost(string, tag = "1")]
    pub exec_root_path: String,
}

impl ArtifactRef {
    pub fn new(exec_root_path: impl Into<String>) -> Self {
        Self {
            exec_root_path: exec_root_path.into(),
        }
    }

    /// Join this reference onto an execution root.
    ///
    /// Root and drive prefixes are dropped first, so the result always stays
    /// under `execution_root` even for an absolute reference.
    pub fn resolve(&self, execution_root: &Path) -> PathBuf {
        let relative: PathBuf = Path::new(&self.exec_root_path)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect();
        execution_root.join(relative)
    }
}

/// Deploy info emitted by the build for one target
#[derive(Clone, PartialEq, prost::Message)]
pub struct DeployDescriptor {
    /// Merged manifest of the application
    #[prost(message, optional, tag = "1")]
    pub merged_manifest: Option<ArtifactRef>,
    /// Extra merged manifests; test targets put the instrumented app's manifest here
    #[prost(message, repeated, tag = "2")]
    pub additional_merged_manifests: Vec<ArtifactRef>,
    /// Package files to install, in install order
    #[prost(message, repeated, tag = "3")]
    pub packages_to_deploy: Vec<ArtifactRef>,
    /// Auxiliary data files pushed alongside the packages
    #[prost(message, repeated, tag = "4")]
    pub data_to_deploy: Vec<ArtifactRef>,
}

impl DeployDescriptor {
    pub fn new(merged_manifest: impl Into<String>) -> Self {
        Self {
            merged_manifest: Some(ArtifactRef::new(merged_manifest)),
            ..Default::default()
        }
    }

    pub fn with_additional_manifest(mut self, path: impl Into<String>) -> Self {
        self.additional_merged_manifests.push(ArtifactRef::new(path));
        self
    }

    pub fn with_package(mut self, path: impl Into<String>) -> Self {
        self.packages_to_deploy.push(ArtifactRef::new(path));
        self
    }

    pub fn with_data(mut self, path: impl Into<String>) -> Self {
        self.data_to_deploy.push(ArtifactRef::new(path));
        self
    }

    /// The additional manifest that describes the test target, if there is exactly one.
    ///
    /// Zero or several additional manifests both mean "no test target".
    pub fn test_target_manifest(&self) -> Option<&ArtifactRef> {
        match self.additional_merged_manifests.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn resolve_joins_onto_execution_root() {
        let artifact = ArtifactRef::new("bazel-out/k8-fastbuild/bin/app/app.apk");
        assert_eq!(
            artifact.resolve(Path::new("/exec")),
            PathBuf::from("/exec/bazel-out/k8-fastbuild/bin/app/app.apk")
        );
    }

    #[test]
    fn resolve_keeps_absolute_reference_under_execution_root() {
        let artifact = ArtifactRef::new("/etc/AndroidManifest.xml");
        assert_eq!(
            artifact.resolve(Path::new("/exec")),
            PathBuf::from("/exec/etc/AndroidManifest.xml")
        );
    }

    #[test]
    fn test_target_manifest_requires_exactly_one() {
        let none = DeployDescriptor::new("m.xml");
        assert!(none.test_target_manifest().is_none());

        let one = DeployDescriptor::new("m.xml").with_additional_manifest("a.xml");
        assert_eq!(
            one.test_target_manifest().map(|a| a.exec_root_path.as_str()),
            Some("a.xml")
        );

        let two = DeployDescriptor::new("m.xml")
            .with_additional_manifest("a1.xml")
            .with_additional_manifest("a2.xml");
        assert!(two.test_target_manifest().is_none());
    }

    #[test]
    fn decode_accepts_encoded_descriptor() {
        let descriptor = DeployDescriptor::new("app/AndroidManifest.xml")
            .with_package("app/app.apk")
            .with_package("app/split.apk");
        let bytes = descriptor.encode_to_vec();

        let decoded = DeployDescriptor::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, descriptor);
    }

    #[test]
    fn decode_empty_input_yields_empty_descriptor() {
        let decoded = DeployDescriptor::decode(&[0u8; 0][..]).unwrap();
        assert!(decoded.merged_manifest.is_none());
        assert!(decoded.packages_to_deploy.is_empty());
    }

    #[test]
    fn decode_truncated_input_fails() {
        let bytes = DeployDescriptor::new("app/AndroidManifest.xml").encode_to_vec();
        let truncated = &bytes[..bytes.len() - 3];
        assert!(DeployDescriptor::decode(truncated).is_err());
    }
}
