//! Property tests for descriptor location and plan building.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use deployinfo::{
    read_descriptor, ArtifactError, ArtifactLocator, BuildArtifact, DeployDescriptor,
    DeployDescriptorExtractor, LocatorError, ManifestLookup, PathFilter, TargetLabel,
};

struct FixedLocator(Vec<PathBuf>);

impl ArtifactLocator for FixedLocator {
    fn build_artifacts_for_target(
        &self,
        _target: &TargetLabel,
        _filter: &PathFilter,
    ) -> Result<Vec<BuildArtifact>, LocatorError> {
        Ok(self.0.iter().cloned().map(BuildArtifact::Local).collect())
    }
}

#[derive(Default)]
struct CountingManifests {
    parsed: RefCell<Vec<PathBuf>>,
}

impl ManifestLookup for CountingManifests {
    type Manifest = PathBuf;

    fn parsed_manifest(&self, path: &Path) -> io::Result<PathBuf> {
        self.parsed.borrow_mut().push(path.to_path_buf());
        Ok(path.to_path_buf())
    }

    fn invalidate_cached_manifest(&self, _path: &Path) {}
}

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

fn distinct_paths(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<PathBuf>> {
    proptest::collection::btree_set(relative_path(), range).prop_flat_map(|set: BTreeSet<String>| {
        let paths: Vec<PathBuf> = set
            .into_iter()
            .map(|p| PathBuf::from(format!("{}.deployinfo.pb", p)))
            .collect();
        Just(paths).prop_shuffle()
    })
}

fn label() -> TargetLabel {
    TargetLabel::parse("//app:app").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: With several candidates the error lists each one once, in locator order.
    #[test]
    fn property_ambiguity_lists_every_candidate_in_order(
        paths in distinct_paths(2..=6)
    ) {
        let extractor = DeployDescriptorExtractor::new(
            FixedLocator(paths.clone()),
            CountingManifests::default(),
        );

        let err = extractor
            .locate_descriptor(&label(), &PathFilter::default())
            .unwrap_err();
        prop_assert_eq!(&err, &ArtifactError::Ambiguous { paths: paths.clone() });

        let message = err.to_string();
        let listed = message
            .strip_prefix("more than one deploy info artifact found: [")
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap();
        let listed: Vec<PathBuf> = listed.split(", ").map(PathBuf::from).collect();
        prop_assert_eq!(listed, paths);
    }

    /// PROPERTY: Packages come out absolute, complete and in descriptor order.
    #[test]
    fn property_plan_preserves_package_order(
        packages in proptest::collection::vec(relative_path(), 0..16)
    ) {
        let mut descriptor = DeployDescriptor::new("app/AndroidManifest.xml");
        for package in &packages {
            descriptor = descriptor.with_package(format!("{}.apk", package));
        }
        let extractor = DeployDescriptorExtractor::new(
            FixedLocator(Vec::new()),
            CountingManifests::default(),
        );

        let plan = extractor
            .build_deployment_plan(Path::new("/exec"), &descriptor)
            .unwrap();

        let expected: Vec<PathBuf> = packages
            .iter()
            .map(|p| Path::new("/exec").join(format!("{}.apk", p)))
            .collect();
        prop_assert_eq!(plan.packages(), expected.as_slice());
    }

    /// PROPERTY: A test target manifest exists exactly when there is one additional manifest,
    /// and only the manifests that end up in the plan are read.
    #[test]
    fn property_test_target_only_for_single_additional_manifest(
        additional in proptest::collection::vec(relative_path(), 0..4)
    ) {
        let mut descriptor = DeployDescriptor::new("test/AndroidManifest.xml");
        for manifest in &additional {
            descriptor = descriptor.with_additional_manifest(format!("{}.xml", manifest));
        }
        let extractor = DeployDescriptorExtractor::new(
            FixedLocator(Vec::new()),
            CountingManifests::default(),
        );

        let plan = extractor
            .build_deployment_plan(Path::new("/exec"), &descriptor)
            .unwrap();

        let reads = extractor.manifests().parsed.borrow().len();
        if additional.len() == 1 {
            prop_assert!(plan.test_target_manifest().is_some());
            prop_assert_eq!(reads, 2);
        } else {
            prop_assert!(plan.test_target_manifest().is_none());
            prop_assert_eq!(reads, 1);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding arbitrary bytes never panics; it either decodes or reports Decode.
    #[test]
    fn property_read_descriptor_never_panics(
        bytes in proptest::collection::vec(any::<u8>(), 0..256)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuzz.deployinfo.pb");
        std::fs::write(&path, &bytes).unwrap();

        match read_descriptor(&path) {
            Ok(_) | Err(ArtifactError::Decode { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }
}
