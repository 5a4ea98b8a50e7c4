//! Property tests for target label parsing.

use proptest::prelude::*;

use deployinfo::TargetLabel;

fn package() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_]{1,10}").unwrap();
    proptest::collection::vec(segment, 0..=4).prop_map(|segments| segments.join("/"))
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Label parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(
        s in "(?s).{0,128}"
    ) {
        let _ = TargetLabel::parse(&s);
    }

    /// PROPERTY: Display output parses back to the same label.
    #[test]
    fn property_display_round_trips(
        package in package(),
        name in name(),
    ) {
        let label = TargetLabel::parse(&format!("//{}:{}", package, name)).unwrap();
        let reparsed = TargetLabel::parse(&label.to_string()).unwrap();
        prop_assert_eq!(reparsed, label);
    }

    /// PROPERTY: The package directory never escapes the output root.
    #[test]
    fn property_package_dir_is_relative(
        package in package(),
        name in name(),
    ) {
        let label = TargetLabel::parse(&format!("//{}:{}", package, name)).unwrap();
        prop_assert!(label.package_dir().is_relative());
        let segments = package.split('/').filter(|s| !s.is_empty()).count();
        prop_assert_eq!(label.package_dir().components().count(), segments);
    }
}
