//! Integration tests for SemVer precedence and construction errors
//!
//! These tests go through the public API only.

use common_version::{Argument, Comparator, IdentifierCharset, SemanticVersion, Version, VersionError};

const NO_IDS: [&str; 0] = [];

fn pre(ids: &[&str]) -> SemanticVersion {
    SemanticVersion::with_pre_release(1, 0, 0, ids.iter().copied()).unwrap()
}

#[test]
fn test_canonical_precedence_chain() {
    let chain = vec![
        pre(&["alpha"]),
        pre(&["alpha", "1"]),
        pre(&["alpha", "beta"]),
        pre(&["beta"]),
        pre(&["beta", "2"]),
        pre(&["beta", "11"]),
        pre(&["rc", "1"]),
        SemanticVersion::new(1, 0, 0).unwrap(),
    ];

    for (i, lower) in chain.iter().enumerate() {
        for higher in &chain[i + 1..] {
            assert_eq!(lower.compare_to(higher), -1, "{} < {}", lower, higher);
            assert_eq!(higher.compare_to(lower), 1, "{} > {}", higher, lower);
        }
        assert_eq!(lower.compare_to(lower), 0);
    }

    let mut shuffled = chain.clone();
    shuffled.reverse();
    shuffled.swap(1, 5);
    assert_eq!(Comparator::sort(&shuffled), chain);
}

#[test]
fn test_build_metadata_does_not_affect_equality() {
    let a = SemanticVersion::with_metadata(1, 0, 0, NO_IDS, ["build1"]).unwrap();
    let b = SemanticVersion::with_metadata(1, 0, 0, NO_IDS, ["build2"]).unwrap();
    assert_eq!(a.compare_to(&b), 0);
    assert_eq!(a, b);
    assert_eq!(a.build_metadata(), ["build1"]);
    assert_eq!(b.build_metadata(), ["build2"]);
}

#[test]
fn test_negative_component_names_the_field() {
    let cases = [
        (SemanticVersion::new(-1, 0, 0), Argument::Major),
        (SemanticVersion::new(0, -1, 0), Argument::Minor),
        (SemanticVersion::new(0, 0, -1), Argument::Revision),
    ];

    for (result, expected) in cases {
        match result {
            Err(VersionError::InvalidArgument { argument, .. }) => assert_eq!(argument, expected),
            Ok(version) => panic!("{} should have been rejected", version),
        }
    }
}

#[test]
fn test_identifier_validation() {
    assert!(SemanticVersion::with_pre_release(1, 0, 0, ["0"]).is_ok());
    assert!(SemanticVersion::with_pre_release(1, 0, 0, ["01"]).is_err());
    assert!(SemanticVersion::with_pre_release(1, 0, 0, ["has space"]).is_err());
    assert!(SemanticVersion::with_pre_release(1, 0, 0, [""]).is_err());

    let hyphenated = SemanticVersion::builder()
        .pre_release(["pre-release"])
        .charset(IdentifierCharset::Hyphenated)
        .build();
    assert!(hyphenated.is_ok());
}

#[test]
fn test_plain_version_ordering() {
    assert!(Version::major_minor(2, 1).compare_to(&Version::new(2, 0, 5)) > 0);
    assert_eq!(Version::default().compare_to(&Version::default()), 0);
}

#[test]
fn test_accessors_round_trip() {
    for (major, minor, revision) in [(0, 0, 0), (1, 2, 3), (i32::MAX, i32::MAX, i32::MAX)] {
        let version = SemanticVersion::new(major, minor, revision).unwrap();
        assert_eq!(version.major(), major);
        assert_eq!(version.minor(), minor);
        assert_eq!(version.revision(), revision);
    }
}
