//! Plain `major.minor.revision` version

use std::cmp::Ordering;
use std::fmt;

use crate::sign::sign_of_difference;

/// A simple three number version.
///
/// No validation is applied; negative components are kept as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Version {
    major: i32,
    minor: i32,
    revision: i32,
}

impl Version {
    /// Create a new version from all three components
    pub fn new(major: i32, minor: i32, revision: i32) -> Self {
        Version {
            major,
            minor,
            revision,
        }
    }

    /// Create `major.0.0`
    pub fn major_only(major: i32) -> Self {
        Self::new(major, 0, 0)
    }

    /// Create `major.minor.0`
    pub fn major_minor(major: i32, minor: i32) -> Self {
        Self::new(major, minor, 0)
    }

    pub fn major(&self) -> i32 {
        self.major
    }

    pub fn minor(&self) -> i32 {
        self.minor
    }

    pub fn revision(&self) -> i32 {
        self.revision
    }

    /// Compare lexicographically on (major, minor, revision), returning `-1`, `0` or `1`
    pub fn compare_to(&self, other: &Version) -> i32 {
        match sign_of_difference(self.major, other.major) {
            0 => {}
            sign => return sign,
        }
        match sign_of_difference(self.minor, other.minor) {
            0 => {}
            sign => return sign,
        }
        sign_of_difference(self.revision, other.revision)
    }
}

impl From<(i32, i32, i32)> for Version {
    fn from((major, minor, revision): (i32, i32, i32)) -> Self {
        Version::new(major, minor, revision)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other).cmp(&0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let blank = Version::default();
        assert_eq!((blank.major(), blank.minor(), blank.revision()), (0, 0, 0));

        let major = Version::major_only(7);
        assert_eq!((major.major(), major.minor(), major.revision()), (7, 0, 0));

        let major_minor = Version::major_minor(7, 3);
        assert_eq!(
            (major_minor.major(), major_minor.minor(), major_minor.revision()),
            (7, 3, 0)
        );

        let full = Version::new(7, 3, 9);
        assert_eq!((full.major(), full.minor(), full.revision()), (7, 3, 9));
        assert_eq!(Version::from((7, 3, 9)), full);
    }

    #[test]
    fn test_negative_components_are_kept() {
        let version = Version::new(-1, -2, -3);
        assert_eq!(version.major(), -1);
        assert_eq!(version.to_string(), "-1.-2.-3");
    }

    #[test]
    fn test_compare_to() {
        assert!(Version::major_minor(2, 1).compare_to(&Version::new(2, 0, 5)) > 0);
        assert_eq!(Version::default().compare_to(&Version::default()), 0);
        assert_eq!(Version::new(1, 2, 3).compare_to(&Version::new(1, 2, 4)), -1);
        assert_eq!(Version::new(2, 0, 0).compare_to(&Version::new(1, 9, 9)), 1);
        assert_eq!(Version::new(1, 2, 3).compare_to(&Version::new(1, 2, 3)), 0);
    }

    #[test]
    fn test_compare_at_integer_extremes() {
        let low = Version::major_only(i32::MIN);
        let high = Version::major_only(i32::MAX);
        assert_eq!(low.compare_to(&high), -1);
        assert_eq!(high.compare_to(&low), 1);
        assert!(Version::new(0, i32::MIN, 0) < Version::new(0, i32::MAX, 0));
    }

    #[test]
    fn test_ord_and_eq_agree() {
        let mut versions = vec![
            Version::new(1, 10, 0),
            Version::new(1, 2, 0),
            Version::default(),
            Version::new(1, 2, 0),
        ];
        versions.sort();
        assert_eq!(
            versions,
            vec![
                Version::default(),
                Version::new(1, 2, 0),
                Version::new(1, 2, 0),
                Version::new(1, 10, 0),
            ]
        );
        assert_eq!(versions[1], versions[2]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::new(1, 25, 0).to_string(), "1.25.0");
    }
}
