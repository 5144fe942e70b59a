//! Semantic version value type with SemVer precedence

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Argument, Result, VersionError};
use crate::identifier::{compare_pre_release, validate_build_metadata, validate_pre_release, IdentifierCharset};
use crate::sign::sign_of_difference;
use crate::version::Version;

/// An immutable `major.minor.revision[-pre.release][+build.metadata]` version.
///
/// Instances only exist in a validated state: every constructor either
/// returns a well-formed value or a [`VersionError::InvalidArgument`].
///
/// Equality, ordering and hashing ignore build metadata.
#[derive(Debug, Clone, Default)]
pub struct SemanticVersion {
    major: i32,
    minor: i32,
    revision: i32,
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
}

impl SemanticVersion {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: i32, minor: i32, revision: i32) -> Result<Self> {
        Self::builder().major(major).minor(minor).revision(revision).build()
    }

    /// Create `major.0.0`
    pub fn major_only(major: i32) -> Result<Self> {
        Self::new(major, 0, 0)
    }

    /// Create `major.minor.0`
    pub fn major_minor(major: i32, minor: i32) -> Result<Self> {
        Self::new(major, minor, 0)
    }

    /// Create a version with pre-release identifiers
    pub fn with_pre_release<I, S>(major: i32, minor: i32, revision: i32, pre_release: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder()
            .major(major)
            .minor(minor)
            .revision(revision)
            .pre_release(pre_release)
            .build()
    }

    /// Create a version with pre-release and build metadata identifiers
    pub fn with_metadata<P, PS, B, BS>(
        major: i32,
        minor: i32,
        revision: i32,
        pre_release: P,
        build_metadata: B,
    ) -> Result<Self>
    where
        P: IntoIterator<Item = PS>,
        PS: Into<String>,
        B: IntoIterator<Item = BS>,
        BS: Into<String>,
    {
        Self::builder()
            .major(major)
            .minor(minor)
            .revision(revision)
            .pre_release(pre_release)
            .build_metadata(build_metadata)
            .build()
    }

    /// Start building a version, e.g. to select a different identifier alphabet
    pub fn builder() -> SemanticVersionBuilder {
        SemanticVersionBuilder::default()
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

    /// Pre-release identifiers in precedence order
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Build metadata identifiers in insertion order
    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// The `major.minor.revision` triple without identifiers
    pub fn core(&self) -> Version {
        Version::new(self.major, self.minor, self.revision)
    }

    /// Compare by SemVer precedence, returning `-1`, `0` or `1`
    pub fn compare_to(&self, other: &SemanticVersion) -> i32 {
        match sign_of_difference(self.major, other.major) {
            0 => {}
            sign => return sign,
        }
        match sign_of_difference(self.minor, other.minor) {
            0 => {}
            sign => return sign,
        }
        match sign_of_difference(self.revision, other.revision) {
            0 => {}
            sign => return sign,
        }
        compare_pre_release(&self.pre_release, &other.pre_release)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == 0
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other).cmp(&0)
    }
}

// Numeric pre-release identifiers carry no leading zeros, so equal
// precedence implies identical identifier strings.
impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.revision.hash(state);
        self.pre_release.hash(state);
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata.join("."))?;
        }
        Ok(())
    }
}

impl TryFrom<Version> for SemanticVersion {
    type Error = VersionError;

    fn try_from(version: Version) -> Result<Self> {
        SemanticVersion::new(version.major(), version.minor(), version.revision())
    }
}

/// Builder for [`SemanticVersion`]; all validation happens in [`build`](Self::build)
#[derive(Debug, Clone, Default)]
pub struct SemanticVersionBuilder {
    major: i32,
    minor: i32,
    revision: i32,
    pre_release: Vec<String>,
    build_metadata: Vec<String>,
    charset: IdentifierCharset,
}

impl SemanticVersionBuilder {
    pub fn major(mut self, major: i32) -> Self {
        self.major = major;
        self
    }

    pub fn minor(mut self, minor: i32) -> Self {
        self.minor = minor;
        self
    }

    pub fn revision(mut self, revision: i32) -> Self {
        self.revision = revision;
        self
    }

    pub fn pre_release<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pre_release = identifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn build_metadata<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_metadata = identifiers.into_iter().map(Into::into).collect();
        self
    }

    /// Select the identifier alphabet (alphanumeric only by default)
    pub fn charset(mut self, charset: IdentifierCharset) -> Self {
        self.charset = charset;
        self
    }

    /// Validate every component and produce the version
    pub fn build(self) -> Result<SemanticVersion> {
        if self.major < 0 {
            return Err(VersionError::invalid(Argument::Major, "Major version number is less than zero"));
        }
        if self.minor < 0 {
            return Err(VersionError::invalid(Argument::Minor, "Minor version number is less than zero"));
        }
        if self.revision < 0 {
            return Err(VersionError::invalid(
                Argument::Revision,
                "Revision version number is less than zero",
            ));
        }

        let pre_release = validate_pre_release(self.pre_release, self.charset)?;
        let build_metadata = validate_build_metadata(self.build_metadata, self.charset)?;

        Ok(SemanticVersion {
            major: self.major,
            minor: self.minor,
            revision: self.revision,
            pre_release,
            build_metadata,
        })
    }
}
