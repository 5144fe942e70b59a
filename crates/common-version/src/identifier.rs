//! Pre-release and build metadata identifier rules

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Argument, Result, VersionError};
use crate::sign::sign_of_difference;

// Identifier alphabets as regex classes; both patterns below derive from these
const ALPHANUMERIC_CLASS: &str = "0-9A-Za-z";
const HYPHENATED_CLASS: &str = "0-9A-Za-z-";

lazy_static! {
    static ref ALPHANUMERIC_IDENTIFIER_RE: Regex = Regex::new(&format!(r"^[{}]+$", ALPHANUMERIC_CLASS)).unwrap();
    static ref ALPHANUMERIC_REJECTED_RE: Regex = Regex::new(&format!(r"[^{}]", ALPHANUMERIC_CLASS)).unwrap();
    static ref HYPHENATED_IDENTIFIER_RE: Regex = Regex::new(&format!(r"^[{}]+$", HYPHENATED_CLASS)).unwrap();
    static ref HYPHENATED_REJECTED_RE: Regex = Regex::new(&format!(r"[^{}]", HYPHENATED_CLASS)).unwrap();
    static ref NUMERIC_IDENTIFIER_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// The alphabet identifiers are checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IdentifierCharset {
    /// ASCII digits and letters only
    #[default]
    Alphanumeric,
    /// ASCII digits, letters and `-`, as SemVer 2.0.0 allows
    Hyphenated,
}

impl IdentifierCharset {
    fn identifier_regex(&self) -> &'static Regex {
        match self {
            IdentifierCharset::Alphanumeric => &ALPHANUMERIC_IDENTIFIER_RE,
            IdentifierCharset::Hyphenated => &HYPHENATED_IDENTIFIER_RE,
        }
    }

    fn rejected_regex(&self) -> &'static Regex {
        match self {
            IdentifierCharset::Alphanumeric => &ALPHANUMERIC_REJECTED_RE,
            IdentifierCharset::Hyphenated => &HYPHENATED_REJECTED_RE,
        }
    }

    /// Check whether a single character belongs to the alphabet
    pub fn allows(&self, c: char) -> bool {
        !self.rejected_regex().is_match(c.encode_utf8(&mut [0; 4]))
    }

    /// The first character of `identifier` outside the alphabet
    pub fn first_rejected(&self, identifier: &str) -> Option<char> {
        self.rejected_regex()
            .find(identifier)
            .and_then(|m| m.as_str().chars().next())
    }
}

/// The identifier list being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentifierList {
    PreRelease,
    BuildMetadata,
}

impl IdentifierList {
    fn argument(&self) -> Argument {
        match self {
            IdentifierList::PreRelease => Argument::PreRelease,
            IdentifierList::BuildMetadata => Argument::BuildMetadata,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IdentifierList::PreRelease => "Pre-release",
            IdentifierList::BuildMetadata => "Build metadata",
        }
    }
}

/// Check if the identifier is non-empty and made only of allowed characters
pub fn is_valid_identifier(identifier: &str, charset: IdentifierCharset) -> bool {
    charset.identifier_regex().is_match(identifier)
}

/// Check if the identifier consists entirely of ASCII digits
pub fn is_numeric_identifier(identifier: &str) -> bool {
    NUMERIC_IDENTIFIER_RE.is_match(identifier)
}

/// Validate pre-release identifiers, keeping their order
pub(crate) fn validate_pre_release<I, S>(identifiers: I, charset: IdentifierCharset) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    identifiers
        .into_iter()
        .map(|identifier| {
            let identifier = identifier.into();
            check_identifier(&identifier, IdentifierList::PreRelease, charset)?;
            if is_numeric_identifier(&identifier) && identifier.len() > 1 && identifier.starts_with('0') {
                return Err(VersionError::invalid(
                    Argument::PreRelease,
                    format!(
                        "Pre-release identifier \"{}\" is numerical only and starts with a zero",
                        identifier
                    ),
                ));
            }
            Ok(identifier)
        })
        .collect()
}

/// Validate build metadata identifiers, keeping their order
pub(crate) fn validate_build_metadata<I, S>(identifiers: I, charset: IdentifierCharset) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    identifiers
        .into_iter()
        .map(|identifier| {
            let identifier = identifier.into();
            check_identifier(&identifier, IdentifierList::BuildMetadata, charset)?;
            Ok(identifier)
        })
        .collect()
}

fn check_identifier(identifier: &str, list: IdentifierList, charset: IdentifierCharset) -> Result<()> {
    let argument = list.argument();
    let label = list.label();

    if identifier.is_empty() {
        return Err(VersionError::invalid(
            argument,
            format!("{} identifier list contains an empty identifier string", label),
        ));
    }

    if !is_valid_identifier(identifier, charset) {
        let offending = charset.first_rejected(identifier).unwrap_or_default();
        return Err(VersionError::invalid(
            argument,
            format!(
                "{} identifier \"{}\" contains the non-valid semantic version character {:?}",
                label, identifier, offending
            ),
        ));
    }

    Ok(())
}

/// Compare two pre-release identifiers by SemVer precedence, returning `-1`, `0` or `1`.
///
/// Numeric identifiers compare by value and always rank below alphanumeric
/// ones; alphanumeric identifiers compare by ASCII byte order.
pub fn compare_identifiers(a: &str, b: &str) -> i32 {
    match (is_numeric_identifier(a), is_numeric_identifier(b)) {
        (true, true) => {
            // Compare by digit count then digits so values of any length fit
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            match sign_of_difference(a.len(), b.len()) {
                0 => sign_of_difference(a.as_bytes(), b.as_bytes()),
                sign => sign,
            }
        }
        (true, false) => -1,
        (false, true) => 1,
        (false, false) => sign_of_difference(a.as_bytes(), b.as_bytes()),
    }
}

/// Compare two pre-release identifier lists by SemVer precedence.
///
/// An empty list marks a release and outranks any pre-release.
pub fn compare_pre_release(a: &[String], b: &[String]) -> i32 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 0,
        (true, false) => return 1,
        (false, true) => return -1,
        (false, false) => {}
    }

    for (left, right) in a.iter().zip(b.iter()) {
        match compare_identifiers(left, right) {
            0 => continue,
            sign => return sign,
        }
    }

    sign_of_difference(a.len(), b.len())
}
