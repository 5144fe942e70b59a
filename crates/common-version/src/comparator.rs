//! Version comparison utilities

use crate::operator::Operator;
use crate::semantic_version::SemanticVersion;

/// Precedence checks and sorting over semantic versions
pub struct Comparator;

impl Comparator {
    /// `version1` has strictly higher precedence
    pub fn greater_than(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::Greater, version2)
    }

    /// `version1` has higher or equal precedence
    pub fn greater_than_or_equal_to(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::GreaterOrEqual, version2)
    }

    /// `version1` has strictly lower precedence
    pub fn less_than(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::Less, version2)
    }

    /// `version1` has lower or equal precedence
    pub fn less_than_or_equal_to(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::LessOrEqual, version2)
    }

    /// Equal precedence; build metadata is ignored
    pub fn equal_to(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::Equal, version2)
    }

    /// Different precedence
    pub fn not_equal_to(version1: &SemanticVersion, version2: &SemanticVersion) -> bool {
        Self::compare(version1, Operator::NotEqual, version2)
    }

    /// Check `version1 <operator> version2` by precedence
    pub fn compare(version1: &SemanticVersion, operator: Operator, version2: &SemanticVersion) -> bool {
        operator.accepts(version1.cmp(version2))
    }

    /// Sort versions in ascending precedence order
    pub fn sort(versions: &[SemanticVersion]) -> Vec<SemanticVersion> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending precedence order
    pub fn rsort(versions: &[SemanticVersion]) -> Vec<SemanticVersion> {
        Self::usort(versions, false)
    }

    // Stable, so versions differing only in build metadata keep their input order
    fn usort(versions: &[SemanticVersion], ascending: bool) -> Vec<SemanticVersion> {
        let mut sorted = versions.to_vec();
        sorted.sort_by(|a, b| {
            let cmp = a.cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
        sorted
    }
}
