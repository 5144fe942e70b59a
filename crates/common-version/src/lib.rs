//! Immutable version value types
//!
//! This crate provides a plain `major.minor.revision` [`Version`] and a
//! validated [`SemanticVersion`] ordered by SemVer 2.0.0 precedence, built on
//! overflow-safe integer sign utilities.
#![doc = include_str!("../README.md")]

mod comparator;
pub mod config;
mod error;
pub mod identifier;
mod operator;
mod semantic_version;
pub mod sign;
mod version;

pub use comparator::Comparator;
pub use config::{ConfigBase, VersionedConfig};
pub use error::{Argument, Result, VersionError};
pub use identifier::IdentifierCharset;
pub use operator::Operator;
pub use semantic_version::{SemanticVersion, SemanticVersionBuilder};
pub use version::Version;
