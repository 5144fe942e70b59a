//! Error types for version construction

use std::fmt;
use thiserror::Error;

/// The constructor argument that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    Major,
    Minor,
    Revision,
    PreRelease,
    BuildMetadata,
}

impl Argument {
    pub fn as_str(&self) -> &'static str {
        match self {
            Argument::Major => "major",
            Argument::Minor => "minor",
            Argument::Revision => "revision",
            Argument::PreRelease => "pre_release",
            Argument::BuildMetadata => "build_metadata",
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for version construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid argument \"{argument}\": {message}")]
    InvalidArgument { argument: Argument, message: String },
}

impl VersionError {
    pub(crate) fn invalid(argument: Argument, message: impl Into<String>) -> Self {
        let message = message.into();
        log::trace!("Rejected {}: {}", argument, message);
        VersionError::InvalidArgument { argument, message }
    }

    /// The argument that was rejected
    pub fn argument(&self) -> Argument {
        match self {
            VersionError::InvalidArgument { argument, .. } => *argument,
        }
    }

    /// Human readable description of the violation
    pub fn message(&self) -> &str {
        match self {
            VersionError::InvalidArgument { message, .. } => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
