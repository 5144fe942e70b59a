//! Versioned configuration contract

use crate::semantic_version::SemanticVersion;

/// A configuration whose schema is described by a semantic version
pub trait VersionedConfig {
    fn config_version(&self) -> &SemanticVersion;
}

/// Base for configuration types: initialized with a schema version and
/// storing nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBase {
    version: SemanticVersion,
}

impl ConfigBase {
    pub fn new(version: SemanticVersion) -> Self {
        log::debug!("Initializing configuration with schema version {}", version);
        ConfigBase { version }
    }
}

impl VersionedConfig for ConfigBase {
    fn config_version(&self) -> &SemanticVersion {
        &self.version
    }
}
