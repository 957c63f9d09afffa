//! Export configuration.
//!
//! Holds the build configuration label plus the layout constants the
//! per-kind exporters need. Nothing here is process-global; every exporter
//! owns its own copy.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;

/// Default build configuration label.
pub const DEFAULT_CONFIGURATION: &str = "Debug";

/// Default output folder segment for locally built projects.
pub const DEFAULT_OUTPUT_FOLDER: &str = "bin";

/// Default package folder holding shared sources.
pub const DEFAULT_SHARED_FOLDER: &str = "shared";

/// Default extension of managed assemblies.
pub const DEFAULT_ASSEMBLY_EXTENSION: &str = "dll";

/// Token substituted in pre-built binary templates.
pub const CONFIGURATION_TOKEN: &str = "{configuration}";

/// Configuration error raised when an exporter is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Configuration label is empty.
    #[error("Configuration label must not be empty")]
    EmptyConfiguration,
}

/// Settings shared by all exporters of one aggregation.
///
/// ## Parameters
///
/// - `configuration`: build configuration label (e.g. `Debug`)
/// - `output_folder`: output folder segment for local builds
/// - `shared_folder`: package folder whose files become shared sources
/// - `assembly_extension`: extension of local-build output assemblies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Build configuration label.
    pub configuration: String,
    /// Output folder segment for local builds.
    #[serde(default = "default_output_folder")]
    pub output_folder: String,
    /// Package folder holding shared sources.
    #[serde(default = "default_shared_folder")]
    pub shared_folder: String,
    /// Managed assembly extension, without the dot.
    #[serde(default = "default_assembly_extension")]
    pub assembly_extension: String,
}

fn default_output_folder() -> String {
    DEFAULT_OUTPUT_FOLDER.to_string()
}

fn default_shared_folder() -> String {
    DEFAULT_SHARED_FOLDER.to_string()
}

fn default_assembly_extension() -> String {
    DEFAULT_ASSEMBLY_EXTENSION.to_string()
}

impl ExportConfig {
    /// Create a config for `configuration` with default layout.
    pub fn new(configuration: impl Into<String>) -> Self {
        Self {
            configuration: configuration.into(),
            ..Self::default()
        }
    }

    /// Check the config can be used to compute exports.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.configuration.trim().is_empty() {
            return Err(ConfigError::EmptyConfiguration);
        }
        Ok(())
    }

    /// Hash of the config, usable as a cache-key component.
    pub fn params_hash(&self) -> Result<String, serde_json::Error> {
        canonical_hash_hex(self)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            configuration: DEFAULT_CONFIGURATION.to_string(),
            output_folder: default_output_folder(),
            shared_folder: default_shared_folder(),
            assembly_extension: default_assembly_extension(),
        }
    }
}
