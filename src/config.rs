//! YAML configuration file support for docparity.
//!
//! Lets an operator pin a comparison configuration in a file and reuse it
//! across runs, so the resolution used for visual fingerprinting (and
//! therefore fingerprint comparability) is held constant by construction.
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! # docparity run configuration
//! version: "1.0"
//!
//! compare:
//!   resolution_dpi: 144
//!   localize: true
//!   use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use parity_compare::CompareOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML config: {0}")]
    YamlParse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration file schema.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParityConfig {
    /// Optional schema marker for forward compatibility.
    #[serde(default)]
    pub version: Option<String>,
    /// Comparison options; missing fields fall back to their defaults.
    #[serde(default)]
    pub compare: CompareOptions,
}

impl ParityConfig {
    /// Load and validate a configuration from a YAML file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ParityConfig = serde_yaml::from_str(yaml)?;
        config
            .compare
            .validate()
            .map_err(|err| ConfigLoadError::Invalid(err.to_string()))?;
        Ok(config)
    }
}
