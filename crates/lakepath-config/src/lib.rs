//! Settings-file loading for lakepath.
//!
//! The descriptor configuration is read once at process start from a TOML
//! file and turned into an immutable `DescriptorConfig`. Missing keys fall
//! back to the built-in defaults; unknown keys are rejected.
//!
//! ```toml
//! [paths]
//! container = "S3"
//! staging_prefix = "staging"
//! bronze_prefix = "bronze"
//! tool = "dms"
//! source_system = "company_rds"
//! ```


use lakepath_core::naming::{DescriptorConfig, DescriptorSegments, IdentifierError};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Environment variable consulted by tools for the settings file path.
pub const CONFIG_ENV_VAR: &str = "LAKEPATH_CONFIG";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] IdentifierError),
}

///
/// LakepathConfig
///
/// Root of the settings file. Only the `[paths]` table exists today.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LakepathConfig {
    pub paths: DescriptorSegments,
}

impl LakepathConfig {
    /// Validate the `[paths]` segments into an immutable descriptor config.
    pub fn descriptor_config(&self) -> Result<DescriptorConfig, ConfigError> {
        let config = DescriptorConfig::try_from(self.paths.clone())?;

        Ok(config)
    }
}

/// Parse a settings document.
pub fn parse_config(source: &str) -> Result<LakepathConfig, ConfigError> {
    let config = toml::from_str(source)?;

    Ok(config)
}

/// Read and parse a settings file.
pub fn load_config(path: impl AsRef<Path>) -> Result<LakepathConfig, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&source)
}

/// Load the descriptor config from `path`, or use the defaults when no
/// settings file is given.
pub fn resolve_descriptor_config(path: Option<&Path>) -> Result<DescriptorConfig, ConfigError> {
    match path {
        Some(path) => load_config(path)?.descriptor_config(),
        None => Ok(DescriptorConfig::default()),
    }
}
