use crate::naming::identifier::{
    IdentifierError, IdentifierKind, validate_catalog_part, validate_segment,
};
use serde::{Deserialize, Serialize};

///
/// DescriptorSegments
///
/// Unvalidated configuration segments, as read from a settings source.
/// Convert into a `DescriptorConfig` to use them.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptorSegments {
    pub container: String,
    pub staging_prefix: String,
    pub bronze_prefix: String,
    pub tool: String,
    pub source_system: String,
}

impl Default for DescriptorSegments {
    fn default() -> Self {
        Self {
            container: DescriptorConfig::DEFAULT_CONTAINER.to_string(),
            staging_prefix: DescriptorConfig::DEFAULT_STAGING_PREFIX.to_string(),
            bronze_prefix: DescriptorConfig::DEFAULT_BRONZE_PREFIX.to_string(),
            tool: DescriptorConfig::DEFAULT_TOOL.to_string(),
            source_system: DescriptorConfig::DEFAULT_SOURCE_SYSTEM.to_string(),
        }
    }
}

///
/// DescriptorConfig
///
/// Immutable, validated configuration shared by every namer built from it.
/// Load once at process start; there are no setters.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct DescriptorConfig {
    container: String,
    staging_prefix: String,
    bronze_prefix: String,
    tool: String,
    source_system: String,
}

impl DescriptorConfig {
    pub const DEFAULT_CONTAINER: &str = "S3";
    pub const DEFAULT_STAGING_PREFIX: &str = "staging";
    pub const DEFAULT_BRONZE_PREFIX: &str = "bronze";
    pub const DEFAULT_TOOL: &str = "dms";
    pub const DEFAULT_SOURCE_SYSTEM: &str = "company_rds";

    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    #[must_use]
    pub fn staging_prefix(&self) -> &str {
        &self.staging_prefix
    }

    #[must_use]
    pub fn bronze_prefix(&self) -> &str {
        &self.bronze_prefix
    }

    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    #[must_use]
    pub fn source_system(&self) -> &str {
        &self.source_system
    }

    /// Segments preceding `database/table` in the staging path.
    #[must_use]
    pub fn staging_segments(&self) -> [&str; 4] {
        [
            self.container.as_str(),
            self.staging_prefix.as_str(),
            self.tool.as_str(),
            self.source_system.as_str(),
        ]
    }

    /// Segments preceding `database/table` in the bronze path.
    #[must_use]
    pub fn bronze_segments(&self) -> [&str; 3] {
        [
            self.container.as_str(),
            self.bronze_prefix.as_str(),
            self.source_system.as_str(),
        ]
    }
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        let DescriptorSegments {
            container,
            staging_prefix,
            bronze_prefix,
            tool,
            source_system,
        } = DescriptorSegments::default();

        Self {
            container,
            staging_prefix,
            bronze_prefix,
            tool,
            source_system,
        }
    }
}

impl TryFrom<DescriptorSegments> for DescriptorConfig {
    type Error = IdentifierError;

    fn try_from(segments: DescriptorSegments) -> Result<Self, Self::Error> {
        validate_segment(IdentifierKind::Container, &segments.container)?;
        validate_segment(IdentifierKind::StagingPrefix, &segments.staging_prefix)?;
        validate_catalog_part(IdentifierKind::BronzePrefix, &segments.bronze_prefix)?;
        validate_segment(IdentifierKind::Tool, &segments.tool)?;
        validate_segment(IdentifierKind::SourceSystem, &segments.source_system)?;

        Ok(Self {
            container: segments.container,
            staging_prefix: segments.staging_prefix,
            bronze_prefix: segments.bronze_prefix,
            tool: segments.tool,
            source_system: segments.source_system,
        })
    }
}

impl From<&DescriptorConfig> for DescriptorSegments {
    fn from(config: &DescriptorConfig) -> Self {
        Self {
            container: config.container.clone(),
            staging_prefix: config.staging_prefix.clone(),
            bronze_prefix: config.bronze_prefix.clone(),
            tool: config.tool.clone(),
            source_system: config.source_system.clone(),
        }
    }
}
