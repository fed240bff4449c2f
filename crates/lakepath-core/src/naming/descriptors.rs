use crate::{
    CATALOG_NAMESPACE_SEPARATOR, CATALOG_TABLE_JOINER, PATH_SEPARATOR,
    error::Error,
    naming::{DescriptorConfig, PathRequest, identifier::catalog_table_name},
};
use serde::Serialize;

///
/// Descriptors
///
/// The three strings that locate a table: its staging path, its bronze path
/// and its catalog id. Labels only; nothing here touches storage.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Descriptors {
    staging: String,
    bronze: String,
    catalog_id: String,
}

impl Descriptors {
    /// Derive descriptors for an already-validated request.
    #[must_use]
    pub fn derive(config: &DescriptorConfig, request: &PathRequest) -> Self {
        let (database, table) = (request.database(), request.table());

        let staging = join_path(&config.staging_segments(), database, table);
        let bronze = join_path(&config.bronze_segments(), database, table);
        let catalog_id = format!(
            "{}{CATALOG_NAMESPACE_SEPARATOR}{database}{CATALOG_TABLE_JOINER}{}",
            config.bronze_prefix(),
            catalog_table_name(table),
        );

        Self {
            staging,
            bronze,
            catalog_id,
        }
    }

    #[must_use]
    pub fn staging(&self) -> &str {
        &self.staging
    }

    #[must_use]
    pub fn bronze(&self) -> &str {
        &self.bronze
    }

    #[must_use]
    pub fn catalog_id(&self) -> &str {
        &self.catalog_id
    }
}

/// Validate `database`/`table` and derive their descriptors.
pub fn derive_descriptors(
    config: &DescriptorConfig,
    database: &str,
    table: &str,
) -> Result<Descriptors, Error> {
    let request = PathRequest::try_new(database, table)?;

    Ok(Descriptors::derive(config, &request))
}

// join_path
fn join_path(prefix: &[&str], database: &str, table: &str) -> String {
    prefix
        .iter()
        .copied()
        .chain([database, table])
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}
