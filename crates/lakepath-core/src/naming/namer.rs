use crate::{
    PATH_SEPARATOR,
    error::Error,
    naming::{
        DescriptorConfig, Descriptors,
        identifier::{IdentifierError, IdentifierKind, validate_catalog_part, validate_table},
    },
};
use serde::Serialize;
use std::fmt::{self, Display};

///
/// PathRequest
///
/// A validated (database, table) pair. Both names are non-empty and free
/// of the path and catalog separators, and the table keeps at least one
/// character once underscores are stripped.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PathRequest {
    database: String,
    table: String,
}

impl PathRequest {
    pub fn try_new(
        database: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, IdentifierError> {
        let database = database.into();
        let table = table.into();

        validate_catalog_part(IdentifierKind::Database, &database)?;
        validate_table(&table)?;

        Ok(Self { database, table })
    }

    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }
}

impl Display for PathRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PATH_SEPARATOR}{}", self.database, self.table)
    }
}

///
/// PathNamer
///
/// Owns a request and the descriptors derived from it. Descriptors are
/// computed exactly once, in `new`, and the value is immutable afterwards.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PathNamer {
    #[serde(flatten)]
    request: PathRequest,
    #[serde(flatten)]
    descriptors: Descriptors,
}

impl PathNamer {
    pub fn new(
        config: &DescriptorConfig,
        database: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, Error> {
        let request = PathRequest::try_new(database, table)?;

        Ok(Self::from_request(config, request))
    }

    #[must_use]
    pub fn from_request(config: &DescriptorConfig, request: PathRequest) -> Self {
        let descriptors = Descriptors::derive(config, &request);

        Self {
            request,
            descriptors,
        }
    }

    #[must_use]
    pub const fn request(&self) -> &PathRequest {
        &self.request
    }

    #[must_use]
    pub fn database(&self) -> &str {
        self.request.database()
    }

    #[must_use]
    pub fn table(&self) -> &str {
        self.request.table()
    }

    #[must_use]
    pub const fn descriptors(&self) -> &Descriptors {
        &self.descriptors
    }

    #[must_use]
    pub fn staging(&self) -> &str {
        self.descriptors.staging()
    }

    #[must_use]
    pub fn bronze(&self) -> &str {
        self.descriptors.bronze()
    }

    #[must_use]
    pub fn catalog_id(&self) -> &str {
        self.descriptors.catalog_id()
    }
}
