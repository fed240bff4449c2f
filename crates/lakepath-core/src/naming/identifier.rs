use crate::{CATALOG_NAMESPACE_SEPARATOR, CATALOG_TABLE_JOINER, PATH_SEPARATOR};
use derive_more::Display;
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// IdentifierKind
///
/// Names the input a validation failure refers to.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum IdentifierKind {
    #[display("bronze prefix")]
    BronzePrefix,
    #[display("container")]
    Container,
    #[display("database")]
    Database,
    #[display("source system")]
    SourceSystem,
    #[display("staging prefix")]
    StagingPrefix,
    #[display("table")]
    Table,
    #[display("tool")]
    Tool,
}

///
/// IdentifierError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IdentifierError {
    #[error("{kind} is empty")]
    Empty { kind: IdentifierKind },

    #[error("{kind} '{value}' contains the path separator '{sep}'", sep = PATH_SEPARATOR)]
    ContainsSeparator { kind: IdentifierKind, value: String },

    #[error(
        "{kind} '{value}' contains the catalog separator '{sep}'",
        sep = CATALOG_NAMESPACE_SEPARATOR
    )]
    ContainsCatalogSeparator { kind: IdentifierKind, value: String },

    #[error("table '{value}' is empty once underscores are removed")]
    CollapsesToEmpty { value: String },
}

impl IdentifierError {
    #[must_use]
    pub const fn kind(&self) -> IdentifierKind {
        match self {
            Self::Empty { kind }
            | Self::ContainsSeparator { kind, .. }
            | Self::ContainsCatalogSeparator { kind, .. } => *kind,
            Self::CollapsesToEmpty { .. } => IdentifierKind::Table,
        }
    }
}

/// Check that a value can be joined as a single path segment.
pub(super) fn validate_segment(kind: IdentifierKind, value: &str) -> Result<(), IdentifierError> {
    if value.is_empty() {
        return Err(IdentifierError::Empty { kind });
    }
    if value.contains(PATH_SEPARATOR) {
        return Err(IdentifierError::ContainsSeparator {
            kind,
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Segment rules for values that also appear in the catalog id, which
/// carries exactly one namespace separator.
pub(super) fn validate_catalog_part(
    kind: IdentifierKind,
    value: &str,
) -> Result<(), IdentifierError> {
    validate_segment(kind, value)?;

    if value.contains(CATALOG_NAMESPACE_SEPARATOR) {
        return Err(IdentifierError::ContainsCatalogSeparator {
            kind,
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Table rules plus the requirement that something survives underscore
/// removal.
pub(super) fn validate_table(value: &str) -> Result<(), IdentifierError> {
    validate_catalog_part(IdentifierKind::Table, value)?;

    if catalog_table_name(value).is_empty() {
        return Err(IdentifierError::CollapsesToEmpty {
            value: value.to_string(),
        });
    }

    Ok(())
}

// catalog_table_name
#[must_use]
pub(super) fn catalog_table_name(table: &str) -> String {
    table.replace(CATALOG_TABLE_JOINER, "")
}
