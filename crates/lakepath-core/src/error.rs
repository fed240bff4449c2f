use crate::naming::{CatalogCollision, IdentifierError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Failures surfaced by the naming core. Construction either fully succeeds
/// or returns one of these with no partial state left behind.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),

    #[error(transparent)]
    CatalogCollision(#[from] CatalogCollision),
}

impl Error {
    #[must_use]
    pub const fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier(_))
    }
}
