//! ## Crate layout
//! - `error`: crate-level error composed from naming failures.
//! - `naming`: descriptor configuration, validated path requests, derived
//!   staging/bronze/catalog descriptors and the catalog collision index.

pub mod error;
pub mod naming;

//
// Consts
//

/// Separator used to join hierarchical path segments.
pub const PATH_SEPARATOR: &str = "/";

/// Separator between the bronze prefix and the table part of a catalog id.
pub const CATALOG_NAMESPACE_SEPARATOR: char = '.';

/// Joins the database and table inside a catalog id; stripped from tables.
pub const CATALOG_TABLE_JOINER: char = '_';

// re-exports
pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::Error,
        naming::{
            CatalogCollision, CatalogIndex, DescriptorConfig, DescriptorSegments, Descriptors,
            IdentifierError, IdentifierKind, PathNamer, PathRequest, derive_descriptors,
        },
    };
}
