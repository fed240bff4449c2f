//! Module: naming
//! Responsibility: derive staging/bronze storage paths and catalog ids for
//! a (database, table) pair under an immutable descriptor configuration.
//! Does not own: loading configuration from disk, or any storage I/O.
//!
//! Invariants:
//! - Descriptors are pure functions of (config, database, table).
//! - Every segment joined into a path is non-empty and separator-free.
//! - A catalog id contains exactly one namespace `.`.
//! - Descriptors are computed once at construction and never mutated.
//!
//! Known gap: catalog ids strip underscores from the table name, so tables
//! differing only by underscores share a catalog id. `CatalogIndex` reports
//! such collisions when callers opt in.

mod catalog;
mod config;
mod descriptors;
mod identifier;
mod namer;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogCollision, CatalogIndex};
pub use config::{DescriptorConfig, DescriptorSegments};
pub use descriptors::{Descriptors, derive_descriptors};
pub use identifier::{IdentifierError, IdentifierKind};
pub use namer::{PathNamer, PathRequest};
