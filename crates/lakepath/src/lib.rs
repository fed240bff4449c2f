//! ## Crate layout
//! - `core`: descriptor configuration, path namer and catalog index.
//! - `config`: settings-file loading.
//! - `dataset`: in-memory demo table and its console rendering.
//!
//! The `prelude` module carries the surface most callers need.

pub use lakepath_config as config;
pub use lakepath_core as core;
pub use lakepath_dataset as dataset;

use thiserror::Error as ThisError;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///
/// Everything a lakepath tool can fail with.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Core(#[from] crate::core::Error),

    #[error(transparent)]
    Dataset(#[from] crate::dataset::DatasetError),
}

impl From<crate::core::naming::CatalogCollision> for Error {
    fn from(err: crate::core::naming::CatalogCollision) -> Self {
        Self::Core(err.into())
    }
}

impl From<crate::core::naming::IdentifierError> for Error {
    fn from(err: crate::core::naming::IdentifierError) -> Self {
        Self::Core(err.into())
    }
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        config::{LakepathConfig, load_config, resolve_descriptor_config},
        core::prelude::*,
        dataset::{Dataset, Row, Schema, Value},
    };
}

///
/// TESTS
///
