use crate::naming::{PathNamer, PathRequest};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// CatalogCollision
///
/// Two distinct tables mapped to one catalog id, typically because they
/// differ only by underscores (`ab_c` and `a_bc`).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("catalog id '{catalog_id}' is already used by '{existing}', cannot register '{incoming}'")]
pub struct CatalogCollision {
    pub catalog_id: String,
    pub existing: PathRequest,
    pub incoming: PathRequest,
}

///
/// CatalogIndex
///
/// Opt-in registry of catalog ids. The namer never consults it; callers
/// naming a batch of tables use it to surface collisions instead of
/// silently overwriting catalog entries.
///

#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    entries: BTreeMap<String, PathRequest>,
}

impl CatalogIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a namer's catalog id.
    ///
    /// Returns `Ok(true)` for a new entry and `Ok(false)` when the same
    /// request was already registered.
    pub fn insert(&mut self, namer: &PathNamer) -> Result<bool, CatalogCollision> {
        let catalog_id = namer.catalog_id();

        match self.entries.get(catalog_id) {
            Some(existing) if existing == namer.request() => Ok(false),
            Some(existing) => Err(CatalogCollision {
                catalog_id: catalog_id.to_string(),
                existing: existing.clone(),
                incoming: namer.request().clone(),
            }),
            None => {
                self.entries
                    .insert(catalog_id.to_string(), namer.request().clone());

                Ok(true)
            }
        }
    }

    #[must_use]
    pub fn get(&self, catalog_id: &str) -> Option<&PathRequest> {
        self.entries.get(catalog_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries ordered by catalog id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathRequest)> {
        self.entries.iter().map(|(id, request)| (id.as_str(), request))
    }
}
