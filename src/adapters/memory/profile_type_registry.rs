//! In-Memory Profile Type Registry
//!
//! Profile types are configuration; they are loaded once at startup.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{foundation::ProfileTypeId, profile::ProfileType};
use crate::ports::{ProfileTypeReader, RepositoryError};

/// Read-only registry of configured profile types
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileTypeRegistry {
    types: Arc<BTreeMap<ProfileTypeId, ProfileType>>,
}

impl InMemoryProfileTypeRegistry {
    /// Build the registry. A later type with the same id replaces an earlier one.
    pub fn new(types: impl IntoIterator<Item = ProfileType>) -> Self {
        let types = types
            .into_iter()
            .map(|t| (t.id().clone(), t))
            .collect::<BTreeMap<_, _>>();
        Self {
            types: Arc::new(types),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[async_trait]
impl ProfileTypeReader for InMemoryProfileTypeRegistry {
    async fn find(&self, id: &ProfileTypeId) -> Result<Option<ProfileType>, RepositoryError> {
        Ok(self.types.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<ProfileType>, RepositoryError> {
        Ok(self.types.values().cloned().collect())
    }
}
