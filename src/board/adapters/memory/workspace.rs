//! In-memory workspace repository.
//!
//! The workspace is held as JSON text rather than as a cloned value, so
//! every save and load goes through the same encoding as the file adapter.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::PersistedWorkspace,
    ports::{WorkspaceRepository, WorkspaceRepositoryError, WorkspaceRepositoryResult},
};

/// Thread-safe in-memory workspace repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkspaceRepository {
    document: Arc<RwLock<Option<String>>>,
}

impl InMemoryWorkspaceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with raw JSON text.
    #[must_use]
    pub fn from_json(document: impl Into<String>) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document.into()))),
        }
    }

    /// Returns the stored JSON text, if any.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn json(&self) -> WorkspaceRepositoryResult<Option<String>> {
        let document = self.document.read().map_err(|err| {
            WorkspaceRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(document.clone())
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn load(&self) -> WorkspaceRepositoryResult<Option<PersistedWorkspace>> {
        self.json()?
            .map(|text| {
                serde_json::from_str(&text).map_err(WorkspaceRepositoryError::serialization)
            })
            .transpose()
    }

    async fn save(&self, workspace: &PersistedWorkspace) -> WorkspaceRepositoryResult<()> {
        let text =
            serde_json::to_string(workspace).map_err(WorkspaceRepositoryError::serialization)?;
        let mut document = self.document.write().map_err(|err| {
            WorkspaceRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *document = Some(text);
        Ok(())
    }
}
