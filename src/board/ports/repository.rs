//! Repository port for saving and loading the whole workspace.

use crate::board::domain::PersistedWorkspace;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for workspace repository operations.
pub type WorkspaceRepositoryResult<T> = Result<T, WorkspaceRepositoryError>;

/// Workspace persistence contract.
///
/// A repository stores exactly one workspace; every save replaces the
/// previous one.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Loads the stored workspace.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceRepositoryError::Serialization`] when stored data
    /// cannot be decoded, or [`WorkspaceRepositoryError::Persistence`] when
    /// the backing store fails.
    async fn load(&self) -> WorkspaceRepositoryResult<Option<PersistedWorkspace>>;

    /// Replaces the stored workspace.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceRepositoryError`] when encoding or writing fails.
    async fn save(&self, workspace: &PersistedWorkspace) -> WorkspaceRepositoryResult<()>;
}

/// Errors returned by workspace repository implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkspaceRepositoryError {
    /// Encoding or decoding the persisted layout failed.
    #[error("serialization error: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkspaceRepositoryError {
    /// Wraps a serialization error.
    #[must_use]
    pub fn serialization(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
