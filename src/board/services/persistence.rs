//! Service layer for saving and restoring the workspace.

use super::{StoreConfig, TaskStore};
use crate::board::{
    domain::{BoardDomainError, Workspace},
    ports::{IdGenerator, WorkspaceRepository, WorkspaceRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for workspace persistence.
#[derive(Debug, Error)]
pub enum WorkspacePersistenceError {
    /// Stored data failed domain validation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkspaceRepositoryError),
}

/// Result type for workspace persistence operations.
pub type WorkspacePersistenceResult<T> = Result<T, WorkspacePersistenceError>;

/// Moves workspace state across the save/load boundary.
#[derive(Clone)]
pub struct WorkspacePersistenceService<R>
where
    R: WorkspaceRepository,
{
    repository: Arc<R>,
}

impl<R> WorkspacePersistenceService<R>
where
    R: WorkspaceRepository,
{
    /// Creates a new persistence service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Saves the store's current workspace, replacing what was stored.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspacePersistenceError::Repository`] when the repository
    /// rejects the write.
    pub async fn save<G, C>(&self, store: &TaskStore<G, C>) -> WorkspacePersistenceResult<()>
    where
        G: IdGenerator,
        C: Clock + Send + Sync,
    {
        let persisted = store.snapshot().to_persisted();
        self.repository.save(&persisted).await?;
        Ok(())
    }

    /// Loads and validates the stored workspace.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspacePersistenceError::Repository`] when reading fails,
    /// or [`WorkspacePersistenceError::Domain`] when the stored workspace
    /// violates an invariant.
    pub async fn load(&self) -> WorkspacePersistenceResult<Option<Workspace>> {
        let Some(persisted) = self.repository.load().await? else {
            return Ok(None);
        };
        let workspace = Workspace::from_persisted(persisted).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected stored workspace");
        })?;
        Ok(Some(workspace))
    }

    /// Builds a task store from the stored workspace, or from an empty one
    /// when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`WorkspacePersistenceService::load`].
    pub async fn load_store<G, C>(
        &self,
        config: StoreConfig,
        ids: Arc<G>,
        clock: Arc<C>,
    ) -> WorkspacePersistenceResult<TaskStore<G, C>>
    where
        G: IdGenerator,
        C: Clock + Send + Sync,
    {
        let workspace = self.load().await?.unwrap_or_default();
        tracing::debug!(
            boards = workspace.boards().len(),
            tasks = workspace.task_count(),
            "workspace restored"
        );
        Ok(TaskStore::from_workspace(workspace, config, ids, clock))
    }
}
