//! JSON file workspace repository.
//!
//! Access is scoped to a single capability directory. Saves write a
//! temporary sibling file and rename it over the target so a crash never
//! leaves a half-written workspace behind. Blocking filesystem calls run on
//! the Tokio blocking pool, so the repository must be used from within a
//! Tokio runtime.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::board::{
    domain::PersistedWorkspace,
    ports::{WorkspaceRepository, WorkspaceRepositoryError, WorkspaceRepositoryResult},
};

/// File name used when none is configured.
pub const DEFAULT_FILE_NAME: &str = "workspace.json";

/// Workspace repository backed by a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileWorkspaceRepository {
    dir: Arc<Dir>,
    file_name: String,
}

impl JsonFileWorkspaceRepository {
    /// Opens (creating if necessary) the data directory.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceRepositoryError::Persistence`] when the directory
    /// cannot be created or opened.
    pub fn open(path: &Utf8Path) -> WorkspaceRepositoryResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(WorkspaceRepositoryError::persistence)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(WorkspaceRepositoryError::persistence)?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name: DEFAULT_FILE_NAME.to_owned(),
        })
    }

    /// Overrides the document file name within the data directory.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Returns the document file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn temp_file_name(&self) -> String {
        format!(".{}.tmp", self.file_name)
    }
}

#[async_trait]
impl WorkspaceRepository for JsonFileWorkspaceRepository {
    async fn load(&self) -> WorkspaceRepositoryResult<Option<PersistedWorkspace>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let contents = tokio::task::spawn_blocking(move || match dir.read_to_string(&file_name) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        })
        .await
        .map_err(WorkspaceRepositoryError::persistence)?
        .map_err(WorkspaceRepositoryError::persistence)?;

        let Some(text) = contents else {
            tracing::debug!(file = %self.file_name, "no stored workspace");
            return Ok(None);
        };
        let workspace =
            serde_json::from_str(&text).map_err(WorkspaceRepositoryError::serialization)?;
        tracing::debug!(file = %self.file_name, "workspace loaded");
        Ok(Some(workspace))
    }

    async fn save(&self, workspace: &PersistedWorkspace) -> WorkspaceRepositoryResult<()> {
        let text = serde_json::to_string_pretty(workspace)
            .map_err(WorkspaceRepositoryError::serialization)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let temp_name = self.temp_file_name();
        tokio::task::spawn_blocking(move || {
            dir.write(&temp_name, text)?;
            dir.rename(&temp_name, &dir, &file_name)
        })
        .await
        .map_err(WorkspaceRepositoryError::persistence)?
        .map_err(WorkspaceRepositoryError::persistence)?;

        tracing::debug!(file = %self.file_name, boards = workspace.boards.len(), "workspace saved");
        Ok(())
    }
}
