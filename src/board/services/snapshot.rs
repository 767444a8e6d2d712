//! Immutable point-in-time workspace views.

use crate::board::domain::{PersistedWorkspace, Workspace};
use std::ops::Deref;
use std::sync::Arc;

/// Read-only view of the workspace at the moment it was taken.
///
/// Snapshots share storage with the store until the next mutation, which
/// copies the workspace instead of changing data a snapshot can observe.
#[derive(Debug, Clone)]
pub struct WorkspaceSnapshot(Arc<Workspace>);

impl WorkspaceSnapshot {
    pub(crate) const fn new(workspace: Arc<Workspace>) -> Self {
        Self(workspace)
    }

    /// Returns the workspace.
    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.0
    }

    /// Converts the snapshot into its persisted layout.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedWorkspace {
        self.0.to_persisted()
    }

    /// Reports whether two snapshots observe the same workspace version.
    #[must_use]
    pub fn is_same_version(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for WorkspaceSnapshot {
    type Target = Workspace;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Workspace> for WorkspaceSnapshot {
    fn as_ref(&self) -> &Workspace {
        &self.0
    }
}
