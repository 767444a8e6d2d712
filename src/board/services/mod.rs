//! Application services for board orchestration.

mod config;
mod persistence;
mod snapshot;
mod store;

pub use config::{ActiveBoardDefault, StoreConfig};
pub use persistence::{
    WorkspacePersistenceError, WorkspacePersistenceResult, WorkspacePersistenceService,
};
pub use snapshot::WorkspaceSnapshot;
pub use store::{ErrorCategory, TaskStore, TaskStoreError, TaskStoreResult};
