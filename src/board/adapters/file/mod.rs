//! Filesystem adapters.

mod workspace;

pub use workspace::{DEFAULT_FILE_NAME, JsonFileWorkspaceRepository};
