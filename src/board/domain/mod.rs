//! Domain model for boards, lists, and tasks.
//!
//! Every constructor validates its input, so a value of any type here is
//! always structurally valid. Mutation is restricted to the crate; callers
//! change state through [`crate::board::services::TaskStore`].

mod board;
mod error;
mod ids;
mod list;
mod persisted;
mod priority;
mod repo_url;
mod task;
mod title;
mod workspace;

pub use board::{Board, PersistedBoardData};
pub use error::{BoardDomainError, EntityKind};
pub use ids::{BoardId, ListId, TaskId};
pub use list::{PersistedListData, TaskList};
pub use persisted::{PersistedBoard, PersistedList, PersistedTask, PersistedWorkspace};
pub use priority::Priority;
pub use repo_url::{GitHubRepoUrl, validate_repo_url};
pub use task::{PersistedTaskData, Task, TaskField, TaskFields};
pub use title::Title;
pub use workspace::{TaskLocation, Workspace};
