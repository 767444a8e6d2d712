//! Serializable workspace layout.
//!
//! The persisted shape is
//! `{ boards: [{ id, title, githubRepo?, lists: [{ id, title, tasks: [...] }] }] }`
//! with camelCase keys. Restoring a workspace re-validates every record, so
//! hand-edited or truncated data can never produce an inconsistent
//! workspace.

use super::{
    Board, BoardDomainError, BoardId, ListId, PersistedBoardData, PersistedListData,
    PersistedTaskData, Priority, Task, TaskFields, TaskId, TaskList, Workspace,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Persisted workspace record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWorkspace {
    /// Boards in display order.
    pub boards: Vec<PersistedBoard>,
    /// Identifier of the active board, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_board_id: Option<BoardId>,
}

/// Persisted board record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedBoard {
    /// Board identifier.
    pub id: BoardId,
    /// Board title.
    pub title: String,
    /// Normalized repository URL, if connected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<String>,
    /// Lists in display order.
    pub lists: Vec<PersistedList>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Persisted list record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedList {
    /// List identifier.
    pub id: ListId,
    /// List title.
    pub title: String,
    /// Tasks in display order.
    pub tasks: Vec<PersistedTask>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTask {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Due date in ISO `YYYY-MM-DD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for PersistedTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            due_date: task.due_date(),
            priority: task.priority(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

impl From<&TaskList> for PersistedList {
    fn from(list: &TaskList) -> Self {
        Self {
            id: list.id(),
            title: list.title().as_str().to_owned(),
            tasks: list.tasks().iter().map(PersistedTask::from).collect(),
            created_at: list.created_at(),
            updated_at: list.updated_at(),
        }
    }
}

impl From<&Board> for PersistedBoard {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id(),
            title: board.title().as_str().to_owned(),
            github_repo: board.github_repo().map(|repo| repo.as_str().to_owned()),
            lists: board.lists().iter().map(PersistedList::from).collect(),
            created_at: board.created_at(),
            updated_at: board.updated_at(),
        }
    }
}

impl From<&Workspace> for PersistedWorkspace {
    fn from(workspace: &Workspace) -> Self {
        Self {
            boards: workspace.boards().iter().map(PersistedBoard::from).collect(),
            active_board_id: workspace.active_board_id(),
        }
    }
}

impl Workspace {
    /// Converts the workspace into its persisted layout.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedWorkspace {
        PersistedWorkspace::from(self)
    }

    /// Restores a workspace from its persisted layout.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::CorruptWorkspace`] when a title is empty,
    /// a repository URL is invalid, an identifier is used more than once, or
    /// the active board pointer does not resolve.
    pub fn from_persisted(persisted: PersistedWorkspace) -> Result<Self, BoardDomainError> {
        let mut seen = IdRegistry::default();
        let boards = persisted
            .boards
            .into_iter()
            .map(|board| restore_board(board, &mut seen))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(active) = persisted.active_board_id
            && !boards.iter().any(|board| board.id() == active)
        {
            return Err(BoardDomainError::CorruptWorkspace(format!(
                "active board {active} does not exist"
            )));
        }

        Ok(Self::from_parts(boards, persisted.active_board_id))
    }
}

#[derive(Default)]
struct IdRegistry(HashSet<Uuid>);

impl IdRegistry {
    fn claim(&mut self, kind: &str, uuid: Uuid) -> Result<(), BoardDomainError> {
        if self.0.insert(uuid) {
            Ok(())
        } else {
            Err(BoardDomainError::CorruptWorkspace(format!(
                "duplicate {kind} identifier {uuid}"
            )))
        }
    }
}

fn restore_board(
    board: PersistedBoard,
    seen: &mut IdRegistry,
) -> Result<Board, BoardDomainError> {
    seen.claim("board", board.id.into_inner())?;
    let board_id = board.id;
    let lists = board
        .lists
        .into_iter()
        .map(|list| restore_list(list, seen))
        .collect::<Result<Vec<_>, _>>()?;

    Board::from_persisted(PersistedBoardData {
        id: board.id,
        title: board.title,
        lists,
        github_repo: board.github_repo,
        created_at: board.created_at,
        updated_at: board.updated_at,
    })
    .map_err(|err| corrupt(&format!("board {board_id}"), &err))
}

fn restore_list(list: PersistedList, seen: &mut IdRegistry) -> Result<TaskList, BoardDomainError> {
    seen.claim("list", list.id.into_inner())?;
    let list_id = list.id;
    let tasks = list
        .tasks
        .into_iter()
        .map(|task| restore_task(task, seen))
        .collect::<Result<Vec<_>, _>>()?;

    TaskList::from_persisted(PersistedListData {
        id: list.id,
        title: list.title,
        tasks,
        created_at: list.created_at,
        updated_at: list.updated_at,
    })
    .map_err(|err| corrupt(&format!("list {list_id}"), &err))
}

fn restore_task(task: PersistedTask, seen: &mut IdRegistry) -> Result<Task, BoardDomainError> {
    seen.claim("task", task.id.into_inner())?;
    let task_id = task.id;
    let mut fields = TaskFields::new(task.title)
        .with_description(task.description)
        .with_priority(task.priority);
    if let Some(due_date) = task.due_date {
        fields = fields.with_due_date(due_date);
    }

    Task::from_persisted(PersistedTaskData {
        id: task.id,
        fields,
        created_at: task.created_at,
        updated_at: task.updated_at,
    })
    .map_err(|err| corrupt(&format!("task {task_id}"), &err))
}

fn corrupt(context: &str, err: &BoardDomainError) -> BoardDomainError {
    BoardDomainError::CorruptWorkspace(format!("{context}: {err}"))
}
