//! The task store: sole mutator of workspace state.
//!
//! Every operation resolves and validates all of its inputs before touching
//! the workspace, so a failed call leaves the workspace exactly as it was.
//! Mutations are copy-on-write against outstanding [`WorkspaceSnapshot`]s.

use super::{ActiveBoardDefault, StoreConfig, WorkspaceSnapshot};
use crate::board::{
    domain::{
        Board, BoardDomainError, BoardId, EntityKind, GitHubRepoUrl, ListId, Task, TaskFields,
        TaskId, TaskList, TaskLocation, Title, Workspace,
    },
    ports::IdGenerator,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Broad classification of store errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A referenced board, list, or task does not exist.
    NotFound,
    /// Input was well formed but rejected by a domain rule.
    Validation,
}

/// Errors returned by task store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// The board does not exist.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The list does not exist on the board.
    #[error("list {list_id} not found on board {board_id}")]
    ListNotFound {
        /// Board that was searched.
        board_id: BoardId,
        /// Missing list.
        list_id: ListId,
    },

    /// The task does not exist in the list.
    #[error("task {task_id} not found in list {list_id}")]
    TaskNotFound {
        /// List that was searched.
        list_id: ListId,
        /// Missing task.
        task_id: TaskId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

impl TaskStoreError {
    /// Returns whether the error is a missing reference or a rejected input.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::BoardNotFound(_) | Self::ListNotFound { .. } | Self::TaskNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::Domain(_) => ErrorCategory::Validation,
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Owner of the workspace and the only way to change it.
pub struct TaskStore<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    workspace: Arc<Workspace>,
    config: StoreConfig,
    ids: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> TaskStore<G, C>
where
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a store over an empty workspace with default configuration.
    #[must_use]
    pub fn new(ids: Arc<G>, clock: Arc<C>) -> Self {
        Self::from_workspace(Workspace::new(), StoreConfig::default(), ids, clock)
    }

    /// Creates a store over an existing workspace.
    ///
    /// When the workspace has no active board, the configured fallback is
    /// applied.
    #[must_use]
    pub fn from_workspace(
        mut workspace: Workspace,
        config: StoreConfig,
        ids: Arc<G>,
        clock: Arc<C>,
    ) -> Self {
        if workspace.active_board_id().is_none() {
            let fallback = fallback_active_board(&workspace, config);
            workspace.set_active_board_id(fallback);
        }
        Self {
            workspace: Arc::new(workspace),
            config,
            ids,
            clock,
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> StoreConfig {
        self.config
    }

    // ---- queries -------------------------------------------------------

    /// Returns an immutable view of the current workspace.
    #[must_use]
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot::new(Arc::clone(&self.workspace))
    }

    /// Returns the current workspace.
    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Returns every board in display order.
    #[must_use]
    pub fn list_boards(&self) -> &[Board] {
        self.workspace.boards()
    }

    /// Finds a board by identifier.
    #[must_use]
    pub fn get_board(&self, board_id: BoardId) -> Option<&Board> {
        self.workspace.board(board_id)
    }

    /// Returns the active board, or `None` when no board is selected.
    #[must_use]
    pub fn active_board(&self) -> Option<&Board> {
        self.workspace.active_board()
    }

    /// Finds a list within a board.
    #[must_use]
    pub fn get_list(&self, board_id: BoardId, list_id: ListId) -> Option<&TaskList> {
        self.workspace.list(board_id, list_id)
    }

    /// Finds a task within a list.
    #[must_use]
    pub fn get_task(&self, board_id: BoardId, list_id: ListId, task_id: TaskId) -> Option<&Task> {
        self.workspace.task(board_id, list_id, task_id)
    }

    /// Resolves the board and list owning a task.
    #[must_use]
    pub fn locate_task(&self, task_id: TaskId) -> Option<TaskLocation> {
        self.workspace.locate_task(task_id)
    }

    // ---- boards --------------------------------------------------------

    /// Creates a board at the end of the board sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTitle`] when the title is empty.
    pub fn create_board(&mut self, title: impl Into<String>) -> TaskStoreResult<Board> {
        let board = Board::new(BoardId::from_uuid(self.fresh_uuid()), title, &*self.clock)?;

        let workspace = Arc::make_mut(&mut self.workspace);
        workspace.push_board(board.clone());
        if workspace.active_board_id().is_none() {
            let fallback = fallback_active_board(workspace, self.config);
            workspace.set_active_board_id(fallback);
        }

        tracing::debug!(board_id = %board.id(), title = %board.title(), "board created");
        Ok(board)
    }

    /// Renames a board in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`] or
    /// [`BoardDomainError::InvalidTitle`].
    pub fn rename_board(
        &mut self,
        board_id: BoardId,
        title: impl Into<String>,
    ) -> TaskStoreResult<Board> {
        self.require_board(board_id)?;
        let validated = Title::new(EntityKind::Board, title)?;

        let board = board_mut(&mut self.workspace, board_id)?;
        board.rename(validated, &*self.clock);
        let renamed = board.clone();

        tracing::debug!(board_id = %board_id, title = %renamed.title(), "board renamed");
        Ok(renamed)
    }

    /// Deletes a board with all of its lists and tasks.
    ///
    /// When the deleted board was active, the configured fallback selects
    /// the next active board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`].
    pub fn delete_board(&mut self, board_id: BoardId) -> TaskStoreResult<Board> {
        self.require_board(board_id)?;

        let workspace = Arc::make_mut(&mut self.workspace);
        let removed = workspace
            .remove_board(board_id)
            .ok_or(TaskStoreError::BoardNotFound(board_id))?;
        if workspace.active_board_id() == Some(board_id) {
            let fallback = fallback_active_board(workspace, self.config);
            workspace.set_active_board_id(fallback);
        }

        tracing::debug!(board_id = %board_id, lists = removed.lists().len(), "board deleted");
        Ok(removed)
    }

    /// Selects the active board, or clears the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`] when the board does not
    /// exist.
    pub fn set_active_board(&mut self, board_id: Option<BoardId>) -> TaskStoreResult<()> {
        if let Some(id) = board_id {
            self.require_board(id)?;
        }
        Arc::make_mut(&mut self.workspace).set_active_board_id(board_id);
        tracing::debug!(board_id = ?board_id, "active board changed");
        Ok(())
    }

    /// Validates a repository URL and stores its normalized form on the
    /// board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`] or
    /// [`BoardDomainError::InvalidRepoUrl`]; the board keeps its previous
    /// repository on error.
    pub fn connect_github_repo(
        &mut self,
        board_id: BoardId,
        url: &str,
    ) -> TaskStoreResult<GitHubRepoUrl> {
        self.require_board(board_id)?;
        let repo = GitHubRepoUrl::parse(url)?;

        board_mut(&mut self.workspace, board_id)?
            .set_github_repo(Some(repo.clone()), &*self.clock);

        tracing::debug!(board_id = %board_id, repo = %repo, "repository connected");
        Ok(repo)
    }

    /// Removes the repository link from a board, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`].
    pub fn disconnect_github_repo(
        &mut self,
        board_id: BoardId,
    ) -> TaskStoreResult<Option<GitHubRepoUrl>> {
        let previous = self.require_board(board_id)?.github_repo().cloned();
        if previous.is_some() {
            board_mut(&mut self.workspace, board_id)?.set_github_repo(None, &*self.clock);
            tracing::debug!(board_id = %board_id, "repository disconnected");
        }
        Ok(previous)
    }

    // ---- lists ---------------------------------------------------------

    /// Appends a new empty list to a board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`] or
    /// [`BoardDomainError::InvalidTitle`].
    pub fn create_list(
        &mut self,
        board_id: BoardId,
        title: impl Into<String>,
    ) -> TaskStoreResult<TaskList> {
        self.require_board(board_id)?;
        let list = TaskList::new(ListId::from_uuid(self.fresh_uuid()), title, &*self.clock)?;

        board_mut(&mut self.workspace, board_id)?
            .push_list(list.clone(), &*self.clock);

        tracing::debug!(board_id = %board_id, list_id = %list.id(), "list created");
        Ok(list)
    }

    /// Replaces a list's title, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`],
    /// [`TaskStoreError::ListNotFound`], or
    /// [`BoardDomainError::InvalidTitle`].
    pub fn update_list_title(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        title: impl Into<String>,
    ) -> TaskStoreResult<TaskList> {
        self.require_list(board_id, list_id)?;
        let validated = Title::new(EntityKind::List, title)?;

        let list = list_mut(&mut self.workspace, board_id, list_id)?;
        list.rename(validated, &*self.clock);
        let renamed = list.clone();

        tracing::debug!(board_id = %board_id, list_id = %list_id, "list renamed");
        Ok(renamed)
    }

    /// Deletes a list together with every task it holds.
    ///
    /// Returns the removed list, tasks included.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`] or
    /// [`TaskStoreError::ListNotFound`].
    pub fn delete_list(&mut self, board_id: BoardId, list_id: ListId) -> TaskStoreResult<TaskList> {
        self.require_list(board_id, list_id)?;

        let removed = board_mut(&mut self.workspace, board_id)?
            .remove_list(list_id, &*self.clock)
            .ok_or(TaskStoreError::ListNotFound { board_id, list_id })?;

        tracing::debug!(
            board_id = %board_id,
            list_id = %list_id,
            tasks = removed.tasks().len(),
            "list deleted"
        );
        Ok(removed)
    }

    /// Moves a list to `target_index` within its board.
    ///
    /// The index is the position the list occupies after the move and is
    /// clamped to the last position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`] or
    /// [`TaskStoreError::ListNotFound`].
    pub fn move_list(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        target_index: usize,
    ) -> TaskStoreResult<TaskList> {
        self.require_list(board_id, list_id)?;

        let board = board_mut(&mut self.workspace, board_id)?;
        if !board.move_list(list_id, target_index, &*self.clock) {
            return Err(TaskStoreError::ListNotFound { board_id, list_id });
        }
        let moved = board
            .list(list_id)
            .cloned()
            .ok_or(TaskStoreError::ListNotFound { board_id, list_id })?;

        tracing::debug!(board_id = %board_id, list_id = %list_id, target_index, "list moved");
        Ok(moved)
    }

    // ---- tasks ---------------------------------------------------------

    /// Appends a new task to a list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`],
    /// [`TaskStoreError::ListNotFound`], or
    /// [`BoardDomainError::InvalidTitle`].
    pub fn create_task(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        fields: &TaskFields,
    ) -> TaskStoreResult<Task> {
        self.require_list(board_id, list_id)?;
        let task = Task::new(TaskId::from_uuid(self.fresh_uuid()), fields, &*self.clock)?;

        list_mut(&mut self.workspace, board_id, list_id)?
            .push_task(task.clone(), &*self.clock);

        tracing::debug!(
            board_id = %board_id,
            list_id = %list_id,
            task_id = %task.id(),
            priority = %task.priority(),
            "task created"
        );
        Ok(task)
    }

    /// Replaces every editable field of a task, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`],
    /// [`TaskStoreError::ListNotFound`], [`TaskStoreError::TaskNotFound`],
    /// or [`BoardDomainError::InvalidTitle`].
    pub fn update_task(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        task_id: TaskId,
        fields: &TaskFields,
    ) -> TaskStoreResult<Task> {
        self.require_task(board_id, list_id, task_id)?;
        Title::new(EntityKind::Task, fields.title())?;

        let task = list_mut(&mut self.workspace, board_id, list_id)?
            .task_mut(task_id)
            .ok_or(TaskStoreError::TaskNotFound { list_id, task_id })?;
        task.replace_fields(fields, &*self.clock)?;
        let updated = task.clone();

        tracing::debug!(board_id = %board_id, list_id = %list_id, task_id = %task_id, "task updated");
        Ok(updated)
    }

    /// Deletes a task, keeping the order of the remaining tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`],
    /// [`TaskStoreError::ListNotFound`], or [`TaskStoreError::TaskNotFound`].
    pub fn delete_task(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        task_id: TaskId,
    ) -> TaskStoreResult<Task> {
        self.require_task(board_id, list_id, task_id)?;

        let removed = list_mut(&mut self.workspace, board_id, list_id)?
            .remove_task(task_id, &*self.clock)
            .ok_or(TaskStoreError::TaskNotFound { list_id, task_id })?;

        tracing::debug!(board_id = %board_id, list_id = %list_id, task_id = %task_id, "task deleted");
        Ok(removed)
    }

    /// Moves a task to `target_index` in `to_list_id`, which may be the
    /// list it is already in.
    ///
    /// The index is the position the task occupies in the destination list
    /// after the move: the task is removed from its source first and then
    /// inserted before whatever sits at `target_index`. Indices past the end
    /// append.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::BoardNotFound`],
    /// [`TaskStoreError::ListNotFound`] for either list, or
    /// [`TaskStoreError::TaskNotFound`] when the task is not in the source
    /// list.
    pub fn move_task(
        &mut self,
        board_id: BoardId,
        from_list_id: ListId,
        to_list_id: ListId,
        task_id: TaskId,
        target_index: usize,
    ) -> TaskStoreResult<Task> {
        self.require_task(board_id, from_list_id, task_id)?;
        self.require_list(board_id, to_list_id)?;

        let clock = &*self.clock;
        let board = board_mut(&mut self.workspace, board_id)?;
        let task = board
            .list_mut(from_list_id)
            .and_then(|list| list.remove_task(task_id, clock))
            .ok_or(TaskStoreError::TaskNotFound {
                list_id: from_list_id,
                task_id,
            })?;
        let destination = board.list_mut(to_list_id).ok_or(TaskStoreError::ListNotFound {
            board_id,
            list_id: to_list_id,
        })?;
        destination.insert_task(target_index, task.clone(), clock);

        tracing::debug!(
            board_id = %board_id,
            from_list_id = %from_list_id,
            to_list_id = %to_list_id,
            task_id = %task_id,
            target_index,
            "task moved"
        );
        Ok(task)
    }

    // ---- helpers -------------------------------------------------------

    /// Generates a UUID that no entity in the workspace uses yet.
    fn fresh_uuid(&self) -> Uuid {
        loop {
            let candidate = self.ids.generate();
            if !self.workspace.contains_id(candidate) {
                return candidate;
            }
            tracing::warn!(uuid = %candidate, "generated identifier already in use, retrying");
        }
    }

    fn require_board(&self, board_id: BoardId) -> TaskStoreResult<&Board> {
        self.workspace
            .board(board_id)
            .ok_or(TaskStoreError::BoardNotFound(board_id))
    }

    fn require_list(&self, board_id: BoardId, list_id: ListId) -> TaskStoreResult<&TaskList> {
        self.require_board(board_id)?
            .list(list_id)
            .ok_or(TaskStoreError::ListNotFound { board_id, list_id })
    }

    fn require_task(
        &self,
        board_id: BoardId,
        list_id: ListId,
        task_id: TaskId,
    ) -> TaskStoreResult<&Task> {
        self.require_list(board_id, list_id)?
            .task(task_id)
            .ok_or(TaskStoreError::TaskNotFound { list_id, task_id })
    }
}

// Borrows only the workspace field, leaving the clock free to borrow.
fn board_mut(workspace: &mut Arc<Workspace>, board_id: BoardId) -> TaskStoreResult<&mut Board> {
    Arc::make_mut(workspace)
        .board_mut(board_id)
        .ok_or(TaskStoreError::BoardNotFound(board_id))
}

fn list_mut(
    workspace: &mut Arc<Workspace>,
    board_id: BoardId,
    list_id: ListId,
) -> TaskStoreResult<&mut TaskList> {
    board_mut(workspace, board_id)?
        .list_mut(list_id)
        .ok_or(TaskStoreError::ListNotFound { board_id, list_id })
}

fn fallback_active_board(workspace: &Workspace, config: StoreConfig) -> Option<BoardId> {
    match config.active_board_default {
        ActiveBoardDefault::Unselected => None,
        ActiveBoardDefault::FirstBoard => workspace.boards().first().map(Board::id),
    }
}
