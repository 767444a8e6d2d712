//! Workspace root: every board plus the active board pointer.

use super::{Board, BoardId, ListId, Task, TaskId, TaskList};

/// Resolved position of a task in the board hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskLocation {
    /// Board owning the list.
    pub board_id: BoardId,
    /// List owning the task.
    pub list_id: ListId,
    /// Zero-based index of the task within its list.
    pub index: usize,
}

/// The set of all boards and the currently displayed board.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    boards: Vec<Board>,
    active_board_id: Option<BoardId>,
}

impl Workspace {
    /// Creates an empty workspace with no active board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boards: Vec::new(),
            active_board_id: None,
        }
    }

    /// Returns the boards in creation order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Finds a board by identifier.
    #[must_use]
    pub fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id() == board_id)
    }

    /// Returns the active board identifier, if one is selected.
    #[must_use]
    pub const fn active_board_id(&self) -> Option<BoardId> {
        self.active_board_id
    }

    /// Returns the active board, or `None` when nothing is selected.
    #[must_use]
    pub fn active_board(&self) -> Option<&Board> {
        self.active_board_id.and_then(|id| self.board(id))
    }

    /// Finds a list within a board.
    #[must_use]
    pub fn list(&self, board_id: BoardId, list_id: ListId) -> Option<&TaskList> {
        self.board(board_id).and_then(|board| board.list(list_id))
    }

    /// Finds a task within a list of a board.
    #[must_use]
    pub fn task(&self, board_id: BoardId, list_id: ListId, task_id: TaskId) -> Option<&Task> {
        self.list(board_id, list_id)
            .and_then(|list| list.task(task_id))
    }

    /// Resolves which board and list own a task.
    #[must_use]
    pub fn locate_task(&self, task_id: TaskId) -> Option<TaskLocation> {
        self.boards.iter().find_map(|board| {
            board.lists().iter().find_map(|list| {
                list.position_of(task_id).map(|index| TaskLocation {
                    board_id: board.id(),
                    list_id: list.id(),
                    index,
                })
            })
        })
    }

    /// Returns the total number of tasks across every board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.boards
            .iter()
            .flat_map(Board::lists)
            .map(|list| list.tasks().len())
            .sum()
    }

    /// Reports whether any board, list, or task already uses the UUID.
    #[must_use]
    pub fn contains_id(&self, uuid: uuid::Uuid) -> bool {
        self.boards.iter().any(|board| {
            board.id().into_inner() == uuid
                || board.lists().iter().any(|list| {
                    list.id().into_inner() == uuid
                        || list.tasks().iter().any(|task| task.id().into_inner() == uuid)
                })
        })
    }

    pub(crate) fn from_parts(boards: Vec<Board>, active_board_id: Option<BoardId>) -> Self {
        Self {
            boards,
            active_board_id,
        }
    }

    pub(crate) fn board_mut(&mut self, board_id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| board.id() == board_id)
    }

    pub(crate) fn push_board(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Removes a board and everything it owns, preserving board order.
    pub(crate) fn remove_board(&mut self, board_id: BoardId) -> Option<Board> {
        let position = self.boards.iter().position(|board| board.id() == board_id)?;
        Some(self.boards.remove(position))
    }

    pub(crate) const fn set_active_board_id(&mut self, board_id: Option<BoardId>) {
        self.active_board_id = board_id;
    }
}
